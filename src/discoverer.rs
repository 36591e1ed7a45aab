use std::sync::Arc;

use log::{debug, info};

use crate::clients::entities::ArtistRecommendation;
use crate::clients::errors::Result;
use crate::clients::{AzureOpenAiClient, ChatCompletion};
use crate::genre::GenreSelection;
use crate::normalizer::normalize;
use crate::prompt::build_prompt;

pub struct DiscovererBuilder {
    client: Option<Arc<dyn ChatCompletion>>,
}

impl Default for DiscovererBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscovererBuilder {
    pub fn new() -> Self {
        Self {
            client: None, // Azure OpenAI from environment variables when not set
        }
    }

    #[must_use]
    pub fn client(mut self, client: Arc<dyn ChatCompletion>) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<Discoverer> {
        let client = match self.client {
            Some(c) => c,
            None => Arc::new(AzureOpenAiClient::try_default()?),
        };
        Ok(Discoverer { client })
    }
}

/// Asks the completion backend for emerging artists in a genre.
///
/// The backend is created once and shared by every call; no per-call state is
/// kept here, so consecutive discoveries are independent.
#[derive(Clone)]
pub struct Discoverer {
    client: Arc<dyn ChatCompletion>,
}

impl Discoverer {
    pub fn new(client: Arc<dyn ChatCompletion>) -> Self {
        Discoverer { client }
    }

    pub async fn discover(&self, genre: &GenreSelection) -> Result<Vec<ArtistRecommendation>> {
        info!("Requesting emerging {genre} artists ...");
        let prompt = build_prompt(genre);
        let raw = self.client.complete(&prompt).await?;
        debug!("Completion returned {} bytes", raw.len());

        let recommendations = normalize(&raw)?;
        info!(
            "Received {} {genre} recommendations",
            recommendations.len()
        );
        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::completion::MockChatCompletion;
    use crate::clients::errors::Error;
    use mockall::Sequence;

    const JAZZ_REPLY: &str = r#"{"recommendations":[{"Artist Name":"Nubya Garcia","Brief Description":"London saxophonist.","Recommended New Song":"Odyssey","Why Discover Them":"Spiritual jazz revival."}]}"#;
    const ROCK_REPLY: &str = r#"[{"Artist Name":"Wet Leg","Brief Description":"Isle of Wight duo.","Recommended New Song":"Catch These Fists","Why Discover Them":"Wry indie rock."}]"#;

    fn genre(name: &str) -> GenreSelection {
        GenreSelection::new(name).unwrap()
    }

    #[tokio::test]
    async fn one_request_per_discovery_with_genre_in_prompt() {
        let mut mock = MockChatCompletion::new();
        mock.expect_complete()
            .withf(|prompt| {
                prompt.contains("in the Jazz genre") && prompt.contains("modern Jazz.")
            })
            .times(1)
            .returning(|_| Ok(JAZZ_REPLY.to_string()));

        let discoverer = Discoverer::new(Arc::new(mock));
        let recs = discoverer.discover(&genre("Jazz")).await.unwrap();

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].artist_name, "Nubya Garcia");
    }

    #[tokio::test]
    async fn backend_errors_propagate() {
        let mut mock = MockChatCompletion::new();
        mock.expect_complete().times(1).returning(|_| {
            Err(Error::ApiError {
                status: 401,
                body: "Access denied due to invalid subscription key".into(),
            })
        });

        let discoverer = Discoverer::new(Arc::new(mock));
        let err = discoverer.discover(&genre("Pop")).await.unwrap_err();
        assert!(matches!(err, Error::ApiError { status: 401, .. }));
    }

    #[tokio::test]
    async fn shape_errors_surface_after_the_call() {
        let mut mock = MockChatCompletion::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Ok("{}".to_string()));

        let discoverer = Discoverer::new(Arc::new(mock));
        let err = discoverer.discover(&genre("Blues")).await.unwrap_err();
        assert!(matches!(err, Error::NoRecommendations));
    }

    #[tokio::test]
    async fn consecutive_discoveries_do_not_share_results() {
        let mut seq = Sequence::new();
        let mut mock = MockChatCompletion::new();
        mock.expect_complete()
            .withf(|prompt| prompt.contains("in the Jazz genre"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(JAZZ_REPLY.to_string()));
        mock.expect_complete()
            .withf(|prompt| prompt.contains("in the Rock genre"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(ROCK_REPLY.to_string()));

        let discoverer = Discoverer::new(Arc::new(mock));
        let first = discoverer.discover(&genre("Jazz")).await.unwrap();
        let second = discoverer.discover(&genre("Rock")).await.unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].artist_name, "Wet Leg");
        assert!(second.iter().all(|r| r.artist_name != "Nubya Garcia"));
    }

    #[test]
    fn builder_uses_the_given_client() {
        let discoverer = DiscovererBuilder::new()
            .client(Arc::new(MockChatCompletion::new()))
            .build();
        assert!(discoverer.is_ok());
    }
}
