use std::fmt;

use serde::Serialize;

use crate::clients::entities::ArtistRecommendation;
use crate::clients::errors::{Error, Result};

const HEADLINE: &str = "Here are some emerging talents!";

/// One collapsible result: the title is what shows while collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub artist_name: String,
    pub recommended_song: String,
    pub description: String,
    pub why_discover: String,
}

impl From<&ArtistRecommendation> for Card {
    fn from(rec: &ArtistRecommendation) -> Self {
        Card {
            title: format!("{} - {}", rec.artist_name, rec.recommended_song),
            artist_name: rec.artist_name.clone(),
            recommended_song: rec.recommended_song.clone(),
            description: rec.brief_description.clone(),
            why_discover: rec.why_discover.clone(),
        }
    }
}

/// What the results area shows after one attempt. Nothing carries over
/// between attempts: each outcome is built from a single result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Recommendations { headline: String, cards: Vec<Card> },
    Error { message: String },
}

impl Outcome {
    pub fn from_result(result: Result<Vec<ArtistRecommendation>>) -> Self {
        match result {
            Ok(recs) => Outcome::Recommendations {
                headline: HEADLINE.to_string(),
                cards: recs.iter().map(Card::from).collect(),
            },
            Err(err) => Outcome::Error {
                message: failure_message(&err),
            },
        }
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            Outcome::Recommendations { cards, .. } => cards,
            Outcome::Error { .. } => &[],
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }
}

pub fn failure_message(err: &Error) -> String {
    let detail = err.to_string();
    format!(
        "Error: {}. Check your Azure setup or try again.",
        detail.trim_end_matches('.')
    )
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Recommendations { headline, cards } => {
                writeln!(f, "{headline}")?;
                for card in cards {
                    writeln!(f)?;
                    writeln!(f, "▸ {}", card.title)?;
                    writeln!(f, "    Description: {}", card.description)?;
                    writeln!(f, "    Why Discover Them: {}", card.why_discover)?;
                }
                Ok(())
            }
            Outcome::Error { message } => writeln!(f, "{message}"),
        }
    }
}
