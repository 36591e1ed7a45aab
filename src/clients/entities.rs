use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One artist suggested by the model, keyed exactly as the prompt asks for.
///
/// Values are taken as the model sent them: anything that is not a JSON string
/// is kept as its JSON text. Only a missing key is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRecommendation {
    #[serde(rename = "Artist Name", deserialize_with = "verbatim_text")]
    pub artist_name: String,
    #[serde(rename = "Brief Description", deserialize_with = "verbatim_text")]
    pub brief_description: String,
    #[serde(rename = "Recommended New Song", deserialize_with = "verbatim_text")]
    pub recommended_song: String,
    #[serde(rename = "Why Discover Them", deserialize_with = "verbatim_text")]
    pub why_discover: String,
}

fn verbatim_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_booleans_become_text() {
        let rec: ArtistRecommendation = serde_json::from_value(json!({
            "Artist Name": "A",
            "Brief Description": "B",
            "Recommended New Song": 1999,
            "Why Discover Them": false
        }))
        .unwrap();
        assert_eq!(rec.recommended_song, "1999");
        assert_eq!(rec.why_discover, "false");
    }

    #[test]
    fn missing_key_is_still_rejected() {
        let err = serde_json::from_value::<ArtistRecommendation>(json!({
            "Artist Name": "A",
            "Brief Description": "B",
            "Why Discover Them": "D"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("Recommended New Song"));
    }
}
