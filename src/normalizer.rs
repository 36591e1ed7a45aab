//! Turns the model's reply into recommendation records.
//!
//! The model is only asked, not forced, to reply with a JSON list. With the
//! `json_object` response hint it usually wraps the list in an object, under a
//! key of its own choosing, so lookup is tolerant about where the list sits.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::clients::entities::ArtistRecommendation;
use crate::clients::errors::{Error, Result};

/// Wrapper keys tried in order before falling back to the first entry.
pub const RECOMMENDATION_KEYS: [&str; 2] = ["recommendations", "artists"];

/// Parse and decode a raw completion. Any malformed record fails the whole batch.
pub fn normalize(raw: &str) -> Result<Vec<ArtistRecommendation>> {
    let parsed: Value = serde_json::from_str(raw)?;

    let records = match locate_records(&parsed) {
        Some(records) if !records.is_empty() => records,
        _ => return Err(Error::NoRecommendations),
    };
    debug!("Located {} recommendation records", records.len());

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            ArtistRecommendation::deserialize(record).map_err(|e| Error::FieldError {
                index: index + 1,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Find the list of records inside a parsed reply.
pub fn locate_records(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Array(items) => Some(items.as_slice()),
        Value::Object(map) => {
            if let Some(wrapped) = RECOMMENDATION_KEYS.iter().find_map(|key| map.get(*key)) {
                return wrapped.as_array().map(Vec::as_slice);
            }
            map.values().next()?.as_array().map(Vec::as_slice)
        }
        _ => None,
    }
}
