//! Traffic-overview envelope classification.
//!
//! The overview endpoint is the odd one out: its success payload keeps all
//! top-level fields but carries three lists of small objects that flatten
//! into plain mappings, and its not-found signal is a loose "... found"
//! message rather than the literal used everywhere else.

use crate::common::{
    error_entry, error_message, zip_pairs, Normalized, UNKNOWN_ERROR_MESSAGE,
    UNKNOWN_TARGET_MESSAGE,
};
use serde_json::Value;

/// The three overview list fields and the element fields they zip on.
const SHARE_FIELDS: [(&str, &str, &str); 3] = [
    ("TopCountryShares", "CountryCode", "TrafficShare"),
    ("TrafficReach", "Date", "Value"),
    ("TrafficShares", "SourceType", "SourceValue"),
];

/// Classified traffic-overview envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum OverviewResponse {
    /// Rank/engagement summary with the three share lists flattened.
    Success(Normalized),
    /// Rejected user key; carries the server's own `Error.Message`.
    InvalidKey(String),
    /// Not-found / malformed target.
    UnknownTarget,
    /// Decodable body matching no known envelope.
    Unknown,
}

impl OverviewResponse {
    /// Classify a decoded overview body. First match wins: `GlobalRank`,
    /// then `Error`, then a `Message` whose first value mentions "found",
    /// then the generic fallback.
    pub fn classify(body: Value) -> Self {
        let Value::Object(map) = body else { return Self::Unknown };

        if map.contains_key("GlobalRank") {
            return Self::Success(flatten_overview(map));
        }
        if let Some(error) = map.get("Error") {
            return Self::InvalidKey(error_message(error));
        }
        if map.contains_key("Message") && first_value_mentions_found(&map) {
            return Self::UnknownTarget;
        }
        Self::Unknown
    }

    /// Collapse into the uniform flattened mapping.
    pub fn into_normalized(self) -> Normalized {
        match self {
            Self::Success(map) => map,
            Self::InvalidKey(message) => error_entry(message),
            Self::UnknownTarget => error_entry(UNKNOWN_TARGET_MESSAGE),
            Self::Unknown => error_entry(UNKNOWN_ERROR_MESSAGE),
        }
    }
}

/// Replace each share list with its zipped mapping, in place. Fields that
/// are absent or not lists pass through untouched, as does everything else.
fn flatten_overview(mut map: Normalized) -> Normalized {
    for (field, key_field, value_field) in SHARE_FIELDS {
        let flattened = match map.get(field).and_then(Value::as_array) {
            Some(items) => Value::Object(zip_pairs(items, key_field, value_field)),
            None => continue,
        };
        // insert on an existing key keeps its position in the map
        map.insert(field.to_string(), flattened);
    }
    map
}

/// The upstream not-found signal: the first value in wire order is a string
/// containing "found", any casing ("Site not found", "Data Not Found", ...).
fn first_value_mentions_found(map: &Normalized) -> bool {
    map.values()
        .next()
        .and_then(Value::as_str)
        .is_some_and(|text| text.to_ascii_lowercase().contains("found"))
}
