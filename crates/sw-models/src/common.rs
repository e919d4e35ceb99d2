//! Shared envelope vocabulary: the flattened result mapping, the fixed
//! client-side failure messages, and the fault classifier common to the
//! time-series and sources endpoint families.

use serde_json::{Map, Value};

/// Flattened key→value mapping returned by every endpoint call.
///
/// Backed by `serde_json`'s insertion-ordered map, so fields keep the order
/// they arrived in on the wire.
pub type Normalized = Map<String, Value>;

/// Fixed message for not-found / malformed-target envelopes.
pub const UNKNOWN_TARGET_MESSAGE: &str = "Malformed or Unknown URL";

/// Literal the server uses to reject an out-of-order date range.
pub const DATE_RANGE_MESSAGE: &str = "Date range is not valid";

/// Fallback message for decodable bodies matching no known envelope.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Error";

/// Literal the server uses for an unknown target on non-overview endpoints.
pub(crate) const DATA_NOT_FOUND_LITERAL: &str = "Data Not Found";

/// Literal the server uses when a query parameter fails validation.
pub(crate) const REQUEST_INVALID_LITERAL: &str = "The request is invalid.";

/// Build the single-entry `{"Error": message}` mapping.
pub fn error_entry(message: impl Into<String>) -> Normalized {
    let mut map = Map::new();
    map.insert("Error".to_string(), Value::String(message.into()));
    map
}

/// Failure envelopes shared by the time-series and sources families.
///
/// The overview endpoint signals not-found differently and has its own
/// classifier; everything else funnels through here.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerFault {
    /// Rejected user key; carries the server's own `Error.Message`.
    InvalidKey(String),
    /// Target the API does not know about ("Data Not Found").
    UnknownTarget,
    /// Start/end periods out of order or otherwise unusable.
    InvalidDateRange,
    /// A query field failed validation; carries the first `ModelState` error.
    InvalidField(String),
    /// Decodable body matching no known envelope.
    Unknown,
}

impl ServerFault {
    /// Classify a failure envelope. First match wins: `Error`, then the
    /// three `Message` literals in the order the upstream API distinguishes
    /// them, then the generic fallback.
    pub fn classify(body: &Map<String, Value>) -> Self {
        if let Some(error) = body.get("Error") {
            return Self::InvalidKey(error_message(error));
        }
        if body.contains_key("Message") {
            if has_literal_value(body, DATA_NOT_FOUND_LITERAL) {
                return Self::UnknownTarget;
            }
            if has_literal_value(body, DATE_RANGE_MESSAGE) {
                return Self::InvalidDateRange;
            }
            if has_literal_value(body, REQUEST_INVALID_LITERAL) {
                return Self::InvalidField(first_model_state_error(body));
            }
        }
        Self::Unknown
    }

    /// Collapse the fault into the uniform `{"Error": message}` mapping.
    pub fn into_normalized(self) -> Normalized {
        match self {
            Self::InvalidKey(message) => error_entry(message),
            Self::UnknownTarget => error_entry(UNKNOWN_TARGET_MESSAGE),
            Self::InvalidDateRange => error_entry(DATE_RANGE_MESSAGE),
            Self::InvalidField(message) => error_entry(message),
            Self::Unknown => error_entry(UNKNOWN_ERROR_MESSAGE),
        }
    }
}

/// Pull `Error.Message` out of an auth-failure envelope. An `Error` object
/// without a `Message` string still normalizes rather than panicking.
pub(crate) fn error_message(error: &Value) -> String {
    error
        .get("Message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
}

/// Whole-string equality against the object's top-level values. A partial
/// match such as "Not Found" does not count.
fn has_literal_value(body: &Map<String, Value>, literal: &str) -> bool {
    body.values().any(|value| value.as_str() == Some(literal))
}

/// First error string of the first value-list in the nested `ModelState`
/// mapping, which is where the API buries its validation messages.
fn first_model_state_error(body: &Map<String, Value>) -> String {
    body.get("ModelState")
        .and_then(Value::as_object)
        .and_then(|state| state.values().next())
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
}

/// Zip a list of small objects into a flat mapping, taking `key_field` as
/// the key and `value_field` as the value, in list order. Elements missing
/// either field are skipped.
pub(crate) fn zip_pairs(items: &[Value], key_field: &str, value_field: &str) -> Normalized {
    let mut map = Map::new();
    for item in items {
        let Some(key) = item.get(key_field) else { continue };
        let Some(value) = item.get(value_field) else { continue };
        let key = match key.as_str() {
            Some(text) => text.to_string(),
            None => key.to_string(),
        };
        map.insert(key, value.clone());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn error_envelope_surfaces_server_message() {
        let body = object(json!({"Error": {"Message": "user_key_invalid", "Code": 1}}));
        assert_eq!(
            ServerFault::classify(&body),
            ServerFault::InvalidKey("user_key_invalid".to_string())
        );
    }

    #[test]
    fn error_envelope_without_message_still_normalizes() {
        let body = object(json!({"Error": {"Code": 1}}));
        assert_eq!(
            ServerFault::classify(&body).into_normalized(),
            error_entry(UNKNOWN_ERROR_MESSAGE)
        );
    }

    #[test]
    fn data_not_found_literal_matches() {
        let body = object(json!({"Message": "Data Not Found"}));
        assert_eq!(ServerFault::classify(&body), ServerFault::UnknownTarget);
    }

    #[test]
    fn partial_not_found_literal_does_not_match() {
        // "Not Found" is not "Data Not Found"; it must fall to the fallback.
        let body = object(json!({"Message": "Not Found"}));
        assert_eq!(ServerFault::classify(&body), ServerFault::Unknown);
    }

    #[test]
    fn date_range_literal_matches() {
        let body = object(json!({"Message": "Date range is not valid"}));
        assert_eq!(ServerFault::classify(&body), ServerFault::InvalidDateRange);
    }

    #[test]
    fn validation_envelope_extracts_first_model_state_error() {
        let body = object(json!({
            "Message": "The request is invalid.",
            "ModelState": {
                "start": ["The value '14-2014' is not valid for Start.", "second"],
                "page": ["The field Page is invalid."]
            }
        }));
        assert_eq!(
            ServerFault::classify(&body),
            ServerFault::InvalidField("The value '14-2014' is not valid for Start.".to_string())
        );
    }

    #[test]
    fn validation_envelope_without_model_state_falls_back() {
        let body = object(json!({"Message": "The request is invalid."}));
        assert_eq!(
            ServerFault::classify(&body).into_normalized(),
            error_entry(UNKNOWN_ERROR_MESSAGE)
        );
    }

    #[test]
    fn empty_body_is_unknown() {
        let body = object(json!({}));
        assert_eq!(ServerFault::classify(&body), ServerFault::Unknown);
    }

    #[test]
    fn zip_preserves_list_order_and_skips_incomplete_elements() {
        let items = [
            json!({"Date": "11-2014", "Value": 123}),
            json!({"Date": "12-2014"}),
            json!({"Date": "01-2015", "Value": 456}),
        ];
        let zipped = zip_pairs(&items, "Date", "Value");
        let keys: Vec<&str> = zipped.keys().map(String::as_str).collect();
        assert_eq!(keys, ["11-2014", "01-2015"]);
        assert_eq!(zipped["01-2015"], 456);
    }
}
