//! Time-series envelope classification, shared by the visits, pageviews,
//! visit-duration, and bounce-rate endpoints.

use crate::common::{zip_pairs, Normalized, ServerFault};
use serde_json::Value;

/// Classified time-series envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesResponse {
    /// Date→value series; this mapping is the entire result.
    Success(Normalized),
    /// One of the shared failure envelopes.
    Fault(ServerFault),
}

impl SeriesResponse {
    /// Classify a decoded time-series body. The `Values` key wins over every
    /// failure shape; everything else goes through the shared fault
    /// classifier.
    pub fn classify(body: Value) -> Self {
        let Value::Object(map) = body else { return Self::Fault(ServerFault::Unknown) };

        match map.get("Values") {
            Some(values) => {
                let items = values.as_array().map(Vec::as_slice).unwrap_or_default();
                Self::Success(zip_pairs(items, "Date", "Value"))
            }
            None => Self::Fault(ServerFault::classify(&map)),
        }
    }

    /// Collapse into the uniform flattened mapping. Success yields exactly
    /// the date→value pairs, with no other keys.
    pub fn into_normalized(self) -> Normalized {
        match self {
            Self::Success(map) => map,
            Self::Fault(fault) => fault.into_normalized(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{
        error_entry, DATE_RANGE_MESSAGE, UNKNOWN_ERROR_MESSAGE, UNKNOWN_TARGET_MESSAGE,
    };
    use serde_json::json;

    #[test]
    fn values_zip_into_flat_date_mapping() {
        let body = json!({
            "Values": [
                {"Date": "11-2014", "Value": 123},
                {"Date": "12-2014", "Value": 456}
            ]
        });

        let result = SeriesResponse::classify(body).into_normalized();

        let expected = json!({"11-2014": 123, "12-2014": 456});
        assert_eq!(Value::Object(result), expected);
    }

    #[test]
    fn success_drops_all_other_top_level_fields() {
        let body = json!({
            "Values": [{"Date": "11-2014", "Value": 1}],
            "Granularity": "Monthly"
        });
        let result = SeriesResponse::classify(body).into_normalized();
        assert_eq!(result.len(), 1);
        assert_eq!(result["11-2014"], 1);
    }

    #[test]
    fn empty_values_list_is_an_empty_success() {
        let result = SeriesResponse::classify(json!({"Values": []})).into_normalized();
        assert!(result.is_empty());
    }

    #[test]
    fn invalid_key_surfaces_server_message() {
        let body = json!({"Error": {"Message": "user_key_invalid"}});
        assert_eq!(
            SeriesResponse::classify(body),
            SeriesResponse::Fault(ServerFault::InvalidKey("user_key_invalid".to_string()))
        );
    }

    #[test]
    fn data_not_found_maps_to_fixed_error() {
        let body = json!({"Message": "Data Not Found"});
        let result = SeriesResponse::classify(body).into_normalized();
        assert_eq!(result, error_entry(UNKNOWN_TARGET_MESSAGE));
    }

    #[test]
    fn plain_not_found_falls_to_unknown_error() {
        // The series classifier wants the exact "Data Not Found" literal.
        let body = json!({"Message": "Not Found"});
        let result = SeriesResponse::classify(body).into_normalized();
        assert_eq!(result, error_entry(UNKNOWN_ERROR_MESSAGE));
    }

    #[test]
    fn out_of_order_dates_surface_verbatim() {
        let body = json!({"Message": "Date range is not valid"});
        let result = SeriesResponse::classify(body).into_normalized();
        assert_eq!(result, error_entry(DATE_RANGE_MESSAGE));
    }

    #[test]
    fn invalid_request_extracts_model_state_error() {
        let body = json!({
            "Message": "The request is invalid.",
            "ModelState": {
                "gr": ["The field gr is invalid."]
            }
        });
        let result = SeriesResponse::classify(body).into_normalized();
        assert_eq!(result, error_entry("The field gr is invalid."));
    }

    #[test]
    fn values_key_wins_over_error_key() {
        let body = json!({
            "Error": {"Message": "ignored"},
            "Values": [{"Date": "01-2015", "Value": 9}]
        });
        let result = SeriesResponse::classify(body).into_normalized();
        assert_eq!(Value::Object(result), json!({"01-2015": 9}));
    }

    #[test]
    fn classification_is_pure_and_repeatable() {
        let body = json!({"Values": [{"Date": "11-2014", "Value": 123}]});
        let first = SeriesResponse::classify(body.clone()).into_normalized();
        let second = SeriesResponse::classify(body).into_normalized();
        assert_eq!(first, second);
    }
}
