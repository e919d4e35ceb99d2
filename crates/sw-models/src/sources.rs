//! Referral-source envelope classification: social referring sites and
//! organic search keywords. Failure shapes are the same as the time-series
//! family; only success detection and the success payload differ.

use crate::common::{Normalized, ServerFault};
use serde_json::Value;

/// Classified social-referrals envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum SocialReferralsResponse {
    /// Body passed through as-is: `SocialSources`, `StartDate`, `EndDate`.
    Success(Normalized),
    /// One of the shared failure envelopes.
    Fault(ServerFault),
}

impl SocialReferralsResponse {
    /// Classify a decoded social-referrals body. The `SocialSources` key
    /// marks success; everything else goes through the shared fault
    /// classifier.
    pub fn classify(body: Value) -> Self {
        let Value::Object(map) = body else { return Self::Fault(ServerFault::Unknown) };

        if map.contains_key("SocialSources") {
            return Self::Success(map);
        }
        Self::Fault(ServerFault::classify(&map))
    }

    /// Collapse into the uniform flattened mapping.
    pub fn into_normalized(self) -> Normalized {
        match self {
            Self::Success(map) => map,
            Self::Fault(fault) => fault.into_normalized(),
        }
    }
}

/// Classified organic-search-keywords envelope.
///
/// The success payload is the decoded body verbatim, keyword result list and
/// paging counters untouched. The upstream contract never grew a flattened
/// shape for this endpoint, so the raw pass-through is the contract.
#[derive(Debug, Clone, PartialEq)]
pub enum OrganicKeywordsResponse {
    /// Decoded body verbatim.
    Success(Normalized),
    /// One of the shared failure envelopes.
    Fault(ServerFault),
}

impl OrganicKeywordsResponse {
    /// Classify a decoded organic-search body. The `Data` results key marks
    /// success; everything else goes through the shared fault classifier.
    pub fn classify(body: Value) -> Self {
        let Value::Object(map) = body else { return Self::Fault(ServerFault::Unknown) };

        if map.contains_key("Data") {
            return Self::Success(map);
        }
        Self::Fault(ServerFault::classify(&map))
    }

    /// Collapse into the uniform flattened mapping.
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
    use crate::common::{error_entry, UNKNOWN_ERROR_MESSAGE, UNKNOWN_TARGET_MESSAGE};
    use serde_json::json;

    #[test]
    fn social_success_passes_body_through_unchanged() {
        let body = json!({
            "SocialSources": {
                "Facebook": 0.5872484011274256,
                "Reddit": 0.1955231030114612,
                "Twitter": 0.13209235484709875
            },
            "StartDate": "12/2014",
            "EndDate": "02/2015"
        });

        let result = SocialReferralsResponse::classify(body.clone()).into_normalized();

        assert_eq!(Value::Object(result), body);
    }

    #[test]
    fn social_invalid_key_surfaces_server_message() {
        let body = json!({"Error": {"Message": "user_key_invalid"}});
        let result = SocialReferralsResponse::classify(body).into_normalized();
        assert_eq!(result, error_entry("user_key_invalid"));
    }

    #[test]
    fn social_data_not_found_maps_to_fixed_error() {
        let body = json!({"Message": "Data Not Found"});
        let result = SocialReferralsResponse::classify(body).into_normalized();
        assert_eq!(result, error_entry(UNKNOWN_TARGET_MESSAGE));
    }

    #[test]
    fn social_empty_body_is_unknown_error() {
        let result = SocialReferralsResponse::classify(json!({})).into_normalized();
        assert_eq!(result, error_entry(UNKNOWN_ERROR_MESSAGE));
    }

    #[test]
    fn organic_success_returns_body_verbatim() {
        let body = json!({
            "Data": [
                {"SearchTerm": "example", "Visits": 0.42, "Change": 0.1},
                {"SearchTerm": "sample site", "Visits": 0.13, "Change": null}
            ],
            "ResultsCount": 2,
            "TotalCount": 184,
            "Next": "http://api.similarweb.com/Site/example.com/v1/orgsearch?page=2"
        });

        let result = OrganicKeywordsResponse::classify(body.clone()).into_normalized();

        assert_eq!(Value::Object(result), body);
    }

    #[test]
    fn organic_bad_page_extracts_model_state_error() {
        let body = json!({
            "Message": "The request is invalid.",
            "ModelState": {
                "page": ["The field Page is invalid."]
            }
        });
        let result = OrganicKeywordsResponse::classify(body).into_normalized();
        assert_eq!(result, error_entry("The field Page is invalid."));
    }

    #[test]
    fn organic_bad_start_date_extracts_model_state_error() {
        let body = json!({
            "Message": "The request is invalid.",
            "ModelState": {
                "start": ["The value '14-2014' is not valid for Start."]
            }
        });
        let result = OrganicKeywordsResponse::classify(body).into_normalized();
        assert_eq!(result, error_entry("The value '14-2014' is not valid for Start."));
    }

    #[test]
    fn organic_out_of_order_dates_surface_verbatim() {
        let body = json!({"Message": "Date range is not valid"});
        assert_eq!(
            OrganicKeywordsResponse::classify(body),
            OrganicKeywordsResponse::Fault(ServerFault::InvalidDateRange)
        );
    }

    #[test]
    fn organic_empty_body_is_unknown_error() {
        let result = OrganicKeywordsResponse::classify(json!({})).into_normalized();
        assert_eq!(result, error_entry(UNKNOWN_ERROR_MESSAGE));
    }
}
