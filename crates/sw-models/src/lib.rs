//! # sw-models
//!
//! Response envelope classification for the SimilarWeb v1 API.
//!
//! The API answers every request with a JSON object whose shape depends on
//! what went wrong: a success payload, an `Error` object for a rejected user
//! key, a `Message` for unknown targets or invalid inputs, or something else
//! entirely. This crate turns each decoded body into a tagged variant and
//! from there into one uniform, flattened `{key: value}` mapping so callers
//! never have to probe the raw envelope themselves.
//!
//! ## Usage
//!
//! ```
//! use sw_models::series::SeriesResponse;
//! use serde_json::json;
//!
//! let body = json!({"Values": [{"Date": "11-2014", "Value": 123}]});
//! let result = SeriesResponse::classify(body).into_normalized();
//! assert_eq!(result["11-2014"], 123);
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod overview;
pub mod series;
pub mod sources;

// Re-export common types for convenience
pub use common::{error_entry, Normalized, ServerFault};

pub use overview::OverviewResponse;
pub use series::SeriesResponse;
pub use sources::{OrganicKeywordsResponse, SocialReferralsResponse};
