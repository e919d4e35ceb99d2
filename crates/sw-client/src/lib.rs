//! # sw-client
//!
//! A SimilarWeb v1 API client for Rust.
//!
//! ## Features
//!
//! - **Clean API**: Simple, idiomatic Rust interface
//! - **Async/Await**: Built on tokio and reqwest
//! - **Rate Limiting**: Built-in quota handling via governor
//! - **Uniform Results**: Every envelope the server can return, success or
//!   failure, normalizes into one flattened mapping via sw-models
//! - **Configurable**: Environment-based configuration via sw-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sw_client::SimilarwebClient;
//! use sw_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = SimilarwebClient::new(config)?;
//!
//!     let overview = client.traffic().overview("example.com").await?;
//!     println!("Global rank: {:?}", overview.get("GlobalRank"));
//!
//!     let referrals = client.sources().social_referrals("example.com").await?;
//!     println!("Social sources: {:?}", referrals.get("SocialSources"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Methods return `Err` only for transport failures and undecodable bodies.
//! Server-reported failures (rejected key, unknown target, invalid inputs)
//! come back as the single-entry `{"Error": message}` mapping, so callers
//! handle every API outcome through one shape.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::SimilarwebClient;
pub use sw_core::{Config, Endpoint, Error, Granularity, Result};
pub use sw_models::Normalized;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{sources::SourcesEndpoints, traffic::TrafficEndpoints};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = Config::default_with_key("test_key".to_string());
        // Test that we can create the client configuration
        assert_eq!(config.api_key, "test_key");
    }
}
