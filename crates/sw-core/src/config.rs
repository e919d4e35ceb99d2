//! Configuration management for the SimilarWeb client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the SimilarWeb client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// SimilarWeb user key
  pub api_key: String,

  /// API rate limit (requests per minute)
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for the SimilarWeb Site API
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("SIMILARWEB_API_KEY")
      .map_err(|_| Error::ApiKey("SIMILARWEB_API_KEY not set".to_string()))?;

    let rate_limit = env::var("SW_RATE_LIMIT")
      .unwrap_or_else(|_| crate::DEFAULT_RATE_LIMIT.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid SW_RATE_LIMIT".to_string()))?;

    let timeout_secs = env::var("SW_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid SW_TIMEOUT_SECS".to_string()))?;

    let base_url =
      env::var("SW_BASE_URL").unwrap_or_else(|_| crate::SIMILARWEB_BASE_URL.to_string());

    Ok(Config { api_key, rate_limit, timeout_secs, base_url })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: 30,
      base_url: crate::SIMILARWEB_BASE_URL.to_string(),
    }
  }
}
