//! Client facade wiring configuration, rate limiting, and transport.

use crate::endpoints::{sources::SourcesEndpoints, traffic::TrafficEndpoints, SharedRateLimiter};
use crate::transport::Transport;
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use sw_core::{Config, Result};

/// Main SimilarWeb API client
///
/// Provides access to the traffic and sources endpoint families. Handles
/// authentication and rate limiting; each endpoint call issues exactly one
/// GET request and returns one normalized mapping.
///
/// # Examples
///
/// ```ignore
/// use sw_client::SimilarwebClient;
/// use sw_core::{Config, Granularity};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = SimilarwebClient::new(config)?;
///
///     // Rank/engagement summary
///     let overview = client.traffic().overview("example.com").await?;
///     println!("Global rank: {:?}", overview.get("GlobalRank"));
///
///     // Monthly visits series
///     let visits = client
///         .traffic()
///         .visits("example.com", Granularity::Monthly, "11-2014", "12-2014", false)
///         .await?;
///     println!("{} data points", visits.len());
///
///     Ok(())
/// }
/// ```
pub struct SimilarwebClient {
  rate_limiter: SharedRateLimiter,
  transport: Arc<Transport>,
}

impl SimilarwebClient {
  /// Create a new SimilarWeb API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing the user key and other settings
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let rate_limit = config.rate_limit;

    // Ensure rate_limit is non-zero, fallback to default if invalid
    let rate_limit_value = NonZeroU32::new(rate_limit).unwrap_or_else(|| {
      NonZeroU32::new(sw_core::DEFAULT_RATE_LIMIT).expect("DEFAULT_RATE_LIMIT must be non-zero")
    });
    let quota = Quota::per_minute(rate_limit_value);
    let rate_limiter = Arc::new(RateLimiter::direct(quota));

    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { transport, rate_limiter })
  }

  /// Create a new client from an API key alone, with default settings
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn with_key(api_key: impl Into<String>) -> Result<Self> {
    Self::new(Config::default_with_key(api_key.into()))
  }

  /// Create a new client with a custom rate limiter
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing the user key and other settings
  /// * `rate_limiter` - Custom rate limiter instance, possibly shared
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn with_rate_limiter(config: Config, rate_limiter: SharedRateLimiter) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?), rate_limiter })
  }

  /// Get access to the traffic endpoints
  ///
  /// Returns a `TrafficEndpoints` instance for the overview and the four
  /// engagement time series.
  pub fn traffic(&self) -> TrafficEndpoints {
    TrafficEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Get access to the sources endpoints
  ///
  /// Returns a `SourcesEndpoints` instance for social referrals and organic
  /// search keywords.
  pub fn sources(&self) -> SourcesEndpoints {
    SourcesEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// The full URL of the most recent request
  ///
  /// Debug affordance only: overwritten on every call, empty before the
  /// first one, and unreliable when one client instance is shared across
  /// concurrent calls. Never used for correctness.
  pub fn last_url(&self) -> String {
    self.transport.last_url()
  }

  /// Wait for the rate limiter to allow the next request
  ///
  /// Most users won't need to call this directly as endpoints handle it
  /// automatically.
  pub async fn wait_for_rate_limit(&self) -> Result<()> {
    self.rate_limiter.until_ready().await;
    Ok(())
  }
}

impl std::fmt::Debug for SimilarwebClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SimilarwebClient")
      .field("transport", &self.transport)
      .field("rate_limiter", &"RateLimiter")
      .finish()
  }
}
