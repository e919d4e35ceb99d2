//! Traffic endpoints: rank/engagement overview and the four time-series
//! metrics (visits, pageviews, visit duration, bounce rate).
//!
//! Every method issues exactly one GET and returns one normalized mapping;
//! server-reported failures come back as the `{"Error": message}` entry
//! rather than an `Err`.

use super::{impl_endpoint_base, EndpointBase, SharedRateLimiter};
use crate::transport::Transport;
use std::sync::Arc;
use sw_core::{Endpoint, Granularity, Result};
use sw_models::{Normalized, OverviewResponse, SeriesResponse};
use tracing::instrument;

/// Traffic endpoints for rank and engagement data
pub struct TrafficEndpoints {
    transport: Arc<Transport>,
    rate_limiter: SharedRateLimiter,
}

impl TrafficEndpoints {
    /// Create a new traffic endpoints instance
    pub fn new(transport: Arc<Transport>, rate_limiter: SharedRateLimiter) -> Self {
        Self { transport, rate_limiter }
    }

    /// Get the traffic overview for a site
    ///
    /// Returns the rank/engagement summary with `TopCountryShares`,
    /// `TrafficReach`, and `TrafficShares` flattened into plain mappings.
    ///
    /// # Arguments
    ///
    /// * `target` - The site identifier (e.g., "example.com"), not validated
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use sw_client::SimilarwebClient;
    /// # use sw_core::Config;
    /// # async fn run() -> sw_core::Result<()> {
    /// # let client = SimilarwebClient::new(Config::from_env()?)?;
    /// let overview = client.traffic().overview("example.com").await?;
    /// println!("Global rank: {:?}", overview.get("GlobalRank"));
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self), fields(target))]
    pub async fn overview(&self, target: &str) -> Result<Normalized> {
        self.wait_for_rate_limit().await?;

        let body = self.transport.get(Endpoint::TrafficOverview, target, &[]).await?;
        Ok(OverviewResponse::classify(body).into_normalized())
    }

    /// Get the estimated visits series for a site
    ///
    /// # Arguments
    ///
    /// * `target` - The site identifier
    /// * `gr` - Series granularity (daily, weekly, monthly)
    /// * `start` - Start period, `MM-YYYY`
    /// * `end` - End period, `MM-YYYY`
    /// * `md` - Month-day date formatting in the response
    #[instrument(skip(self), fields(target, start, end))]
    pub async fn visits(
        &self,
        target: &str,
        gr: Granularity,
        start: &str,
        end: &str,
        md: bool,
    ) -> Result<Normalized> {
        self.series(Endpoint::Visits, target, gr, start, end, md).await
    }

    /// Get the pageviews-per-visit series for a site
    #[instrument(skip(self), fields(target, start, end))]
    pub async fn pageviews(
        &self,
        target: &str,
        gr: Granularity,
        start: &str,
        end: &str,
        md: bool,
    ) -> Result<Normalized> {
        self.series(Endpoint::Pageviews, target, gr, start, end, md).await
    }

    /// Get the average visit duration series for a site
    #[instrument(skip(self), fields(target, start, end))]
    pub async fn visit_duration(
        &self,
        target: &str,
        gr: Granularity,
        start: &str,
        end: &str,
        md: bool,
    ) -> Result<Normalized> {
        self.series(Endpoint::VisitDuration, target, gr, start, end, md).await
    }

    /// Get the bounce rate series for a site
    #[instrument(skip(self), fields(target, start, end))]
    pub async fn bounce_rate(
        &self,
        target: &str,
        gr: Granularity,
        start: &str,
        end: &str,
        md: bool,
    ) -> Result<Normalized> {
        self.series(Endpoint::BounceRate, target, gr, start, end, md).await
    }

    // The four series endpoints share one wire shape; query order is fixed:
    // gr, start, end, md, UserKey.
    async fn series(
        &self,
        endpoint: Endpoint,
        target: &str,
        gr: Granularity,
        start: &str,
        end: &str,
        md: bool,
    ) -> Result<Normalized> {
        self.wait_for_rate_limit().await?;

        let params = [
            ("gr", gr.to_string()),
            ("start", start.to_string()),
            ("end", end.to_string()),
            ("md", md.to_string()),
        ];

        let body = self.transport.get(endpoint, target, &params).await?;
        Ok(SeriesResponse::classify(body).into_normalized())
    }
}

impl_endpoint_base!(TrafficEndpoints);
