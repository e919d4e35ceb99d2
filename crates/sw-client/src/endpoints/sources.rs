//! Sources endpoints: social referring sites and organic search keywords.

use super::{impl_endpoint_base, EndpointBase, SharedRateLimiter};
use crate::transport::Transport;
use std::sync::Arc;
use sw_core::{Endpoint, Result};
use sw_models::{Normalized, OrganicKeywordsResponse, SocialReferralsResponse};
use tracing::instrument;

/// Sources endpoints for referral and keyword data
pub struct SourcesEndpoints {
    transport: Arc<Transport>,
    rate_limiter: SharedRateLimiter,
}

impl SourcesEndpoints {
    /// Create a new sources endpoints instance
    pub fn new(transport: Arc<Transport>, rate_limiter: SharedRateLimiter) -> Self {
        Self { transport, rate_limiter }
    }

    /// Get the social referral breakdown for a site
    ///
    /// The success payload keeps the server's `SocialSources`, `StartDate`,
    /// and `EndDate` fields as-is.
    ///
    /// # Arguments
    ///
    /// * `target` - The site identifier (e.g., "example.com"), not validated
    #[instrument(skip(self), fields(target))]
    pub async fn social_referrals(&self, target: &str) -> Result<Normalized> {
        self.wait_for_rate_limit().await?;

        let body = self.transport.get(Endpoint::SocialReferrals, target, &[]).await?;
        Ok(SocialReferralsResponse::classify(body).into_normalized())
    }

    /// Get one page of organic search keywords for a site
    ///
    /// The success payload is the decoded body verbatim; only the failure
    /// envelopes are normalized. Query order is fixed: start, end, md, page,
    /// UserKey.
    ///
    /// # Arguments
    ///
    /// * `target` - The site identifier
    /// * `page` - Result page, 1-based on the server side
    /// * `start` - Start period, `MM-YYYY`
    /// * `end` - End period, `MM-YYYY`
    /// * `md` - Month-day date formatting in the response
    #[instrument(skip(self), fields(target, page, start, end))]
    pub async fn organic_search_keywords(
        &self,
        target: &str,
        page: u32,
        start: &str,
        end: &str,
        md: bool,
    ) -> Result<Normalized> {
        self.wait_for_rate_limit().await?;

        let params = [
            ("start", start.to_string()),
            ("end", end.to_string()),
            ("md", md.to_string()),
            ("page", page.to_string()),
        ];

        let body = self.transport.get(Endpoint::OrganicSearchKeywords, target, &params).await?;
        Ok(OrganicKeywordsResponse::classify(body).into_normalized())
    }
}

impl_endpoint_base!(SourcesEndpoints);
