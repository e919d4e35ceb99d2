//! HTTP transport layer for SimilarWeb API requests

use reqwest::Client;
use serde_json::Value;
use std::sync::Mutex;
use std::time::Duration;
use sw_core::{Config, Endpoint, Error, Result, API_VERSION};
use tracing::{debug, error, instrument};

/// HTTP transport for the SimilarWeb Site endpoint family.
///
/// Builds request URLs by literal, order-sensitive string concatenation (the
/// upstream API expects unencoded targets and parameters in a fixed order),
/// performs exactly one GET per call, and decodes the body as JSON whatever
/// the HTTP status, since error envelopes arrive with non-2xx statuses.
pub struct Transport {
    client: Client,
    base_url: String,
    api_key: String,
    last_url: Mutex<String>,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("sw-client/0.1.0")
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            last_url: Mutex::new(String::new()),
        })
    }

    /// Create a mock transport for testing
    #[cfg(test)]
    pub fn new_mock() -> Self {
        Self {
            client: Client::new(),
            base_url: "http://mock.similarweb.com/Site".to_string(),
            api_key: "test_key".to_string(),
            last_url: Mutex::new(String::new()),
        }
    }

    /// Make a GET request against one SimilarWeb endpoint
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The endpoint path segment to call
    /// * `target` - The site identifier, substituted into the URL unvalidated
    /// * `params` - Ordered query parameters; `UserKey` is appended last
    ///
    /// # Returns
    ///
    /// The decoded JSON body. Transport failures surface as `Error::Http`
    /// and undecodable bodies as `Error::Parse`; server-reported API
    /// failures come back as ordinary JSON for the classifiers upstream.
    #[instrument(skip(self), fields(endpoint = %endpoint, target = %target))]
    pub async fn get(
        &self,
        endpoint: Endpoint,
        target: &str,
        params: &[(&str, String)],
    ) -> Result<Value> {
        let url = self.build_url(endpoint, target, params);
        debug!("Making request to: {}", url);
        self.record_last_url(&url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

        debug!("Status {} with {} byte body", status, text.len());

        serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse JSON response: {}", e);
            let snippet: String = text.chars().take(200).collect();
            Error::Parse(format!("Failed to parse response: {}. Response: {}", e, snippet))
        })
    }

    /// Build the full URL for an API request
    ///
    /// Literal concatenation only: no percent-encoding, parameter order as
    /// given, `UserKey` always last. A target carrying its own scheme passes
    /// through unescaped and reproduces the upstream malformed-URL envelope.
    fn build_url(&self, endpoint: Endpoint, target: &str, params: &[(&str, String)]) -> String {
        let mut query = String::new();
        for (key, value) in params {
            query.push_str(key);
            query.push('=');
            query.push_str(value);
            query.push('&');
        }

        format!(
            "{}/{}/{}/{}?{}UserKey={}",
            self.base_url, target, API_VERSION, endpoint, query, self.api_key
        )
    }

    fn record_last_url(&self, url: &str) {
        let mut guard = self.last_url.lock().unwrap_or_else(|e| e.into_inner());
        guard.clear();
        guard.push_str(url);
    }

    /// The full URL of the most recent request
    ///
    /// Debug affordance only: overwritten on every call and unreliable when
    /// one transport is shared across concurrent calls. Empty until the
    /// first request.
    pub fn last_url(&self) -> String {
        self.last_url.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport").field("base_url", &self.base_url).finish()
    }
}
