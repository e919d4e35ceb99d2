pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// The SimilarWeb v1 endpoints supported by this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Traffic family
  TrafficOverview,
  Visits,
  Pageviews,
  VisitDuration,
  BounceRate,

  // Sources family
  SocialReferrals,
  OrganicSearchKeywords,
}

// Implement Display trait for Endpoint. The output is the literal path
// segment the upstream API expects, casing included.
impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      // Traffic family
      Endpoint::TrafficOverview => write!(f, "traffic"),
      Endpoint::Visits => write!(f, "visits"),
      Endpoint::Pageviews => write!(f, "pageviews"),
      Endpoint::VisitDuration => write!(f, "visitduration"),
      Endpoint::BounceRate => write!(f, "bouncerate"),

      // Sources family
      Endpoint::SocialReferrals => write!(f, "SocialReferringSites"),
      Endpoint::OrganicSearchKeywords => write!(f, "orgsearch"),
    }
  }
}

/// Time-series bucketing codes accepted by the `gr` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
  Daily,
  Weekly,
  Monthly,
}

impl std::fmt::Display for Granularity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Granularity::Daily => write!(f, "daily"),
      Granularity::Weekly => write!(f, "weekly"),
      Granularity::Monthly => write!(f, "monthly"),
    }
  }
}

/// Base URL for the SimilarWeb Site API. The target site identifier is
/// appended as the next path segment, followed by [`API_VERSION`].
pub const SIMILARWEB_BASE_URL: &str = "http://api.similarweb.com/Site";

/// SimilarWeb API version path segment
pub const API_VERSION: &str = "v1";

/// Default rate limit, requests per minute
pub const DEFAULT_RATE_LIMIT: u32 = 60;
