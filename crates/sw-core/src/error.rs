use thiserror::Error;

/// The main error type for sw-* crates
///
/// Only transport-level failures and undecodable bodies surface here.
/// Server-reported API failures (bad key, unknown target, invalid inputs)
/// are normal values: they normalize into an `{"Error": message}` mapping.
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Parse error for response bodies that are not JSON
  #[error("Parse error: {0}")]
  Parse(String),
}

/// Result type alias for sw-* crates
pub type Result<T> = std::result::Result<T, Error>;
