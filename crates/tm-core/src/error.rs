use thiserror::Error;

/// The main error type for tm-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Missing or rejected API key
  #[error("API key error: {0}")]
  ApiKey(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Date/Time parsing error
  #[error("Date parsing error: {0}")]
  ParseDate(#[from] chrono::ParseError),

  /// A request parameter failed validation before being sent
  #[error("Invalid parameter `{name}`: {reason}")]
  InvalidParameter {
    /// Vendor name of the parameter
    name: &'static str,
    /// Why it was rejected
    reason: String,
  },

  /// API rate limit exceeded
  #[error("Rate limit exceeded: {0}")]
  RateLimit(String),

  /// Error reported by the Token Metrics API itself
  #[error("API error (HTTP {status}): {message}")]
  Api {
    /// HTTP status of the response
    status: u16,
    /// `message` field of the vendor error body
    message: String,
  },

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Parse error for response bodies
  #[error("Parse error: {0}")]
  Parse(String),
}

impl Error {
  /// Shorthand for building an [`Error::InvalidParameter`]
  pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
    Error::InvalidParameter { name, reason: reason.into() }
  }

  /// True when the vendor rejected the request with a 4xx status
  pub fn is_client_error(&self) -> bool {
    matches!(self, Error::Api { status, .. } if (400..500).contains(status))
      || matches!(self, Error::ApiKey(_) | Error::RateLimit(_))
  }
}

/// Result type alias for tm-* crates
pub type Result<T> = std::result::Result<T, Error>;
