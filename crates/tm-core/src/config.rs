//! Configuration management for the Token Metrics client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Token Metrics client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// Token Metrics API key (`tm-...`)
  pub api_key: String,

  /// Client-side rate limit (requests per minute)
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for the Token Metrics API
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  ///
  /// A `.env` file in the working directory is honoured when present.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("TOKEN_METRICS_API_KEY")
      .map_err(|_| Error::ApiKey("TOKEN_METRICS_API_KEY not set".to_string()))?;

    if api_key.trim().is_empty() {
      return Err(Error::ApiKey("TOKEN_METRICS_API_KEY is empty".to_string()));
    }

    let rate_limit = env::var("TM_RATE_LIMIT")
      .unwrap_or_else(|_| crate::DEFAULT_RATE_LIMIT.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid TM_RATE_LIMIT".to_string()))?;

    let timeout_secs = env::var("TM_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid TM_TIMEOUT_SECS".to_string()))?;

    let base_url = env::var("TM_BASE_URL").unwrap_or_else(|_| crate::TOKEN_METRICS_BASE_URL.to_string());
    url::Url::parse(&base_url).map_err(|e| Error::Config(format!("Invalid TM_BASE_URL: {}", e)))?;

    Ok(Config { api_key, rate_limit, timeout_secs, base_url })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      base_url: crate::TOKEN_METRICS_BASE_URL.to_string(),
    }
  }

  /// Point the config at another server, e.g. a mock in tests
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// API key with everything but the `tm-` prefix and last four characters hidden
  pub fn masked_api_key(&self) -> String {
    let key = self.api_key.as_str();
    if key.len() <= 8 {
      return "*".repeat(key.len());
    }
    let tail = &key[key.len() - 4..];
    let head = if key.starts_with("tm-") { "tm-" } else { "" };
    format!("{}{}{}", head, "*".repeat(key.len() - head.len() - 4), tail)
  }
}

impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &self.masked_api_key())
      .field("rate_limit", &self.rate_limit)
      .field("timeout_secs", &self.timeout_secs)
      .field("base_url", &self.base_url)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_from_env() {
    env::set_var("TOKEN_METRICS_API_KEY", "tm-test-key-0000");
    env::remove_var("TM_RATE_LIMIT");
    env::remove_var("TM_BASE_URL");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "tm-test-key-0000");
    assert_eq!(config.rate_limit, crate::DEFAULT_RATE_LIMIT);
    assert_eq!(config.base_url, crate::TOKEN_METRICS_BASE_URL);
  }

  #[test]
  fn test_default_with_key() {
    let config = Config::default_with_key("tm-abc".to_string());
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.base_url, "https://api.tokenmetrics.com");
  }

  #[test]
  fn test_debug_masks_key() {
    let config = Config::default_with_key("tm-12345678-aaaa-bbbb-cccc-0123456789ab".to_string());
    let debug = format!("{:?}", config);
    assert!(!debug.contains("12345678-aaaa"));
    assert!(debug.contains("tm-"));
    assert!(debug.contains("89ab"));
  }

  #[test]
  fn test_short_key_fully_masked() {
    let config = Config::default_with_key("abc".to_string());
    assert_eq!(config.masked_api_key(), "***");
  }
}
