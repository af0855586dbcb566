/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The top-level client owning the transport and the shared rate limiter

use crate::endpoints::{
  ai::AiEndpoints, analytics::AnalyticsEndpoints, charts::ChartsEndpoints, grades::GradesEndpoints,
  indices::IndicesEndpoints, market::MarketEndpoints, research::ResearchEndpoints,
  sentiment::SentimentEndpoints, signals::SignalsEndpoints, tokens::TokensEndpoints, SharedRateLimiter,
};
use crate::transport::Transport;
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use tm_core::{Config, Endpoint, Error, HttpMethod, Result};
use tm_models::QueryParams;
use tracing::debug;

/// Main Token Metrics API client
///
/// Groups the v2 endpoints by topic. Every group shares one transport and
/// one rate limiter, so cloning accessors is cheap and the request budget is
/// global to the client.
///
/// # Examples
///
/// ```rust,no_run
/// use tm_client::{TokenFilter, TokenMetricsClient, TraderGradesQuery};
/// use tm_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TokenMetricsClient::new(Config::from_env()?)?;
///
///     let query = TraderGradesQuery::new(TokenFilter::new().with_symbol("BTC"));
///     let grades = client.grades().trader_grades(&query).await?;
///     println!("{} grades", grades.len());
///
///     let chart = client.charts().market_bull_and_bear_charts().await?;
///     println!("{:?}", chart.url());
///     Ok(())
/// }
/// ```
pub struct TokenMetricsClient {
  rate_limiter: SharedRateLimiter,
  transport: Arc<Transport>,
  rate_limit: u32,
}

impl TokenMetricsClient {
  /// Create a new client
  ///
  /// A zero `rate_limit` in `config` falls back to
  /// [`tm_core::DEFAULT_RATE_LIMIT`] requests per minute.
  ///
  /// # Errors
  ///
  /// Returns an error if the base URL is invalid or the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let quota = Quota::per_minute(effective_rate_limit(config.rate_limit));
    Self::with_rate_limiter(config, Arc::new(RateLimiter::direct(quota)))
  }

  /// Create a client sharing an existing rate limiter
  ///
  /// Useful when several clients draw on the same API key.
  pub fn with_rate_limiter(config: Config, rate_limiter: SharedRateLimiter) -> Result<Self> {
    if config.api_key.trim().is_empty() {
      return Err(Error::ApiKey("API key is empty".to_string()));
    }
    let transport = Arc::new(Transport::new(&config)?);
    Ok(Self { transport, rate_limiter, rate_limit: effective_rate_limit(config.rate_limit).get() })
  }

  /// Token catalogue, prices and OHLCV
  pub fn tokens(&self) -> TokensEndpoints {
    TokensEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Trader and investor grades
  pub fn grades(&self) -> GradesEndpoints {
    GradesEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Trading signals and trend indicators
  pub fn signals(&self) -> SignalsEndpoints {
    SignalsEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Forecasts, support/resistance, quantmetrics, scenarios and correlation
  pub fn analytics(&self) -> AnalyticsEndpoints {
    AnalyticsEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Market sentiment
  pub fn sentiment(&self) -> SentimentEndpoints {
    SentimentEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// AI reports and crypto investors
  pub fn research(&self) -> ResearchEndpoints {
    ResearchEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Trader, investor and sector indices
  pub fn indices(&self) -> IndicesEndpoints {
    IndicesEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Market-wide metrics
  pub fn market(&self) -> MarketEndpoints {
    MarketEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Rendered chart URLs
  pub fn charts(&self) -> ChartsEndpoints {
    ChartsEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// TMAI chat assistant
  pub fn ai(&self) -> AiEndpoints {
    AiEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// GET any query endpoint and return the untyped JSON body
  ///
  /// Parameters still go through the endpoint's accepted and required lists.
  pub async fn raw(&self, endpoint: Endpoint, params: QueryParams) -> Result<serde_json::Value> {
    if endpoint.method() != HttpMethod::Get {
      return Err(Error::invalid("endpoint", format!("{} only accepts POST", endpoint)));
    }
    debug!("Raw request to {} with {} params", endpoint, params.len());
    self.wait_for_rate_limit().await?;
    self.transport.get(endpoint, params).await
  }

  /// Requests per minute allowed by the client's limiter
  pub fn rate_limit(&self) -> u32 {
    self.rate_limit
  }

  /// Wait for rate limit to allow next request
  ///
  /// Endpoints already do this; call it directly only when pacing other work
  /// against the same budget.
  pub async fn wait_for_rate_limit(&self) -> Result<()> {
    self.rate_limiter.until_ready().await;
    Ok(())
  }
}

/// Configured requests per minute, with 0 meaning [`tm_core::DEFAULT_RATE_LIMIT`]
fn effective_rate_limit(configured: u32) -> NonZeroU32 {
  NonZeroU32::new(configured)
    .or_else(|| NonZeroU32::new(tm_core::DEFAULT_RATE_LIMIT))
    .unwrap_or(NonZeroU32::MIN)
}

impl std::fmt::Debug for TokenMetricsClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TokenMetricsClient")
      .field("transport", &self.transport)
      .field("rate_limiter", &"RateLimiter")
      .field("rate_limit", &self.rate_limit)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config(rate_limit: u32) -> Config {
    Config {
      api_key: "tm-test-key".to_string(),
      rate_limit,
      timeout_secs: 30,
      base_url: tm_core::TOKEN_METRICS_BASE_URL.to_string(),
    }
  }

  #[test]
  fn test_client_creation() {
    let client = TokenMetricsClient::new(config(60)).expect("Failed to create client");
    assert_eq!(client.rate_limit(), 60);
  }

  #[test]
  fn test_zero_rate_limit_falls_back() {
    let client = TokenMetricsClient::new(config(0)).expect("Failed to create client");
    assert_eq!(client.rate_limit(), tm_core::DEFAULT_RATE_LIMIT);
  }

  #[test]
  fn test_shared_limiter_zero_rate_limit_falls_back() {
    let quota = Quota::per_minute(NonZeroU32::new(10).unwrap());
    let limiter = Arc::new(RateLimiter::direct(quota));
    let client = TokenMetricsClient::with_rate_limiter(config(0), limiter).expect("Failed to create client");
    assert_eq!(client.rate_limit(), tm_core::DEFAULT_RATE_LIMIT);
  }

  #[test]
  fn test_empty_key_rejected() {
    let mut config = config(60);
    config.api_key = " ".to_string();
    assert!(matches!(TokenMetricsClient::new(config), Err(Error::ApiKey(_))));
  }

  #[test]
  fn test_invalid_base_url() {
    let config = config(60).with_base_url("not a url");
    assert!(matches!(TokenMetricsClient::new(config), Err(Error::Config(_))));
  }

  #[test]
  fn test_debug_hides_key() {
    let client = TokenMetricsClient::new(config(60)).unwrap();
    assert!(!format!("{:?}", client).contains("tm-test-key"));
  }

  #[tokio::test]
  async fn test_raw_rejects_post_endpoint() {
    let client = TokenMetricsClient::new(config(60)).unwrap();
    let result = client.raw(Endpoint::Tmai, QueryParams::new()).await;
    assert!(matches!(result, Err(Error::InvalidParameter { name: "endpoint", .. })));
  }
}
