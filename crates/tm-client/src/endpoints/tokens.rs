//! Token catalogue, prices and OHLCV candles

use super::{impl_endpoint_base, EndpointBase, SharedRateLimiter};
use crate::transport::Transport;
use std::sync::Arc;
use tm_core::{Endpoint, Error, Result};
use tm_models::{
  ApiResponse, DailyOhlcv, HourlyOhlcv, OhlcvQuery, Token, TokenFilter, TokenPrice, TokensQuery,
  TopMarketCapToken, TopTokensQuery,
};
use tracing::instrument;

/// Token lookup and market data endpoints
pub struct TokensEndpoints {
  transport: Arc<Transport>,
  rate_limiter: SharedRateLimiter,
}

impl TokensEndpoints {
  /// Create a new tokens endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: SharedRateLimiter) -> Self {
    Self { transport, rate_limiter }
  }

  /// List supported tokens with their ids, symbols, categories and contract addresses
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use tm_client::{TokenMetricsClient, TokenFilter, TokensQuery};
  /// # async fn run(client: TokenMetricsClient) -> tm_client::Result<()> {
  /// let query = TokensQuery::new(TokenFilter::new().with_symbols(["BTC", "ETH"]));
  /// for token in client.tokens().tokens(&query).await? {
  ///     println!("{} -> {}", token.token_symbol, token.token_id);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn tokens(&self, query: &TokensQuery) -> Result<ApiResponse<Token>> {
    self.fetch_data(Endpoint::Tokens, query).await
  }

  /// Tokens ranked by market capitalisation
  #[instrument(skip(self))]
  pub async fn top_market_cap_tokens(&self, query: &TopTokensQuery) -> Result<ApiResponse<TopMarketCapToken>> {
    self.fetch_data(Endpoint::TopMarketCapTokens, query).await
  }

  /// Current price for each of `token_ids`
  #[instrument(skip(self))]
  pub async fn price(&self, token_ids: &[i64]) -> Result<ApiResponse<TokenPrice>> {
    if token_ids.is_empty() {
      return Err(Error::invalid("token_id", "at least one token id is required"));
    }
    let filter = TokenFilter::new().with_token_ids(token_ids.iter().copied());
    self.fetch_data(Endpoint::Price, &filter).await
  }

  /// Hourly candles
  #[instrument(skip(self))]
  pub async fn hourly_ohlcv(&self, query: &OhlcvQuery) -> Result<ApiResponse<HourlyOhlcv>> {
    self.fetch_data(Endpoint::HourlyOhlcv, query).await
  }

  /// Daily candles
  #[instrument(skip(self))]
  pub async fn daily_ohlcv(&self, query: &OhlcvQuery) -> Result<ApiResponse<DailyOhlcv>> {
    self.fetch_data(Endpoint::DailyOhlcv, query).await
  }
}

impl_endpoint_base!(TokensEndpoints);

#[cfg(test)]
mod tests {
  use super::*;
  use governor::{Quota, RateLimiter};
  use std::num::NonZeroU32;

  fn endpoints() -> TokensEndpoints {
    let quota = Quota::per_minute(NonZeroU32::new(60).unwrap());
    TokensEndpoints::new(Arc::new(Transport::new_mock()), Arc::new(RateLimiter::direct(quota)))
  }

  #[tokio::test]
  async fn test_price_requires_ids() {
    let result = endpoints().price(&[]).await;
    assert!(matches!(result, Err(Error::InvalidParameter { name: "token_id", .. })));
  }
}
