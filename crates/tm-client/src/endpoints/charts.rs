//! Chart endpoints
//!
//! Every chart call returns a [`ChartResponse`] carrying the URL of a
//! rendered image. Unset [`ChartQuery`] fields fall back to the defaults
//! the endpoint documents; the token charts need an explicit token id.

use super::{impl_endpoint_base, EndpointBase, SharedRateLimiter};
use crate::transport::Transport;
use std::sync::Arc;
use tm_core::{Endpoint, Result};
use tm_models::{ChartQuery, ChartResponse};
use tracing::instrument;

/// Chart endpoints
pub struct ChartsEndpoints {
  transport: Arc<Transport>,
  rate_limiter: SharedRateLimiter,
}

impl ChartsEndpoints {
  /// Create a new charts endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: SharedRateLimiter) -> Self {
    Self { transport, rate_limiter }
  }

  /// Any chart endpoint by [`Endpoint`]
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use tm_client::{ChartQuery, Endpoint, TimeFrame, TokenMetricsClient};
  /// # async fn run(client: TokenMetricsClient) -> tm_client::Result<()> {
  /// let query = ChartQuery::for_token(3375).with_time_frame(TimeFrame::OneMonth);
  /// let chart = client.charts().chart(Endpoint::TokenDetailsPriceCharts, &query).await?;
  /// if let Some(url) = chart.url() {
  ///     println!("{}", url);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn chart(&self, endpoint: Endpoint, query: &ChartQuery) -> Result<ChartResponse> {
    self.fetch_chart(endpoint, query).await
  }

  /// Price chart of one token with grade or signal overlays
  #[instrument(skip(self))]
  pub async fn token_details_price_charts(&self, query: &ChartQuery) -> Result<ChartResponse> {
    self.fetch_chart(Endpoint::TokenDetailsPriceCharts, query).await
  }

  /// Allocation of the trader or investor index
  #[instrument(skip(self))]
  pub async fn indices_index_allocation_charts(&self, query: &ChartQuery) -> Result<ChartResponse> {
    self.fetch_chart(Endpoint::IndicesIndexAllocationCharts, query).await
  }

  /// Index ROI against BTC and the total market
  #[instrument(skip(self))]
  pub async fn indices_roi_charts(&self, query: &ChartQuery) -> Result<ChartResponse> {
    self.fetch_chart(Endpoint::IndicesRoiCharts, query).await
  }

  /// Bullish versus bearish share of the market
  #[instrument(skip(self))]
  pub async fn market_percent_of_bullish_vs_bearish_charts(&self) -> Result<ChartResponse> {
    self.fetch_chart(Endpoint::MarketPercentOfBullishVsBearishCharts, &ChartQuery::new()).await
  }

  /// Bull and bear market phases
  #[instrument(skip(self))]
  pub async fn market_bull_and_bear_charts(&self) -> Result<ChartResponse> {
    self.fetch_chart(Endpoint::MarketBullAndBearCharts, &ChartQuery::new()).await
  }

  /// Share of bullish grades over the total crypto market
  #[instrument(skip(self))]
  pub async fn market_percent_of_bullish_tm_grades(&self, query: &ChartQuery) -> Result<ChartResponse> {
    self.fetch_chart(Endpoint::MarketPercentOfBullishTmGrades, query).await
  }

  /// Aggregate grade signal over the total crypto market
  #[instrument(skip(self))]
  pub async fn market_tm_grade_signal(&self, query: &ChartQuery) -> Result<ChartResponse> {
    self.fetch_chart(Endpoint::MarketTmGradeSignal, query).await
  }

  /// Altcoin season indicator
  #[instrument(skip(self))]
  pub async fn bitcoin_vs_altcoin_season_charts(&self, query: &ChartQuery) -> Result<ChartResponse> {
    self.fetch_chart(Endpoint::BitcoinVsAltcoinSeasonCharts, query).await
  }

  /// Volatility index with its percentile bands
  #[instrument(skip(self))]
  pub async fn annualized_historical_volatility_charts(&self, query: &ChartQuery) -> Result<ChartResponse> {
    self.fetch_chart(Endpoint::AnnualizedHistoricalVolatilityCharts, query).await
  }

  /// Total, altcoin and BTC market capitalisation
  #[instrument(skip(self))]
  pub async fn total_market_crypto_cap_charts(&self, query: &ChartQuery) -> Result<ChartResponse> {
    self.fetch_chart(Endpoint::TotalMarketCryptoCapCharts, query).await
  }

  /// Daily gainers and losers
  #[instrument(skip(self))]
  pub async fn market_movers_charts(&self, query: &ChartQuery) -> Result<ChartResponse> {
    self.fetch_chart(Endpoint::MarketMoversCharts, query).await
  }

  /// Support and resistance levels of one token on a linear or log axis
  #[instrument(skip(self))]
  pub async fn resistance_and_support_charts(&self, query: &ChartQuery) -> Result<ChartResponse> {
    self.fetch_chart(Endpoint::ResistanceAndSupportCharts, query).await
  }
}

impl_endpoint_base!(ChartsEndpoints);

#[cfg(test)]
mod tests {
  use super::*;
  use governor::{Quota, RateLimiter};
  use std::num::NonZeroU32;
  use tm_core::{Error, TimeFrame};

  fn endpoints() -> ChartsEndpoints {
    let quota = Quota::per_minute(NonZeroU32::new(60).unwrap());
    ChartsEndpoints::new(Arc::new(Transport::new_mock()), Arc::new(RateLimiter::direct(quota)))
  }

  #[tokio::test]
  async fn test_token_chart_requires_token_id() {
    let result = endpoints().token_details_price_charts(&ChartQuery::new()).await;
    assert!(matches!(result, Err(Error::InvalidParameter { name: "token_id", .. })));
  }

  #[tokio::test]
  async fn test_unsupported_time_frame() {
    let query = ChartQuery::new().with_time_frame(TimeFrame::YearToDate);
    let result = endpoints().bitcoin_vs_altcoin_season_charts(&query).await;
    assert!(matches!(result, Err(Error::InvalidParameter { name: "timeFrame", .. })));
  }
}
