//! Forecasts, support/resistance, quant metrics, scenarios and correlation
//!
//! All of these take a plain [`TokenFilter`]; fields an endpoint does not
//! understand are dropped by the transport before the request is sent.

use super::{impl_endpoint_base, EndpointBase, SharedRateLimiter};
use crate::transport::Transport;
use std::sync::Arc;
use tm_core::{Endpoint, Result};
use tm_models::{
  ApiResponse, Correlation, PricePrediction, Quantmetrics, ResistanceSupport, ScenarioAnalysis, TokenFilter,
};
use tracing::instrument;

/// Analytics endpoints
pub struct AnalyticsEndpoints {
  transport: Arc<Transport>,
  rate_limiter: SharedRateLimiter,
}

impl AnalyticsEndpoints {
  /// Create a new analytics endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: SharedRateLimiter) -> Self {
    Self { transport, rate_limiter }
  }

  /// Short-horizon price forecasts
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use tm_client::{TokenMetricsClient, TokenFilter};
  /// # async fn run(client: TokenMetricsClient) -> tm_client::Result<()> {
  /// let predictions = client.analytics().price_prediction(&TokenFilter::new().with_symbol("ETH")).await?;
  /// for prediction in &predictions.data {
  ///     if let Some(week) = prediction.forecast_for(7) {
  ///         println!("{}: {:.2} .. {:.2}", prediction.token_name, week.forecast_lower, week.forecast_upper);
  ///     }
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn price_prediction(&self, filter: &TokenFilter) -> Result<ApiResponse<PricePrediction>> {
    self.fetch_data(Endpoint::PricePrediction, filter).await
  }

  /// Historical support and resistance levels
  #[instrument(skip(self))]
  pub async fn resistance_support(&self, filter: &TokenFilter) -> Result<ApiResponse<ResistanceSupport>> {
    self.fetch_data(Endpoint::ResistanceSupport, filter).await
  }

  /// Risk and return statistics
  #[instrument(skip(self))]
  pub async fn quantmetrics(&self, filter: &TokenFilter) -> Result<ApiResponse<Quantmetrics>> {
    self.fetch_data(Endpoint::Quantmetrics, filter).await
  }

  /// Price outcomes under total crypto market cap scenarios
  #[instrument(skip(self))]
  pub async fn scenario_analysis(&self, filter: &TokenFilter) -> Result<ApiResponse<ScenarioAnalysis>> {
    self.fetch_data(Endpoint::ScenarioAnalysis, filter).await
  }

  /// Most correlated tokens
  #[instrument(skip(self))]
  pub async fn correlation(&self, filter: &TokenFilter) -> Result<ApiResponse<Correlation>> {
    self.fetch_data(Endpoint::Correlation, filter).await
  }
}

impl_endpoint_base!(AnalyticsEndpoints);
