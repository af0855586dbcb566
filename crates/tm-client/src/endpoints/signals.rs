//! Trading signals and trend indicators

use super::{impl_endpoint_base, EndpointBase, SharedRateLimiter};
use crate::transport::Transport;
use std::sync::Arc;
use tm_core::{Endpoint, Result};
use tm_models::{ApiResponse, TradingSignal, TradingSignalsQuery, TrendIndicator, TrendIndicatorsQuery};
use tracing::instrument;

/// Signal endpoints
pub struct SignalsEndpoints {
  transport: Arc<Transport>,
  rate_limiter: SharedRateLimiter,
}

impl SignalsEndpoints {
  /// Create a new signals endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: SharedRateLimiter) -> Self {
    Self { transport, rate_limiter }
  }

  /// Long/short signals, optionally restricted to one direction
  #[instrument(skip(self))]
  pub async fn trading_signals(&self, query: &TradingSignalsQuery) -> Result<ApiResponse<TradingSignal>> {
    self.fetch_data(Endpoint::TradingSignals, query).await
  }

  /// Daily trend direction per token
  #[instrument(skip(self))]
  pub async fn all_trend_indicators(&self, query: &TrendIndicatorsQuery) -> Result<ApiResponse<TrendIndicator>> {
    self.fetch_data(Endpoint::AllTrendIndicators, query).await
  }
}

impl_endpoint_base!(SignalsEndpoints);
