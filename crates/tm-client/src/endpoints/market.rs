//! Market-wide metrics

use super::{impl_endpoint_base, EndpointBase, SharedRateLimiter};
use crate::transport::Transport;
use std::sync::Arc;
use tm_core::{Endpoint, Result};
use tm_models::{ApiResponse, DateRangeQuery, MarketMetrics};
use tracing::instrument;

/// Market metrics endpoints
pub struct MarketEndpoints {
  transport: Arc<Transport>,
  rate_limiter: SharedRateLimiter,
}

impl MarketEndpoints {
  /// Create a new market endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: SharedRateLimiter) -> Self {
    Self { transport, rate_limiter }
  }

  /// Bullish/bearish share of the market and its aggregate signal per day
  #[instrument(skip(self))]
  pub async fn market_metrics(&self, query: &DateRangeQuery) -> Result<ApiResponse<MarketMetrics>> {
    self.fetch_data(Endpoint::MarketMetrics, query).await
  }
}

impl_endpoint_base!(MarketEndpoints);
