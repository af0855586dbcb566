//! Market sentiment

use super::{impl_endpoint_base, EndpointBase, SharedRateLimiter};
use crate::transport::Transport;
use std::sync::Arc;
use tm_core::{Endpoint, Result};
use tm_models::{ApiResponse, PageQuery, Sentiment};
use tracing::instrument;

/// Sentiment endpoints
pub struct SentimentEndpoints {
  transport: Arc<Transport>,
  rate_limiter: SharedRateLimiter,
}

impl SentimentEndpoints {
  /// Create a new sentiment endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: SharedRateLimiter) -> Self {
    Self { transport, rate_limiter }
  }

  /// Hourly sentiment grades from social and news sources
  #[instrument(skip(self))]
  pub async fn sentiments(&self, query: &PageQuery) -> Result<ApiResponse<Sentiment>> {
    self.fetch_data(Endpoint::Sentiments, query).await
  }
}

impl_endpoint_base!(SentimentEndpoints);
