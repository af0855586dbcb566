//! AI reports and crypto investor data

use super::{impl_endpoint_base, EndpointBase, SharedRateLimiter};
use crate::transport::Transport;
use std::sync::Arc;
use tm_core::{Endpoint, Result};
use tm_models::{AiReport, ApiResponse, CryptoInvestor, PageQuery, TokenFilter};
use tracing::instrument;

/// Research endpoints
pub struct ResearchEndpoints {
  transport: Arc<Transport>,
  rate_limiter: SharedRateLimiter,
}

impl ResearchEndpoints {
  /// Create a new research endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: SharedRateLimiter) -> Self {
    Self { transport, rate_limiter }
  }

  /// Generated investment analysis, deep dive and code review reports
  #[instrument(skip(self))]
  pub async fn ai_reports(&self, filter: &TokenFilter) -> Result<ApiResponse<AiReport>> {
    self.fetch_data(Endpoint::AiReports, filter).await
  }

  /// Crypto funds and their funding rounds
  #[instrument(skip(self))]
  pub async fn crypto_investors(&self, query: &PageQuery) -> Result<ApiResponse<CryptoInvestor>> {
    self.fetch_data(Endpoint::CryptoInvestors, query).await
  }
}

impl_endpoint_base!(ResearchEndpoints);
