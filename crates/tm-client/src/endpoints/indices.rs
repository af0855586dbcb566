//! Trader, investor and sector indices

use super::{impl_endpoint_base, EndpointBase, SharedRateLimiter};
use crate::transport::Transport;
use std::sync::Arc;
use tm_core::{Endpoint, Result};
use tm_models::{
  ApiResponse, DateRangeQuery, IndexConstituent, IndexHolding, IndexPerformance, IndexQuery, IndexTransaction,
  PageQuery, PerformanceQuery, PerformanceTarget, SectorIndexQuery,
};
use tracing::instrument;

/// Index endpoints
pub struct IndicesEndpoints {
  transport: Arc<Transport>,
  rate_limiter: SharedRateLimiter,
}

impl IndicesEndpoints {
  /// Create a new indices endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: SharedRateLimiter) -> Self {
    Self { transport, rate_limiter }
  }

  /// Trader index portfolios between two rebalance dates
  #[instrument(skip(self))]
  pub async fn trader_indices(&self, query: &DateRangeQuery) -> Result<ApiResponse<IndexConstituent>> {
    self.fetch_data(Endpoint::TraderIndices, query).await
  }

  /// Latest investor index portfolio
  #[instrument(skip(self))]
  pub async fn investor_indices(&self, query: &PageQuery) -> Result<ApiResponse<IndexConstituent>> {
    self.fetch_data(Endpoint::InvestorIndices, query).await
  }

  /// Current weights of the trader or investor index
  #[instrument(skip(self))]
  pub async fn index_holdings(&self, query: &IndexQuery) -> Result<ApiResponse<IndexHolding>> {
    self.fetch_data(Endpoint::IndexHoldings, query).await
  }

  /// Current weights of a named sector index
  #[instrument(skip(self))]
  pub async fn sector_indices_holdings(&self, query: &SectorIndexQuery) -> Result<ApiResponse<IndexHolding>> {
    self.fetch_data(Endpoint::SectorIndicesHoldings, query).await
  }

  /// Cumulative ROI of the trader or investor index
  ///
  /// `query` must be built with [`PerformanceQuery::for_perspective`].
  #[instrument(skip(self))]
  pub async fn indices_performance(&self, query: &PerformanceQuery) -> Result<ApiResponse<IndexPerformance>> {
    self.fetch_data(Endpoint::IndicesPerformance, query).await
  }

  /// Cumulative ROI of a named sector index
  ///
  /// `query` must be built with [`PerformanceQuery::for_sector`].
  #[instrument(skip(self))]
  pub async fn index_specific_performance(&self, query: &PerformanceQuery) -> Result<ApiResponse<IndexPerformance>> {
    self.fetch_data(Endpoint::IndexSpecificPerformance, query).await
  }

  /// Performance of whichever index `query` targets
  pub async fn performance(&self, query: &PerformanceQuery) -> Result<ApiResponse<IndexPerformance>> {
    match query.target {
      PerformanceTarget::Perspective(_) => self.indices_performance(query).await,
      PerformanceTarget::Sector(_) => self.index_specific_performance(query).await,
    }
  }

  /// Rebalancing transactions of the trader or investor index
  #[instrument(skip(self))]
  pub async fn indices_transaction(&self, query: &IndexQuery) -> Result<ApiResponse<IndexTransaction>> {
    self.fetch_data(Endpoint::IndicesTransaction, query).await
  }

  /// Rebalancing transactions of a named sector index
  #[instrument(skip(self))]
  pub async fn sector_index_transaction(&self, query: &SectorIndexQuery) -> Result<ApiResponse<IndexTransaction>> {
    self.fetch_data(Endpoint::SectorIndexTransaction, query).await
  }
}

impl_endpoint_base!(IndicesEndpoints);

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;
  use governor::{Quota, RateLimiter};
  use std::num::NonZeroU32;
  use tm_core::Error;

  fn endpoints() -> IndicesEndpoints {
    let quota = Quota::per_minute(NonZeroU32::new(60).unwrap());
    IndicesEndpoints::new(Arc::new(Transport::new_mock()), Arc::new(RateLimiter::direct(quota)))
  }

  #[tokio::test]
  async fn test_sector_query_on_perspective_endpoint() {
    let start = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2023, 10, 10).unwrap();
    let query = PerformanceQuery::for_sector("meme", start, end);

    let result = endpoints().indices_performance(&query).await;
    assert!(matches!(result, Err(Error::InvalidParameter { name: "type", .. })));
  }

  #[tokio::test]
  async fn test_reversed_window_rejected() {
    let start = NaiveDate::from_ymd_opt(2023, 10, 10).unwrap();
    let end = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
    let query = PerformanceQuery::for_sector("meme", start, end);

    assert!(endpoints().performance(&query).await.is_err());
  }
}
