//! Trader and investor grades

use super::{impl_endpoint_base, EndpointBase, SharedRateLimiter};
use crate::transport::Transport;
use std::sync::Arc;
use tm_core::{Endpoint, Result};
use tm_models::{ApiResponse, InvestorGrade, InvestorGradesQuery, TraderGrade, TraderGradesQuery};
use tracing::instrument;

/// Grade endpoints
pub struct GradesEndpoints {
  transport: Arc<Transport>,
  rate_limiter: SharedRateLimiter,
}

impl GradesEndpoints {
  /// Create a new grades endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: SharedRateLimiter) -> Self {
    Self { transport, rate_limiter }
  }

  /// Short-term trader grades with their technical and quant components
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use tm_client::{TokenMetricsClient, TokenFilter, TraderGradesQuery};
  /// # async fn run(client: TokenMetricsClient) -> tm_client::Result<()> {
  /// let query = TraderGradesQuery::new(TokenFilter::new().with_symbol("BTC")).with_min_grade(60.0);
  /// let grades = client.grades().trader_grades(&query).await?;
  /// for grade in &grades.data {
  ///     println!("{} {:?}", grade.token_symbol, grade.tm_trader_grade);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn trader_grades(&self, query: &TraderGradesQuery) -> Result<ApiResponse<TraderGrade>> {
    self.fetch_data(Endpoint::TraderGrades, query).await
  }

  /// Long-term investor grades
  #[instrument(skip(self))]
  pub async fn investor_grades(&self, query: &InvestorGradesQuery) -> Result<ApiResponse<InvestorGrade>> {
    self.fetch_data(Endpoint::InvestorGrades, query).await
  }
}

impl_endpoint_base!(GradesEndpoints);
