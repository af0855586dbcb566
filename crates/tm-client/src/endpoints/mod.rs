//! Endpoint groups and the request plumbing they share

pub mod ai;
pub mod analytics;
pub mod charts;
pub mod grades;
pub mod indices;
pub mod market;
pub mod research;
pub mod sentiment;
pub mod signals;
pub mod tokens;

use crate::transport::Transport;
use governor::{
  clock::DefaultClock,
  middleware::NoOpMiddleware,
  state::{InMemoryState, NotKeyed},
  RateLimiter,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tm_core::{Endpoint, Error, ResponseKind, Result};
use tm_models::{ApiResponse, ChartQuery, ChartResponse, RequestParams};

/// Rate limiter shared by the client and every endpoint group
pub type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Wait for rate limit before making a request
  async fn wait_for_rate_limit(&self) -> Result<()>;

  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;

  /// Validate `query`, wait for the limiter and GET a data endpoint
  async fn fetch_data<T, Q>(&self, endpoint: Endpoint, query: &Q) -> Result<ApiResponse<T>>
  where
    T: DeserializeOwned,
    Q: RequestParams + ?Sized,
  {
    query.validate()?;
    self.wait_for_rate_limit().await?;
    self.transport().get(endpoint, query.params()).await
  }

  /// Resolve chart defaults, wait for the limiter and GET a chart endpoint
  async fn fetch_chart(&self, endpoint: Endpoint, query: &ChartQuery) -> Result<ChartResponse> {
    if endpoint.response_kind() != ResponseKind::Chart {
      return Err(Error::invalid("endpoint", format!("{} does not return a chart", endpoint)));
    }
    let params = query.params_for(endpoint)?;
    self.wait_for_rate_limit().await?;
    self.transport().get(endpoint, params).await
  }
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      async fn wait_for_rate_limit(&self) -> Result<()> {
        self.rate_limiter.until_ready().await;
        Ok(())
      }

      fn transport(&self) -> &Arc<Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

#[cfg(test)]
mod tests {
  use super::*;
  use governor::Quota;
  use std::num::NonZeroU32;

  struct Group {
    transport: Arc<Transport>,
    rate_limiter: SharedRateLimiter,
  }

  impl_endpoint_base!(Group);

  fn group() -> Group {
    let quota = Quota::per_minute(NonZeroU32::new(60).unwrap());
    Group { transport: Arc::new(Transport::new_mock()), rate_limiter: Arc::new(RateLimiter::direct(quota)) }
  }

  #[test]
  fn test_group_shares_transport() {
    let group = group();
    assert_eq!(group.transport().base_url(), "https://mock.tokenmetrics.com");
  }

  #[tokio::test]
  async fn test_fetch_chart_rejects_data_endpoint() {
    let result = group().fetch_chart(Endpoint::TraderGrades, &ChartQuery::new()).await;
    assert!(matches!(result, Err(Error::InvalidParameter { name: "endpoint", .. })));
  }

  #[tokio::test]
  async fn test_fetch_data_validates_before_sending() {
    let query = tm_models::PageQuery::new().with_page(-1);
    let result: Result<ApiResponse<serde_json::Value>> = group().fetch_data(Endpoint::Sentiments, &query).await;
    assert!(matches!(result, Err(Error::InvalidParameter { name: "page", .. })));
  }
}
