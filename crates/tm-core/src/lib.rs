pub mod config;
pub mod endpoint;
pub mod error;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use endpoint::{AuthHeader, Endpoint, HttpMethod, ResponseKind};
pub use error::{Error, Result};
pub use types::{ChartScale, MarketPerspective, SignalFilter, TimeFrame};

/// Base URL for the Token Metrics API
pub const TOKEN_METRICS_BASE_URL: &str = "https://api.tokenmetrics.com";

/// API rate limits
pub const DEFAULT_RATE_LIMIT: u32 = 60; // requests per minute

/// Request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Token details chart filters for the trader perspective
pub const TOKEN_DETAILS_TRADER_FILTERS: &str = "price,trader_grade,bullish,bearish";

/// Token details chart filters for the investor perspective
pub const TOKEN_DETAILS_INVESTOR_FILTERS: &str = "price,investor_grade";
