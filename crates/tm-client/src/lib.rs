//! # tm-client
//!
//! Async Rust client for the Token Metrics v2 crypto data API.
//!
//! ## Features
//!
//! - **Typed**: every endpoint returns models from tm-models
//! - **Rate limited**: one client-side limiter shared by all endpoint groups
//! - **Checked**: query builders are validated before anything is sent
//! - **Charts**: chart endpoints fill in their documented defaults
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tm_client::{ChartQuery, TokenFilter, TokenMetricsClient, TokensQuery};
//! use tm_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TokenMetricsClient::new(Config::from_env()?)?;
//!
//!     let tokens = client.tokens().tokens(&TokensQuery::new(TokenFilter::new().with_symbol("BTC"))).await?;
//!     let btc = tokens.data.first().map(|t| t.token_id).unwrap_or(3375);
//!
//!     let chart = client.charts().token_details_price_charts(&ChartQuery::for_token(btc)).await?;
//!     println!("{:?}", chart.url());
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! All methods return [`tm_core::Result`]. HTTP 400 becomes
//! [`Error::Api`], 401/403 become [`Error::ApiKey`] and 429 becomes
//! [`Error::RateLimit`]. Nothing is retried.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::TokenMetricsClient;
pub use tm_core::{ChartScale, Config, Endpoint, Error, MarketPerspective, Result, SignalFilter, TimeFrame};
pub use tm_models::*;

// Re-export endpoint groups for direct access if needed
pub use endpoints::{
  ai::AiEndpoints, analytics::AnalyticsEndpoints, charts::ChartsEndpoints, grades::GradesEndpoints,
  indices::IndicesEndpoints, market::MarketEndpoints, research::ResearchEndpoints,
  sentiment::SentimentEndpoints, signals::SignalsEndpoints, tokens::TokensEndpoints, EndpointBase,
  SharedRateLimiter,
};
