#![warn(clippy::all)]

pub mod analytics;
pub mod chat;
pub mod common;
pub mod grades;
pub mod indices;
pub mod market;
pub mod ohlcv;
pub mod requests;
pub mod research;
pub mod sentiment;
pub mod signals;
pub mod tokens;

// Re-export common types for convenience
pub use common::{ApiErrorResponse, ApiResponse, CategoryRef, ChartResponse, ExchangeRef, TokenIcon};

// Re-export all model types
pub use analytics::*;
pub use chat::*;
pub use grades::*;
pub use indices::*;
pub use market::*;
pub use ohlcv::*;
pub use requests::*;
pub use research::*;
pub use sentiment::*;
pub use signals::*;
pub use tokens::*;
