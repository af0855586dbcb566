//! Common types used across tm-* crates

pub mod common;

pub use common::{format_date, parse_api_date, ChartScale, MarketPerspective, SignalFilter, TimeFrame};
