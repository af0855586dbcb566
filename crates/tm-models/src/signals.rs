//! Trading signals and trend indicators

use crate::common::impl_dated;
use serde::{Deserialize, Serialize};
use tm_core::types::SignalFilter;

/// Row of `/v2/trading-signals`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,

  #[serde(rename = "DATE")]
  pub date: String,

  /// 1 bullish, -1 bearish, 0 no signal
  #[serde(rename = "TRADING_SIGNAL")]
  pub trading_signal: Option<i64>,

  #[serde(rename = "TOKEN_TREND")]
  pub token_trend: Option<i64>,

  /// Cumulative return of following the signals
  #[serde(rename = "TRADING_SIGNALS_RETURNS")]
  pub trading_signals_returns: Option<f64>,

  /// Cumulative return of buy and hold
  #[serde(rename = "HOLDING_RETURNS")]
  pub holding_returns: Option<f64>,

  /// App slug of the token (served in lower case next to `TM_LINK`)
  #[serde(rename = "tm_link", default)]
  pub tm_slug: Option<String>,

  #[serde(rename = "TM_TRADER_GRADE")]
  pub tm_trader_grade: Option<f64>,

  #[serde(rename = "TM_INVESTOR_GRADE")]
  pub tm_investor_grade: Option<f64>,

  #[serde(rename = "TM_LINK", default)]
  pub tm_link: Option<String>,
}

impl TradingSignal {
  pub fn signal(&self) -> SignalFilter {
    SignalFilter::from_value(self.trading_signal.unwrap_or(0))
  }

  /// Signal strategy return minus buy-and-hold return
  pub fn excess_return(&self) -> Option<f64> {
    Some(self.trading_signals_returns? - self.holding_returns?)
  }
}

/// Row of `/v2/all-trend-indicators`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendIndicator {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "SYMBOL")]
  pub symbol: String,

  #[serde(rename = "DATE")]
  pub date: String,

  /// Indicator name, e.g. `adosc`
  #[serde(rename = "INDICATOR")]
  pub indicator: String,

  #[serde(rename = "TREND")]
  pub trend: i64,
}

impl TrendIndicator {
  pub fn direction(&self) -> SignalFilter {
    SignalFilter::from_value(self.trend)
  }
}

impl_dated!(TradingSignal, date);
impl_dated!(TrendIndicator, date);

#[cfg(test)]
mod tests {
  use super::*;
  use tm_core::test_utils::assert_approx_eq;

  #[test]
  fn test_trading_signal_links() {
    let json = r#"{"TOKEN_ID": 3306, "TOKEN_NAME": "Ethereum", "TOKEN_SYMBOL": "ETH", "DATE": "2025-03-03T00:00:00.000Z", "TRADING_SIGNAL": 0, "TOKEN_TREND": -1, "TRADING_SIGNALS_RETURNS": 1546.0255, "HOLDING_RETURNS": 1732.8483, "tm_link": "ethereum", "TM_TRADER_GRADE": 19.15, "TM_INVESTOR_GRADE": 63.35, "TM_LINK": "https://app.tokenmetrics.com/undefined"}"#;
    let signal: TradingSignal = serde_json::from_str(json).unwrap();
    assert_eq!(signal.signal(), SignalFilter::NoSignal);
    assert_eq!(signal.tm_slug.as_deref(), Some("ethereum"));
    assert_eq!(signal.tm_link.as_deref(), Some("https://app.tokenmetrics.com/undefined"));
    assert_approx_eq(signal.excess_return().unwrap(), -186.8228, 1e-9);
  }

  #[test]
  fn test_trend_indicator() {
    let json = r#"{"TOKEN_ID": 4, "TOKEN_NAME": "Zoidpay", "SYMBOL": "zpay", "DATE": "2023-06-11", "INDICATOR": "adosc", "TREND": -1}"#;
    let row: TrendIndicator = serde_json::from_str(json).unwrap();
    assert_eq!(row.indicator, "adosc");
    assert_eq!(row.direction(), SignalFilter::Bearish);
    assert_eq!(row.date().unwrap().to_string(), "2023-06-11");
  }
}
