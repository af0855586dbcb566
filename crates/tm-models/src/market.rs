//! Whole-market metrics

use serde::{Deserialize, Serialize};
use tm_core::types::SignalFilter;

/// Row of `/v2/market-metrics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketMetrics {
  #[serde(rename = "DATE")]
  pub date: String,

  /// Total crypto market cap in USD
  #[serde(rename = "TOTAL_CRYPTO_MCAP")]
  pub total_crypto_mcap: Option<f64>,

  /// Share of tokens with a high TM grade, in percent
  #[serde(rename = "TM_GRADE_PERC_HIGH_COINS")]
  pub tm_grade_perc_high_coins: Option<f64>,

  #[serde(rename = "TM_GRADE_SIGNAL")]
  pub tm_grade_signal: Option<i64>,

  #[serde(rename = "LAST_TM_GRADE_SIGNAL")]
  pub last_tm_grade_signal: Option<i64>,
}

impl MarketMetrics {
  pub fn signal(&self) -> SignalFilter {
    SignalFilter::from_value(self.tm_grade_signal.unwrap_or(0))
  }

  /// Most recent non-zero market signal
  pub fn last_signal(&self) -> SignalFilter {
    SignalFilter::from_value(self.last_tm_grade_signal.unwrap_or(0))
  }
}

crate::common::impl_dated!(MarketMetrics, date);

#[cfg(test)]
mod tests {
  use super::*;
  use tm_core::test_utils::assert_some_approx;

  #[test]
  fn test_market_metrics() {
    let json = r#"{"DATE": "2025-05-24", "TOTAL_CRYPTO_MCAP": 3512898000000, "TM_GRADE_PERC_HIGH_COINS": 52, "TM_GRADE_SIGNAL": 0, "LAST_TM_GRADE_SIGNAL": 1}"#;
    let row: MarketMetrics = serde_json::from_str(json).unwrap();
    assert_some_approx(row.total_crypto_mcap, 3_512_898_000_000.0);
    assert_eq!(row.signal(), SignalFilter::NoSignal);
    assert_eq!(row.last_signal(), SignalFilter::Bullish);
  }
}
