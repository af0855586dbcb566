//! Trader and investor grades

use crate::common::impl_dated;
use serde::{Deserialize, Serialize};

/// Short-term grade row from `/v2/trader-grades`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraderGrade {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,

  #[serde(rename = "DATE")]
  pub date: String,

  /// Technical analysis component
  #[serde(rename = "TA_GRADE")]
  pub ta_grade: Option<f64>,

  /// Quantitative component
  #[serde(rename = "QUANT_GRADE")]
  pub quant_grade: Option<f64>,

  /// Overall trader grade, 0 to 100
  #[serde(rename = "TM_TRADER_GRADE")]
  pub tm_trader_grade: Option<f64>,

  #[serde(rename = "TM_TRADER_GRADE_24H_PCT_CHANGE")]
  pub tm_trader_grade_24h_pct_change: Option<f64>,
}

/// Long-term grade row from `/v2/investor-grades`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorGrade {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,

  #[serde(rename = "DATE")]
  pub date: String,

  /// Overall investor grade, 0 to 100
  #[serde(rename = "TM_INVESTOR_GRADE")]
  pub tm_investor_grade: Option<f64>,

  #[serde(rename = "TM_INVESTOR_GRADE_7D_PCT_CHANGE")]
  pub tm_investor_grade_7d_pct_change: Option<f64>,

  #[serde(rename = "FUNDAMENTAL_GRADE")]
  pub fundamental_grade: Option<f64>,

  #[serde(rename = "TECHNOLOGY_GRADE")]
  pub technology_grade: Option<f64>,

  #[serde(rename = "VALUATION_GRADE")]
  pub valuation_grade: Option<f64>,

  #[serde(rename = "DEFI_USAGE_SCORE")]
  pub defi_usage_score: Option<f64>,

  #[serde(rename = "COMMUNITY_SCORE")]
  pub community_score: Option<f64>,

  #[serde(rename = "EXCHANGE_SCORE")]
  pub exchange_score: Option<f64>,

  #[serde(rename = "VC_SCORE")]
  pub vc_score: Option<f64>,

  #[serde(rename = "TOKENOMICS_SCORE")]
  pub tokenomics_score: Option<f64>,

  #[serde(rename = "DEFI_SCANNER_SCORE")]
  pub defi_scanner_score: Option<f64>,

  #[serde(rename = "ACTIVITY_SCORE")]
  pub activity_score: Option<f64>,

  #[serde(rename = "SECURITY_SCORE")]
  pub security_score: Option<f64>,

  #[serde(rename = "REPOSITORY_SCORE")]
  pub repository_score: Option<f64>,

  #[serde(rename = "COLLABORATION_SCORE")]
  pub collaboration_score: Option<f64>,
}

impl_dated!(TraderGrade, date);
impl_dated!(InvestorGrade, date);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::ApiResponse;
  use chrono::NaiveDate;
  use tm_core::test_utils::{assert_grade_eq, assert_some_approx};

  #[test]
  fn test_trader_grade() {
    let json = r#"{"success": true, "message": "Data fetched successfully", "length": 10, "data": [{"TOKEN_ID": 3375, "TOKEN_NAME": "Bitcoin", "TOKEN_SYMBOL": "BTC", "DATE": "2025-05-25T00:00:00.000Z", "TA_GRADE": 92.54, "QUANT_GRADE": 62.99, "TM_TRADER_GRADE": 86.63, "TM_TRADER_GRADE_24H_PCT_CHANGE": 0.01}]}"#;
    let resp: ApiResponse<TraderGrade> = serde_json::from_str(json).unwrap();
    let grade = &resp.data[0];
    assert_eq!(grade.token_symbol, "BTC");
    assert_some_approx(grade.tm_trader_grade, 86.63);
    assert_eq!(grade.date().unwrap(), NaiveDate::from_ymd_opt(2025, 5, 25).unwrap());
  }

  #[test]
  fn test_investor_grade_nulls() {
    let json = r#"{"TOKEN_ID": 3455, "TOKEN_NAME": "aelf", "TOKEN_SYMBOL": "ELF", "DATE": "2024-04-29", "TM_INVESTOR_GRADE": 62.83, "TM_INVESTOR_GRADE_7D_PCT_CHANGE": 0.54, "FUNDAMENTAL_GRADE": 75.39, "TECHNOLOGY_GRADE": 74.37, "VALUATION_GRADE": 35.6, "DEFI_USAGE_SCORE": null, "COMMUNITY_SCORE": 6.02, "EXCHANGE_SCORE": 10, "VC_SCORE": null, "TOKENOMICS_SCORE": 10, "DEFI_SCANNER_SCORE": 10, "ACTIVITY_SCORE": 8.16, "SECURITY_SCORE": 4.1, "REPOSITORY_SCORE": 7.8, "COLLABORATION_SCORE": 7.4}"#;
    let grade: InvestorGrade = serde_json::from_str(json).unwrap();
    assert!(grade.defi_usage_score.is_none());
    assert!(grade.vc_score.is_none());
    assert_grade_eq(grade.exchange_score.unwrap(), 10.0);
    assert_eq!(grade.date().unwrap(), NaiveDate::from_ymd_opt(2024, 4, 29).unwrap());
  }
}
