//! AI research reports and crypto investor profiles

use crate::common::string_or_number;
use serde::{Deserialize, Serialize};

/// Row of `/v2/ai-reports`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiReport {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  /// Markdown
  #[serde(rename = "INVESTMENT_ANALYSIS_POINTER")]
  pub investment_analysis_pointer: Option<String>,

  #[serde(rename = "INVESTMENT_ANALYSIS")]
  pub investment_analysis: Option<String>,

  #[serde(rename = "DEEP_DIVE")]
  pub deep_dive: Option<String>,

  #[serde(rename = "CODE_REVIEW")]
  pub code_review: Option<String>,
}

/// Row of `/v2/crypto-investors`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoInvestor {
  #[serde(rename = "INVESTOR_NAME")]
  pub investor_name: String,

  #[serde(rename = "INVESTOR_WEBSITE")]
  pub investor_website: Option<String>,

  #[serde(rename = "INVESTOR_TWITTER")]
  pub investor_twitter: Option<String>,

  /// Funding rounds joined, served as text
  #[serde(rename = "ROUND_COUNT", default, deserialize_with = "string_or_number")]
  pub round_count: Option<String>,

  #[serde(rename = "ROI_AVERAGE")]
  pub roi_average: Option<f64>,

  #[serde(rename = "ROI_MEDIAN")]
  pub roi_median: Option<f64>,
}

impl CryptoInvestor {
  pub fn rounds(&self) -> Option<u32> {
    self.round_count.as_deref()?.trim().parse().ok()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::ApiResponse;

  #[test]
  fn test_ai_report() {
    let json = r##"{"TOKEN_ID": 10430, "TOKEN_SYMBOL": "GHST", "TOKEN_NAME": "Aavegotchi", "INVESTMENT_ANALYSIS_POINTER": "# Aavegotchi | Revolutionizing Play-to-Earn Gaming | Investm...", "INVESTMENT_ANALYSIS": "# Aavegotchi | Revolutionizing Play-to-Earn Gaming | Investm...", "DEEP_DIVE": "# Aavegotchi | Play-to-Earn NFT Revolution | Crypto Deep Div...", "CODE_REVIEW": "# Aavegotchi | DeFi Meets Gaming | Code Review\n\n## Introduct..."}"##;
    let report: AiReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.token_symbol, "GHST");
    assert!(report.code_review.unwrap().contains("## Introduct"));
  }

  #[test]
  fn test_investor_round_count_text() {
    let json = r#"{"success": true, "message": "Data fetched successfully", "length": 2, "data": [{"INVESTOR_NAME": "0x Labs", "INVESTOR_WEBSITE": "https://0x.org/", "INVESTOR_TWITTER": "https://x.com/0xproject", "ROUND_COUNT": "2", "ROI_AVERAGE": -0.79179406, "ROI_MEDIAN": -0.79179406}]}"#;
    let resp: ApiResponse<CryptoInvestor> = serde_json::from_str(json).unwrap();
    assert_eq!(resp.data[0].round_count.as_deref(), Some("2"));
    assert_eq!(resp.data[0].rounds(), Some(2));
  }
}
