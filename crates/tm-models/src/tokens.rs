//! Token directory and spot price models

use crate::common::{CategoryRef, ExchangeRef};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Row of `/v2/tokens`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,

  /// Exchanges listing the token
  #[serde(rename = "EXCHANGE_LIST", default)]
  pub exchange_list: Vec<ExchangeRef>,

  /// Categories the token belongs to
  #[serde(rename = "CATEGORY_LIST", default)]
  pub category_list: Vec<CategoryRef>,

  /// Token page on the Token Metrics app
  #[serde(rename = "TM_LINK", default)]
  pub tm_link: Option<String>,

  /// Contract address keyed by chain name
  #[serde(rename = "CONTRACT_ADDRESS", default)]
  pub contract_address: BTreeMap<String, String>,
}

impl Token {
  /// Contract address on `chain`, e.g. `solana`
  pub fn address_on(&self, chain: &str) -> Option<&str> {
    self.contract_address.get(chain).map(String::as_str)
  }

  pub fn in_category(&self, slug: &str) -> bool {
    self.category_list.iter().any(|c| c.category_slug == slug)
  }
}

/// Row of `/v2/top-market-cap-tokens`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMarketCapToken {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,

  #[serde(rename = "EXCHANGE_LIST", default)]
  pub exchange_list: Vec<ExchangeRef>,

  #[serde(rename = "CATEGORY_LIST", default)]
  pub category_list: Vec<CategoryRef>,
}

/// Row of `/v2/price`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPrice {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  /// Latest price in USD
  #[serde(rename = "CURRENT_PRICE")]
  pub current_price: Option<Decimal>,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  /// Symbol as served, which may be lower case (`eth`)
  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::ApiResponse;
  use std::str::FromStr;

  #[test]
  fn test_token_row() {
    let json = r#"{"success": true, "message": "Data fetched successfully", "length": 2, "data": [{"TOKEN_ID": 45273, "TOKEN_NAME": "Doug", "TOKEN_SYMBOL": "DOUG", "EXCHANGE_LIST": [{"exchange_id": "raydium2", "exchange_name": "Raydium"}], "CATEGORY_LIST": [{"category_id": 25, "category_name": "Solana Ecosystem", "category_slug": "solana-ecosystem"}], "TM_LINK": "https://app.tokenmetrics.com/doug-2", "CONTRACT_ADDRESS": {"solana": "AQiE2ghyFbBsbsfHiTEbKWcCLTDgyGzceKEPWftZpump"}}]}"#;
    let resp: ApiResponse<Token> = serde_json::from_str(json).unwrap();
    let token = &resp.data[0];
    assert_eq!(token.token_id, 45273);
    assert_eq!(token.exchange_list[0].exchange_name, "Raydium");
    assert!(token.in_category("solana-ecosystem"));
    assert_eq!(token.address_on("solana"), Some("AQiE2ghyFbBsbsfHiTEbKWcCLTDgyGzceKEPWftZpump"));
    assert_eq!(token.address_on("ethereum"), None);
  }

  #[test]
  fn test_top_token_row() {
    let json = r#"{"TOKEN_ID": 3375, "TOKEN_NAME": "Bitcoin", "TOKEN_SYMBOL": "BTC", "EXCHANGE_LIST": [{"exchange_id": "klever_exchange", "exchange_name": "Bitcoin.me"}], "CATEGORY_LIST": [{"category_id": 63, "category_name": "Layer 1 (L1)", "category_slug": "layer-1"}]}"#;
    let token: TopMarketCapToken = serde_json::from_str(json).unwrap();
    assert_eq!(token.token_symbol, "BTC");
    assert_eq!(token.category_list[0].category_id, 63);
  }

  #[test]
  fn test_price_is_decimal() {
    let json = r#"{"TOKEN_ID": 3306, "CURRENT_PRICE": 2567.75, "TOKEN_NAME": "Ethereum", "TOKEN_SYMBOL": "eth"}"#;
    let price: TokenPrice = serde_json::from_str(json).unwrap();
    assert_eq!(price.current_price, Some(Decimal::from_str("2567.75").unwrap()));
    assert_eq!(price.token_symbol, "eth");
  }
}
