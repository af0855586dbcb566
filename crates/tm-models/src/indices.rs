/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Index portfolios, holdings, performance and rebalancing transactions

use crate::common::{impl_dated, string_or_number, TokenIcon};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio member of a trader or investor index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConstituent {
  /// Rebalance date of the portfolio
  #[serde(rename = "PORTFOLIO_DATE")]
  pub portfolio_date: String,

  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,

  /// Fraction of the portfolio, 0 to 1
  #[serde(rename = "INDEX_WEIGHT")]
  pub index_weight: Option<f64>,

  /// Price at the rebalance
  #[serde(rename = "INITIAL_PRICE")]
  pub initial_price: Option<Decimal>,

  #[serde(rename = "AMOUNT_OF_TOKENS")]
  pub amount_of_tokens: Option<f64>,
}

/// Tree map entry of `/v2/indices-tree-map` and its sector variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexHolding {
  #[serde(rename = "NAME")]
  pub name: String,

  #[serde(rename = "ICON")]
  pub icon: Option<TokenIcon>,

  /// Weight in percent
  #[serde(rename = "WEIGHT")]
  pub weight: Option<f64>,

  #[serde(rename = "PCT_CHANGE")]
  pub pct_change: Option<f64>,

  /// CoinGecko id
  #[serde(rename = "CG_ID")]
  pub cg_id: Option<String>,

  #[serde(rename = "CHAIN_ID", default, deserialize_with = "string_or_number")]
  pub chain_id: Option<String>,

  #[serde(rename = "TOKEN_ADDRESS")]
  pub token_address: Option<String>,
}

/// Daily performance point of an index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexPerformance {
  #[serde(rename = "DATE")]
  pub date: String,

  #[serde(rename = "INDEX_CUMULATIVE_ROI")]
  pub index_cumulative_roi: Option<f64>,

  #[serde(rename = "MARKET_CAP")]
  pub market_cap: Option<f64>,

  #[serde(rename = "VOLUME")]
  pub volume: Option<f64>,

  #[serde(rename = "FDV")]
  pub fdv: Option<f64>,
}

/// Rebalancing trade of an index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexTransaction {
  #[serde(rename = "DATE")]
  pub date: String,

  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,

  #[serde(rename = "ICON")]
  pub icon: Option<TokenIcon>,

  /// `Increase`, `Decrease`, ...
  #[serde(rename = "ACTION")]
  pub action: String,

  #[serde(rename = "TRANSACTION_SIZE_IN_PCT")]
  pub transaction_size_in_pct: Option<f64>,

  #[serde(rename = "TRANSACTION_SIZE_IN_USD")]
  pub transaction_size_in_usd: Option<f64>,

  #[serde(rename = "TRANSACTION_SIZE_IN_TOKENS")]
  pub transaction_size_in_tokens: Option<f64>,

  /// Only present on sector index transactions
  #[serde(rename = "SECTOR", default, skip_serializing_if = "Option::is_none")]
  pub sector: Option<String>,

  #[serde(rename = "TIMESTAMP")]
  pub timestamp: Option<String>,

  /// Total transactions matching the query
  #[serde(rename = "TOTAL_COUNT")]
  pub total_count: Option<i64>,
}

impl IndexTransaction {
  pub fn is_decrease(&self) -> bool {
    self.action.eq_ignore_ascii_case("decrease")
  }
}

impl_dated!(IndexConstituent, portfolio_date);
impl_dated!(IndexPerformance, date);
impl_dated!(IndexTransaction, date);
