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

//! Hourly and daily candles

use crate::common::impl_dated;
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Daily candle from `/v2/daily-ohlcv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOhlcv {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,

  /// Candle date, e.g. `2025-05-26T00:00:00.000Z`
  #[serde(rename = "DATE")]
  pub date: String,

  #[serde(rename = "OPEN")]
  pub open: Decimal,

  #[serde(rename = "HIGH")]
  pub high: Decimal,

  #[serde(rename = "LOW")]
  pub low: Decimal,

  #[serde(rename = "CLOSE")]
  pub close: Decimal,

  #[serde(rename = "VOLUME")]
  pub volume: Decimal,
}

/// Hourly candle from `/v2/hourly-ohlcv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyOhlcv {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,

  /// Start of the hour, e.g. `2025-05-26T11:00:00.000Z`
  #[serde(rename = "TIMESTAMP")]
  pub timestamp: String,

  #[serde(rename = "OPEN")]
  pub open: Decimal,

  #[serde(rename = "HIGH")]
  pub high: Decimal,

  #[serde(rename = "LOW")]
  pub low: Decimal,

  #[serde(rename = "CLOSE")]
  pub close: Decimal,

  #[serde(rename = "VOLUME")]
  pub volume: Decimal,
}

impl_dated!(DailyOhlcv, date);
impl_dated!(HourlyOhlcv, timestamp);

/// High minus low
fn range(high: Decimal, low: Decimal) -> Decimal {
  high - low
}

/// Percentage change from open to close, `None` when the candle opened at zero
fn change_percent(open: Decimal, close: Decimal) -> Option<Decimal> {
  if open.is_zero() {
    return None;
  }
  Some((close - open) / open * Decimal::ONE_HUNDRED)
}

impl DailyOhlcv {
  pub fn range(&self) -> Decimal {
    range(self.high, self.low)
  }

  pub fn change_percent(&self) -> Option<Decimal> {
    change_percent(self.open, self.close)
  }
}

impl HourlyOhlcv {
  pub fn range(&self) -> Decimal {
    range(self.high, self.low)
  }

  pub fn change_percent(&self) -> Option<Decimal> {
    change_percent(self.open, self.close)
  }

  /// Full timestamp of the candle in UTC
  pub fn timestamp_utc(&self) -> tm_core::Result<DateTime<Utc>> {
    let stamp = self.timestamp.trim().trim_end_matches('Z');
    let naive = NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S%.f")?;
    Ok(naive.and_utc())
  }
}
