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

//! Envelopes and nested shapes shared by every Token Metrics response

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope of every data endpoint
///
/// ```json
/// { "success": true, "message": "Data fetched successfully", "length": 2, "data": [ ... ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
  /// Whether the request succeeded
  pub success: bool,

  /// Status message
  #[serde(default)]
  pub message: String,

  /// Number of rows the server reports
  #[serde(default)]
  pub length: Option<i64>,

  /// Result rows
  #[serde(default = "Vec::new")]
  pub data: Vec<T>,
}

impl<T> ApiResponse<T> {
  /// Number of rows actually returned
  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Take the rows out of the envelope
  pub fn into_data(self) -> Vec<T> {
    self.data
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.data.iter()
  }
}

impl<T> IntoIterator for ApiResponse<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.data.into_iter()
  }
}

/// Body returned by the chart endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResponse {
  pub success: bool,

  #[serde(default)]
  pub message: String,

  /// Location of the rendered chart image
  #[serde(rename = "chartUrl", default)]
  pub chart_url: Option<String>,
}

impl ChartResponse {
  pub fn url(&self) -> Option<&str> {
    self.chart_url.as_deref()
  }
}

/// Body of a rejected request (HTTP 400)
///
/// ```json
/// { "success": false, "message": "Some thing wrong", "length": 0, "data": [] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
  #[serde(default)]
  pub success: bool,

  #[serde(default)]
  pub message: String,

  #[serde(default)]
  pub length: i64,

  #[serde(default)]
  pub data: Vec<serde_json::Value>,
}

/// Coin artwork in three sizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenIcon {
  #[serde(default)]
  pub large: Option<String>,
  #[serde(default)]
  pub small: Option<String>,
  #[serde(default)]
  pub thumb: Option<String>,
}

/// Exchange a token trades on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRef {
  pub exchange_id: String,
  pub exchange_name: String,
}

/// Category a token is filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
  pub category_id: i64,
  pub category_name: String,
  pub category_slug: String,
}

/// Accept a JSON string or number and keep it as text.
///
/// Some counters (`ROUND_COUNT`, `CHAIN_ID`) are served as either.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<serde_json::Value>::deserialize(deserializer)?;
  Ok(match value {
    None | Some(serde_json::Value::Null) => None,
    Some(serde_json::Value::String(s)) => Some(s),
    Some(other) => Some(other.to_string()),
  })
}

/// Give a row type a `date()` accessor parsing one of its string fields
macro_rules! impl_dated {
  ($type:ty, $field:ident) => {
    impl $type {
      /// Calendar date of the row
      pub fn date(&self) -> tm_core::Result<chrono::NaiveDate> {
        tm_core::types::parse_api_date(&self.$field)
      }
    }
  };
}

pub(crate) use impl_dated;
