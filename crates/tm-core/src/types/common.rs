//! Common parameter types used across the API

use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Time window for chart endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFrame {
  #[serde(rename = "1W")]
  OneWeek,
  #[serde(rename = "1M")]
  OneMonth,
  #[serde(rename = "3M")]
  ThreeMonths,
  #[serde(rename = "Y")]
  Year,
  #[serde(rename = "YTD")]
  YearToDate,
  #[serde(rename = "MAX")]
  Max,
}

impl std::fmt::Display for TimeFrame {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      TimeFrame::OneWeek => write!(f, "1W"),
      TimeFrame::OneMonth => write!(f, "1M"),
      TimeFrame::ThreeMonths => write!(f, "3M"),
      TimeFrame::Year => write!(f, "Y"),
      TimeFrame::YearToDate => write!(f, "YTD"),
      TimeFrame::Max => write!(f, "MAX"),
    }
  }
}

impl FromStr for TimeFrame {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_uppercase().as_str() {
      "1W" => Ok(TimeFrame::OneWeek),
      "1M" => Ok(TimeFrame::OneMonth),
      "3M" => Ok(TimeFrame::ThreeMonths),
      "Y" | "1Y" => Ok(TimeFrame::Year),
      "YTD" => Ok(TimeFrame::YearToDate),
      "MAX" => Ok(TimeFrame::Max),
      _ => Err(Error::invalid("timeFrame", format!("`{}` is not one of 1W, 1M, 3M, Y, YTD, MAX", s))),
    }
  }
}

impl TimeFrame {
  /// Whether `endpoint` accepts this time frame.
  ///
  /// `YTD` is only offered on the token details and index ROI charts.
  pub fn is_supported_by(&self, endpoint: Endpoint) -> bool {
    if endpoint.default_time_frame().is_none() {
      return false;
    }
    match self {
      TimeFrame::YearToDate => {
        matches!(endpoint, Endpoint::TokenDetailsPriceCharts | Endpoint::IndicesRoiCharts)
      }
      _ => true,
    }
  }
}

/// Trader or investor view, sent as `type` or `category`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketPerspective {
  #[default]
  Trader,
  Investor,
}

impl std::fmt::Display for MarketPerspective {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MarketPerspective::Trader => write!(f, "trader"),
      MarketPerspective::Investor => write!(f, "investor"),
    }
  }
}

impl FromStr for MarketPerspective {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_lowercase().as_str() {
      "trader" => Ok(MarketPerspective::Trader),
      "investor" => Ok(MarketPerspective::Investor),
      _ => Err(Error::invalid("type", format!("`{}` is neither trader nor investor", s))),
    }
  }
}

/// Trading signal filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalFilter {
  Bullish,
  NoSignal,
  Bearish,
}

impl SignalFilter {
  /// Numeric value used by the API
  pub fn value(&self) -> i32 {
    match self {
      SignalFilter::Bullish => 1,
      SignalFilter::NoSignal => 0,
      SignalFilter::Bearish => -1,
    }
  }

  /// Map an API value back to a filter. Anything positive is bullish.
  pub fn from_value(v: i64) -> Self {
    match v.signum() {
      1 => SignalFilter::Bullish,
      -1 => SignalFilter::Bearish,
      _ => SignalFilter::NoSignal,
    }
  }
}

impl std::fmt::Display for SignalFilter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.value())
  }
}

impl FromStr for SignalFilter {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_lowercase().as_str() {
      "1" | "bullish" => Ok(SignalFilter::Bullish),
      "0" | "none" | "no-signal" => Ok(SignalFilter::NoSignal),
      "-1" | "bearish" => Ok(SignalFilter::Bearish),
      _ => Err(Error::invalid("signal", format!("`{}` is not 1, 0 or -1", s))),
    }
  }
}

/// Price axis for the resistance and support chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartScale {
  #[default]
  #[serde(rename = "linear_scale")]
  Linear,
  #[serde(rename = "log_scale")]
  Log,
}

impl std::fmt::Display for ChartScale {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ChartScale::Linear => write!(f, "linear_scale"),
      ChartScale::Log => write!(f, "log_scale"),
    }
  }
}

impl FromStr for ChartScale {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_lowercase().as_str() {
      "linear" | "linear_scale" => Ok(ChartScale::Linear),
      "log" | "log_scale" => Ok(ChartScale::Log),
      _ => Err(Error::invalid("chartFilters", format!("`{}` is not a chart scale", s))),
    }
  }
}

/// Format a date the way query parameters expect it
pub fn format_date(date: NaiveDate) -> String {
  date.format("%Y-%m-%d").to_string()
}

/// Parse a date as returned in response rows.
///
/// Rows carry either a bare `2025-05-26` or a timestamp such as
/// `2025-05-26T00:00:00.000Z`; only the calendar date is kept.
pub fn parse_api_date(s: &str) -> Result<NaiveDate> {
  let s = s.trim();
  match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
    Ok(date) => Ok(date),
    Err(_) => {
      let stamp = s.trim_end_matches('Z');
      NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|dt| dt.date())
        .map_err(Error::from)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_time_frame_display_and_parse() {
    assert_eq!(TimeFrame::ThreeMonths.to_string(), "3M");
    assert_eq!(TimeFrame::Year.to_string(), "Y");
    assert_eq!("max".parse::<TimeFrame>().unwrap(), TimeFrame::Max);
    assert_eq!("ytd".parse::<TimeFrame>().unwrap(), TimeFrame::YearToDate);
    assert!("5Y".parse::<TimeFrame>().is_err());
  }

  #[test]
  fn test_ytd_support() {
    assert!(TimeFrame::YearToDate.is_supported_by(Endpoint::TokenDetailsPriceCharts));
    assert!(TimeFrame::YearToDate.is_supported_by(Endpoint::IndicesRoiCharts));
    assert!(!TimeFrame::YearToDate.is_supported_by(Endpoint::TotalMarketCryptoCapCharts));
    assert!(TimeFrame::OneWeek.is_supported_by(Endpoint::MarketTmGradeSignal));
    assert!(!TimeFrame::Max.is_supported_by(Endpoint::TraderGrades));
  }

  #[test]
  fn test_perspective() {
    assert_eq!(MarketPerspective::default(), MarketPerspective::Trader);
    assert_eq!(MarketPerspective::Investor.to_string(), "investor");
    assert_eq!("Investor".parse::<MarketPerspective>().unwrap(), MarketPerspective::Investor);
  }

  #[test]
  fn test_signal_filter() {
    assert_eq!(SignalFilter::Bearish.to_string(), "-1");
    assert_eq!(SignalFilter::from_value(1), SignalFilter::Bullish);
    assert_eq!(SignalFilter::from_value(0), SignalFilter::NoSignal);
    assert_eq!("bearish".parse::<SignalFilter>().unwrap(), SignalFilter::Bearish);
  }

  #[test]
  fn test_chart_scale() {
    assert_eq!(ChartScale::default().to_string(), "linear_scale");
    assert_eq!("log".parse::<ChartScale>().unwrap(), ChartScale::Log);
  }

  #[test]
  fn test_parse_api_date() {
    let expected = NaiveDate::from_ymd_opt(2025, 5, 26).unwrap();
    assert_eq!(parse_api_date("2025-05-26").unwrap(), expected);
    assert_eq!(parse_api_date("2025-05-26T00:00:00.000Z").unwrap(), expected);
    assert_eq!(parse_api_date("2025-05-26T13:00:00Z").unwrap(), expected);
    assert!(parse_api_date("26/05/2025").is_err());
  }

  #[test]
  fn test_format_date() {
    let date = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
    assert_eq!(format_date(date), "2023-10-01");
  }
}
