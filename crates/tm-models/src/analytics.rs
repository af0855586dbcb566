//! Forecasts, support levels, risk metrics, scenarios and correlations

use crate::common::impl_dated;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day of a price forecast with its confidence band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
  pub forecast: f64,
  pub forecast_lower: f64,
  pub forecast_upper: f64,
}

impl DailyForecast {
  /// Width of the confidence band
  pub fn spread(&self) -> f64 {
    self.forecast_upper - self.forecast_lower
  }
}

/// Row of `/v2/price-prediction`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePrediction {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "DATE")]
  pub date: String,

  /// Keyed `1-day-forecast` through `7-day-forecast`
  #[serde(rename = "FORECASTS_FOR_NEXT_7_DAYS", default)]
  pub forecasts_for_next_7_days: BTreeMap<String, DailyForecast>,

  #[serde(rename = "PREDICTED_RETURNS_7D")]
  pub predicted_returns_7d: Option<f64>,
}

impl PricePrediction {
  /// Forecasts ordered by horizon in days
  pub fn forecasts(&self) -> Vec<(u32, &DailyForecast)> {
    let mut out: Vec<(u32, &DailyForecast)> = self
      .forecasts_for_next_7_days
      .iter()
      .filter_map(|(key, f)| key.split('-').next()?.parse().ok().map(|day| (day, f)))
      .collect();
    out.sort_by_key(|(day, _)| *day);
    out
  }

  /// Forecast `days` ahead, when present
  pub fn forecast_for(&self, days: u32) -> Option<&DailyForecast> {
    self.forecasts_for_next_7_days.get(&format!("{}-day-forecast", days))
  }
}

/// Historical price level acting as resistance or support
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportLevel {
  pub date: String,
  pub level: f64,
}

/// Row of `/v2/resistance-support`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistanceSupport {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,

  #[serde(rename = "DATE")]
  pub date: String,

  #[serde(rename = "HISTORICAL_RESISTANCE_SUPPORT_LEVELS", default)]
  pub historical_resistance_support_levels: Vec<SupportLevel>,
}

impl ResistanceSupport {
  /// Closest level at or below `price`
  pub fn support_below(&self, price: f64) -> Option<&SupportLevel> {
    self
      .historical_resistance_support_levels
      .iter()
      .filter(|l| l.level <= price)
      .max_by(|a, b| a.level.total_cmp(&b.level))
  }

  /// Closest level above `price`
  pub fn resistance_above(&self, price: f64) -> Option<&SupportLevel> {
    self
      .historical_resistance_support_levels
      .iter()
      .filter(|l| l.level > price)
      .min_by(|a, b| a.level.total_cmp(&b.level))
  }
}

/// Row of `/v2/quantmetrics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantmetrics {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,

  #[serde(rename = "DATE")]
  pub date: String,

  #[serde(rename = "VOLATILITY")]
  pub volatility: Option<f64>,

  #[serde(rename = "ALL_TIME_RETURN")]
  pub all_time_return: Option<f64>,

  #[serde(rename = "CAGR")]
  pub cagr: Option<f64>,

  #[serde(rename = "SHARPE")]
  pub sharpe: Option<f64>,

  #[serde(rename = "SORTINO")]
  pub sortino: Option<f64>,

  #[serde(rename = "MAX_DRAWDOWN")]
  pub max_drawdown: Option<f64>,

  #[serde(rename = "SKEW")]
  pub skew: Option<f64>,

  #[serde(rename = "TAIL_RATIO")]
  pub tail_ratio: Option<f64>,

  #[serde(rename = "RISK_REWARD_RATIO")]
  pub risk_reward_ratio: Option<f64>,

  #[serde(rename = "PROFIT_FACTOR")]
  pub profit_factor: Option<f64>,

  #[serde(rename = "KURTOSIS")]
  pub kurtosis: Option<f64>,

  #[serde(rename = "DAILY_VALUE_AT_RISK")]
  pub daily_value_at_risk: Option<f64>,

  #[serde(rename = "DAILY_RETURN_AVG")]
  pub daily_return_avg: Option<f64>,

  #[serde(rename = "DAILY_RETURN_STD")]
  pub daily_return_std: Option<f64>,
}

/// Price outcome under one total market cap assumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
  pub token_dominance: f64,
  pub price_prediction: f64,
  pub crypto_market_cap_trillion: f64,
}

/// Row of `/v2/scenario-analysis`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAnalysis {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,

  #[serde(rename = "DATE")]
  pub date: String,

  #[serde(rename = "SCENARIO_ANALYSIS", default)]
  pub scenario_analysis: Vec<Scenario>,
}

impl ScenarioAnalysis {
  pub fn for_market_cap(&self, trillions: f64) -> Option<&Scenario> {
    self
      .scenario_analysis
      .iter()
      .find(|s| (s.crypto_market_cap_trillion - trillions).abs() < f64::EPSILON)
  }
}

/// Token whose returns move with the row's token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelatedToken {
  pub correlation: f64,
  pub token: String,
}

/// Row of `/v2/correlation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
  #[serde(rename = "TOKEN_ID")]
  pub token_id: i64,

  #[serde(rename = "TOKEN_NAME")]
  pub token_name: String,

  #[serde(rename = "TOKEN_SYMBOL")]
  pub token_symbol: String,

  #[serde(rename = "DATE")]
  pub date: String,

  #[serde(rename = "TOP_CORRELATION", default)]
  pub top_correlation: Vec<CorrelatedToken>,
}

impl_dated!(PricePrediction, date);
impl_dated!(ResistanceSupport, date);
impl_dated!(Quantmetrics, date);
impl_dated!(ScenarioAnalysis, date);
impl_dated!(Correlation, date);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::ApiResponse;
  use tm_core::test_utils::{assert_approx_eq, assert_some_approx};

  #[test]
  fn test_price_prediction_ordering() {
    let json = r#"{"TOKEN_ID": 14223, "TOKEN_NAME": "PancakeSwap", "DATE": "2024-06-11", "FORECASTS_FOR_NEXT_7_DAYS": {"1-day-forecast": {"forecast": 2.955477522468498, "forecast_lower": 2.15168433897629, "forecast_upper": 3.752253335204243}, "2-day-forecast": {"forecast": 2.900011453753576, "forecast_lower": 2.001482408412628, "forecast_upper": 3.823180064253144}, "3-day-forecast": {"forecast": 2.7352038637972, "forecast_lower": 1.740803846906033, "forecast_upper": 3.780126425887028}, "4-day-forecast": {"forecast": 2.710885142018935, "forecast_lower": 1.567173814446756, "forecast_upper": 3.87715730323831}, "5-day-forecast": {"forecast": 2.71446914205757, "forecast_lower": 1.423207528997107, "forecast_upper": 4.012993083095056}, "6-day-forecast": {"forecast": 2.663624785489615, "forecast_lower": 1.299384619963853, "forecast_upper": 4.033013349563843}, "7-day-forecast": {"forecast": 2.653010321629962, "forecast_lower": 1.189203628379838, "forecast_upper": 4.147191711323936}}, "PREDICTED_RETURNS_7D": 0.0243}"#;
    let row: PricePrediction = serde_json::from_str(json).unwrap();
    let days: Vec<u32> = row.forecasts().iter().map(|(d, _)| *d).collect();
    assert_eq!(days, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_approx_eq(row.forecast_for(7).unwrap().forecast, 2.653010321629962, 1e-12);
    assert!(row.forecast_for(7).unwrap().spread() > row.forecast_for(1).unwrap().spread());
    assert_some_approx(row.predicted_returns_7d, 0.0243);
  }

  #[test]
  fn test_resistance_support_levels() {
    let json = r#"{"TOKEN_ID": 3306, "TOKEN_NAME": "Ethereum", "TOKEN_SYMBOL": "ETH", "DATE": "2025-05-26T00:00:00.000Z", "HISTORICAL_RESISTANCE_SUPPORT_LEVELS": [{"date": "2017-08-09", "level": 316.5}, {"date": "2021-05-12", "level": 4100.0}, {"date": "2022-06-18", "level": 1000.0}]}"#;
    let row: ResistanceSupport = serde_json::from_str(json).unwrap();
    assert_eq!(row.support_below(2500.0).unwrap().level, 1000.0);
    assert_eq!(row.resistance_above(2500.0).unwrap().level, 4100.0);
    assert!(row.resistance_above(5000.0).is_none());
  }

  #[test]
  fn test_quantmetrics() {
    let json = r#"{"success": true, "message": "Data fetched successfully", "length": 2, "data": [{"TOKEN_ID": 3306, "TOKEN_NAME": "Ethereum", "TOKEN_SYMBOL": "ETH", "DATE": "2025-05-26", "VOLATILITY": 0.93, "ALL_TIME_RETURN": 1823.75, "CAGR": 0.7, "SHARPE": 1.02, "SORTINO": 1.66, "MAX_DRAWDOWN": -0.94, "SKEW": 1.19, "TAIL_RATIO": 1.22, "RISK_REWARD_RATIO": 16.442680776, "PROFIT_FACTOR": 1.23, "KURTOSIS": 13.98, "DAILY_VALUE_AT_RISK": -0.09, "DAILY_RETURN_AVG": 0.003771331, "DAILY_RETURN_STD": 0.058577169}]}"#;
    let resp: ApiResponse<Quantmetrics> = serde_json::from_str(json).unwrap();
    assert_some_approx(resp.data[0].sharpe, 1.02);
    assert_some_approx(resp.data[0].max_drawdown, -0.94);
  }

  #[test]
  fn test_scenario_integer_market_cap() {
    let json = r#"{"TOKEN_ID": 3306, "TOKEN_NAME": "Ethereum", "TOKEN_SYMBOL": "ETH", "DATE": "2025-05-26", "SCENARIO_ANALYSIS": [{"token_dominance": 0.8702744893346861, "price_prediction": 72094.99938805234, "crypto_market_cap_trillion": 10}]}"#;
    let row: ScenarioAnalysis = serde_json::from_str(json).unwrap();
    assert!(row.for_market_cap(10.0).is_some());
    assert!(row.for_market_cap(20.0).is_none());
  }

  #[test]
  fn test_correlation() {
    let json = r#"{"TOKEN_ID": 28950, "TOKEN_NAME": "Gosleep Zzz", "TOKEN_SYMBOL": "ZZZ", "DATE": "2023-11-08", "TOP_CORRELATION": [{"correlation": 0.846, "token": "Fantom"}]}"#;
    let row: Correlation = serde_json::from_str(json).unwrap();
    assert_eq!(row.top_correlation[0].token, "Fantom");
    assert_eq!(row.date().unwrap().to_string(), "2023-11-08");
  }
}
