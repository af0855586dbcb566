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

//! The Token Metrics endpoint catalog.
//!
//! Every vendor operation is one [`Endpoint`] variant carrying its path, HTTP
//! method, the name of the header the key travels in, and the documented
//! paging and chart defaults.

use crate::error::{Error, Result};
use crate::types::TimeFrame;
use std::str::FromStr;

/// HTTP method used by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
  Get,
  Post,
}

/// Header carrying the API key.
///
/// The vendor is inconsistent here: older endpoints read `x-api-key`, the
/// indices and chart endpoints read `api_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthHeader {
  XApiKey,
  ApiKey,
}

impl AuthHeader {
  /// Header name as sent on the wire
  pub fn as_str(&self) -> &'static str {
    match self {
      AuthHeader::XApiKey => "x-api-key",
      AuthHeader::ApiKey => "api_key",
    }
  }
}

impl std::fmt::Display for AuthHeader {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Shape of the 200 body an endpoint returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
  /// `{ success, message, length, data[] }`
  Data,
  /// `{ success, message, chartUrl }`
  Chart,
  /// `{ success, message, answer, thread[] }`
  Chat,
}

/// Every operation exposed by the Token Metrics v2 API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Tokens and prices
  Tokens,
  TopMarketCapTokens,
  Price,
  HourlyOhlcv,
  DailyOhlcv,

  // Grades
  TraderGrades,
  InvestorGrades,

  // Signals and technicals
  TradingSignals,
  AllTrendIndicators,

  // Analytics
  PricePrediction,
  ResistanceSupport,
  Quantmetrics,
  ScenarioAnalysis,
  Correlation,

  // Sentiment
  Sentiments,

  // Research
  AiReports,
  CryptoInvestors,

  // AI chat
  Tmai,

  // Indices
  TraderIndices,
  InvestorIndices,
  IndexHoldings,
  SectorIndicesHoldings,
  IndicesPerformance,
  IndexSpecificPerformance,
  IndicesTransaction,
  SectorIndexTransaction,

  // Market
  MarketMetrics,

  // Charts
  TokenDetailsPriceCharts,
  IndicesIndexAllocationCharts,
  IndicesRoiCharts,
  MarketPercentOfBullishVsBearishCharts,
  MarketBullAndBearCharts,
  MarketPercentOfBullishTmGrades,
  MarketTmGradeSignal,
  BitcoinVsAltcoinSeasonCharts,
  AnnualizedHistoricalVolatilityCharts,
  TotalMarketCryptoCapCharts,
  MarketMoversCharts,
  ResistanceAndSupportCharts,
}

impl Endpoint {
  /// All endpoints, in catalog order
  pub const ALL: [Endpoint; 39] = [
    Endpoint::Tokens,
    Endpoint::TopMarketCapTokens,
    Endpoint::Price,
    Endpoint::HourlyOhlcv,
    Endpoint::DailyOhlcv,
    Endpoint::TraderGrades,
    Endpoint::InvestorGrades,
    Endpoint::TradingSignals,
    Endpoint::AllTrendIndicators,
    Endpoint::PricePrediction,
    Endpoint::ResistanceSupport,
    Endpoint::Quantmetrics,
    Endpoint::ScenarioAnalysis,
    Endpoint::Correlation,
    Endpoint::Sentiments,
    Endpoint::AiReports,
    Endpoint::CryptoInvestors,
    Endpoint::Tmai,
    Endpoint::TraderIndices,
    Endpoint::InvestorIndices,
    Endpoint::IndexHoldings,
    Endpoint::SectorIndicesHoldings,
    Endpoint::IndicesPerformance,
    Endpoint::IndexSpecificPerformance,
    Endpoint::IndicesTransaction,
    Endpoint::SectorIndexTransaction,
    Endpoint::MarketMetrics,
    Endpoint::TokenDetailsPriceCharts,
    Endpoint::IndicesIndexAllocationCharts,
    Endpoint::IndicesRoiCharts,
    Endpoint::MarketPercentOfBullishVsBearishCharts,
    Endpoint::MarketBullAndBearCharts,
    Endpoint::MarketPercentOfBullishTmGrades,
    Endpoint::MarketTmGradeSignal,
    Endpoint::BitcoinVsAltcoinSeasonCharts,
    Endpoint::AnnualizedHistoricalVolatilityCharts,
    Endpoint::TotalMarketCryptoCapCharts,
    Endpoint::MarketMoversCharts,
    Endpoint::ResistanceAndSupportCharts,
  ];

  /// Path relative to the API base URL
  pub fn path(&self) -> &'static str {
    match self {
      Endpoint::Tokens => "/v2/tokens",
      Endpoint::TopMarketCapTokens => "/v2/top-market-cap-tokens",
      Endpoint::Price => "/v2/price",
      Endpoint::HourlyOhlcv => "/v2/hourly-ohlcv",
      Endpoint::DailyOhlcv => "/v2/daily-ohlcv",
      Endpoint::TraderGrades => "/v2/trader-grades",
      Endpoint::InvestorGrades => "/v2/investor-grades",
      Endpoint::TradingSignals => "/v2/trading-signals",
      Endpoint::AllTrendIndicators => "/v2/all-trend-indicators",
      Endpoint::PricePrediction => "/v2/price-prediction",
      Endpoint::ResistanceSupport => "/v2/resistance-support",
      Endpoint::Quantmetrics => "/v2/quantmetrics",
      Endpoint::ScenarioAnalysis => "/v2/scenario-analysis",
      Endpoint::Correlation => "/v2/correlation",
      Endpoint::Sentiments => "/v2/sentiments",
      Endpoint::AiReports => "/v2/ai-reports",
      Endpoint::CryptoInvestors => "/v2/crypto-investors",
      Endpoint::Tmai => "/v2/tmai",
      Endpoint::TraderIndices => "/v2/trader-indices",
      Endpoint::InvestorIndices => "/v2/investor-indices",
      // The holdings endpoints are tree maps on the vendor side
      Endpoint::IndexHoldings => "/v2/indices-tree-map",
      Endpoint::SectorIndicesHoldings => "/v2/indices-index-specific-tree-map",
      Endpoint::IndicesPerformance => "/v2/indices-performance",
      Endpoint::IndexSpecificPerformance => "/v2/indices-index-specific-performance",
      Endpoint::IndicesTransaction => "/v2/indices-index-transaction",
      Endpoint::SectorIndexTransaction => "/v2/indices-index-specific-index-transaction",
      Endpoint::MarketMetrics => "/v2/market-metrics",
      Endpoint::TokenDetailsPriceCharts => "/v2/token-details-price-charts",
      Endpoint::IndicesIndexAllocationCharts => "/v2/indices-index-allocation-charts",
      Endpoint::IndicesRoiCharts => "/v2/indices-roi-charts",
      Endpoint::MarketPercentOfBullishVsBearishCharts => {
        "/v2/market-percent-of-bullish-vs-bearish-charts"
      }
      Endpoint::MarketBullAndBearCharts => "/v2/market-bull-and-bear-charts",
      Endpoint::MarketPercentOfBullishTmGrades => "/v2/market-percent-of-bullish-tm-grades",
      Endpoint::MarketTmGradeSignal => "/v2/market-tm-grade-signal",
      Endpoint::BitcoinVsAltcoinSeasonCharts => "/v2/bitcoin-vs-altcoin-season-charts",
      Endpoint::AnnualizedHistoricalVolatilityCharts => {
        "/v2/annualized-historical-volatility-charts"
      }
      Endpoint::TotalMarketCryptoCapCharts => "/v2/total-market-crypto-cap-charts",
      Endpoint::MarketMoversCharts => "/v2/market-movers-charts",
      Endpoint::ResistanceAndSupportCharts => "/v2/resistance-and-support-charts",
    }
  }

  /// Operation name in kebab case, e.g. `trader-grades`
  ///
  /// This is the vendor path without the version prefix, except for the two
  /// holdings endpoints whose paths are tree-map names.
  pub fn name(&self) -> &'static str {
    match self {
      Endpoint::IndexHoldings => "index-holdings",
      Endpoint::SectorIndicesHoldings => "sector-indices-holdings",
      Endpoint::IndicesTransaction => "indices-transaction",
      Endpoint::SectorIndexTransaction => "sector-index-transaction",
      Endpoint::IndexSpecificPerformance => "index-specific-performance",
      other => other.path().trim_start_matches("/v2/"),
    }
  }

  /// HTTP method of the operation
  pub fn method(&self) -> HttpMethod {
    match self {
      Endpoint::Tmai => HttpMethod::Post,
      _ => HttpMethod::Get,
    }
  }

  /// Header the API key must be sent in
  pub fn auth_header(&self) -> AuthHeader {
    match self {
      Endpoint::PricePrediction
      | Endpoint::AllTrendIndicators
      | Endpoint::TraderIndices
      | Endpoint::InvestorIndices
      | Endpoint::IndexHoldings
      | Endpoint::IndicesPerformance
      | Endpoint::IndicesTransaction => AuthHeader::ApiKey,
      e if e.response_kind() == ResponseKind::Chart => AuthHeader::ApiKey,
      _ => AuthHeader::XApiKey,
    }
  }

  /// Shape of the success body
  pub fn response_kind(&self) -> ResponseKind {
    match self {
      Endpoint::Tmai => ResponseKind::Chat,
      Endpoint::TokenDetailsPriceCharts
      | Endpoint::IndicesIndexAllocationCharts
      | Endpoint::IndicesRoiCharts
      | Endpoint::MarketPercentOfBullishVsBearishCharts
      | Endpoint::MarketBullAndBearCharts
      | Endpoint::MarketPercentOfBullishTmGrades
      | Endpoint::MarketTmGradeSignal
      | Endpoint::BitcoinVsAltcoinSeasonCharts
      | Endpoint::AnnualizedHistoricalVolatilityCharts
      | Endpoint::TotalMarketCryptoCapCharts
      | Endpoint::MarketMoversCharts
      | Endpoint::ResistanceAndSupportCharts => ResponseKind::Chart,
      _ => ResponseKind::Data,
    }
  }

  /// Vendor summary title
  pub fn summary(&self) -> &'static str {
    match self {
      Endpoint::Tokens => "Tokens",
      Endpoint::TopMarketCapTokens => "Top Tokens by Market Cap",
      Endpoint::Price => "Price",
      Endpoint::HourlyOhlcv => "Hourly OHLCV",
      Endpoint::DailyOhlcv => "Daily OHLCV",
      Endpoint::TraderGrades => "Trader Grades",
      Endpoint::InvestorGrades => "Investor Grades",
      Endpoint::TradingSignals => "Trading Signals",
      Endpoint::AllTrendIndicators => "All Trend Indicators",
      Endpoint::PricePrediction => "Price Prediction",
      Endpoint::ResistanceSupport => "Resistance & Support",
      Endpoint::Quantmetrics => "Quantmetrics",
      Endpoint::ScenarioAnalysis => "Scenario Analysis",
      Endpoint::Correlation => "Correlation",
      Endpoint::Sentiments => "Sentiment",
      Endpoint::AiReports => "AI Reports",
      Endpoint::CryptoInvestors => "Crypto Investors",
      Endpoint::Tmai => "Token Metrics AI",
      Endpoint::TraderIndices => "Trader Indices",
      Endpoint::InvestorIndices => "Investor Indices",
      Endpoint::IndexHoldings => "Index Holdings",
      Endpoint::SectorIndicesHoldings => "Sector Indices Holdings",
      Endpoint::IndicesPerformance => "Indices Performance",
      Endpoint::IndexSpecificPerformance => "Sector Indices Performance",
      Endpoint::IndicesTransaction => "Index Transaction",
      Endpoint::SectorIndexTransaction => "Sector Index Transaction",
      Endpoint::MarketMetrics => "Market Metrics",
      Endpoint::TokenDetailsPriceCharts => "Token Details Price Charts",
      Endpoint::IndicesIndexAllocationCharts => "Indices Index Allocation Charts",
      Endpoint::IndicesRoiCharts => "Trader Index ROI",
      Endpoint::MarketPercentOfBullishVsBearishCharts => {
        "Market Percent of Bullish vs Bearish Charts"
      }
      Endpoint::MarketBullAndBearCharts => "Market Bull and Bear Chart",
      Endpoint::MarketPercentOfBullishTmGrades => "Market Percent of Bullish TM Grades",
      Endpoint::MarketTmGradeSignal => "Market TM Grade Signal",
      Endpoint::BitcoinVsAltcoinSeasonCharts => "Market Bitcoin vs Altcoin season",
      Endpoint::AnnualizedHistoricalVolatilityCharts => "Market Annualized Historical Volatility",
      Endpoint::TotalMarketCryptoCapCharts => "Market Total Crypto Market Cap",
      Endpoint::MarketMoversCharts => "Market Movers",
      Endpoint::ResistanceAndSupportCharts => "Resistance & Support Charts",
    }
  }

  /// Server-side default for `limit`, when the endpoint pages
  pub fn default_limit(&self) -> Option<i32> {
    match self {
      Endpoint::PricePrediction
      | Endpoint::AllTrendIndicators
      | Endpoint::TraderIndices
      | Endpoint::InvestorIndices => Some(1000),
      Endpoint::IndexHoldings | Endpoint::IndicesTransaction => Some(10),
      Endpoint::Tokens
      | Endpoint::HourlyOhlcv
      | Endpoint::DailyOhlcv
      | Endpoint::TraderGrades
      | Endpoint::InvestorGrades
      | Endpoint::TradingSignals
      | Endpoint::ResistanceSupport
      | Endpoint::Quantmetrics
      | Endpoint::ScenarioAnalysis
      | Endpoint::Correlation
      | Endpoint::Sentiments
      | Endpoint::AiReports
      | Endpoint::CryptoInvestors
      | Endpoint::SectorIndicesHoldings
      | Endpoint::SectorIndexTransaction
      | Endpoint::MarketMetrics => Some(50),
      _ => None,
    }
  }

  /// Index of the first page, when the endpoint pages.
  ///
  /// Endpoints served from the `api_key` family count pages from 0, the rest from 1.
  pub fn first_page(&self) -> Option<i32> {
    match self {
      Endpoint::PricePrediction
      | Endpoint::AllTrendIndicators
      | Endpoint::TraderIndices
      | Endpoint::InvestorIndices
      | Endpoint::IndexHoldings
      | Endpoint::IndicesTransaction => Some(0),
      Endpoint::TopMarketCapTokens => Some(1),
      e if e.default_limit().is_some() => Some(1),
      _ => None,
    }
  }

  /// Documented default `chartFilters` for chart endpoints
  pub fn default_chart_filters(&self) -> Option<&'static str> {
    match self {
      Endpoint::TokenDetailsPriceCharts => Some(crate::TOKEN_DETAILS_TRADER_FILTERS),
      Endpoint::IndicesRoiCharts => Some("backtested_roi,index_roi,btc_roi,total_market_roi"),
      Endpoint::MarketPercentOfBullishTmGrades => {
        Some("total_crypto_market,percent_of_bullish_tm_grades")
      }
      Endpoint::MarketTmGradeSignal => Some("total_crypto_market,bullish,bearish"),
      Endpoint::BitcoinVsAltcoinSeasonCharts => {
        Some("altcoin_indicator,altcoin_season,bitcoin_season")
      }
      Endpoint::AnnualizedHistoricalVolatilityCharts => {
        Some("market_cap,volatility_index,90th_percentile,10th_percentile")
      }
      Endpoint::TotalMarketCryptoCapCharts => {
        Some("total_market_cap,altcoin_market_cap,btc_market_cap")
      }
      Endpoint::MarketMoversCharts => {
        Some("negativeDailyPricePercentageChange,positiveDailyPricePercentageChange")
      }
      Endpoint::ResistanceAndSupportCharts => Some("linear_scale"),
      _ => None,
    }
  }

  /// Documented default `timeFrame` for chart endpoints that take one
  pub fn default_time_frame(&self) -> Option<TimeFrame> {
    match self {
      Endpoint::TokenDetailsPriceCharts
      | Endpoint::IndicesRoiCharts
      | Endpoint::AnnualizedHistoricalVolatilityCharts
      | Endpoint::TotalMarketCryptoCapCharts => Some(TimeFrame::Max),
      Endpoint::MarketPercentOfBullishTmGrades
      | Endpoint::MarketTmGradeSignal
      | Endpoint::BitcoinVsAltcoinSeasonCharts => Some(TimeFrame::Year),
      Endpoint::ResistanceAndSupportCharts => Some(TimeFrame::ThreeMonths),
      _ => None,
    }
  }

  /// Query parameters the endpoint accepts
  pub fn query_params(&self) -> &'static [&'static str] {
    const TOKEN_PAGE: &[&str] = &["token_id", "symbol", "limit", "page"];
    const PAGE: &[&str] = &["limit", "page"];
    const DATES_PAGE: &[&str] = &["startDate", "endDate", "limit", "page"];
    const OHLCV: &[&str] = &["token_id", "symbol", "token_name", "startDate", "endDate", "limit", "page"];
    const MARKET_CHART: &[&str] = &["timeFrame", "chartFilters"];
    const TYPE_PAGE: &[&str] = &["type", "limit", "page"];
    const INDEX_NAME_PAGE: &[&str] = &["indexName", "limit", "page"];

    match self {
      Endpoint::Tokens => &[
        "token_id",
        "token_name",
        "symbol",
        "category",
        "exchange",
        "blockchain_address",
        "limit",
        "page",
      ],
      Endpoint::TopMarketCapTokens => &["top_k", "page"],
      Endpoint::Price => &["token_id"],
      Endpoint::HourlyOhlcv | Endpoint::DailyOhlcv => OHLCV,
      Endpoint::TraderGrades => &[
        "token_id",
        "startDate",
        "endDate",
        "symbol",
        "category",
        "exchange",
        "marketcap",
        "fdv",
        "volume",
        "traderGrade",
        "traderGradePercentChange",
        "limit",
        "page",
      ],
      Endpoint::InvestorGrades => &[
        "token_id",
        "startDate",
        "endDate",
        "symbol",
        "category",
        "exchange",
        "marketcap",
        "fdv",
        "volume",
        "investorGrade",
        "limit",
        "page",
      ],
      Endpoint::TradingSignals => &[
        "token_id",
        "startDate",
        "endDate",
        "symbol",
        "category",
        "exchange",
        "marketcap",
        "volume",
        "fdv",
        "signal",
        "limit",
        "page",
      ],
      Endpoint::AllTrendIndicators => {
        &["token_id", "symbol", "indicator", "startDate", "endDate", "limit", "page"]
      }
      Endpoint::PricePrediction | Endpoint::Correlation => {
        &["token_id", "symbol", "category", "exchange", "limit", "page"]
      }
      Endpoint::Quantmetrics => {
        &["token_id", "symbol", "category", "exchange", "marketcap", "volume", "fdv", "limit", "page"]
      }
      Endpoint::ResistanceSupport | Endpoint::ScenarioAnalysis | Endpoint::AiReports => TOKEN_PAGE,
      Endpoint::Sentiments | Endpoint::CryptoInvestors | Endpoint::InvestorIndices => PAGE,
      Endpoint::TraderIndices | Endpoint::MarketMetrics => DATES_PAGE,
      Endpoint::Tmai => &[],
      Endpoint::IndexHoldings | Endpoint::IndicesTransaction => TYPE_PAGE,
      Endpoint::SectorIndicesHoldings | Endpoint::SectorIndexTransaction => INDEX_NAME_PAGE,
      Endpoint::IndicesPerformance => &["type", "startDate", "endDate"],
      Endpoint::IndexSpecificPerformance => &["indexName", "startDate", "endDate"],
      Endpoint::TokenDetailsPriceCharts => &["token_id", "category", "timeFrame", "chartFilters"],
      Endpoint::IndicesIndexAllocationCharts => &["category"],
      Endpoint::IndicesRoiCharts => &["category", "timeFrame", "chartFilters"],
      Endpoint::MarketPercentOfBullishVsBearishCharts | Endpoint::MarketBullAndBearCharts => &[],
      Endpoint::MarketPercentOfBullishTmGrades
      | Endpoint::MarketTmGradeSignal
      | Endpoint::BitcoinVsAltcoinSeasonCharts
      | Endpoint::AnnualizedHistoricalVolatilityCharts
      | Endpoint::TotalMarketCryptoCapCharts => MARKET_CHART,
      Endpoint::MarketMoversCharts => &["chartFilters"],
      Endpoint::ResistanceAndSupportCharts => &["token_id", "timeFrame", "chartFilters"],
    }
  }

  /// Query parameters the server rejects the request without
  pub fn required_params(&self) -> &'static [&'static str] {
    match self {
      Endpoint::IndexHoldings | Endpoint::IndicesTransaction => &["type"],
      Endpoint::SectorIndicesHoldings | Endpoint::SectorIndexTransaction => &["indexName"],
      Endpoint::IndicesPerformance => &["type", "startDate", "endDate"],
      Endpoint::IndexSpecificPerformance => &["indexName", "startDate", "endDate"],
      // Every chart parameter is required
      e if e.response_kind() == ResponseKind::Chart => e.query_params(),
      _ => &[],
    }
  }

  /// Chart endpoints that are drawn for a single token
  pub fn requires_token_id(&self) -> bool {
    matches!(self, Endpoint::TokenDetailsPriceCharts | Endpoint::ResistanceAndSupportCharts)
  }

  /// Chart endpoints that take a `category` of trader or investor
  pub fn takes_category(&self) -> bool {
    matches!(
      self,
      Endpoint::TokenDetailsPriceCharts | Endpoint::IndicesIndexAllocationCharts | Endpoint::IndicesRoiCharts
    )
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.path())
  }
}

impl FromStr for Endpoint {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let wanted = s.trim().trim_start_matches("/v2/").to_ascii_lowercase().replace('_', "-");
    Endpoint::ALL
      .iter()
      .copied()
      .find(|e| e.name() == wanted || e.path().trim_start_matches("/v2/") == wanted)
      .ok_or_else(|| Error::invalid("endpoint", format!("unknown endpoint `{}`", s)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_paths_are_unique() {
    let paths: HashSet<_> = Endpoint::ALL.iter().map(|e| e.path()).collect();
    assert_eq!(paths.len(), Endpoint::ALL.len());
    let names: HashSet<_> = Endpoint::ALL.iter().map(|e| e.name()).collect();
    assert_eq!(names.len(), Endpoint::ALL.len());
  }

  #[test]
  fn test_only_tmai_posts() {
    for e in Endpoint::ALL {
      let is_post = e.method() == HttpMethod::Post;
      let is_chat = e.response_kind() == ResponseKind::Chat;
      assert_eq!(is_post, e == Endpoint::Tmai, "{:?}", e);
      assert_eq!(is_chat, is_post, "{:?}", e);
    }
  }

  #[test]
  fn test_auth_headers() {
    assert_eq!(Endpoint::TraderGrades.auth_header().as_str(), "x-api-key");
    assert_eq!(Endpoint::Price.auth_header().as_str(), "x-api-key");
    assert_eq!(Endpoint::PricePrediction.auth_header().as_str(), "api_key");
    assert_eq!(Endpoint::IndexHoldings.auth_header().as_str(), "api_key");
    assert_eq!(Endpoint::SectorIndicesHoldings.auth_header().as_str(), "x-api-key");
    assert_eq!(Endpoint::MarketMoversCharts.auth_header(), AuthHeader::ApiKey);
    assert_eq!(Endpoint::Tmai.auth_header(), AuthHeader::XApiKey);
  }

  #[test]
  fn test_chart_endpoints_have_twelve_members() {
    let charts = Endpoint::ALL.iter().filter(|e| e.response_kind() == ResponseKind::Chart).count();
    assert_eq!(charts, 12);
  }

  #[test]
  fn test_paging_defaults() {
    assert_eq!(Endpoint::TraderGrades.default_limit(), Some(50));
    assert_eq!(Endpoint::TraderGrades.first_page(), Some(1));
    assert_eq!(Endpoint::TraderIndices.default_limit(), Some(1000));
    assert_eq!(Endpoint::TraderIndices.first_page(), Some(0));
    assert_eq!(Endpoint::IndexHoldings.default_limit(), Some(10));
    assert_eq!(Endpoint::TopMarketCapTokens.default_limit(), None);
    assert_eq!(Endpoint::TopMarketCapTokens.first_page(), Some(1));
    assert_eq!(Endpoint::Price.first_page(), None);
    assert_eq!(Endpoint::MarketBullAndBearCharts.first_page(), None);
  }

  #[test]
  fn test_chart_defaults() {
    assert_eq!(Endpoint::ResistanceAndSupportCharts.default_chart_filters(), Some("linear_scale"));
    assert_eq!(Endpoint::ResistanceAndSupportCharts.default_time_frame(), Some(TimeFrame::ThreeMonths));
    assert_eq!(Endpoint::MarketMoversCharts.default_time_frame(), None);
    assert_eq!(Endpoint::MarketBullAndBearCharts.default_chart_filters(), None);
    for e in Endpoint::ALL {
      if let Some(filters) = e.default_chart_filters() {
        assert!(!filters.contains(' '), "{:?} filters carry whitespace", e);
        assert_eq!(e.response_kind(), ResponseKind::Chart);
      }
    }
  }

  #[test]
  fn test_query_params_cover_paging_defaults() {
    for e in Endpoint::ALL {
      let params = e.query_params();
      assert_eq!(e.default_limit().is_some(), params.contains(&"limit"), "{:?}", e);
      assert_eq!(e.first_page().is_some(), params.contains(&"page"), "{:?}", e);
      for required in e.required_params() {
        assert!(params.contains(required), "{:?} requires unknown {}", e, required);
      }
    }
  }

  #[test]
  fn test_chart_params_match_defaults() {
    for e in Endpoint::ALL.iter().filter(|e| e.response_kind() == ResponseKind::Chart) {
      let params = e.query_params();
      assert_eq!(params.contains(&"timeFrame"), e.default_time_frame().is_some(), "{:?}", e);
      assert_eq!(params.contains(&"chartFilters"), e.default_chart_filters().is_some(), "{:?}", e);
      assert_eq!(params.contains(&"token_id"), e.requires_token_id(), "{:?}", e);
      assert_eq!(params.contains(&"category"), e.takes_category(), "{:?}", e);
    }
  }

  #[test]
  fn test_from_str() {
    assert_eq!("trader-grades".parse::<Endpoint>().unwrap(), Endpoint::TraderGrades);
    assert_eq!("/v2/indices-tree-map".parse::<Endpoint>().unwrap(), Endpoint::IndexHoldings);
    assert_eq!("index_holdings".parse::<Endpoint>().unwrap(), Endpoint::IndexHoldings);
    assert_eq!("TMAI".parse::<Endpoint>().unwrap(), Endpoint::Tmai);
    assert!("v3-unknown".parse::<Endpoint>().is_err());
  }

  #[test]
  fn test_display_is_path() {
    assert_eq!(Endpoint::DailyOhlcv.to_string(), "/v2/daily-ohlcv");
  }
}
