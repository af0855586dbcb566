//! Query parameter sets for every GET endpoint
//!
//! Each query is built with `new()` and `with_*` setters, checked with
//! `validate()` and turned into wire parameters with `params()`. Unset
//! fields are never sent, so the server applies its own defaults.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tm_core::types::{format_date, ChartScale, MarketPerspective, SignalFilter, TimeFrame};
use tm_core::{Endpoint, Error, Result};

/// Wire name to value, sorted for stable URLs
pub type QueryParams = BTreeMap<&'static str, String>;

/// Common behaviour of the query types
pub trait RequestParams {
  /// Parameters to put on the query string
  fn params(&self) -> QueryParams;

  /// Reject values the server would refuse
  fn validate(&self) -> Result<()>;
}

fn join<T: ToString>(items: &[T]) -> String {
  items.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

fn insert_list<T: ToString>(params: &mut QueryParams, name: &'static str, items: &[T]) {
  if !items.is_empty() {
    params.insert(name, join(items));
  }
}

fn insert_opt<T: ToString>(params: &mut QueryParams, name: &'static str, value: Option<T>) {
  if let Some(v) = value {
    params.insert(name, v.to_string());
  }
}

fn check_list(name: &'static str, items: &[String]) -> Result<()> {
  if items.iter().any(|s| s.trim().is_empty()) {
    return Err(Error::invalid(name, "list entries must not be empty"));
  }
  if items.iter().any(|s| s.contains(',')) {
    return Err(Error::invalid(name, "pass list entries one at a time, not comma-joined"));
  }
  Ok(())
}

fn check_paging(limit: Option<i32>, page: Option<i32>) -> Result<()> {
  if let Some(limit) = limit {
    if limit < 1 {
      return Err(Error::invalid("limit", format!("must be at least 1, got {}", limit)));
    }
  }
  if let Some(page) = page {
    if page < 0 {
      return Err(Error::invalid("page", format!("must be non-negative, got {}", page)));
    }
  }
  Ok(())
}

fn check_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
  match (start, end) {
    (Some(s), Some(e)) if s > e => {
      Err(Error::invalid("startDate", format!("{} is after endDate {}", s, e)))
    }
    _ => Ok(()),
  }
}

fn check_min(name: &'static str, value: Option<f64>) -> Result<()> {
  match value {
    Some(v) if !v.is_finite() => Err(Error::invalid(name, "must be a finite number")),
    _ => Ok(()),
  }
}

fn insert_paging(params: &mut QueryParams, limit: Option<i32>, page: Option<i32>) {
  insert_opt(params, "limit", limit);
  insert_opt(params, "page", page);
}

/// Token selection shared by the grade, signal and analytics endpoints.
///
/// Filters an endpoint does not take are dropped before sending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenFilter {
  pub token_id: Vec<i64>,
  pub symbol: Vec<String>,
  pub category: Vec<String>,
  pub exchange: Vec<String>,
  /// Minimum market cap in USD
  pub marketcap: Option<f64>,
  /// Minimum fully diluted valuation in USD
  pub fdv: Option<f64>,
  /// Minimum 24h volume in USD
  pub volume: Option<f64>,
  pub start_date: Option<NaiveDate>,
  pub end_date: Option<NaiveDate>,
  pub limit: Option<i32>,
  pub page: Option<i32>,
}

impl TokenFilter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_token_id(mut self, id: i64) -> Self {
    self.token_id.push(id);
    self
  }

  pub fn with_token_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
    self.token_id.extend(ids);
    self
  }

  pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
    self.symbol.push(symbol.into());
    self
  }

  pub fn with_symbols<S: Into<String>>(mut self, symbols: impl IntoIterator<Item = S>) -> Self {
    self.symbol.extend(symbols.into_iter().map(Into::into));
    self
  }

  /// Category slug, e.g. `layer-1`
  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    self.category.push(category.into());
    self
  }

  pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
    self.exchange.push(exchange.into());
    self
  }

  pub fn with_min_marketcap(mut self, usd: f64) -> Self {
    self.marketcap = Some(usd);
    self
  }

  pub fn with_min_fdv(mut self, usd: f64) -> Self {
    self.fdv = Some(usd);
    self
  }

  pub fn with_min_volume(mut self, usd: f64) -> Self {
    self.volume = Some(usd);
    self
  }

  pub fn with_start_date(mut self, date: NaiveDate) -> Self {
    self.start_date = Some(date);
    self
  }

  pub fn with_end_date(mut self, date: NaiveDate) -> Self {
    self.end_date = Some(date);
    self
  }

  pub fn with_date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
    self.with_start_date(start).with_end_date(end)
  }

  pub fn with_limit(mut self, limit: i32) -> Self {
    self.limit = Some(limit);
    self
  }

  pub fn with_page(mut self, page: i32) -> Self {
    self.page = Some(page);
    self
  }
}

impl RequestParams for TokenFilter {
  fn params(&self) -> QueryParams {
    let mut params = QueryParams::new();
    insert_list(&mut params, "token_id", &self.token_id);
    insert_list(&mut params, "symbol", &self.symbol);
    insert_list(&mut params, "category", &self.category);
    insert_list(&mut params, "exchange", &self.exchange);
    insert_opt(&mut params, "marketcap", self.marketcap);
    insert_opt(&mut params, "fdv", self.fdv);
    insert_opt(&mut params, "volume", self.volume);
    insert_opt(&mut params, "startDate", self.start_date.map(format_date));
    insert_opt(&mut params, "endDate", self.end_date.map(format_date));
    insert_paging(&mut params, self.limit, self.page);
    params
  }

  fn validate(&self) -> Result<()> {
    check_list("symbol", &self.symbol)?;
    check_list("category", &self.category)?;
    check_list("exchange", &self.exchange)?;
    check_min("marketcap", self.marketcap)?;
    check_min("fdv", self.fdv)?;
    check_min("volume", self.volume)?;
    check_range(self.start_date, self.end_date)?;
    check_paging(self.limit, self.page)
  }
}

/// `/v2/trader-grades`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraderGradesQuery {
  pub filter: TokenFilter,
  /// Minimum TM trader grade
  pub trader_grade: Option<f64>,
  /// Minimum 24h percent change of the trader grade
  pub trader_grade_percent_change: Option<f64>,
}

impl TraderGradesQuery {
  pub fn new(filter: TokenFilter) -> Self {
    Self { filter, ..Default::default() }
  }

  pub fn with_min_grade(mut self, grade: f64) -> Self {
    self.trader_grade = Some(grade);
    self
  }

  pub fn with_min_percent_change(mut self, change: f64) -> Self {
    self.trader_grade_percent_change = Some(change);
    self
  }
}

impl RequestParams for TraderGradesQuery {
  fn params(&self) -> QueryParams {
    let mut params = self.filter.params();
    insert_opt(&mut params, "traderGrade", self.trader_grade);
    insert_opt(&mut params, "traderGradePercentChange", self.trader_grade_percent_change);
    params
  }

  fn validate(&self) -> Result<()> {
    self.filter.validate()?;
    check_min("traderGrade", self.trader_grade)?;
    check_min("traderGradePercentChange", self.trader_grade_percent_change)
  }
}

/// `/v2/investor-grades`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvestorGradesQuery {
  pub filter: TokenFilter,
  /// Minimum TM investor grade
  pub investor_grade: Option<f64>,
}

impl InvestorGradesQuery {
  pub fn new(filter: TokenFilter) -> Self {
    Self { filter, investor_grade: None }
  }

  pub fn with_min_grade(mut self, grade: f64) -> Self {
    self.investor_grade = Some(grade);
    self
  }
}

impl RequestParams for InvestorGradesQuery {
  fn params(&self) -> QueryParams {
    let mut params = self.filter.params();
    insert_opt(&mut params, "investorGrade", self.investor_grade);
    params
  }

  fn validate(&self) -> Result<()> {
    self.filter.validate()?;
    check_min("investorGrade", self.investor_grade)
  }
}

/// `/v2/trading-signals`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradingSignalsQuery {
  pub filter: TokenFilter,
  pub signal: Option<SignalFilter>,
}

impl TradingSignalsQuery {
  pub fn new(filter: TokenFilter) -> Self {
    Self { filter, signal: None }
  }

  pub fn with_signal(mut self, signal: SignalFilter) -> Self {
    self.signal = Some(signal);
    self
  }
}

impl RequestParams for TradingSignalsQuery {
  fn params(&self) -> QueryParams {
    let mut params = self.filter.params();
    insert_opt(&mut params, "signal", self.signal);
    params
  }

  fn validate(&self) -> Result<()> {
    self.filter.validate()
  }
}

/// `/v2/all-trend-indicators`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendIndicatorsQuery {
  pub filter: TokenFilter,
  /// Indicator names, e.g. `mama`, `mom`
  pub indicator: Vec<String>,
}

impl TrendIndicatorsQuery {
  pub fn new(filter: TokenFilter) -> Self {
    Self { filter, indicator: Vec::new() }
  }

  pub fn with_indicator(mut self, indicator: impl Into<String>) -> Self {
    self.indicator.push(indicator.into());
    self
  }
}

impl RequestParams for TrendIndicatorsQuery {
  fn params(&self) -> QueryParams {
    let mut params = self.filter.params();
    insert_list(&mut params, "indicator", &self.indicator);
    params
  }

  fn validate(&self) -> Result<()> {
    self.filter.validate()?;
    check_list("indicator", &self.indicator)
  }
}

/// `/v2/tokens`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokensQuery {
  pub filter: TokenFilter,
  pub token_name: Vec<String>,
  /// `<chain>:<contract address>`
  pub blockchain_address: Option<String>,
}

impl TokensQuery {
  pub fn new(filter: TokenFilter) -> Self {
    Self { filter, ..Default::default() }
  }

  pub fn with_token_name(mut self, name: impl Into<String>) -> Self {
    self.token_name.push(name.into());
    self
  }

  pub fn with_blockchain_address(mut self, chain: &str, address: &str) -> Self {
    self.blockchain_address = Some(format!("{}:{}", chain, address));
    self
  }
}

impl RequestParams for TokensQuery {
  fn params(&self) -> QueryParams {
    let mut params = self.filter.params();
    insert_list(&mut params, "token_name", &self.token_name);
    insert_opt(&mut params, "blockchain_address", self.blockchain_address.as_deref());
    params
  }

  fn validate(&self) -> Result<()> {
    self.filter.validate()?;
    check_list("token_name", &self.token_name)?;
    if let Some(addr) = &self.blockchain_address {
      match addr.split_once(':') {
        Some((chain, address)) if !chain.is_empty() && !address.is_empty() => {}
        _ => {
          return Err(Error::invalid("blockchain_address", "expected `<chain>:<contract address>`"));
        }
      }
    }
    Ok(())
  }
}

/// `/v2/hourly-ohlcv` and `/v2/daily-ohlcv`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OhlcvQuery {
  pub filter: TokenFilter,
  pub token_name: Vec<String>,
}

impl OhlcvQuery {
  pub fn new(filter: TokenFilter) -> Self {
    Self { filter, token_name: Vec::new() }
  }

  pub fn with_token_name(mut self, name: impl Into<String>) -> Self {
    self.token_name.push(name.into());
    self
  }
}

impl RequestParams for OhlcvQuery {
  fn params(&self) -> QueryParams {
    let mut params = self.filter.params();
    insert_list(&mut params, "token_name", &self.token_name);
    params
  }

  fn validate(&self) -> Result<()> {
    self.filter.validate()?;
    check_list("token_name", &self.token_name)
  }
}

/// `/v2/top-market-cap-tokens`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopTokensQuery {
  /// Number of tokens by market cap
  pub top_k: Option<i32>,
  pub page: Option<i32>,
}

impl TopTokensQuery {
  pub fn new(top_k: i32) -> Self {
    Self { top_k: Some(top_k), page: None }
  }

  pub fn with_page(mut self, page: i32) -> Self {
    self.page = Some(page);
    self
  }
}

impl RequestParams for TopTokensQuery {
  fn params(&self) -> QueryParams {
    let mut params = QueryParams::new();
    insert_opt(&mut params, "top_k", self.top_k);
    insert_opt(&mut params, "page", self.page);
    params
  }

  fn validate(&self) -> Result<()> {
    if let Some(k) = self.top_k {
      if k < 1 {
        return Err(Error::invalid("top_k", format!("must be at least 1, got {}", k)));
      }
    }
    check_paging(None, self.page)
  }
}

/// Paging only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
  pub limit: Option<i32>,
  pub page: Option<i32>,
}

impl PageQuery {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_limit(mut self, limit: i32) -> Self {
    self.limit = Some(limit);
    self
  }

  pub fn with_page(mut self, page: i32) -> Self {
    self.page = Some(page);
    self
  }
}

impl RequestParams for PageQuery {
  fn params(&self) -> QueryParams {
    let mut params = QueryParams::new();
    insert_paging(&mut params, self.limit, self.page);
    params
  }

  fn validate(&self) -> Result<()> {
    check_paging(self.limit, self.page)
  }
}

/// Optional date window plus paging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeQuery {
  pub start_date: Option<NaiveDate>,
  pub end_date: Option<NaiveDate>,
  pub limit: Option<i32>,
  pub page: Option<i32>,
}

impl DateRangeQuery {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
    Self { start_date: Some(start), end_date: Some(end), ..Default::default() }
  }

  pub fn with_limit(mut self, limit: i32) -> Self {
    self.limit = Some(limit);
    self
  }

  pub fn with_page(mut self, page: i32) -> Self {
    self.page = Some(page);
    self
  }
}

impl RequestParams for DateRangeQuery {
  fn params(&self) -> QueryParams {
    let mut params = QueryParams::new();
    insert_opt(&mut params, "startDate", self.start_date.map(format_date));
    insert_opt(&mut params, "endDate", self.end_date.map(format_date));
    insert_paging(&mut params, self.limit, self.page);
    params
  }

  fn validate(&self) -> Result<()> {
    check_range(self.start_date, self.end_date)?;
    check_paging(self.limit, self.page)
  }
}

/// Trader or investor index listing (`type` plus paging)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexQuery {
  pub perspective: MarketPerspective,
  pub limit: Option<i32>,
  pub page: Option<i32>,
}

impl IndexQuery {
  pub fn new(perspective: MarketPerspective) -> Self {
    Self { perspective, limit: None, page: None }
  }

  pub fn with_limit(mut self, limit: i32) -> Self {
    self.limit = Some(limit);
    self
  }

  pub fn with_page(mut self, page: i32) -> Self {
    self.page = Some(page);
    self
  }
}

impl RequestParams for IndexQuery {
  fn params(&self) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("type", self.perspective.to_string());
    insert_paging(&mut params, self.limit, self.page);
    params
  }

  fn validate(&self) -> Result<()> {
    check_paging(self.limit, self.page)
  }
}

/// Sector index listing (`indexName` plus paging)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectorIndexQuery {
  /// Sector index, e.g. `meme`
  pub index_name: String,
  pub limit: Option<i32>,
  pub page: Option<i32>,
}

impl SectorIndexQuery {
  pub fn new(index_name: impl Into<String>) -> Self {
    Self { index_name: index_name.into(), limit: None, page: None }
  }

  pub fn with_limit(mut self, limit: i32) -> Self {
    self.limit = Some(limit);
    self
  }

  pub fn with_page(mut self, page: i32) -> Self {
    self.page = Some(page);
    self
  }
}

impl RequestParams for SectorIndexQuery {
  fn params(&self) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("indexName", self.index_name.clone());
    insert_paging(&mut params, self.limit, self.page);
    params
  }

  fn validate(&self) -> Result<()> {
    if self.index_name.trim().is_empty() {
      return Err(Error::invalid("indexName", "is required"));
    }
    check_paging(self.limit, self.page)
  }
}

/// Which index a performance query is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerformanceTarget {
  /// Trader or investor index (`type`)
  Perspective(MarketPerspective),
  /// Sector index (`indexName`)
  Sector(String),
}

/// Index performance over a required date window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceQuery {
  pub target: PerformanceTarget,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
}

impl PerformanceQuery {
  pub fn for_perspective(perspective: MarketPerspective, start: NaiveDate, end: NaiveDate) -> Self {
    Self { target: PerformanceTarget::Perspective(perspective), start_date: start, end_date: end }
  }

  pub fn for_sector(index_name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
    Self { target: PerformanceTarget::Sector(index_name.into()), start_date: start, end_date: end }
  }
}

impl RequestParams for PerformanceQuery {
  fn params(&self) -> QueryParams {
    let mut params = QueryParams::new();
    match &self.target {
      PerformanceTarget::Perspective(p) => params.insert("type", p.to_string()),
      PerformanceTarget::Sector(name) => params.insert("indexName", name.clone()),
    };
    params.insert("startDate", format_date(self.start_date));
    params.insert("endDate", format_date(self.end_date));
    params
  }

  fn validate(&self) -> Result<()> {
    if let PerformanceTarget::Sector(name) = &self.target {
      if name.trim().is_empty() {
        return Err(Error::invalid("indexName", "is required"));
      }
    }
    check_range(Some(self.start_date), Some(self.end_date))
  }
}

/// Parameters of the chart endpoints.
///
/// Anything left unset falls back to the endpoint's documented default
/// when the parameters are resolved with [`ChartQuery::params_for`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartQuery {
  pub token_id: Option<i64>,
  pub perspective: Option<MarketPerspective>,
  pub time_frame: Option<TimeFrame>,
  pub filters: Vec<String>,
}

impl ChartQuery {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn for_token(token_id: i64) -> Self {
    Self { token_id: Some(token_id), ..Default::default() }
  }

  pub fn with_perspective(mut self, perspective: MarketPerspective) -> Self {
    self.perspective = Some(perspective);
    self
  }

  pub fn with_time_frame(mut self, time_frame: TimeFrame) -> Self {
    self.time_frame = Some(time_frame);
    self
  }

  pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
    self.filters.push(filter.into());
    self
  }

  /// Linear or log price axis of the resistance and support chart
  pub fn with_scale(mut self, scale: ChartScale) -> Self {
    self.filters = vec![scale.to_string()];
    self
  }

  /// Resolve the wire parameters for `endpoint`, filling documented defaults
  pub fn params_for(&self, endpoint: Endpoint) -> Result<QueryParams> {
    check_list("chartFilters", &self.filters)?;
    let mut params = QueryParams::new();

    if endpoint.requires_token_id() {
      let id = self.token_id.ok_or_else(|| Error::invalid("token_id", "is required for this chart"))?;
      params.insert("token_id", id.to_string());
    }

    let perspective = self.perspective.unwrap_or_default();
    if endpoint.takes_category() {
      params.insert("category", perspective.to_string());
    }

    if let Some(default) = endpoint.default_time_frame() {
      let tf = self.time_frame.unwrap_or(default);
      if !tf.is_supported_by(endpoint) {
        return Err(Error::invalid("timeFrame", format!("{} is not offered by {}", tf, endpoint)));
      }
      params.insert("timeFrame", tf.to_string());
    }

    if !self.filters.is_empty() {
      params.insert("chartFilters", join(&self.filters));
    } else if endpoint == Endpoint::TokenDetailsPriceCharts && perspective == MarketPerspective::Investor {
      params.insert("chartFilters", tm_core::TOKEN_DETAILS_INVESTOR_FILTERS.to_string());
    } else if let Some(default) = endpoint.default_chart_filters() {
      params.insert("chartFilters", default.to_string());
    }

    Ok(params)
  }
}
