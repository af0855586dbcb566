pub mod charts;
pub mod indices;
pub mod market_data;

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use serde_json::json;
use tm_client::TokenMetricsClient;
use tm_core::Endpoint;
use tm_models::{PageQuery, QueryParams, TokenFilter};

/// Token selection shared by most data commands
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
  /// Token ids, comma separated
  #[arg(long = "id", value_delimiter = ',')]
  pub ids: Vec<i64>,

  /// Token symbols, comma separated
  #[arg(short, long = "symbol", value_delimiter = ',')]
  pub symbols: Vec<String>,

  /// Category slug
  #[arg(long)]
  pub category: Option<String>,

  /// Exchange id
  #[arg(long)]
  pub exchange: Option<String>,

  /// Start date (YYYY-MM-DD)
  #[arg(long)]
  pub start: Option<NaiveDate>,

  /// End date (YYYY-MM-DD)
  #[arg(long)]
  pub end: Option<NaiveDate>,

  #[command(flatten)]
  pub paging: PageArgs,
}

impl FilterArgs {
  pub fn to_filter(&self) -> TokenFilter {
    let mut filter = TokenFilter::new().with_token_ids(self.ids.iter().copied()).with_symbols(self.symbols.iter().cloned());
    if let Some(category) = &self.category {
      filter = filter.with_category(category.as_str());
    }
    if let Some(exchange) = &self.exchange {
      filter = filter.with_exchange(exchange.as_str());
    }
    if let Some(start) = self.start {
      filter = filter.with_start_date(start);
    }
    if let Some(end) = self.end {
      filter = filter.with_end_date(end);
    }
    if let Some(limit) = self.paging.limit {
      filter = filter.with_limit(limit);
    }
    if let Some(page) = self.paging.page {
      filter = filter.with_page(page);
    }
    filter
  }
}

#[derive(Args, Debug, Default, Clone, Copy)]
pub struct PageArgs {
  /// Rows per page
  #[arg(short, long)]
  pub limit: Option<i32>,

  /// Page number
  #[arg(short, long)]
  pub page: Option<i32>,
}

impl PageArgs {
  pub fn to_query(self) -> PageQuery {
    let mut query = PageQuery::new();
    if let Some(limit) = self.limit {
      query = query.with_limit(limit);
    }
    if let Some(page) = self.page {
      query = query.with_page(page);
    }
    query
  }
}

#[derive(Args, Debug)]
pub struct AskCommand {
  /// Question for TMAI
  #[arg(required = true, num_args = 1..)]
  question: Vec<String>,
}

#[derive(Args, Debug)]
pub struct RawCommand {
  /// Endpoint name or `/v2/` path
  endpoint: Endpoint,

  /// Query parameters as `name=value`
  params: Vec<String>,
}

/// Pretty-print any serializable value on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value).context("Failed to serialize response")?);
  Ok(())
}

pub fn list_endpoints() -> Result<()> {
  let catalog: Vec<_> = Endpoint::ALL
    .iter()
    .map(|e| {
      json!({
        "name": e.name(),
        "method": format!("{:?}", e.method()).to_uppercase(),
        "path": e.path(),
        "summary": e.summary(),
        "params": e.query_params(),
        "required": e.required_params(),
      })
    })
    .collect();
  print_json(&catalog)
}

pub async fn ask(cmd: AskCommand, client: &TokenMetricsClient) -> Result<()> {
  let question = cmd.question.join(" ");
  let answer = client.ai().ask(&question).await.context("TMAI request failed")?;
  print_json(&json!({ "question": question, "answer": answer }))
}

pub async fn raw(cmd: RawCommand, client: &TokenMetricsClient) -> Result<()> {
  let params = parse_params(cmd.endpoint, &cmd.params)?;
  let body = client.raw(cmd.endpoint, params).await.with_context(|| format!("{} failed", cmd.endpoint))?;
  print_json(&body)
}

/// Resolve `name=value` pairs against the names `endpoint` accepts
fn parse_params(endpoint: Endpoint, pairs: &[String]) -> Result<QueryParams> {
  let mut params = QueryParams::new();
  for pair in pairs {
    let (name, value) = pair.split_once('=').ok_or_else(|| anyhow!("`{}` is not name=value", pair))?;
    let Some(known) = endpoint.query_params().iter().find(|p| **p == name) else {
      bail!("{} does not take `{}` (accepted: {})", endpoint.name(), name, endpoint.query_params().join(", "));
    };
    params.insert(*known, value.to_string());
  }
  Ok(params)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_params() {
    let pairs = vec!["symbol=BTC,ETH".to_string(), "limit=5".to_string()];
    let params = parse_params(Endpoint::TraderGrades, &pairs).unwrap();
    assert_eq!(params["symbol"], "BTC,ETH");
    assert_eq!(params["limit"], "5");
  }

  #[test]
  fn test_parse_params_rejects_unknown() {
    assert!(parse_params(Endpoint::Sentiments, &["symbol=BTC".to_string()]).is_err());
    assert!(parse_params(Endpoint::Sentiments, &["limit".to_string()]).is_err());
  }

  #[test]
  fn test_filter_args() {
    let args = FilterArgs {
      ids: vec![3375, 3306],
      paging: PageArgs { limit: Some(10), page: None },
      ..Default::default()
    };
    let filter = args.to_filter();
    assert_eq!(filter.token_id, vec![3375, 3306]);
    assert_eq!(filter.limit, Some(10));
  }
}
