use super::{print_json, FilterArgs, PageArgs};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};
use tm_client::TokenMetricsClient;
use tm_core::SignalFilter;
use tm_models::{
  DateRangeQuery, InvestorGradesQuery, OhlcvQuery, TokensQuery, TopTokensQuery, TradingSignalsQuery,
  TraderGradesQuery, TrendIndicatorsQuery,
};

#[derive(Subcommand, Debug)]
pub enum MarketDataCommand {
  /// Supported tokens and their ids
  Tokens {
    #[command(flatten)]
    filter: FilterArgs,

    /// Token name, e.g. Bitcoin
    #[arg(long)]
    name: Option<String>,
  },

  /// Current price by token id
  Price {
    #[arg(required = true, num_args = 1.., value_delimiter = ',')]
    ids: Vec<i64>,
  },

  /// Tokens ranked by market cap
  TopTokens {
    #[arg(short = 'k', long, default_value_t = 10)]
    top_k: i32,

    #[arg(short, long)]
    page: Option<i32>,
  },

  /// Daily candles, or hourly with --hourly
  Ohlcv {
    #[command(flatten)]
    filter: FilterArgs,

    #[arg(long)]
    hourly: bool,
  },

  /// Long/short trading signals
  Signals {
    #[command(flatten)]
    filter: FilterArgs,

    /// bullish, bearish, none or 1, -1, 0
    #[arg(long, allow_negative_numbers = true)]
    signal: Option<SignalFilter>,
  },

  /// Trend indicators
  Trends {
    #[command(flatten)]
    filter: FilterArgs,
  },

  /// Forecasts, levels, quant metrics, scenarios and correlation
  Analytics {
    kind: AnalyticsKind,

    #[command(flatten)]
    filter: FilterArgs,
  },

  /// AI generated reports
  Reports {
    #[command(flatten)]
    filter: FilterArgs,
  },

  /// Crypto investors
  Investors {
    #[command(flatten)]
    paging: PageArgs,
  },

  /// Hourly market sentiment
  Sentiment {
    #[command(flatten)]
    paging: PageArgs,
  },

  /// Bullish share of the market and its signal
  MarketMetrics {
    #[arg(long)]
    start: Option<NaiveDate>,

    #[arg(long)]
    end: Option<NaiveDate>,

    #[command(flatten)]
    paging: PageArgs,
  },
}

#[derive(Subcommand, Debug)]
pub enum GradesCommands {
  /// Short-term trader grades
  Trader {
    #[command(flatten)]
    filter: FilterArgs,

    /// Only grades at or above this value
    #[arg(long)]
    min_grade: Option<f64>,
  },
  /// Long-term investor grades
  Investor {
    #[command(flatten)]
    filter: FilterArgs,

    #[arg(long)]
    min_grade: Option<f64>,
  },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum AnalyticsKind {
  Prediction,
  ResistanceSupport,
  Quantmetrics,
  Scenarios,
  Correlation,
}

pub async fn execute(cmd: MarketDataCommand, client: &TokenMetricsClient) -> Result<()> {
  match cmd {
    MarketDataCommand::Tokens { filter, name } => {
      let mut query = TokensQuery::new(filter.to_filter());
      if let Some(name) = name {
        query = query.with_token_name(name);
      }
      print_json(&client.tokens().tokens(&query).await.context("Failed to fetch tokens")?)
    }
    MarketDataCommand::Price { ids } => {
      print_json(&client.tokens().price(&ids).await.context("Failed to fetch prices")?)
    }
    MarketDataCommand::TopTokens { top_k, page } => {
      let mut query = TopTokensQuery::new(top_k);
      if let Some(page) = page {
        query = query.with_page(page);
      }
      print_json(&client.tokens().top_market_cap_tokens(&query).await.context("Failed to fetch top tokens")?)
    }
    MarketDataCommand::Ohlcv { filter, hourly } => {
      let query = OhlcvQuery::new(filter.to_filter());
      if hourly {
        print_json(&client.tokens().hourly_ohlcv(&query).await.context("Failed to fetch hourly OHLCV")?)
      } else {
        print_json(&client.tokens().daily_ohlcv(&query).await.context("Failed to fetch daily OHLCV")?)
      }
    }
    MarketDataCommand::Signals { filter, signal } => {
      let mut query = TradingSignalsQuery::new(filter.to_filter());
      if let Some(signal) = signal {
        query = query.with_signal(signal);
      }
      print_json(&client.signals().trading_signals(&query).await.context("Failed to fetch trading signals")?)
    }
    MarketDataCommand::Trends { filter } => {
      let query = TrendIndicatorsQuery::new(filter.to_filter());
      print_json(&client.signals().all_trend_indicators(&query).await.context("Failed to fetch trend indicators")?)
    }
    MarketDataCommand::Analytics { kind, filter } => analytics(kind, &filter, client).await,
    MarketDataCommand::Reports { filter } => {
      print_json(&client.research().ai_reports(&filter.to_filter()).await.context("Failed to fetch AI reports")?)
    }
    MarketDataCommand::Investors { paging } => {
      print_json(&client.research().crypto_investors(&paging.to_query()).await.context("Failed to fetch investors")?)
    }
    MarketDataCommand::Sentiment { paging } => {
      print_json(&client.sentiment().sentiments(&paging.to_query()).await.context("Failed to fetch sentiment")?)
    }
    MarketDataCommand::MarketMetrics { start, end, paging } => {
      let query = date_range(start, end, paging);
      print_json(&client.market().market_metrics(&query).await.context("Failed to fetch market metrics")?)
    }
  }
}

pub async fn handle_grades(cmd: GradesCommands, client: &TokenMetricsClient) -> Result<()> {
  match cmd {
    GradesCommands::Trader { filter, min_grade } => {
      let mut query = TraderGradesQuery::new(filter.to_filter());
      if let Some(grade) = min_grade {
        query = query.with_min_grade(grade);
      }
      print_json(&client.grades().trader_grades(&query).await.context("Failed to fetch trader grades")?)
    }
    GradesCommands::Investor { filter, min_grade } => {
      let mut query = InvestorGradesQuery::new(filter.to_filter());
      if let Some(grade) = min_grade {
        query = query.with_min_grade(grade);
      }
      print_json(&client.grades().investor_grades(&query).await.context("Failed to fetch investor grades")?)
    }
  }
}

async fn analytics(kind: AnalyticsKind, filter: &FilterArgs, client: &TokenMetricsClient) -> Result<()> {
  let filter = filter.to_filter();
  let analytics = client.analytics();
  match kind {
    AnalyticsKind::Prediction => print_json(&analytics.price_prediction(&filter).await?),
    AnalyticsKind::ResistanceSupport => print_json(&analytics.resistance_support(&filter).await?),
    AnalyticsKind::Quantmetrics => print_json(&analytics.quantmetrics(&filter).await?),
    AnalyticsKind::Scenarios => print_json(&analytics.scenario_analysis(&filter).await?),
    AnalyticsKind::Correlation => print_json(&analytics.correlation(&filter).await?),
  }
}

pub fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>, paging: PageArgs) -> DateRangeQuery {
  DateRangeQuery { start_date: start, end_date: end, limit: paging.limit, page: paging.page }
}
