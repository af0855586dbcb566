use super::{market_data::date_range, print_json, PageArgs};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use tm_client::TokenMetricsClient;
use tm_core::MarketPerspective;
use tm_models::{IndexQuery, PerformanceQuery, SectorIndexQuery};

#[derive(Subcommand, Debug)]
pub enum IndicesCommands {
  /// Trader index portfolios
  Trader {
    #[arg(long)]
    start: Option<NaiveDate>,

    #[arg(long)]
    end: Option<NaiveDate>,

    #[command(flatten)]
    paging: PageArgs,
  },
  /// Latest investor index portfolio
  Investor {
    #[command(flatten)]
    paging: PageArgs,
  },
  /// Current index weights
  Holdings {
    #[command(flatten)]
    target: IndexTarget,

    #[command(flatten)]
    paging: PageArgs,
  },
  /// Cumulative ROI between two dates
  Performance {
    #[command(flatten)]
    target: IndexTarget,

    #[arg(long)]
    start: NaiveDate,

    #[arg(long)]
    end: NaiveDate,
  },
  /// Rebalancing transactions
  Transactions {
    #[command(flatten)]
    target: IndexTarget,

    #[command(flatten)]
    paging: PageArgs,
  },
}

/// Either the trader/investor index or a named sector index
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct IndexTarget {
  /// trader or investor
  #[arg(long = "type")]
  perspective: Option<MarketPerspective>,

  /// Sector index name, e.g. meme
  #[arg(long)]
  sector: Option<String>,
}

enum Target {
  Perspective(MarketPerspective),
  Sector(String),
}

impl IndexTarget {
  fn resolve(self) -> Target {
    match (self.sector, self.perspective) {
      (Some(sector), _) => Target::Sector(sector),
      (None, perspective) => Target::Perspective(perspective.unwrap_or_default()),
    }
  }
}

pub async fn handle_indices(cmd: IndicesCommands, client: &TokenMetricsClient) -> Result<()> {
  let indices = client.indices();
  match cmd {
    IndicesCommands::Trader { start, end, paging } => {
      let query = date_range(start, end, paging);
      print_json(&indices.trader_indices(&query).await.context("Failed to fetch trader indices")?)
    }
    IndicesCommands::Investor { paging } => {
      print_json(&indices.investor_indices(&paging.to_query()).await.context("Failed to fetch investor indices")?)
    }
    IndicesCommands::Holdings { target, paging } => match target.resolve() {
      Target::Perspective(p) => {
        let query = IndexQuery { perspective: p, limit: paging.limit, page: paging.page };
        print_json(&indices.index_holdings(&query).await.context("Failed to fetch index holdings")?)
      }
      Target::Sector(name) => {
        let query = SectorIndexQuery { index_name: name, limit: paging.limit, page: paging.page };
        print_json(&indices.sector_indices_holdings(&query).await.context("Failed to fetch sector holdings")?)
      }
    },
    IndicesCommands::Performance { target, start, end } => {
      let query = match target.resolve() {
        Target::Perspective(p) => PerformanceQuery::for_perspective(p, start, end),
        Target::Sector(name) => PerformanceQuery::for_sector(name, start, end),
      };
      print_json(&indices.performance(&query).await.context("Failed to fetch index performance")?)
    }
    IndicesCommands::Transactions { target, paging } => match target.resolve() {
      Target::Perspective(p) => {
        let query = IndexQuery { perspective: p, limit: paging.limit, page: paging.page };
        print_json(&indices.indices_transaction(&query).await.context("Failed to fetch index transactions")?)
      }
      Target::Sector(name) => {
        let query = SectorIndexQuery { index_name: name, limit: paging.limit, page: paging.page };
        print_json(&indices.sector_index_transaction(&query).await.context("Failed to fetch sector transactions")?)
      }
    },
  }
}
