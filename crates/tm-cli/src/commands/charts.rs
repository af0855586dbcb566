use super::print_json;
use anyhow::{bail, Context, Result};
use clap::Args;
use tm_client::TokenMetricsClient;
use tm_core::{ChartScale, Endpoint, MarketPerspective, ResponseKind, TimeFrame};
use tm_models::ChartQuery;

#[derive(Args, Debug)]
pub struct ChartCommand {
  /// Chart endpoint, e.g. token-details-price-charts (see `tm endpoints`)
  kind: Endpoint,

  /// Token id, required by the token charts
  #[arg(short, long)]
  token_id: Option<i64>,

  /// trader or investor
  #[arg(long = "type")]
  perspective: Option<MarketPerspective>,

  /// 1W, 1M, 3M, Y, YTD or MAX
  #[arg(long)]
  time_frame: Option<TimeFrame>,

  /// Chart filters, comma separated
  #[arg(short, long = "filter", value_delimiter = ',')]
  filters: Vec<String>,

  /// linear or log, for the resistance and support chart
  #[arg(long, conflicts_with = "filters")]
  scale: Option<ChartScale>,
}

impl ChartCommand {
  fn to_query(&self) -> ChartQuery {
    let mut query = ChartQuery {
      token_id: self.token_id,
      perspective: self.perspective,
      time_frame: self.time_frame,
      filters: self.filters.clone(),
    };
    if let Some(scale) = self.scale {
      query = query.with_scale(scale);
    }
    query
  }
}

pub async fn execute(cmd: ChartCommand, client: &TokenMetricsClient) -> Result<()> {
  if cmd.kind.response_kind() != ResponseKind::Chart {
    bail!("{} is not a chart endpoint", cmd.kind.name());
  }
  let chart = client.charts().chart(cmd.kind, &cmd.to_query()).await.with_context(|| format!("{} failed", cmd.kind.name()))?;
  print_json(&chart)
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::Parser;

  #[derive(Parser)]
  struct Harness {
    #[command(flatten)]
    chart: ChartCommand,
  }

  #[test]
  fn test_chart_args() {
    let harness = Harness::parse_from(["tm", "resistance_and_support_charts", "-t", "3375", "--scale", "log"]);
    assert_eq!(harness.chart.kind, Endpoint::ResistanceAndSupportCharts);

    let query = harness.chart.to_query();
    assert_eq!(query.token_id, Some(3375));
    assert_eq!(query.filters, vec!["log_scale".to_string()]);
  }

  #[test]
  fn test_chart_filters_split() {
    let harness = Harness::parse_from(["tm", "market-movers-charts", "--filter", "a,b"]);
    assert_eq!(harness.chart.to_query().filters.len(), 2);
  }
}
