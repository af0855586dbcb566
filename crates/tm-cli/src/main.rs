/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
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

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tm_client::TokenMetricsClient;
use tracing::debug;

mod commands;
use commands::{
  charts::ChartCommand,
  indices::{handle_indices, IndicesCommands},
  market_data::{GradesCommands, MarketDataCommand},
  AskCommand, RawCommand,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "tm")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// List every endpoint with its method and path
  Endpoints,
  #[command(flatten)]
  MarketData(MarketDataCommand),
  /// Trader or investor grades
  Grades {
    #[command(subcommand)]
    cmd: GradesCommands,
  },
  /// Index portfolios, holdings, performance and transactions
  Indices {
    #[command(subcommand)]
    cmd: IndicesCommands,
  },
  /// Rendered chart URL
  Chart(ChartCommand),
  /// Ask TMAI a question
  Ask(AskCommand),
  /// GET any endpoint with `name=value` parameters
  Raw(RawCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  let cli = Cli::parse();

  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  if let Commands::Endpoints = cli.command {
    return commands::list_endpoints();
  }

  let config = tm_core::Config::from_env().context("Failed to load Token Metrics configuration")?;
  debug!("Using {} at {} requests/minute", config.base_url, config.rate_limit);
  let client = TokenMetricsClient::new(config).context("Failed to create client")?;

  match cli.command {
    Commands::Endpoints => Ok(()),
    Commands::MarketData(cmd) => commands::market_data::execute(cmd, &client).await,
    Commands::Grades { cmd } => commands::market_data::handle_grades(cmd, &client).await,
    Commands::Indices { cmd } => handle_indices(cmd, &client).await,
    Commands::Chart(cmd) => commands::charts::execute(cmd, &client).await,
    Commands::Ask(cmd) => commands::ask(cmd, &client).await,
    Commands::Raw(cmd) => commands::raw(cmd, &client).await,
  }
}
