//! Goldcross CLI binary.
//!
//! Provides a command-line interface for the goldcross crossover evaluator.

mod cmd;
mod data;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "goldcross")]
#[command(about = "Moving-average crossover evaluation for daily OHLCV series", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a crossover backtest against buy-and-hold
    Backtest {
        /// Ticker symbol
        #[arg(short, long, default_value = "BTC-USD")]
        symbol: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long, default_value = "2020-01-01")]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(long, default_value = "2024-12-31")]
        end: String,

        /// Direction mode (long, long_short, short; unrecognized names fall
        /// back to short)
        #[arg(short, long, default_value = "long_short")]
        direction: String,

        /// Short moving-average window
        #[arg(long, default_value = "12")]
        short_period: usize,

        /// Long moving-average window
        #[arg(long, default_value = "21")]
        long_period: usize,

        /// Load bars from a CSV file instead of the chart API
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Derive and display the feature columns for a symbol
    Features {
        /// Ticker symbol
        #[arg(short, long, default_value = "BTC-USD")]
        symbol: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long, default_value = "2020-01-01")]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(long, default_value = "2024-12-31")]
        end: String,

        /// Load bars from a CSV file instead of the chart API
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Number of rows to display
        #[arg(short, long, default_value = "10")]
        rows: usize,

        /// Smooth the RSI with a simple instead of exponential average
        #[arg(long)]
        sma_rsi: bool,
    },

    /// Download daily bars to a CSV file
    Fetch {
        /// Ticker symbol
        #[arg(short, long)]
        symbol: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: String,

        /// Destination CSV path
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Backtest {
            symbol,
            start,
            end,
            direction,
            short_period,
            long_period,
            csv,
            format,
        } => {
            cmd::backtest::run_backtest(
                &symbol,
                &start,
                &end,
                &direction,
                short_period,
                long_period,
                csv.as_deref(),
                &format,
            )
            .await?;
        }
        Commands::Features {
            symbol,
            start,
            end,
            csv,
            rows,
            sma_rsi,
        } => {
            cmd::features::show_features(&symbol, &start, &end, csv.as_deref(), rows, sma_rsi)
                .await?;
        }
        Commands::Fetch {
            symbol,
            start,
            end,
            output,
        } => {
            cmd::fetch::fetch_to_csv(&symbol, &start, &end, &output).await?;
        }
    }

    Ok(())
}
