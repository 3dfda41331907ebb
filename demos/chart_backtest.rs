//! Crossover backtest on live chart data.
//!
//! Fetches two years of daily candles for a crypto pair and evaluates the
//! default long/short crossover configuration against buy-and-hold.
//! Requires network access; fails gracefully without it.

use chrono::NaiveDate;
use goldcross::data::ChartClient;
use goldcross::eval::{CrossoverConfig, CrossoverEvaluator};
use goldcross::{BarProvider, PriceSeries};

/// Pair to backtest.
const SYMBOL: &str = "BTC-USD";

/// Backtest period.
const START_DATE: &str = "2023-01-01";
const END_DATE: &str = "2024-12-31";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let start = NaiveDate::parse_from_str(START_DATE, "%Y-%m-%d")?;
    let end = NaiveDate::parse_from_str(END_DATE, "%Y-%m-%d")?;

    println!("Fetching {SYMBOL} candles from {START_DATE} to {END_DATE}...");
    let client = ChartClient::from_env();
    let bars = client
        .daily_bars(SYMBOL, start, end)
        .await
        .map_err(|e| format!("fetch failed ({e}); check network connectivity"))?;
    let series = PriceSeries::from_bars(bars);
    println!("Loaded {} bars", series.len());

    let config = CrossoverConfig {
        symbol: SYMBOL.to_string(),
        start_date: start,
        end_date: end,
        ..CrossoverConfig::default()
    };
    let evaluation = CrossoverEvaluator::new(config.clone()).evaluate(&series)?;
    let summary = evaluation.summary(&config);

    println!();
    println!("Direction:          {}", summary.direction);
    println!("Rows evaluated:     {}", summary.rows);
    println!(
        "Benchmark return:   {:.2}%",
        summary.benchmark_return * 100.0
    );
    println!("Strategy return:    {:.2}%", summary.strategy_return * 100.0);
    println!("Benchmark Sharpe:   {:.3}", summary.benchmark_sharpe);
    println!("Strategy Sharpe:    {:.3}", summary.strategy_sharpe);
    println!();
    println!("{}", evaluation.sense_check());

    Ok(())
}
