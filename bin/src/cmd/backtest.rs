//! Backtest command implementation.

use std::path::Path;

use anyhow::Result;
use goldcross_eval::{CrossoverConfig, CrossoverEvaluator};
use goldcross_traits::Direction;

use crate::data;

/// Run a crossover backtest for a symbol over a given time period.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn run_backtest(
    symbol: &str,
    start: &str,
    end: &str,
    direction: &str,
    short_period: usize,
    long_period: usize,
    csv: Option<&Path>,
    format: &str,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Crossover Backtest                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let direction = Direction::from_name(direction);

    println!("Symbol:    {}", symbol);
    println!("Period:    {} to {}", start, end);
    println!("Direction: {}", direction);
    println!("Windows:   MA{} / MA{}", short_period, long_period);
    if let Some(path) = csv {
        println!("Source:    {}", path.display());
    }
    println!();

    let start_date = data::parse_date(start)?;
    let end_date = data::parse_date(end)?;

    println!("Loading market data...");
    let series = data::load_series(symbol, start_date, end_date, csv).await?;
    println!("Loaded {} bars", series.len());
    println!();

    let config = CrossoverConfig {
        symbol: symbol.to_string(),
        start_date,
        end_date,
        direction,
        short_period,
        long_period,
    };
    let evaluation = CrossoverEvaluator::new(config.clone()).evaluate(&series)?;
    let summary = evaluation.summary(&config);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("BACKTEST RESULTS");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Rows evaluated:      {:>10}", summary.rows);
    if let (Some(first), Some(last)) = (summary.first_date, summary.last_date) {
        println!("Effective period:    {} to {}", first, last);
    }
    println!();

    println!("Performance:");
    println!(
        "  Benchmark Return:  {:>10.2}%",
        summary.benchmark_return * 100.0
    );
    println!(
        "  Strategy Return:   {:>10.2}%",
        summary.strategy_return * 100.0
    );
    println!("  Benchmark Sharpe:  {}", format_sharpe(summary.benchmark_sharpe));
    println!("  Strategy Sharpe:   {}", format_sharpe(summary.strategy_sharpe));
    println!();

    println!("{}", evaluation.sense_check());
    println!();

    Ok(())
}

/// Renders a Sharpe ratio, flagging degenerate (non-finite) values instead
/// of printing them raw.
fn format_sharpe(sharpe: f64) -> String {
    if sharpe.is_finite() {
        format!("{:>10.3}", sharpe)
    } else {
        format!("{:>10}", "degenerate")
    }
}
