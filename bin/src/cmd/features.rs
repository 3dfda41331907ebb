//! Features command implementation.

use std::path::Path;

use anyhow::Result;
use goldcross_features::{FeatureBuilder, FeatureConfig, RsiConfig};

use crate::data;

/// Derive the feature columns for a symbol and print the leading rows.
pub(crate) async fn show_features(
    symbol: &str,
    start: &str,
    end: &str,
    csv: Option<&Path>,
    rows: usize,
    sma_rsi: bool,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Feature Derivation                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Symbol:  {}", symbol);
    println!("Period:  {} to {}", start, end);
    println!(
        "RSI:     14-period, {} average",
        if sma_rsi { "simple" } else { "exponential" }
    );
    println!();

    let start_date = data::parse_date(start)?;
    let end_date = data::parse_date(end)?;

    println!("Loading market data...");
    let series = data::load_series(symbol, start_date, end_date, csv).await?;
    println!("Loaded {} bars", series.len());
    println!();

    let config = FeatureConfig {
        rsi: RsiConfig {
            ema: !sma_rsi,
            ..RsiConfig::default()
        },
        ..FeatureConfig::default()
    };
    let build = FeatureBuilder::new(config).build(&series)?;
    let frame = &build.frame;

    println!(
        "Derived {} fully defined rows (of {} input bars)",
        frame.len(),
        series.len()
    );
    println!();

    println!(
        "{:<12} {:>10} {:>9} {:>10} {:>8} {:>8} {:>11}",
        "Date", "Close", "Return", "Roll Rets", "Range", "RSI", "Bench Curve"
    );
    println!("{}", "─".repeat(74));

    for i in 0..rows.min(frame.len()) {
        println!(
            "{:<12} {:>10.2} {:>9.4} {:>10.4} {:>8.4} {:>8.2} {:>11.4}",
            frame.dates[i],
            frame.close[i],
            frame.returns[i].unwrap_or(f64::NAN),
            frame.roll_rets[i].unwrap_or(f64::NAN),
            frame.range[i],
            frame.rsi[i].unwrap_or(f64::NAN),
            frame.bench_curve[i].unwrap_or(f64::NAN),
        );
    }
    println!();

    println!(
        "Benchmark Sharpe over the feature pass: {:.3}",
        build.benchmark_sharpe
    );
    println!();

    Ok(())
}
