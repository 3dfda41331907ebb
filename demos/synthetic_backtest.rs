//! Crossover backtest over a synthetic price series.
//!
//! This example runs the full pipeline offline: it generates a
//! deterministic trending/oscillating daily series, derives the feature
//! frame, and compares the crossover strategy against buy-and-hold.

use chrono::NaiveDate;
use goldcross::eval::{CrossoverConfig, CrossoverEvaluator};
use goldcross::{Direction, PriceBar, PriceSeries};

/// Number of synthetic trading days.
const DAYS: usize = 365;

/// Annualized drift per day of the synthetic series.
const DRIFT: f64 = 0.0008;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> goldcross::Result<()> {
    let series = synthetic_series(DAYS);
    println!(
        "Synthetic series: {} bars, {} to {}",
        series.len(),
        series.first().unwrap().date,
        series.last().unwrap().date
    );

    let config = CrossoverConfig {
        symbol: "SYN-USD".to_string(),
        start_date: series.first().unwrap().date,
        end_date: series.last().unwrap().date,
        direction: Direction::LongShort,
        short_period: 12,
        long_period: 21,
    };

    let evaluation = CrossoverEvaluator::new(config.clone()).evaluate(&series)?;
    let summary = evaluation.summary(&config);

    println!();
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

/// A deterministic daily series with drift and two overlapping cycles, so
/// the moving averages actually cross a few times.
fn synthetic_series(days: usize) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars: Vec<PriceBar> = (0..days)
        .map(|i| {
            let t = i as f64;
            let cycle = (t * 0.11).sin() * 6.0 + (t * 0.031).sin() * 11.0;
            let close = 100.0 * (1.0 + DRIFT).powf(t) + cycle;
            let spread = 1.0 + (t * 0.07).cos().abs();
            PriceBar {
                date: start + chrono::Days::new(i as u64),
                open: close - 0.4,
                high: close + spread,
                low: close - spread,
                close,
                volume: 10_000.0 + (t * 0.2).cos() * 1_500.0,
            }
        })
        .collect();
    PriceSeries::from_bars(bars)
}
