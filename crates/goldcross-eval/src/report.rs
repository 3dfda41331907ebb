//! Serializable backtest reporting types.

use serde::{Deserialize, Serialize};

use goldcross_traits::stats::round_dp;
use goldcross_traits::{Date, Direction, FeatureFrame, Symbol};

/// Diagnostic comparison of raw buy-and-hold return against the benchmark
/// curve's final value.
///
/// The two differ by construction — the benchmark curve enters at the next
/// day's open with an extra day of execution lag — so this is a sanity
/// diagnostic for logging, never a hard assertion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SenseCheck {
    /// Last close over first close minus 1, rounded to three decimals.
    pub buy_hold_return: f64,
    /// Final defined value of the benchmark cumulative-return curve,
    /// rounded to three decimals.
    pub benchmark_final: f64,
}

impl SenseCheck {
    /// Builds the diagnostic from a finalized frame.
    #[must_use]
    pub fn from_frame(frame: &FeatureFrame) -> Self {
        let buy_hold = match (frame.close.first(), frame.close.last()) {
            (Some(first), Some(last)) => last / first - 1.0,
            _ => f64::NAN,
        };
        let benchmark_final = frame
            .bench_curve
            .iter()
            .rev()
            .find_map(|v| *v)
            .unwrap_or(f64::NAN);
        Self {
            buy_hold_return: round_dp(buy_hold, 3),
            benchmark_final: round_dp(benchmark_final, 3),
        }
    }

    /// Absolute difference between the two figures.
    #[must_use]
    pub fn divergence(&self) -> f64 {
        (self.buy_hold_return - self.benchmark_final).abs()
    }
}

impl std::fmt::Display for SenseCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sense check: buy-and-hold {:.3} vs benchmark curve {:.3}",
            self.buy_hold_return, self.benchmark_final
        )
    }
}

/// Summary of a crossover backtest, suitable for text or JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestSummary {
    /// Instrument evaluated.
    pub symbol: Symbol,
    /// Direction mode of the strategy.
    pub direction: Direction,
    /// Short moving-average window.
    pub short_period: usize,
    /// Long moving-average window.
    pub long_period: usize,
    /// Rows surviving all lookbacks.
    pub rows: usize,
    /// First surviving trading date.
    pub first_date: Option<Date>,
    /// Last surviving trading date.
    pub last_date: Option<Date>,
    /// Benchmark Sharpe ratio (NaN/infinite when degenerate).
    pub benchmark_sharpe: f64,
    /// Strategy Sharpe ratio (NaN/infinite when degenerate).
    pub strategy_sharpe: f64,
    /// Final value of the benchmark cumulative-return curve.
    pub benchmark_return: f64,
    /// Final value of the strategy cumulative-return curve.
    pub strategy_return: f64,
    /// Raw buy-and-hold return over the surviving rows.
    pub buy_hold_return: f64,
}
