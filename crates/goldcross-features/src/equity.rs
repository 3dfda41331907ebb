//! Shared log-return equity-curve routine.
//!
//! Both the buy-and-hold benchmark and the crossover strategy reduce to the
//! same computation: build a per-row log-return series, take its Sharpe
//! ratio, and accumulate it into a cumulative simple-return curve.

use goldcross_traits::frame::defined;
use goldcross_traits::stats::sharpe_ratio;
use goldcross_traits::{FeatureFrame, GoldcrossError, Result};

/// Which return series to build from the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnBasis {
    /// Buy-and-hold: `ln(open[i+1] / close[i-1])` with no position
    /// multiplier. The entry at the next day's open avoids lookahead on the
    /// close; the close two rows back adds one further day of execution
    /// lag. The offset is part of the numerical contract and is preserved
    /// exactly. Undefined at the first and last row.
    Benchmark,
    /// Strategy: `ln(close[i] / close[i-1])` scaled by the signal (and the
    /// previous-signal column when one is present, 1 otherwise). Undefined
    /// at the first row.
    Strategy,
}

/// A cumulative return curve with its Sharpe ratio.
#[derive(Debug, Clone)]
pub struct EquityCurve {
    /// Cumulative simple return per row; undefined where the underlying
    /// log return is undefined.
    pub curve: Vec<Option<f64>>,
    /// Annualized Sharpe ratio of the log-return series. Non-finite for
    /// degenerate series (near-zero volatility, too few rows).
    pub sharpe: f64,
}

/// Builds the cumulative return curve and Sharpe ratio for a frame.
///
/// The curve is the running sum of the defined log returns mapped through
/// `exp(x) - 1`: a log-return accumulation converted back to simple
/// cumulative return. Accumulation continues past undefined rows; the
/// curve is undefined only at the rows whose own log return is undefined.
///
/// # Errors
///
/// `Strategy` basis requires the signal column to be populated; otherwise
/// a signal-computation error is returned.
pub fn equity_curve(frame: &FeatureFrame, basis: ReturnBasis) -> Result<EquityCurve> {
    let log_returns = log_returns(frame, basis)?;
    let sharpe = sharpe_ratio(&defined(&log_returns));

    let mut cumulative = 0.0;
    let mut curve = Vec::with_capacity(log_returns.len());
    for log_return in &log_returns {
        curve.push(log_return.map(|r| {
            cumulative += r;
            cumulative.exp() - 1.0
        }));
    }

    Ok(EquityCurve { curve, sharpe })
}

fn log_returns(frame: &FeatureFrame, basis: ReturnBasis) -> Result<Vec<Option<f64>>> {
    let n = frame.len();
    match basis {
        ReturnBasis::Benchmark => Ok((0..n)
            .map(|i| {
                if i > 0 && i + 1 < n {
                    keep_defined((frame.open[i + 1] / frame.close[i - 1]).ln())
                } else {
                    None
                }
            })
            .collect()),
        ReturnBasis::Strategy => {
            if frame.signal.len() != n {
                return Err(GoldcrossError::SignalComputation(
                    "signal column not computed".to_string(),
                ));
            }
            let prev_signal = frame.prev_signal();
            Ok((0..n)
                .map(|i| {
                    if i == 0 {
                        return None;
                    }
                    let base = (frame.close[i] / frame.close[i - 1]).ln();
                    let prev = prev_signal.map_or(1.0, |p| p[i]);
                    keep_defined(base * frame.signal[i] * prev)
                })
                .collect())
        }
    }
}

const fn keep_defined(value: f64) -> Option<f64> {
    if value.is_nan() { None } else { Some(value) }
}
