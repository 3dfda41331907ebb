//! Relative strength index over daily closes.

use serde::{Deserialize, Serialize};

/// Configuration for the RSI calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiConfig {
    /// Lookback in periods (default: 14).
    pub periods: usize,
    /// Smooth gains and losses with an exponential average rather than a
    /// simple trailing mean (default: true).
    pub ema: bool,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self {
            periods: 14,
            ema: true,
        }
    }
}

/// Computes the RSI column for a close series.
///
/// Per-row close differences are split into gains (`max(diff, 0)`) and
/// losses (`max(-diff, 0)`). In EMA mode both are smoothed with an
/// adjust-weighted exponential average using a center-of-mass of
/// `periods - 1`; in SMA mode with a trailing mean over `periods` rows.
/// Either way a value is produced only once `periods` differences have been
/// observed, so rows before index `periods` are undefined.
///
/// RSI = 100 − 100 / (1 + gains / losses). A zero loss average with
/// positive gains saturates at 100 through IEEE division; a 0/0 ratio
/// (constant closes) is undefined rather than an error.
#[must_use]
pub fn rsi(close: &[f64], config: &RsiConfig) -> Vec<Option<f64>> {
    let n = close.len();
    let periods = config.periods;
    let mut out = vec![None; n];
    if n == 0 || periods == 0 {
        return out;
    }

    let mut up = vec![0.0; n];
    let mut down = vec![0.0; n];
    for i in 1..n {
        let diff = close[i] - close[i - 1];
        up[i] = diff.max(0.0);
        down[i] = (-diff).max(0.0);
    }

    if config.ema {
        // Adjust-weighted EMA with center-of-mass `periods - 1`: the
        // numerator/denominator recursion reproduces the finite-history
        // weighting exactly, not the steady-state approximation.
        let alpha = 1.0 / periods as f64;
        let decay = 1.0 - alpha;
        let mut num_up = 0.0;
        let mut num_down = 0.0;
        let mut den = 0.0;
        for i in 1..n {
            num_up = decay * num_up + up[i];
            num_down = decay * num_down + down[i];
            den = decay * den + 1.0;
            if i >= periods {
                out[i] = rsi_value(num_up / den, num_down / den);
            }
        }
    } else {
        for i in periods..n {
            let window = i + 1 - periods..=i;
            let ma_up = up[window.clone()].iter().sum::<f64>() / periods as f64;
            let ma_down = down[window].iter().sum::<f64>() / periods as f64;
            out[i] = rsi_value(ma_up, ma_down);
        }
    }

    out
}

fn rsi_value(ma_up: f64, ma_down: f64) -> Option<f64> {
    let value = 100.0 - 100.0 / (1.0 + ma_up / ma_down);
    if value.is_nan() { None } else { Some(value) }
}
