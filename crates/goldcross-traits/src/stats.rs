//! Statistical utility functions shared by the return and Sharpe
//! computations.
//!
//! The annualization constants here follow a crypto-style calendar: 365
//! periods per year with no weekend gaps, and an annual risk-free rate of
//! half a percent subtracted after annualizing the mean.

use ndarray::Array1;

/// Minimum threshold for standard deviation to avoid division by near-zero.
/// A return series with volatility below this threshold has no meaningful
/// Sharpe ratio.
pub const MIN_STD_THRESHOLD: f64 = 1e-10;

/// Periods per year used for annualization (crypto calendar).
pub const PERIODS_PER_YEAR: f64 = 365.0;

/// Annual risk-free rate subtracted from the annualized mean return.
pub const RISK_FREE_RATE: f64 = 0.005;

/// Arithmetic mean over the finite values of a slice.
///
/// Non-finite entries are excluded; an empty (or all-non-finite) slice
/// yields NaN.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    let finite: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    if finite.is_empty() {
        return f64::NAN;
    }
    finite.iter().sum::<f64>() / finite.len() as f64
}

/// Sample standard deviation (N-1 denominator) over the finite values of a
/// slice.
///
/// Fewer than two finite values yields NaN.
#[must_use]
pub fn sample_std(values: &[f64]) -> f64 {
    let finite: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    if finite.len() < 2 {
        return f64::NAN;
    }
    let arr = Array1::from_vec(finite);
    arr.std(1.0) // ddof=1 for sample std
}

/// Annualized Sharpe ratio of a per-period log-return series, rounded to
/// three decimal places.
///
/// The mean is annualized with [`PERIODS_PER_YEAR`] before subtracting
/// [`RISK_FREE_RATE`]; the standard deviation is scaled by the square root
/// of the same period count. This ordering is part of the numerical
/// contract and must not be rearranged.
///
/// # Degenerate cases
///
/// Fewer than two finite returns, or a standard deviation below
/// [`MIN_STD_THRESHOLD`], yields NaN. Callers treat a non-finite Sharpe as
/// a degenerate-but-not-fatal result.
///
/// # Example
///
/// ```
/// use goldcross_traits::stats::sharpe_ratio;
///
/// let returns = vec![0.01, -0.005, 0.015, 0.002, -0.003];
/// let sharpe = sharpe_ratio(&returns);
/// assert!(sharpe.is_finite());
/// ```
#[must_use]
pub fn sharpe_ratio(log_returns: &[f64]) -> f64 {
    let periodic_mean = mean(log_returns);
    let periodic_std = sample_std(log_returns);
    if !periodic_mean.is_finite() || !periodic_std.is_finite() {
        return f64::NAN;
    }

    let annual_mean = periodic_mean * PERIODS_PER_YEAR - RISK_FREE_RATE;
    let sigma = periodic_std * PERIODS_PER_YEAR.sqrt();

    if sigma <= MIN_STD_THRESHOLD {
        return f64::NAN;
    }

    round_dp(annual_mean / sigma, 3)
}

/// Rounds a value to `decimals` decimal places.
///
/// Non-finite values pass through unchanged.
#[must_use]
pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
