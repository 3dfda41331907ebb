//! Feature construction over a raw price series.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use goldcross_traits::{FeatureFrame, GoldcrossError, PriceSeries, Result};

use crate::equity::{ReturnBasis, equity_curve};
use crate::rolling::{lag, rolling_mean, rolling_sum};
use crate::rsi::{RsiConfig, rsi};

/// Configuration for feature derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Window for the trailing return sum and trailing range mean
    /// (default: 30 rows).
    pub rolling_window: usize,
    /// RSI configuration.
    pub rsi: RsiConfig,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            rolling_window: 30,
            rsi: RsiConfig::default(),
        }
    }
}

/// A built feature frame together with the benchmark Sharpe ratio computed
/// during the pass.
///
/// The Sharpe ratio is threaded through explicitly rather than held as
/// builder state, so each stage's data dependencies stay visible.
#[derive(Debug, Clone)]
pub struct FeatureBuild {
    /// The feature frame, truncated to fully defined rows.
    pub frame: FeatureFrame,
    /// Sharpe ratio of the benchmark return series over the pre-truncation
    /// frame.
    pub benchmark_sharpe: f64,
}

/// Derives the feature columns of the pipeline from raw OHLCV bars.
#[derive(Debug, Clone, Default)]
pub struct FeatureBuilder {
    config: FeatureConfig,
}

impl FeatureBuilder {
    /// Creates a builder with the given configuration.
    #[must_use]
    pub const fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    /// The builder's configuration.
    #[must_use]
    pub const fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Builds the feature frame for a price series.
    ///
    /// Columns are computed in dependency order: day-of-week, percent
    /// returns, trailing return sum, high/low range, trailing range mean,
    /// RSI and its ratio, the benchmark cumulative return curve, and lagged
    /// copies of returns, range, and RSI ratio at lags 1 and 2. Rows left
    /// undefined by any lookback are then dropped, which truncates the
    /// start of the series by the longest window and the end by the
    /// benchmark's next-open reference.
    ///
    /// # Errors
    ///
    /// Fails fast with a data-unavailable error on an empty series, and
    /// with an insufficient-data error when no row survives truncation.
    pub fn build(&self, series: &PriceSeries) -> Result<FeatureBuild> {
        if series.is_empty() {
            return Err(GoldcrossError::DataUnavailable(
                "empty price series".to_string(),
            ));
        }

        let mut frame = FeatureFrame::from_series(series);

        frame.dow = frame
            .dates
            .iter()
            .map(|d| d.weekday().num_days_from_monday())
            .collect();
        frame.returns = pct_change(&frame.close);
        frame.roll_rets = rolling_sum(&frame.returns, self.config.rolling_window);
        frame.range = frame
            .high
            .iter()
            .zip(&frame.low)
            .map(|(h, l)| h / l - 1.0)
            .collect();
        let range_opt: Vec<Option<f64>> = frame.range.iter().copied().map(Some).collect();
        frame.avg_range = rolling_mean(&range_opt, self.config.rolling_window);
        frame.rsi = rsi(&frame.close, &self.config.rsi);
        frame.rsi_ret = ratio_to_previous(&frame.rsi);

        let benchmark = equity_curve(&frame, ReturnBasis::Benchmark)?;
        frame.bench_curve = benchmark.curve;

        frame.returns_lag1 = lag(&frame.returns, 1);
        frame.returns_lag2 = lag(&frame.returns, 2);
        frame.range_lag1 = lag(&range_opt, 1);
        frame.range_lag2 = lag(&range_opt, 2);
        frame.rsi_ret_lag1 = lag(&frame.rsi_ret, 1);
        frame.rsi_ret_lag2 = lag(&frame.rsi_ret, 2);

        frame.retain_defined();
        if frame.is_empty() {
            return Err(GoldcrossError::InsufficientData(format!(
                "no rows survive the feature lookbacks ({} input rows)",
                series.len()
            )));
        }

        Ok(FeatureBuild {
            frame,
            benchmark_sharpe: benchmark.sharpe,
        })
    }
}

/// Simple percent change of a dense column; undefined at the first row.
fn pct_change(values: &[f64]) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            if i > 0 {
                Some(values[i] / values[i - 1] - 1.0)
            } else {
                None
            }
        })
        .collect()
}

/// Ratio of each defined value to the previous defined row.
fn ratio_to_previous(values: &[Option<f64>]) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            if i == 0 {
                return None;
            }
            match (values[i], values[i - 1]) {
                (Some(current), Some(previous)) => {
                    let ratio = current / previous;
                    if ratio.is_nan() { None } else { Some(ratio) }
                }
                _ => None,
            }
        })
        .collect()
}
