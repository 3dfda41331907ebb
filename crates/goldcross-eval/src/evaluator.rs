//! Strategy evaluation: features → signal → curves → Sharpe ratios.

use serde::{Deserialize, Serialize};

use goldcross_features::builder::{FeatureBuild, FeatureBuilder, FeatureConfig};
use goldcross_features::equity::{ReturnBasis, equity_curve};
use goldcross_traits::frame::defined;
use goldcross_traits::{
    Date, Direction, FeatureFrame, GoldcrossError, PriceSeries, Result, Symbol,
};

use crate::crossover::SignalGenerator;
use crate::report::{BacktestSummary, SenseCheck};

/// Constructor-time configuration of the crossover evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossoverConfig {
    /// Instrument to evaluate.
    pub symbol: Symbol,
    /// Start of the requested date range.
    pub start_date: Date,
    /// End of the requested date range.
    pub end_date: Date,
    /// Direction mode (default: long/short).
    pub direction: Direction,
    /// Short moving-average window (default: 12).
    pub short_period: usize,
    /// Long moving-average window (default: 21).
    pub long_period: usize,
}

impl Default for CrossoverConfig {
    fn default() -> Self {
        Self {
            symbol: "BTC-USD".to_string(),
            start_date: Date::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: Date::from_ymd_opt(2024, 12, 31).unwrap(),
            direction: Direction::LongShort,
            short_period: 12,
            long_period: 21,
        }
    }
}

/// Result of a crossover evaluation: the finalized frame and the two
/// Sharpe ratios.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Feature frame with signal and both cumulative-return curves, reduced
    /// to fully defined rows.
    pub frame: FeatureFrame,
    /// Sharpe ratio of the benchmark return series.
    pub benchmark_sharpe: f64,
    /// Sharpe ratio of the strategy return series.
    pub strategy_sharpe: f64,
}

impl Evaluation {
    /// Buy-and-hold vs benchmark-curve sanity diagnostic.
    #[must_use]
    pub fn sense_check(&self) -> SenseCheck {
        SenseCheck::from_frame(&self.frame)
    }

    /// Builds the serializable summary for this evaluation.
    #[must_use]
    pub fn summary(&self, config: &CrossoverConfig) -> BacktestSummary {
        let check = self.sense_check();
        BacktestSummary {
            symbol: config.symbol.clone(),
            direction: config.direction,
            short_period: config.short_period,
            long_period: config.long_period,
            rows: self.frame.len(),
            first_date: self.frame.dates.first().copied(),
            last_date: self.frame.dates.last().copied(),
            benchmark_sharpe: self.benchmark_sharpe,
            strategy_sharpe: self.strategy_sharpe,
            benchmark_return: defined(&self.frame.bench_curve)
                .last()
                .copied()
                .unwrap_or(f64::NAN),
            strategy_return: defined(&self.frame.strat_curve)
                .last()
                .copied()
                .unwrap_or(f64::NAN),
            buy_hold_return: check.buy_hold_return,
        }
    }
}

/// Orchestrates the full pipeline over an in-memory price series.
///
/// The evaluator owns no mutable state across calls: each [`Self::evaluate`]
/// threads its frame and Sharpe ratios through the stages explicitly.
#[derive(Debug, Clone, Default)]
pub struct CrossoverEvaluator {
    config: CrossoverConfig,
    features: FeatureBuilder,
}

impl CrossoverEvaluator {
    /// Creates an evaluator with default feature settings.
    #[must_use]
    pub fn new(config: CrossoverConfig) -> Self {
        Self {
            config,
            features: FeatureBuilder::default(),
        }
    }

    /// Creates an evaluator with explicit feature settings.
    #[must_use]
    pub const fn with_features(config: CrossoverConfig, features: FeatureConfig) -> Self {
        Self {
            config,
            features: FeatureBuilder::new(features),
        }
    }

    /// The evaluator's configuration.
    #[must_use]
    pub const fn config(&self) -> &CrossoverConfig {
        &self.config
    }

    /// Runs the pipeline: build features, compute the crossover signal,
    /// and evaluate strategy against benchmark.
    ///
    /// The benchmark curve is recomputed after the moving-average lookbacks
    /// finalize the row set, with the identical routine used during feature
    /// construction; its Sharpe ratio from that second pass is the one
    /// reported.
    ///
    /// # Errors
    ///
    /// Fails fast on an empty series (`DataUnavailable`) and when too few
    /// rows survive the lookbacks (`InsufficientData`). A degenerate
    /// (non-finite) Sharpe ratio is not an error; callers flag it.
    pub fn evaluate(&self, series: &PriceSeries) -> Result<Evaluation> {
        let FeatureBuild { mut frame, .. } = self.features.build(series)?;

        let generator = SignalGenerator::new(
            self.config.short_period,
            self.config.long_period,
            self.config.direction,
        );
        generator.ensure_moving_averages(&mut frame)?;

        let benchmark = equity_curve(&frame, ReturnBasis::Benchmark)?;
        frame.bench_curve = benchmark.curve;

        generator.apply_signal(&mut frame)?;

        let strategy = equity_curve(&frame, ReturnBasis::Strategy)?;
        frame.strat_curve = strategy.curve;

        frame.retain_defined();
        if frame.len() < 2 {
            return Err(GoldcrossError::InsufficientData(format!(
                "{} rows remain after lookback truncation",
                frame.len()
            )));
        }

        Ok(Evaluation {
            frame,
            benchmark_sharpe: benchmark.sharpe,
            strategy_sharpe: strategy.sharpe,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldcross_traits::PriceBar;

    fn sample_series(n: usize) -> PriceSeries {
        let bars: Vec<PriceBar> = (0..n)
            .map(|i| {
                let base = 100.0 + (i as f64 * 0.45).sin() * 8.0 + i as f64 * 0.05;
                PriceBar {
                    date: Date::from_ymd_opt(2023, 6, 1).unwrap() + chrono::Days::new(i as u64),
                    open: base - 0.3,
                    high: base + 1.2,
                    low: base - 1.2,
                    close: base,
                    volume: 5_000.0,
                }
            })
            .collect();
        PriceSeries::from_bars(bars)
    }

    #[test]
    fn test_config_defaults() {
        let config = CrossoverConfig::default();
        assert_eq!(config.direction, Direction::LongShort);
        assert_eq!(config.short_period, 12);
        assert_eq!(config.long_period, 21);
    }

    #[test]
    fn test_evaluate_row_arithmetic() {
        // n input rows lose 31 to the feature lookbacks, long_period - 1 to
        // the moving averages, and 2 to the recomputed curves' endpoints.
        let n = 100;
        let evaluation = CrossoverEvaluator::new(CrossoverConfig::default())
            .evaluate(&sample_series(n))
            .unwrap();
        assert_eq!(evaluation.frame.len(), n - 31 - 20 - 2);
    }

    #[test]
    fn test_evaluate_final_frame_fully_defined() {
        let evaluation = CrossoverEvaluator::new(CrossoverConfig::default())
            .evaluate(&sample_series(100))
            .unwrap();
        let frame = &evaluation.frame;
        assert!(frame.bench_curve.iter().all(Option::is_some));
        assert!(frame.strat_curve.iter().all(Option::is_some));
        assert!(frame.ma_short.iter().all(Option::is_some));
        assert_eq!(frame.signal.len(), frame.len());
    }

    #[test]
    fn test_evaluate_long_short_signal_values() {
        let evaluation = CrossoverEvaluator::new(CrossoverConfig::default())
            .evaluate(&sample_series(120))
            .unwrap();
        assert!(
            evaluation
                .frame
                .signal
                .iter()
                .all(|&s| s == 1.0 || s == -1.0)
        );
    }

    #[test]
    fn test_evaluate_long_mode_never_short() {
        let config = CrossoverConfig {
            direction: Direction::Long,
            ..Default::default()
        };
        let evaluation = CrossoverEvaluator::new(config)
            .evaluate(&sample_series(120))
            .unwrap();
        assert!(
            evaluation
                .frame
                .signal
                .iter()
                .all(|&s| s == 1.0 || s == 0.0)
        );
    }

    #[test]
    fn test_evaluate_reports_finite_sharpes() {
        let evaluation = CrossoverEvaluator::new(CrossoverConfig::default())
            .evaluate(&sample_series(150))
            .unwrap();
        assert!(evaluation.benchmark_sharpe.is_finite());
        assert!(evaluation.strategy_sharpe.is_finite());
    }

    #[test]
    fn test_evaluate_empty_series_fails_fast() {
        let err = CrossoverEvaluator::new(CrossoverConfig::default())
            .evaluate(&PriceSeries::default())
            .unwrap_err();
        assert!(matches!(err, GoldcrossError::DataUnavailable(_)));
    }

    #[test]
    fn test_evaluate_short_series_is_insufficient() {
        let err = CrossoverEvaluator::new(CrossoverConfig::default())
            .evaluate(&sample_series(40))
            .unwrap_err();
        assert!(matches!(err, GoldcrossError::InsufficientData(_)));
    }

    #[test]
    fn test_sense_check_and_summary() {
        let config = CrossoverConfig::default();
        let evaluation = CrossoverEvaluator::new(config.clone())
            .evaluate(&sample_series(120))
            .unwrap();

        let check = evaluation.sense_check();
        assert!(check.buy_hold_return.is_finite());
        assert!(check.benchmark_final.is_finite());

        let summary = evaluation.summary(&config);
        assert_eq!(summary.rows, evaluation.frame.len());
        assert_eq!(summary.direction, Direction::LongShort);
        assert!(summary.benchmark_return.is_finite());
        assert!(summary.strategy_return.is_finite());
        assert_eq!(summary.first_date, evaluation.frame.dates.first().copied());
    }
}
