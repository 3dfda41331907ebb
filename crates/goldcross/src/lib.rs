#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/goldcross/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # goldcross
//!
//! goldcross is an umbrella crate that re-exports all goldcross sub-crates
//! for convenience. It provides a unified API for deriving technical
//! features from daily OHLCV data and evaluating a moving-average
//! crossover strategy against buy-and-hold.
//!
//! ## Quick Start
//!
//! ```ignore
//! use goldcross::eval::{CrossoverConfig, CrossoverEvaluator};
//! use goldcross::data::read_csv_bars;
//! use goldcross::types::PriceSeries;
//!
//! # fn main() -> goldcross::Result<()> {
//! let bars = read_csv_bars("data/btc-usd.csv").map_err(goldcross::GoldcrossError::from)?;
//! let series = PriceSeries::from_bars(bars);
//!
//! let evaluator = CrossoverEvaluator::new(CrossoverConfig::default());
//! let evaluation = evaluator.evaluate(&series)?;
//!
//! println!("{}", evaluation.sense_check());
//! println!("benchmark Sharpe: {}", evaluation.benchmark_sharpe);
//! println!("strategy  Sharpe: {}", evaluation.strategy_sharpe);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The pipeline is a single forward data flow:
//!
//! 1. **Features** derive per-row columns from raw OHLCV (returns, rolling
//!    stats, RSI, lags) with strict temporal alignment.
//! 2. **Signal generation** compares short and long trailing means of close
//!    and maps golden/death crosses to position multipliers.
//! 3. **Evaluation** applies the signal to realized returns and reports
//!    cumulative curves plus annualized Sharpe ratios for strategy and
//!    benchmark.

/// Version information for the goldcross crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Core type definitions for goldcross.
///
/// Re-exports [`goldcross_traits`]: price bars and series, the fixed-schema
/// feature frame, direction modes, shared statistics, and the provider
/// trait.
pub mod types {
    pub use goldcross_traits::*;
}

// Re-export core items at top level for convenience
pub use goldcross_traits::{
    BarProvider, Date, Direction, FeatureFrame, PriceBar, PriceSeries, Symbol,
};

// Re-export error types
pub use goldcross_traits::{GoldcrossError, Result};

// ============================================================================
// Feature Derivation
// ============================================================================

/// Feature derivation over daily OHLCV series.
///
/// Re-exports [`goldcross_features`]: the feature builder, rolling-window
/// helpers, RSI, and the shared equity-curve routine.
pub mod features {
    pub use goldcross_features::*;
}

pub use goldcross_features::{FeatureBuilder, FeatureConfig};

// ============================================================================
// Signal Generation & Evaluation
// ============================================================================

/// Crossover signal generation and strategy evaluation.
///
/// Re-exports [`goldcross_eval`]: the signal generator, the strategy
/// evaluator, and reporting types.
pub mod eval {
    pub use goldcross_eval::*;
}

pub use goldcross_eval::{CrossoverConfig, CrossoverEvaluator, Evaluation};

// ============================================================================
// Market Data
// ============================================================================

/// Market-data access.
///
/// Re-exports [`goldcross_data`]: the daily-candle chart client and the CSV
/// loader.
pub mod data {
    pub use goldcross_data::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use goldcross::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BarProvider, CrossoverConfig, CrossoverEvaluator, Date, Direction, Evaluation,
        FeatureBuilder, FeatureConfig, FeatureFrame, GoldcrossError, PriceBar, PriceSeries, Result,
        Symbol,
    };
}

// ============================================================================
// Tests
// ============================================================================
