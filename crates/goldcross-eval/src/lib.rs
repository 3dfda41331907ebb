#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/goldcross/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Crossover signal generation and strategy evaluation.

/// The version of the goldcross-eval crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod crossover;
pub mod evaluator;
pub mod report;

// Re-export main types
pub use crossover::SignalGenerator;
pub use evaluator::{CrossoverConfig, CrossoverEvaluator, Evaluation};
pub use report::{BacktestSummary, SenseCheck};
