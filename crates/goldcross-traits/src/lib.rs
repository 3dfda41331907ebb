#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/goldcross/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core type definitions for the goldcross pipeline.
//!
//! This crate provides the foundational types shared by the feature
//! builder, signal generator, strategy evaluator, and data providers.

/// The version of the goldcross-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod frame;
pub mod provider;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{GoldcrossError, Result};
pub use frame::FeatureFrame;
pub use provider::BarProvider;
pub use types::{Date, Direction, PriceBar, PriceSeries, Symbol};
