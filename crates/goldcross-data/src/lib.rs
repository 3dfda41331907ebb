#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/goldcross/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Market-data access for the goldcross pipeline.

/// The version of the goldcross-data crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod client;
pub mod csv;
pub mod error;
pub mod types;

// Re-export main types
pub use client::ChartClient;
pub use csv::{read_csv_bars, write_csv_bars};
pub use error::{DataError, Result};
pub use types::{Chart, ChartApiError, ChartResponse, ChartResult, Indicators, QuoteBlock};
