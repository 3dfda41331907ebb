//! Market-data provider seam.
//!
//! The pipeline consumes daily bars through this trait so the evaluator and
//! CLI stay agnostic of where the data comes from (HTTP chart API, CSV
//! files, test fixtures).

use crate::error::Result;
use crate::types::{Date, PriceBar};

/// A source of daily OHLCV bars for a symbol over a date range.
///
/// Implementations return bars in arbitrary order; consumers sort them into
/// a [`crate::PriceSeries`]. An empty result is not an error at this
/// boundary — the pipeline fails fast on empty input with its own
/// data-unavailable error.
pub trait BarProvider {
    /// Fetches daily bars for `symbol` between `start` and `end` inclusive.
    fn daily_bars(
        &self,
        symbol: &str,
        start: Date,
        end: Date,
    ) -> impl Future<Output = Result<Vec<PriceBar>>> + Send;
}
