//! Common types used throughout the goldcross pipeline.
//!
//! This module defines the core data types for representing daily price
//! history and the direction mode of the crossover strategy.

use serde::{Deserialize, Serialize};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier.
///
/// Typically a ticker such as "BTC-USD" or "ETH-USD".
pub type Symbol = String;

/// A single daily OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading date.
    pub date: Date,
    /// Open price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Close price.
    pub close: f64,
    /// Volume.
    pub volume: f64,
}

/// A date-ordered daily price history for one instrument.
///
/// `PriceSeries` owns a vector of [`PriceBar`]s sorted ascending by date.
/// The series is assumed gap-free per the instrument's trading calendar;
/// no gap-filling is performed.
///
/// # Example
///
/// ```
/// use goldcross_traits::{PriceBar, PriceSeries};
/// use chrono::NaiveDate;
///
/// let bars = vec![PriceBar {
///     date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
///     open: 100.0,
///     high: 101.0,
///     low: 99.0,
///     close: 100.5,
///     volume: 1_000.0,
/// }];
/// let series = PriceSeries::from_bars(bars);
/// assert_eq!(series.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Creates a series from bars, sorting them ascending by date.
    #[must_use]
    pub fn from_bars(mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.date);
        Self { bars }
    }

    /// Returns the bars in date order.
    #[must_use]
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Returns the number of bars in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns whether the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns the earliest bar, if any.
    #[must_use]
    pub fn first(&self) -> Option<&PriceBar> {
        self.bars.first()
    }

    /// Returns the latest bar, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }
}

impl From<Vec<PriceBar>> for PriceSeries {
    fn from(bars: Vec<PriceBar>) -> Self {
        Self::from_bars(bars)
    }
}

/// Direction mode of the crossover strategy.
///
/// The mode determines the multiplier pair applied on golden and death
/// crosses: `Long` trades the upside only, `Short` the downside only, and
/// `LongShort` both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Long on golden cross, flat on death cross: multipliers {1, 0}.
    Long,
    /// Long on golden cross, short on death cross: multipliers {1, -1}.
    #[default]
    LongShort,
    /// Flat on golden cross, short on death cross: multipliers {0, -1}.
    Short,
}

impl Direction {
    /// Returns the `(positive, negative)` position multiplier pair.
    #[must_use]
    pub const fn multipliers(self) -> (f64, f64) {
        match self {
            Self::Long => (1.0, 0.0),
            Self::LongShort => (1.0, -1.0),
            Self::Short => (0.0, -1.0),
        }
    }

    /// Returns the canonical name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::LongShort => "long_short",
            Self::Short => "short",
        }
    }

    /// Parses a mode name.
    ///
    /// Unrecognized names fall back to [`Direction::Short`]; this is the
    /// defined fallback for the strategy, not an error.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "long" => Self::Long,
            "long_short" | "long-short" => Self::LongShort,
            _ => Self::Short,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
