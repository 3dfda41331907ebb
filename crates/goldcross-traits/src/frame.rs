//! Fixed-schema feature table for a single instrument.
//!
//! The feature set of the pipeline is static and known at compile time, so
//! derived columns are plain struct fields rather than a dynamically keyed
//! table. Columns that are undefined until their lookback window is
//! satisfied are `Option<f64>`; raw OHLCV columns and columns defined from
//! the first row are plain `f64`.

use crate::types::{Date, PriceSeries};
use serde::{Deserialize, Serialize};

/// Column-oriented feature table over a daily price history.
///
/// Every derived column at row *i* depends only on rows ≤ *i*, with one
/// intentional exception: the benchmark log return reads the open at
/// *i + 1* to model a next-day execution fill. That forward reference
/// simulates entering at tomorrow's open; it does not leak future
/// information into any feature.
///
/// A freshly constructed frame carries only the raw columns; the feature
/// builder and the signal generator populate the derived ones. Populated
/// optional columns always have the same length as the frame; columns not
/// yet computed are empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureFrame {
    /// Trading dates, ascending.
    pub dates: Vec<Date>,
    /// Open prices.
    pub open: Vec<f64>,
    /// High prices.
    pub high: Vec<f64>,
    /// Low prices.
    pub low: Vec<f64>,
    /// Close prices.
    pub close: Vec<f64>,
    /// Volumes.
    pub volume: Vec<f64>,

    /// Day of week of the date index (0 = Monday).
    pub dow: Vec<u32>,
    /// Simple percent change of close; undefined at the first row.
    pub returns: Vec<Option<f64>>,
    /// Trailing 30-row sum of `returns`.
    pub roll_rets: Vec<Option<f64>>,
    /// High / low − 1.
    pub range: Vec<f64>,
    /// Trailing 30-row mean of `range`.
    pub avg_range: Vec<Option<f64>>,
    /// Relative strength index.
    pub rsi: Vec<Option<f64>>,
    /// RSI ratio to the previous row.
    pub rsi_ret: Vec<Option<f64>>,
    /// Benchmark buy-and-hold cumulative return curve.
    pub bench_curve: Vec<Option<f64>>,

    /// `returns` lagged 1 period.
    pub returns_lag1: Vec<Option<f64>>,
    /// `returns` lagged 2 periods.
    pub returns_lag2: Vec<Option<f64>>,
    /// `range` lagged 1 period.
    pub range_lag1: Vec<Option<f64>>,
    /// `range` lagged 2 periods.
    pub range_lag2: Vec<Option<f64>>,
    /// `rsi_ret` lagged 1 period.
    pub rsi_ret_lag1: Vec<Option<f64>>,
    /// `rsi_ret` lagged 2 periods.
    pub rsi_ret_lag2: Vec<Option<f64>>,

    /// Short-window trailing mean of close.
    pub ma_short: Vec<Option<f64>>,
    /// Long-window trailing mean of close.
    pub ma_long: Vec<Option<f64>>,
    /// Position multiplier per row.
    pub signal: Vec<f64>,
    /// Strategy cumulative return curve.
    pub strat_curve: Vec<Option<f64>>,

    // Windows the moving-average columns were computed with. Guards the
    // memoization check so the columns are computed once and only once.
    ma_windows: Option<(usize, usize)>,
    // Optional previous-signal multiplier column; absent means 1.
    prev_signal: Option<Vec<f64>>,
}

impl FeatureFrame {
    /// Creates a frame holding the raw columns of a price series. Derived
    /// columns start empty.
    #[must_use]
    pub fn from_series(series: &PriceSeries) -> Self {
        let bars = series.bars();
        Self {
            dates: bars.iter().map(|b| b.date).collect(),
            open: bars.iter().map(|b| b.open).collect(),
            high: bars.iter().map(|b| b.high).collect(),
            low: bars.iter().map(|b| b.low).collect(),
            close: bars.iter().map(|b| b.close).collect(),
            volume: bars.iter().map(|b| b.volume).collect(),
            ..Self::default()
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns whether the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Whether the moving-average columns are already present for exactly
    /// these windows.
    ///
    /// This is the explicit membership check guarding recomputation: the
    /// columns are computed once per `(short, long)` pair and reused
    /// thereafter.
    #[must_use]
    pub fn has_moving_averages(&self, short: usize, long: usize) -> bool {
        self.ma_windows == Some((short, long))
    }

    /// Stores the moving-average columns and records the windows they were
    /// computed with.
    ///
    /// # Panics
    ///
    /// Panics if either column's length differs from the frame's.
    pub fn set_moving_averages(
        &mut self,
        short: usize,
        long: usize,
        ma_short: Vec<Option<f64>>,
        ma_long: Vec<Option<f64>>,
    ) {
        assert_eq!(ma_short.len(), self.len());
        assert_eq!(ma_long.len(), self.len());
        self.ma_short = ma_short;
        self.ma_long = ma_long;
        self.ma_windows = Some((short, long));
    }

    /// The windows the moving-average columns were computed with, if any.
    #[must_use]
    pub const fn ma_windows(&self) -> Option<(usize, usize)> {
        self.ma_windows
    }

    /// Sets the previous-signal multiplier column.
    ///
    /// When absent, strategy returns use a multiplier of 1 in its place.
    pub fn set_prev_signal(&mut self, prev_signal: Vec<f64>) {
        self.prev_signal = Some(prev_signal);
    }

    /// The previous-signal multiplier column, if set.
    #[must_use]
    pub fn prev_signal(&self) -> Option<&[f64]> {
        self.prev_signal.as_deref()
    }

    /// Drops every row that has an undefined value in any populated
    /// optional column, returning the number of rows removed.
    ///
    /// Columns that have not been computed yet (empty) are ignored, so the
    /// same routine serves after each pipeline stage: it truncates the
    /// series start by the longest lookback satisfied so far and the end by
    /// the benchmark's forward reference.
    pub fn retain_defined(&mut self) -> usize {
        let n = self.len();
        let mut keep = vec![true; n];

        let optional_columns: [&[Option<f64>]; 15] = [
            &self.returns,
            &self.roll_rets,
            &self.avg_range,
            &self.rsi,
            &self.rsi_ret,
            &self.bench_curve,
            &self.returns_lag1,
            &self.returns_lag2,
            &self.range_lag1,
            &self.range_lag2,
            &self.rsi_ret_lag1,
            &self.rsi_ret_lag2,
            &self.ma_short,
            &self.ma_long,
            &self.strat_curve,
        ];
        for column in optional_columns {
            if column.len() == n {
                for (flag, value) in keep.iter_mut().zip(column) {
                    if value.is_none() {
                        *flag = false;
                    }
                }
            }
        }

        fn apply<T>(column: &mut Vec<T>, keep: &[bool]) {
            if column.len() == keep.len() {
                let mut i = 0;
                column.retain(|_| {
                    let kept = keep[i];
                    i += 1;
                    kept
                });
            }
        }

        apply(&mut self.dates, &keep);
        apply(&mut self.open, &keep);
        apply(&mut self.high, &keep);
        apply(&mut self.low, &keep);
        apply(&mut self.close, &keep);
        apply(&mut self.volume, &keep);
        apply(&mut self.dow, &keep);
        apply(&mut self.returns, &keep);
        apply(&mut self.roll_rets, &keep);
        apply(&mut self.range, &keep);
        apply(&mut self.avg_range, &keep);
        apply(&mut self.rsi, &keep);
        apply(&mut self.rsi_ret, &keep);
        apply(&mut self.bench_curve, &keep);
        apply(&mut self.returns_lag1, &keep);
        apply(&mut self.returns_lag2, &keep);
        apply(&mut self.range_lag1, &keep);
        apply(&mut self.range_lag2, &keep);
        apply(&mut self.rsi_ret_lag1, &keep);
        apply(&mut self.rsi_ret_lag2, &keep);
        apply(&mut self.ma_short, &keep);
        apply(&mut self.ma_long, &keep);
        apply(&mut self.signal, &keep);
        apply(&mut self.strat_curve, &keep);
        if let Some(prev) = self.prev_signal.as_mut() {
            apply(prev, &keep);
        }

        n - keep.iter().filter(|&&kept| kept).count()
    }
}

/// Collects the defined values of an optional column in row order.
#[must_use]
pub fn defined(column: &[Option<f64>]) -> Vec<f64> {
    column.iter().filter_map(|v| *v).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PriceBar;

    fn series(closes: &[f64]) -> PriceSeries {
        let bars: Vec<PriceBar> = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                date: Date::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i as u64),
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 100.0,
            })
            .collect();
        PriceSeries::from_bars(bars)
    }

    #[test]
    fn test_from_series_raw_columns() {
        let frame = FeatureFrame::from_series(&series(&[1.0, 2.0, 3.0]));
        assert_eq!(frame.len(), 3);
        assert_eq!(frame.close, vec![1.0, 2.0, 3.0]);
        assert!(frame.returns.is_empty());
        assert!(frame.ma_windows().is_none());
    }

    #[test]
    fn test_retain_defined_ignores_unpopulated_columns() {
        let mut frame = FeatureFrame::from_series(&series(&[1.0, 2.0, 3.0]));
        // Nothing computed yet: nothing to drop.
        assert_eq!(frame.retain_defined(), 0);
        assert_eq!(frame.len(), 3);
    }

    #[test]
    fn test_retain_defined_masks_all_columns() {
        let mut frame = FeatureFrame::from_series(&series(&[1.0, 2.0, 3.0, 4.0]));
        frame.returns = vec![None, Some(1.0), Some(0.5), Some(1.0 / 3.0)];
        frame.bench_curve = vec![None, Some(0.1), Some(0.2), None];
        frame.signal = vec![1.0, -1.0, 1.0, -1.0];
        frame.set_prev_signal(vec![1.0, 1.0, -1.0, 1.0]);

        let dropped = frame.retain_defined();
        assert_eq!(dropped, 2);
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.close, vec![2.0, 3.0]);
        assert_eq!(frame.returns, vec![Some(1.0), Some(0.5)]);
        assert_eq!(frame.signal, vec![-1.0, 1.0]);
        assert_eq!(frame.prev_signal(), Some(&[1.0, -1.0][..]));
    }

    #[test]
    fn test_moving_average_memoization_state() {
        let mut frame = FeatureFrame::from_series(&series(&[1.0, 2.0, 3.0]));
        assert!(!frame.has_moving_averages(2, 3));

        frame.set_moving_averages(
            2,
            3,
            vec![None, Some(1.5), Some(2.5)],
            vec![None, None, Some(2.0)],
        );
        assert!(frame.has_moving_averages(2, 3));
        assert!(!frame.has_moving_averages(3, 5));
        assert_eq!(frame.ma_windows(), Some((2, 3)));
    }

    #[test]
    fn test_defined_collects_in_order() {
        let column = vec![None, Some(1.0), None, Some(2.0)];
        assert_eq!(defined(&column), vec![1.0, 2.0]);
    }
}
