//! Moving-average crossover signal generation.

use goldcross_features::rolling::rolling_mean;
use goldcross_traits::{Direction, FeatureFrame, GoldcrossError, Result};

/// Generates the crossover position signal from two trailing means of
/// close.
///
/// Where the short-window mean is above the long-window mean ("golden
/// cross") the signal takes the direction mode's positive multiplier;
/// where it is at or below ("death cross", ties included) the negative
/// multiplier.
#[derive(Debug, Clone, Copy)]
pub struct SignalGenerator {
    short_period: usize,
    long_period: usize,
    direction: Direction,
}

impl SignalGenerator {
    /// Creates a generator for the given windows and direction mode.
    #[must_use]
    pub const fn new(short_period: usize, long_period: usize, direction: Direction) -> Self {
        Self {
            short_period,
            long_period,
            direction,
        }
    }

    /// Computes the moving-average columns if the frame does not already
    /// carry them for these windows, then drops the rows their lookbacks
    /// leave undefined.
    ///
    /// The membership check makes the memoization explicit: a frame that
    /// already has the columns for this `(short, long)` pair is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Fails when the windows are zero-length or when no row survives the
    /// lookback truncation.
    pub fn ensure_moving_averages(&self, frame: &mut FeatureFrame) -> Result<()> {
        if self.short_period == 0 || self.long_period == 0 {
            return Err(GoldcrossError::InvalidData(
                "moving-average windows must be at least 1 row".to_string(),
            ));
        }

        if !frame.has_moving_averages(self.short_period, self.long_period) {
            let closes: Vec<Option<f64>> = frame.close.iter().copied().map(Some).collect();
            let ma_short = rolling_mean(&closes, self.short_period);
            let ma_long = rolling_mean(&closes, self.long_period);
            frame.set_moving_averages(self.short_period, self.long_period, ma_short, ma_long);
            frame.retain_defined();
        }

        if frame.is_empty() {
            return Err(GoldcrossError::InsufficientData(format!(
                "no rows survive the {}-row moving-average lookback",
                self.short_period.max(self.long_period)
            )));
        }
        Ok(())
    }

    /// Fills the signal column from the moving-average columns.
    ///
    /// Rows where either mean is undefined take the death-cross branch,
    /// matching the tie rule; such rows only exist if the caller skipped
    /// [`Self::ensure_moving_averages`].
    ///
    /// # Errors
    ///
    /// Fails when the moving-average columns are missing or were computed
    /// for different windows.
    pub fn apply_signal(&self, frame: &mut FeatureFrame) -> Result<()> {
        if !frame.has_moving_averages(self.short_period, self.long_period) {
            return Err(GoldcrossError::SignalComputation(format!(
                "moving averages for windows ({}, {}) not computed",
                self.short_period, self.long_period
            )));
        }

        let (pos_multiplier, neg_multiplier) = self.direction.multipliers();
        frame.signal = frame
            .ma_short
            .iter()
            .zip(&frame.ma_long)
            .map(|pair| match pair {
                (Some(short), Some(long)) if short > long => pos_multiplier,
                _ => neg_multiplier,
            })
            .collect();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldcross_traits::{Date, PriceBar, PriceSeries};

    fn frame_from_closes(closes: &[f64]) -> FeatureFrame {
        let bars: Vec<PriceBar> = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                date: Date::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i as u64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 0.0,
            })
            .collect();
        FeatureFrame::from_series(&PriceSeries::from_bars(bars))
    }

    #[test]
    fn test_moving_average_lookback_truncation() {
        let mut frame = frame_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let generator = SignalGenerator::new(2, 3, Direction::LongShort);
        generator.ensure_moving_averages(&mut frame).unwrap();

        // The 3-row long window leaves the first two rows undefined.
        assert_eq!(frame.len(), 4);
        assert_eq!(frame.close[0], 3.0);
        assert!(frame.ma_short.iter().all(Option::is_some));
        assert!(frame.ma_long.iter().all(Option::is_some));
    }

    #[test]
    fn test_moving_averages_computed_once() {
        let mut frame = frame_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let generator = SignalGenerator::new(2, 3, Direction::LongShort);
        generator.ensure_moving_averages(&mut frame).unwrap();

        // Overwrite a cell; a second call must reuse the memoized columns
        // rather than recompute them.
        frame.ma_short[0] = Some(99.0);
        generator.ensure_moving_averages(&mut frame).unwrap();
        assert_eq!(frame.ma_short[0], Some(99.0));
        assert_eq!(frame.ma_windows(), Some((2, 3)));
    }

    #[test]
    fn test_different_windows_trigger_recompute() {
        let mut frame = frame_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        SignalGenerator::new(2, 3, Direction::LongShort)
            .ensure_moving_averages(&mut frame)
            .unwrap();
        assert!(!frame.has_moving_averages(2, 4));
        SignalGenerator::new(2, 4, Direction::LongShort)
            .ensure_moving_averages(&mut frame)
            .unwrap();
        assert_eq!(frame.ma_windows(), Some((2, 4)));
    }

    #[test]
    fn test_golden_cross_long_mode() {
        // Rising closes: the short mean overtakes the long mean.
        let mut frame = frame_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let generator = SignalGenerator::new(2, 3, Direction::Long);
        generator.ensure_moving_averages(&mut frame).unwrap();
        generator.apply_signal(&mut frame).unwrap();

        // Long mode: golden cross = 1, death cross = 0 (never -1).
        assert!(frame.signal.iter().all(|&s| s == 1.0 || s == 0.0));
        assert_eq!(*frame.signal.last().unwrap(), 1.0);
    }

    #[test]
    fn test_death_cross_short_mode() {
        // Falling closes: the short mean stays under the long mean.
        let mut frame = frame_from_closes(&[6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        let generator = SignalGenerator::new(2, 3, Direction::Short);
        generator.ensure_moving_averages(&mut frame).unwrap();
        generator.apply_signal(&mut frame).unwrap();

        assert!(frame.signal.iter().all(|&s| s == -1.0));
    }

    #[test]
    fn test_tie_takes_death_cross_branch() {
        // Flat closes: short and long means are equal everywhere.
        let mut frame = frame_from_closes(&[5.0; 8]);
        let generator = SignalGenerator::new(2, 3, Direction::LongShort);
        generator.ensure_moving_averages(&mut frame).unwrap();
        generator.apply_signal(&mut frame).unwrap();

        assert!(frame.signal.iter().all(|&s| s == -1.0));
    }

    #[test]
    fn test_apply_signal_requires_moving_averages() {
        let mut frame = frame_from_closes(&[1.0, 2.0, 3.0]);
        let generator = SignalGenerator::new(2, 3, Direction::LongShort);
        let err = generator.apply_signal(&mut frame).unwrap_err();
        assert!(matches!(err, GoldcrossError::SignalComputation(_)));
    }

    #[test]
    fn test_zero_window_rejected() {
        let mut frame = frame_from_closes(&[1.0, 2.0, 3.0]);
        let err = SignalGenerator::new(0, 3, Direction::LongShort)
            .ensure_moving_averages(&mut frame)
            .unwrap_err();
        assert!(matches!(err, GoldcrossError::InvalidData(_)));
    }

    #[test]
    fn test_window_longer_than_frame_is_insufficient() {
        let mut frame = frame_from_closes(&[1.0, 2.0, 3.0]);
        let err = SignalGenerator::new(2, 10, Direction::LongShort)
            .ensure_moving_averages(&mut frame)
            .unwrap_err();
        assert!(matches!(err, GoldcrossError::InsufficientData(_)));
    }
}
