//! Trailing-window aggregations and lags over optional columns.
//!
//! A window value is defined only when every observation inside the window
//! is defined, so undefined prefixes propagate: a column whose first row is
//! undefined keeps its trailing sum undefined for one extra row.

/// Trailing sum over a window of `window` rows.
///
/// `out[i]` is defined when `i + 1 >= window` and all of
/// `values[i + 1 - window ..= i]` are defined.
#[must_use]
pub fn rolling_sum(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling_agg(values, window, |xs| xs.iter().sum())
}

/// Trailing mean over a window of `window` rows.
///
/// Defined under the same conditions as [`rolling_sum`].
#[must_use]
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling_agg(values, window, |xs| {
        xs.iter().sum::<f64>() / xs.len() as f64
    })
}

/// Shifts a column forward by `periods` rows.
///
/// `out[i]` is `values[i - periods]`; the first `periods` rows are
/// undefined.
#[must_use]
pub fn lag(values: &[Option<f64>], periods: usize) -> Vec<Option<f64>> {
    let n = values.len();
    (0..n)
        .map(|i| {
            if i >= periods {
                values[i - periods]
            } else {
                None
            }
        })
        .collect()
}

fn rolling_agg<F>(values: &[Option<f64>], window: usize, agg: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    let n = values.len();
    if window == 0 {
        return vec![None; n];
    }

    let mut out = vec![None; n];
    let mut buf = Vec::with_capacity(window);
    for i in 0..n {
        if i + 1 < window {
            continue;
        }
        buf.clear();
        for value in &values[i + 1 - window..=i] {
            match value {
                Some(v) => buf.push(*v),
                None => break,
            }
        }
        if buf.len() == window {
            out[i] = Some(agg(&buf));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rolling_sum_definedness_boundary() {
        let values: Vec<Option<f64>> = (1..=5).map(|v| Some(f64::from(v))).collect();
        let out = rolling_sum(&values, 3);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert_eq!(out[2], Some(6.0));
        assert_eq!(out[3], Some(9.0));
        assert_eq!(out[4], Some(12.0));
    }

    #[test]
    fn test_rolling_mean_values() {
        let values = vec![Some(2.0), Some(4.0), Some(6.0), Some(8.0)];
        let out = rolling_mean(&values, 2);
        assert_eq!(out[0], None);
        assert_relative_eq!(out[1].unwrap(), 3.0);
        assert_relative_eq!(out[3].unwrap(), 7.0);
    }

    #[test]
    fn test_undefined_prefix_propagates() {
        // First observation undefined: the window is only satisfied one row
        // later than with a fully defined column.
        let values = vec![None, Some(1.0), Some(2.0), Some(3.0)];
        let out = rolling_sum(&values, 3);
        assert_eq!(out, vec![None, None, None, Some(6.0)]);
    }

    #[test]
    fn test_window_longer_than_series() {
        let values = vec![Some(1.0), Some(2.0)];
        assert_eq!(rolling_mean(&values, 5), vec![None, None]);
    }

    #[test]
    fn test_zero_window() {
        let values = vec![Some(1.0)];
        assert_eq!(rolling_sum(&values, 0), vec![None]);
    }

    #[test]
    fn test_lag_alignment() {
        let values = vec![Some(1.0), Some(2.0), None, Some(4.0)];
        assert_eq!(lag(&values, 1), vec![None, Some(1.0), Some(2.0), None]);
        assert_eq!(lag(&values, 2), vec![None, None, Some(1.0), Some(2.0)]);
    }
}
