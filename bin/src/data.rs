//! Data loading utilities for the goldcross CLI.

use std::path::Path;

use goldcross_data::{ChartClient, read_csv_bars};
use goldcross_traits::{BarProvider, Date, GoldcrossError, PriceSeries};

/// Load a price series for a symbol, either from a CSV file or from the
/// chart API.
pub(crate) async fn load_series(
    symbol: &str,
    start: Date,
    end: Date,
    csv: Option<&Path>,
) -> Result<PriceSeries, GoldcrossError> {
    match csv {
        Some(path) => {
            let bars = read_csv_bars(path)?;
            let in_range = bars
                .into_iter()
                .filter(|b| b.date >= start && b.date <= end)
                .collect();
            Ok(PriceSeries::from_bars(in_range))
        }
        None => fetch_series(&ChartClient::from_env(), symbol, start, end).await,
    }
}

/// Fetch a series through any bar provider.
pub(crate) async fn fetch_series<P: BarProvider>(
    provider: &P,
    symbol: &str,
    start: Date,
    end: Date,
) -> Result<PriceSeries, GoldcrossError> {
    let bars = provider.daily_bars(symbol, start, end).await?;
    Ok(PriceSeries::from_bars(bars))
}

/// Parse a date string in YYYY-MM-DD format.
pub(crate) fn parse_date(date_str: &str) -> Result<Date, GoldcrossError> {
    Date::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| GoldcrossError::InvalidDate(format!("{date_str}: {e}")))
}
