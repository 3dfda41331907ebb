//! CSV price-history loading and saving.
//!
//! The expected layout is one bar per row under a
//! `date,open,high,low,close,volume` header, dates in `YYYY-MM-DD` form.

use std::path::Path;

use goldcross_traits::{Date, PriceBar};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One CSV record; mirrors [`PriceBar`] with serde field names matching the
/// header.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CsvBar {
    date: Date,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

impl From<CsvBar> for PriceBar {
    fn from(record: CsvBar) -> Self {
        Self {
            date: record.date,
            open: record.open,
            high: record.high,
            low: record.low,
            close: record.close,
            volume: record.volume,
        }
    }
}

impl From<&PriceBar> for CsvBar {
    fn from(bar: &PriceBar) -> Self {
        Self {
            date: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
        }
    }
}

/// Reads daily bars from a CSV file.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or a record fails to
/// parse.
pub fn read_csv_bars(path: impl AsRef<Path>) -> Result<Vec<PriceBar>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut bars = Vec::new();
    for record in reader.deserialize() {
        let record: CsvBar = record?;
        bars.push(record.into());
    }
    Ok(bars)
}

/// Writes daily bars to a CSV file, overwriting any existing content.
///
/// # Errors
///
/// Returns an error when the file cannot be created or a record fails to
/// serialize.
pub fn write_csv_bars(path: impl AsRef<Path>, bars: &[PriceBar]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for bar in bars {
        writer.serialize(CsvBar::from(bar))?;
    }
    writer.flush()?;
    Ok(())
}
