//! Fetch command implementation.

use std::path::Path;

use anyhow::Result;
use goldcross_data::{ChartClient, write_csv_bars};

use crate::data;

/// Download daily bars for a symbol and write them to a CSV file.
pub(crate) async fn fetch_to_csv(symbol: &str, start: &str, end: &str, output: &Path) -> Result<()> {
    let start_date = data::parse_date(start)?;
    let end_date = data::parse_date(end)?;

    println!("Fetching {} bars from {} to {}...", symbol, start, end);

    let client = ChartClient::from_env();
    let series = data::fetch_series(&client, symbol, start_date, end_date).await?;

    write_csv_bars(output, series.bars())?;
    println!("Wrote {} bars to {}", series.len(), output.display());

    Ok(())
}
