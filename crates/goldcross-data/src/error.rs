//! Error types for the market-data crate.

use thiserror::Error;

/// Errors that can occur while fetching or loading price data.
#[derive(Debug, Error)]
pub enum DataError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// The chart API returned an error payload.
    #[error("Chart API error: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded; retry later")]
    RateLimitExceeded,

    /// No candles returned for the symbol/date range.
    #[error("No data available for {0}")]
    NoData(String),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error while reading or writing CSV data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A date could not be constructed from the requested range.
    #[error("Invalid date range: {0}")]
    InvalidRange(String),
}

impl From<DataError> for goldcross_traits::GoldcrossError {
    fn from(err: DataError) -> Self {
        Self::DataFetch(err.to_string())
    }
}

/// A specialized Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
