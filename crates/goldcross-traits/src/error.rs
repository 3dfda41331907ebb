//! Error types for the goldcross pipeline.
//!
//! This module defines the error types used throughout the goldcross
//! ecosystem, covering feature computation, data validation, and the
//! market-data boundary.

use thiserror::Error;

/// The main error type for goldcross operations.
///
/// This enum encompasses all error cases that can occur when building
/// features, generating signals, and evaluating strategies over price data.
#[derive(Debug, Error)]
pub enum GoldcrossError {
    /// Error during signal computation.
    #[error("Signal computation failed: {0}")]
    SignalComputation(String),

    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when no data is available for the requested symbol/date range.
    #[error("No data available: {0}")]
    DataUnavailable(String),

    /// Error when data is insufficient for the requested operation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Error when a date is out of range or invalid.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Error fetching data from external sources.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for GoldcrossError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GoldcrossError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for goldcross operations.
///
/// This is a convenience type that uses [`GoldcrossError`] as the error type.
pub type Result<T> = std::result::Result<T, GoldcrossError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GoldcrossError::SignalComputation("test error".to_string());
        assert_eq!(err.to_string(), "Signal computation failed: test error");

        let err = GoldcrossError::DataUnavailable("BTC-USD".to_string());
        assert_eq!(err.to_string(), "No data available: BTC-USD");
    }

    #[test]
    fn test_error_from_string() {
        let err: GoldcrossError = "fail".into();
        assert!(matches!(err, GoldcrossError::Other(_)));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert!(ok_result.is_ok());

        let err_result: Result<i32> = Err(GoldcrossError::InsufficientData("empty".to_string()));
        assert!(err_result.is_err());
    }
}
