//! Data types for chart API responses.

use chrono::DateTime;
use goldcross_traits::PriceBar;
use serde::{Deserialize, Serialize};

/// Top-level chart API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse {
    /// Response envelope.
    pub chart: Chart,
}

/// Response envelope: exactly one of `result` and `error` is populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    /// Per-symbol results.
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    /// Error payload, if the request failed server-side.
    #[serde(default)]
    pub error: Option<ChartApiError>,
}

/// Error payload of the chart API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartApiError {
    /// Machine-readable error code.
    #[serde(default)]
    pub code: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

/// One symbol's candle arrays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResult {
    /// Unix timestamps (seconds), one per candle.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    /// OHLCV arrays.
    pub indicators: Indicators,
}

/// Indicator container of the chart payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Indicators {
    /// Quote blocks; the API returns exactly one for daily candles.
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
}

/// Parallel OHLCV arrays. Entries are null for halted sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteBlock {
    /// Open prices.
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    /// High prices.
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    /// Low prices.
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    /// Close prices.
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    /// Volumes.
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

impl ChartResult {
    /// Converts the candle arrays into price bars.
    ///
    /// Rows with any missing field (halted sessions) are skipped; the
    /// pipeline assumes a gap-free calendar over the rows that remain.
    #[must_use]
    pub fn bars(&self) -> Vec<PriceBar> {
        let Some(quote) = self.indicators.quote.first() else {
            return Vec::new();
        };

        self.timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let date = DateTime::from_timestamp(ts, 0)?.date_naive();
                Some(PriceBar {
                    date,
                    open: (*quote.open.get(i)?)?,
                    high: (*quote.high.get(i)?)?,
                    low: (*quote.low.get(i)?)?,
                    close: (*quote.close.get(i)?)?,
                    volume: (*quote.volume.get(i)?)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "chart": {
            "result": [{
                "timestamp": [1704153600, 1704240000, 1704326400],
                "indicators": {
                    "quote": [{
                        "open":   [42280.2, 44190.5, 44960.1],
                        "high":   [44200.0, 45520.3, 45090.8],
                        "low":    [42100.7, 44110.2, 42620.4],
                        "close":  [44180.1, 44950.9, 42840.6],
                        "volume": [21000.0, 25000.0, 31000.0]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_deserialize_sample_response() {
        let response: ChartResponse = serde_json::from_str(SAMPLE).unwrap();
        let result = &response.chart.result.unwrap()[0];
        assert_eq!(result.timestamp.len(), 3);

        let bars = result.bars();
        assert_eq!(bars.len(), 3);
        assert_eq!(
            bars[0].date,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert_eq!(bars[0].open, 42280.2);
        assert_eq!(bars[2].close, 42840.6);
    }

    #[test]
    fn test_bars_skip_null_sessions() {
        let json = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704153600, 1704240000],
                    "indicators": {
                        "quote": [{
                            "open":   [1.0, null],
                            "high":   [2.0, 2.0],
                            "low":    [0.5, 0.5],
                            "close":  [1.5, 1.5],
                            "volume": [10.0, 10.0]
                        }]
                    }
                }],
                "error": null
            }
        }"#;
        let response: ChartResponse = serde_json::from_str(json).unwrap();
        let bars = response.chart.result.unwrap()[0].bars();
        assert_eq!(bars.len(), 1);
    }

    #[test]
    fn test_error_payload_deserializes() {
        let json = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found"}
            }
        }"#;
        let response: ChartResponse = serde_json::from_str(json).unwrap();
        assert!(response.chart.result.is_none());
        assert_eq!(response.chart.error.unwrap().code, "Not Found");
    }

    #[test]
    fn test_bars_empty_without_quote_block() {
        let result = ChartResult {
            timestamp: vec![1704153600],
            indicators: Indicators { quote: Vec::new() },
        };
        assert!(result.bars().is_empty());
    }
}
