//! Chart API client implementation.

use std::env;

use goldcross_traits::{BarProvider, Date, PriceBar};
use reqwest::Client;

use crate::error::{DataError, Result};
use crate::types::ChartResponse;

/// Default base URL for the daily-candle chart API.
const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Environment variable overriding the base URL (proxies, test servers).
const BASE_URL_ENV: &str = "GOLDCROSS_CHART_BASE_URL";

/// Async client for a daily-candle chart API.
///
/// No credentials are required; the endpoint can be redirected through
/// [`ChartClient::from_env`] for proxied or recorded setups.
#[derive(Debug, Clone)]
pub struct ChartClient {
    client: Client,
    base_url: String,
}

impl ChartClient {
    /// Creates a client against the default endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom endpoint.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a client honoring the `GOLDCROSS_CHART_BASE_URL` override.
    ///
    /// A `.env` file is loaded if present; without the variable the default
    /// endpoint is used.
    #[must_use]
    pub fn from_env() -> Self {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        env::var(BASE_URL_ENV).map_or_else(|_| Self::new(), Self::with_base_url)
    }

    /// Build the candle request URL for a symbol and unix-second range.
    fn url(&self, symbol: &str, period1: i64, period2: i64) -> String {
        format!(
            "{}/{}?period1={period1}&period2={period2}&interval=1d",
            self.base_url,
            symbol.to_uppercase()
        )
    }

    /// Fetches daily bars for `symbol` between `start` and `end` inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures, server-side error payloads,
    /// rate limiting, or an empty candle set.
    pub async fn daily_history(
        &self,
        symbol: &str,
        start: Date,
        end: Date,
    ) -> Result<Vec<PriceBar>> {
        let period1 = start
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| DataError::InvalidRange(format!("bad start date {start}")))?
            .and_utc()
            .timestamp();
        let period2 = end
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| DataError::InvalidRange(format!("bad end date {end}")))?
            .and_utc()
            .timestamp();

        let url = self.url(symbol, period1, period2);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DataError::RateLimitExceeded);
        }
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DataError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;
        let parsed: ChartResponse = serde_json::from_str(&text)?;

        if let Some(error) = parsed.chart.error {
            return Err(DataError::Api(format!(
                "{}: {}",
                error.code, error.description
            )));
        }

        let bars = parsed
            .chart
            .result
            .as_deref()
            .and_then(|results| results.first())
            .map(crate::types::ChartResult::bars)
            .unwrap_or_default();

        if bars.is_empty() {
            return Err(DataError::NoData(symbol.to_string()));
        }
        Ok(bars)
    }
}

impl Default for ChartClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BarProvider for ChartClient {
    async fn daily_bars(
        &self,
        symbol: &str,
        start: Date,
        end: Date,
    ) -> goldcross_traits::Result<Vec<PriceBar>> {
        Ok(self.daily_history(symbol, start, end).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_construction() {
        let client = ChartClient::with_base_url("http://localhost:8080/chart");
        let url = client.url("btc-usd", 1_700_000_000, 1_700_100_000);
        assert_eq!(
            url,
            "http://localhost:8080/chart/BTC-USD?period1=1700000000&period2=1700100000&interval=1d"
        );
    }

    #[test]
    fn test_default_base_url() {
        let client = ChartClient::new();
        let url = client.url("ETH-USD", 0, 1);
        assert!(url.starts_with("https://query1.finance.yahoo.com/v8/finance/chart/ETH-USD?"));
    }
}
