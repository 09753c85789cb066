//! Alpha Vantage quote fetcher
//!
//! Fetches the latest spot price for one symbol from the `GLOBAL_QUOTE`
//! endpoint. One blocking request, bounded by a timeout, no retries.
//!
//! Note: the free tier is rate limited. A throttled request still returns
//! HTTP 200, with a `Note` or `Information` field instead of the quote.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{PricerError, PricerResult};

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Price reported when a fetch fails and the caller wants the sentinel
pub const FAILED_PRICE: f64 = -1.0;

/// Alpha Vantage API client
pub struct QuoteClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl QuoteClient {
    pub fn new() -> PricerResult<Self> {
        Self::with_settings(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Client against a given host with a request timeout
    pub fn with_settings(base_url: impl Into<String>, timeout: Duration) -> PricerResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PricerError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Get the full global quote for a symbol
    pub fn get_quote(&self, symbol: &str, api_key: &str) -> PricerResult<SpotQuote> {
        let url = format!("{}/query", self.base_url);

        tracing::info!("Fetching GLOBAL_QUOTE for {}", symbol);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", symbol),
                ("apikey", api_key),
            ])
            .send()
            .map_err(|e| PricerError::network(e.to_string()))?
            .error_for_status()
            .map_err(|e| PricerError::network(e.to_string()))?;

        let body = response
            .text()
            .map_err(|e| PricerError::network(format!("Failed to read response: {}", e)))?;

        parse_quote_body(&body)
    }

    /// Latest price for a symbol
    pub fn fetch_price(&self, symbol: &str, api_key: &str) -> PricerResult<f64> {
        self.get_quote(symbol, api_key).map(|q| q.price)
    }
}

/// Spot price quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotQuote {
    pub symbol: String,
    pub price: f64,
    pub previous_close: Option<f64>,
    pub latest_trading_day: Option<NaiveDate>,
}

// Alpha Vantage response structures

#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuoteData>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GlobalQuoteData {
    #[serde(rename = "01. symbol")]
    symbol: Option<String>,
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "07. latest trading day")]
    latest_trading_day: Option<String>,
    #[serde(rename = "08. previous close")]
    previous_close: Option<String>,
}

/// Parse a `GLOBAL_QUOTE` response body
///
/// The price lives at `["Global Quote"]["05. price"]` as a string. Anything
/// else (invalid JSON, a missing object or field, a non-numeric price) is a
/// data error. Rate-limit and bad-key replies are named in the message.
pub fn parse_quote_body(body: &str) -> PricerResult<SpotQuote> {
    let response: GlobalQuoteResponse = serde_json::from_str(body)
        .map_err(|e| PricerError::data(format!("Failed to parse quote: {}", e)))?;

    let api_message = response
        .error_message
        .or(response.note)
        .or(response.information);

    let data = response.global_quote.ok_or_else(|| match &api_message {
        Some(msg) => PricerError::data(format!("No quote data returned: {}", msg)),
        None => PricerError::data("No quote data returned"),
    })?;

    let raw_price = data
        .price
        .ok_or_else(|| PricerError::data("Quote is missing \"05. price\""))?;

    let price: f64 = raw_price
        .trim()
        .parse()
        .map_err(|_| PricerError::data(format!("Invalid price {:?}", raw_price)))?;

    Ok(SpotQuote {
        symbol: data.symbol.unwrap_or_default(),
        price,
        previous_close: data.previous_close.and_then(|p| p.trim().parse().ok()),
        latest_trading_day: data
            .latest_trading_day
            .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok()),
    })
}

/// Collapse a fetch result to a bare price, `-1.0` on any failure
pub fn price_or_sentinel(result: PricerResult<f64>) -> f64 {
    match result {
        Ok(price) => price,
        Err(e) => {
            tracing::warn!("Quote fetch failed: {}", e);
            FAILED_PRICE
        }
    }
}
