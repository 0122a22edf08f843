//! Market data provider interface

use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::catalog::{BarInterval, Timeframe};
use crate::models::indicators::Candle;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {code}: {description}")]
    Api { code: String, description: String },

    #[error("failed to decode provider response: {0}")]
    Decode(String),

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl MarketDataError {
    /// Worth retrying: connection problems, timeouts, rate limiting and server-side failures
    pub fn is_transient(&self) -> bool {
        match self {
            MarketDataError::Http(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status()
                        .map(|s| s.is_server_error() || s == StatusCode::TOO_MANY_REQUESTS)
                        .unwrap_or(false)
            }
            MarketDataError::Api { .. }
            | MarketDataError::Decode(_)
            | MarketDataError::InvalidUrl(_) => false,
        }
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get historical candles for a symbol, oldest first
    ///
    /// An empty vector means the provider had no data for the window.
    async fn get_candles(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        interval: BarInterval,
    ) -> Result<Vec<Candle>, MarketDataError>;

    /// Closing prices for the window, oldest first
    async fn get_closes(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        interval: BarInterval,
    ) -> Result<Vec<f64>, MarketDataError> {
        let candles = self.get_candles(symbol, timeframe, interval).await?;
        Ok(candles.iter().map(|c| c.close).collect())
    }
}

/// In-memory provider serving fixed candles per symbol regardless of window
#[derive(Debug, Clone, Default)]
pub struct StaticMarketDataProvider {
    candles: HashMap<String, Vec<Candle>>,
}

impl StaticMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candles(mut self, symbol: &str, candles: Vec<Candle>) -> Self {
        self.candles.insert(symbol.to_string(), candles);
        self
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        _timeframe: Timeframe,
        _interval: BarInterval,
    ) -> Result<Vec<Candle>, MarketDataError> {
        Ok(self.candles.get(symbol).cloned().unwrap_or_default())
    }
}
