//! Wire types for the `/v8/finance/chart` endpoint

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::models::indicators::Candle;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartEnvelope {
    pub chart: ChartResponse,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartResponse {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    #[serde(default)]
    pub indicators: Option<ChartIndicators>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<QuoteSeries>,
}

/// Column-oriented OHLCV values; gaps arrive as `null`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteSeries {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

fn value_at(column: &[Option<f64>], i: usize) -> Option<f64> {
    column.get(i).copied().flatten()
}

impl ChartResult {
    /// Convert to candles, oldest first, dropping bars without a close
    pub fn into_candles(self) -> Vec<Candle> {
        let timestamps = self.timestamp.unwrap_or_default();
        let quote = match self.indicators.and_then(|i| i.quote.into_iter().next()) {
            Some(quote) => quote,
            None => return Vec::new(),
        };

        let mut candles: Vec<Candle> = timestamps
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let close = value_at(&quote.close, i)?;
                let timestamp = DateTime::from_timestamp(ts, 0)?;
                Some(Candle::new(
                    value_at(&quote.open, i).unwrap_or(close),
                    value_at(&quote.high, i).unwrap_or(close),
                    value_at(&quote.low, i).unwrap_or(close),
                    close,
                    value_at(&quote.volume, i).unwrap_or(0.0),
                    timestamp,
                ))
            })
            .collect();

        candles.sort_by_key(|c| c.timestamp);
        candles
    }
}

impl ChartResponse {
    /// Candles from the first result, or none when the chart is empty
    pub fn into_candles(self) -> Vec<Candle> {
        self.result
            .and_then(|results| results.into_iter().next())
            .map(ChartResult::into_candles)
            .unwrap_or_default()
    }
}
