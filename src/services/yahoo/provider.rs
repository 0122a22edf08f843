//! Yahoo Finance market data provider implementation

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::client::YahooRestClient;
use crate::config::MarketDataConfig;
use crate::models::catalog::{BarInterval, Timeframe};
use crate::models::indicators::Candle;
use crate::services::market_data::{MarketDataError, MarketDataProvider};

pub struct YahooMarketDataProvider {
    client: Arc<YahooRestClient>,
}

impl YahooMarketDataProvider {
    pub fn new(config: &MarketDataConfig) -> Result<Self, MarketDataError> {
        Ok(Self::with_client(Arc::new(YahooRestClient::new(config)?)))
    }

    pub fn with_client(client: Arc<YahooRestClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<YahooRestClient> {
        &self.client
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        interval: BarInterval,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let candles = self.client.fetch_chart(symbol, timeframe, interval).await?;
        info!(
            symbol = symbol,
            range = %timeframe,
            interval = %interval,
            bars = candles.len(),
            "Fetched candles"
        );
        Ok(candles)
    }
}
