//! Test utilities for API server integration tests

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{Duration, TimeZone, Utc};
use levelscope::core::http::{create_router, AppState, HealthStatus};
use levelscope::metrics::Metrics;
use levelscope::models::catalog::{BarInterval, Timeframe};
use levelscope::models::indicators::Candle;
use levelscope::models::levels::LevelParameters;
use levelscope::services::market_data::{
    MarketDataError, MarketDataProvider, StaticMarketDataProvider,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Closes oscillating between 100 and 120
pub const RELIANCE_CLOSES: [f64; 9] = [120.0, 100.0, 120.0, 100.0, 120.0, 100.0, 120.0, 100.0, 120.0];

pub fn create_test_candles(closes: &[f64]) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(close, close + 1.0, close - 1.0, close, 500.0, start + Duration::days(i as i64))
        })
        .collect()
}

/// Provider that always fails, for upstream error paths
pub struct FailingMarketDataProvider;

#[async_trait]
impl MarketDataProvider for FailingMarketDataProvider {
    async fn get_candles(
        &self,
        _symbol: &str,
        _timeframe: Timeframe,
        _interval: BarInterval,
    ) -> Result<Vec<Candle>, MarketDataError> {
        Err(MarketDataError::Api {
            code: "Internal".to_string(),
            description: "upstream unavailable".to_string(),
        })
    }
}

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
}

impl TestApiServer {
    pub async fn new() -> Self {
        let provider = StaticMarketDataProvider::new()
            .with_candles("RELIANCE.NS", create_test_candles(&RELIANCE_CLOSES));
        Self::with_provider(Arc::new(provider))
    }

    pub fn with_provider(provider: Arc<dyn MarketDataProvider>) -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let state = AppState {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics: metrics.clone(),
            start_time: Arc::new(Instant::now()),
            provider,
            default_parameters: LevelParameters::default(),
        };

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self { server, metrics }
    }
}
