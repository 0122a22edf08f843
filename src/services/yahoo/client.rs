//! REST client for the Yahoo Finance chart endpoint

use backon::{ExponentialBuilder, Retryable};
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{debug, warn};

use super::messages::ChartEnvelope;
use crate::config::MarketDataConfig;
use crate::models::catalog::{BarInterval, Timeframe};
use crate::models::indicators::Candle;
use crate::services::market_data::MarketDataError;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; levelscope/0.1)";

pub struct YahooRestClient {
    base_url: String,
    http: reqwest::Client,
    max_retries: usize,
}

impl YahooRestClient {
    pub fn new(config: &MarketDataConfig) -> Result<Self, MarketDataError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self::with_client(config.base_url.clone(), http).with_max_retries(config.max_retries))
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            max_retries: 3,
        }
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch candles for a symbol, retrying transient failures with backoff
    pub async fn fetch_chart(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        interval: BarInterval,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let fetch = || self.fetch_chart_once(symbol, timeframe, interval);

        fetch
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_millis(200))
                    .with_max_times(self.max_retries),
            )
            .sleep(tokio::time::sleep)
            .when(|e: &MarketDataError| e.is_transient())
            .notify(|e: &MarketDataError, delay: Duration| {
                warn!(
                    symbol = symbol,
                    error = %e,
                    delay_ms = delay.as_millis() as u64,
                    "Chart request failed, retrying"
                );
            })
            .await
    }

    /// Chart URL for `symbol`, which is escaped as a single path segment
    fn chart_url(&self, symbol: &str) -> Result<Url, MarketDataError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| MarketDataError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| MarketDataError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        Ok(url)
    }

    async fn fetch_chart_once(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        interval: BarInterval,
    ) -> Result<Vec<Candle>, MarketDataError> {
        if matches!(symbol.trim(), "" | "." | "..") {
            debug!(symbol = symbol, "Symbol cannot name a chart");
            return Ok(Vec::new());
        }

        let url = self.chart_url(symbol)?;
        debug!(url = %url, range = %timeframe, interval = %interval, "Requesting chart");

        let response = self
            .http
            .get(url)
            .query(&[("range", timeframe.as_str()), ("interval", interval.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(symbol = symbol, "No chart data for symbol");
            return Ok(Vec::new());
        }
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(response.error_for_status().err().map_or_else(
                || MarketDataError::Api {
                    code: status.as_str().to_string(),
                    description: "server error".to_string(),
                },
                MarketDataError::Http,
            ));
        }

        let body = response.text().await?;
        let envelope: Result<ChartEnvelope, _> = serde_json::from_str(&body);

        match envelope {
            Ok(envelope) => {
                if let Some(error) = envelope.chart.error {
                    return Err(MarketDataError::Api {
                        code: error.code,
                        description: error.description,
                    });
                }
                if !status.is_success() {
                    return Err(MarketDataError::Api {
                        code: status.as_str().to_string(),
                        description: "unexpected status".to_string(),
                    });
                }
                Ok(envelope.chart.into_candles())
            }
            Err(_) if !status.is_success() => Err(MarketDataError::Api {
                code: status.as_str().to_string(),
                description: body.chars().take(200).collect(),
            }),
            Err(e) => Err(MarketDataError::Decode(e.to_string())),
        }
    }
}
