//! Environment-driven configuration
//!
//! Values are read once at startup and passed by value from there on.

use crate::models::levels::LevelParameters;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Market data client settings
#[derive(Debug, Clone)]
pub struct MarketDataConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub max_retries: usize,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 3,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    pub market_data: MarketDataConfig,
    pub default_parameters: LevelParameters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            port: DEFAULT_PORT,
            market_data: MarketDataConfig::default(),
            default_parameters: LevelParameters::default(),
        }
    }
}

impl Config {
    /// Build the configuration from process environment variables
    ///
    /// Unset variables keep their defaults; unparsable ones are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let default_params = defaults.default_parameters;

        let environment = lookup("ENVIRONMENT")
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .unwrap_or(defaults.environment);

        let market_data = MarketDataConfig {
            base_url: lookup("YAHOO_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.market_data.base_url),
            timeout: Duration::from_secs(read_or(
                &lookup,
                "MARKET_DATA_TIMEOUT_SECS",
                defaults.market_data.timeout.as_secs(),
            )),
            max_retries: read_or(
                &lookup,
                "MARKET_DATA_MAX_RETRIES",
                defaults.market_data.max_retries,
            ),
        };

        let default_parameters = LevelParameters {
            min_touches: read_or(&lookup, "LEVELS_MIN_TOUCHES", default_params.min_touches),
            distance: read_or(&lookup, "LEVELS_DISTANCE", default_params.distance),
            tolerance: read_or(&lookup, "LEVELS_TOLERANCE", default_params.tolerance),
        };

        Self {
            environment,
            port: read_or(&lookup, "PORT", defaults.port),
            market_data,
            default_parameters,
        }
    }

    /// `ENVIRONMENT` of `production` or `prod`
    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}

fn read_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(key = key, value = %raw, "Ignoring unparsable configuration value");
                default
            }
        },
        None => default,
    }
}
