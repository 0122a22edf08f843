//! Unit tests for environment configuration

use levelscope::config::{Config, DEFAULT_PORT, DEFAULT_YAHOO_BASE_URL};
use levelscope::models::levels::LevelParameters;
use std::collections::HashMap;
use std::time::Duration;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults_without_environment() {
    let config = Config::from_lookup(|_| None);

    assert_eq!(config.environment, "sandbox");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.market_data.base_url, DEFAULT_YAHOO_BASE_URL);
    assert_eq!(config.market_data.timeout, Duration::from_secs(10));
    assert_eq!(config.market_data.max_retries, 3);
    assert_eq!(config.default_parameters, LevelParameters::default());
    assert!(!config.is_production());
}

#[test]
fn test_values_from_environment() {
    let config = Config::from_lookup(lookup_from(&[
        ("ENVIRONMENT", "Production"),
        ("PORT", "9090"),
        ("YAHOO_BASE_URL", "http://localhost:1234/"),
        ("MARKET_DATA_TIMEOUT_SECS", "3"),
        ("LEVELS_MIN_TOUCHES", "4"),
        ("LEVELS_DISTANCE", "2.5"),
        ("LEVELS_TOLERANCE", "0.002"),
    ]));

    assert!(config.is_production());
    assert_eq!(config.port, 9090);
    assert_eq!(config.market_data.base_url, "http://localhost:1234");
    assert_eq!(config.market_data.timeout, Duration::from_secs(3));
    assert_eq!(config.default_parameters, LevelParameters::new(4, 2.5, 0.002));
}

#[test]
fn test_unparsable_values_fall_back() {
    let config = Config::from_lookup(lookup_from(&[
        ("PORT", "eighty"),
        ("LEVELS_DISTANCE", "wide"),
        ("MARKET_DATA_MAX_RETRIES", "-2"),
    ]));

    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.default_parameters.distance, 5.0);
    assert_eq!(config.market_data.max_retries, 3);
}
