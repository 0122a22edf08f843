//! Unit tests for subscriber installation

use levelscope::config::Config;
use levelscope::logging::init_logging;

#[test]
fn test_init_logging_installs_global_subscriber() {
    let config = Config::from_lookup(|key| match key {
        "ENVIRONMENT" => Some("Production".to_string()),
        _ => None,
    });
    assert!(config.is_production());

    init_logging(&config);
    assert!(tracing::dispatcher::has_been_set());
    tracing::info!(symbol = "RELIANCE.NS", "subscriber accepts events");
}
