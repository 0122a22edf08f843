//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics, and level detection.

#[path = "api_server/test_utils.rs"]
mod test_utils;

use levelscope::core::http::NO_DATA_WARNING;
use serde_json::{json, Value};
use std::sync::Arc;

use test_utils::{FailingMarketDataProvider, TestApiServer};

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "levelscope");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let _ = app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("http_request_duration_seconds"));
    assert!(body.contains("level_computations_total"));
    assert!(app.metrics.http_requests_total.get() >= 1);
}

#[tokio::test]
async fn stocks_endpoint_lists_catalog() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/stocks").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let stocks = body.as_array().expect("array of stocks");
    assert_eq!(stocks.len(), 15);
    assert_eq!(stocks[0]["name"], "Reliance Industries");
    assert_eq!(stocks[0]["symbol"], "RELIANCE.NS");
}

#[tokio::test]
async fn options_endpoint_reports_defaults_and_bounds() {
    let app = TestApiServer::new().await;
    let body: Value = app.server.get("/api/options").await.json();

    assert_eq!(body["default_timeframe"], "6mo");
    assert_eq!(body["default_interval"], "1d");
    assert_eq!(body["timeframes"].as_array().map(|t| t.len()), Some(6));
    assert_eq!(body["bounds"]["min_touches"]["min"], 2.0);
    assert_eq!(body["bounds"]["tolerance"]["max"], 0.01);
    assert_eq!(body["defaults"]["min_touches"], 3);
}

#[tokio::test]
async fn levels_endpoint_splits_supports_and_resistances() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/levels/RELIANCE.NS").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["symbol"], "RELIANCE.NS");
    assert_eq!(body["name"], "Reliance Industries");
    assert_eq!(body["period"], "6mo");
    assert_eq!(body["interval"], "1d");
    assert_eq!(body["bars"], 9);
    assert_eq!(body["levels"], json!([120.0, 100.0]));
    assert_eq!(body["table"]["supports"], json!([100.0]));
    assert_eq!(body["table"]["resistances"], json!([120.0]));
    assert_eq!(body["rows"], json!([{ "support": 100.0, "resistance": 120.0 }]));
    assert!(body.get("warning").is_none());
    assert_eq!(app.metrics.level_computations_total.get(), 1);
}

#[tokio::test]
async fn levels_endpoint_resolves_display_names() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .get("/api/levels/Reliance%20Industries")
        .add_query_param("period", "1y")
        .add_query_param("interval", "1wk")
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["symbol"], "RELIANCE.NS");
    assert_eq!(body["period"], "1y");
    assert_eq!(body["interval"], "1wk");
}

#[tokio::test]
async fn levels_endpoint_without_data_returns_warning() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/levels/UNKNOWN.NS").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["bars"], 0);
    assert_eq!(body["warning"], NO_DATA_WARNING);
    assert_eq!(body["table"]["supports"], json!([]));
    assert_eq!(body["table"]["resistances"], json!([]));
}

#[tokio::test]
async fn levels_endpoint_rejects_out_of_range_parameters() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .get("/api/levels/RELIANCE.NS")
        .add_query_param("min_touches", 9)
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("min_touches"));
}

#[tokio::test]
async fn levels_endpoint_rejects_unknown_period() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .get("/api/levels/RELIANCE.NS")
        .add_query_param("period", "7d")
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn levels_endpoint_rejects_malformed_numbers() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .get("/api/levels/RELIANCE.NS")
        .add_query_param("tolerance", "tight")
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn levels_endpoint_maps_provider_failure_to_bad_gateway() {
    let app = TestApiServer::with_provider(Arc::new(FailingMarketDataProvider));
    let response = app
        .server
        .get("/api/levels/RELIANCE.NS")
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 502);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("upstream unavailable"));
}

#[tokio::test]
async fn compute_endpoint_runs_on_supplied_closes() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/levels")
        .json(&json!({
            "closes": [10.0, 8.0, 10.0, 8.0, 10.0, 8.0, 10.0],
            "parameters": { "min_touches": 3, "distance": 1.0, "tolerance": 0.05 }
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["bars"], 7);
    assert_eq!(body["levels"], json!([10.0, 8.0]));
    assert_eq!(body["table"]["supports"], json!([8.0]));
    assert_eq!(body["table"]["resistances"], json!([10.0]));
}

#[tokio::test]
async fn compute_endpoint_handles_short_series() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/levels")
        .json(&json!({ "closes": [10.0, 8.0, 10.0] }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["levels"], json!([]));
    assert_eq!(body["rows"], json!([]));
    assert_eq!(body["parameters"]["distance"], 5.0);
}
