//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::config::Config;
use crate::indicators::error::IndicatorError;
use crate::indicators::parser::parse_level_parameters_from_map;
use crate::indicators::structure::calculate_support_resistance;
use crate::indicators::validation::{validate_level_parameters, ParameterBounds};
use crate::metrics::Metrics;
use crate::models::catalog::{find_listing, resolve_symbol, BarInterval, Timeframe, STOCK_CATALOG};
use crate::models::indicators::closes;
use crate::models::levels::{LevelParameters, LevelRow, LevelTable};
use crate::services::market_data::MarketDataProvider;

pub const SERVICE_NAME: &str = "levelscope";
pub const NO_DATA_WARNING: &str = "No data available for the selected options.";

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub provider: Arc<dyn MarketDataProvider>,
    pub default_parameters: LevelParameters,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// JSON error body with a status code
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(err: IndicatorError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

async fn list_stocks() -> Json<Value> {
    Json(json!(STOCK_CATALOG))
}

#[derive(Debug, Serialize)]
struct ChoiceResponse {
    code: &'static str,
    label: &'static str,
}

async fn list_options(State(state): State<AppState>) -> Json<Value> {
    let timeframes: Vec<ChoiceResponse> = Timeframe::all()
        .into_iter()
        .map(|t| ChoiceResponse {
            code: t.as_str(),
            label: t.label(),
        })
        .collect();
    let intervals: Vec<ChoiceResponse> = BarInterval::all()
        .into_iter()
        .map(|i| ChoiceResponse {
            code: i.as_str(),
            label: i.label(),
        })
        .collect();

    Json(json!({
        "timeframes": timeframes,
        "default_timeframe": Timeframe::default().as_str(),
        "intervals": intervals,
        "default_interval": BarInterval::default().as_str(),
        "bounds": ParameterBounds::default(),
        "defaults": state.default_parameters,
    }))
}

/// Response for one level detection run
#[derive(Debug, Serialize, Deserialize)]
pub struct LevelsResponse {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Timeframe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<BarInterval>,
    pub bars: usize,
    pub parameters: LevelParameters,
    pub levels: Vec<f64>,
    pub table: LevelTable,
    pub rows: Vec<LevelRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Compute levels for a catalogue stock or raw ticker
///
/// Query: `period`, `interval`, `min_touches`, `distance`, `tolerance`.
async fn get_levels(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<LevelsResponse>, ApiError> {
    let period = match params.get("period") {
        Some(raw) => raw.parse::<Timeframe>().map_err(ApiError::bad_request)?,
        None => Timeframe::default(),
    };
    let interval = match params.get("interval") {
        Some(raw) => raw.parse::<BarInterval>().map_err(ApiError::bad_request)?,
        None => BarInterval::default(),
    };
    let parameters = parse_level_parameters_from_map(&params, state.default_parameters)
        .map_err(ApiError::bad_request)?;
    validate_level_parameters(&parameters).map_err(ApiError::bad_request)?;

    let ticker = resolve_symbol(&symbol);
    let name = find_listing(&ticker).map(|listing| listing.name.to_string());

    let candles = state
        .provider
        .get_candles(&ticker, period, interval)
        .await
        .map_err(|e| {
            error!(error = %e, symbol = %ticker, "Failed to fetch candles");
            ApiError {
                status: StatusCode::BAD_GATEWAY,
                message: e.to_string(),
            }
        })?;

    let prices = closes(&candles);
    let result = calculate_support_resistance(&prices, parameters);
    state.metrics.record_detection(result.levels.len());

    info!(
        symbol = %ticker,
        range = %period,
        interval = %interval,
        bars = prices.len(),
        levels = result.levels.len(),
        "Support/resistance levels computed"
    );

    let warning = if prices.is_empty() {
        Some(NO_DATA_WARNING.to_string())
    } else {
        None
    };

    Ok(Json(LevelsResponse {
        symbol: ticker,
        name,
        period: Some(period),
        interval: Some(interval),
        bars: prices.len(),
        parameters,
        rows: result.table.rows().collect(),
        levels: result.levels,
        table: result.table,
        warning,
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComputeLevelsRequest {
    pub closes: Vec<f64>,
    #[serde(default)]
    pub parameters: Option<LevelParameters>,
}

/// Run detection on caller-supplied closes; parameters are used as given
async fn compute_levels(
    State(state): State<AppState>,
    Json(request): Json<ComputeLevelsRequest>,
) -> Json<LevelsResponse> {
    let parameters = request.parameters.unwrap_or(state.default_parameters);
    let result = calculate_support_resistance(&request.closes, parameters);
    state.metrics.record_detection(result.levels.len());

    Json(LevelsResponse {
        symbol: String::new(),
        name: None,
        period: None,
        interval: None,
        bars: request.closes.len(),
        parameters,
        rows: result.table.rows().collect(),
        levels: result.levels,
        table: result.table,
        warning: None,
    })
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/stocks", get(list_stocks))
        .route("/api/options", get(list_options))
        .route("/api/levels", post(compute_levels))
        .route("/api/levels/{symbol}", get(get_levels))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    config: &Config,
    provider: Arc<dyn MarketDataProvider>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let metrics = Arc::new(Metrics::new().map_err(|e| e.to_string())?);

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        provider,
        default_parameters: config.default_parameters,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
