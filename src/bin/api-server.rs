//! Levelscope API Server
//!
//! Serves support/resistance detection over HTTP, backed by Yahoo Finance
//! chart data. The service keeps no state between requests.

use dotenvy::dotenv;
use levelscope::config::Config;
use levelscope::core::http::start_server;
use levelscope::logging;
use levelscope::services::yahoo::YahooMarketDataProvider;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();


    let config = Config::from_env();
    logging::init_logging(&config);
    info!("Starting Levelscope API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);
    info!(
        base_url = %config.market_data.base_url,
        max_retries = config.market_data.max_retries,
        "Market data provider"
    );

    let provider = Arc::new(YahooMarketDataProvider::new(&config.market_data)?);

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        result = start_server(&config, provider) => {
            if let Err(e) = result {
                error!(error = %e, "HTTP server error");
            } else {
                error!("HTTP server stopped");
            }
        }
    }

    info!("API server stopped");
    Ok(())
}
