//! SignalDesk API Server
//!
//! HTTP API over the strategy registry and signal pipeline.
//! The service keeps no state beyond its market snapshot cache and can be
//! horizontally scaled.

use dotenvy::dotenv;
use signaldesk::config::AppConfig;
use signaldesk::core::http::start_server;
use signaldesk::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = AppConfig::from_env();
    logging::init_logging(config.log_format)?;

    info!("Starting SignalDesk API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);
    if let Some(path) = &config.strategy_catalog_path {
        info!(path = %path.display(), "Using custom strategy catalog");
    }

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        result = start_server(&config) => {
            if let Err(e) = result {
                error!(error = %e, "HTTP server error");
                return Err(e);
            }
            error!("HTTP server stopped");
        }
    }

    info!("API server stopped");
    Ok(())
}
