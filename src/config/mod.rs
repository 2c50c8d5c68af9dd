//! Environment-driven configuration

use std::env;
use std::path::PathBuf;

use crate::logging::LogFormat;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ENVIRONMENT: &str = "sandbox";

/// Deployment environment from `APP_ENV` (defaults to `sandbox`)
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|v| v.trim().to_lowercase())
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub port: u16,
    pub log_format: LogFormat,
    /// JSON strategy catalog replacing the built-in one
    pub strategy_catalog_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let strategy_catalog_path = env::var("STRATEGY_CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let environment = get_environment();
        Self {
            log_format: LogFormat::from_env(&environment),
            environment,
            port,
            strategy_catalog_path,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::Pretty,
            strategy_catalog_path: None,
        }
    }
}
