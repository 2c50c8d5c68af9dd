//! Logging initialization
//!
//! Production emits structured JSON for log aggregation; other environments
//! get colored human-readable output. `LOG_FORMAT` overrides either choice
//! and `RUST_LOG` overrides the default filter.

use std::env;
use std::str::FromStr;

use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer, Registry,
};

use crate::config::is_production;

pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    /// Single-line, no colors; for CI and piped output
    Compact,
}

impl LogFormat {
    pub fn for_environment(environment: &str) -> Self {
        if is_production(environment) {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }

    /// `LOG_FORMAT` if set and recognised, else the environment's default
    pub fn from_env(environment: &str) -> Self {
        env::var("LOG_FORMAT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| Self::for_environment(environment))
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("Unknown log format: {}", other)),
        }
    }
}

fn format_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stdout)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_ansi(true)
            .with_writer(std::io::stdout)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .with_ansi(false)
            .with_writer(std::io::stdout)
            .boxed(),
    }
}

/// Install the global subscriber; fails if one is already installed
pub fn init_logging(format: LogFormat) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(format_layer(format))
        .with(env_filter)
        .try_init()
}
