//! SignalDesk: strategy catalog, market condition analysis, signal
//! aggregation and fixed-fractional position sizing for the trading
//! dashboard.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
pub mod strategies;

pub use error::{EvaluationError, Result};
