//! Error type shared by the evaluation pipeline

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("strategy not found: {0}")]
    StrategyNotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("strategy {strategy_id} produced no market conditions")]
    NoConditions { strategy_id: String },

    #[error("invalid strategy: {0}")]
    InvalidStrategy(String),

    #[error("no market data for {0}")]
    MarketDataUnavailable(String),

    #[error("failed to read strategy catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("failed to parse strategy catalog: {0}")]
    CatalogFormat(#[from] serde_json::Error),
}

impl EvaluationError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        EvaluationError::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
