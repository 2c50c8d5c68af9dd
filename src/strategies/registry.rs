//! Read-only strategy registry

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EvaluationError, Result};
use crate::models::strategy::{StrategyType, TradingStrategy};
use crate::strategies::catalog::default_strategies;

/// Fixed catalog of strategies, immutable once built
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    strategies: Vec<TradingStrategy>,
}

impl StrategyRegistry {
    /// Registry seeded with the built-in catalog
    pub fn new() -> Self {
        Self {
            strategies: default_strategies(),
        }
    }

    /// Build a registry from a custom catalog, rejecting duplicate ids and
    /// negative risk settings.
    pub fn from_strategies(strategies: Vec<TradingStrategy>) -> Result<Self> {
        let mut seen = HashSet::new();
        for strategy in &strategies {
            validate_strategy(strategy)?;
            if !seen.insert(strategy.id.as_str()) {
                return Err(EvaluationError::InvalidStrategy(format!(
                    "duplicate strategy id {}",
                    strategy.id
                )));
            }
        }
        Ok(Self { strategies })
    }

    /// Load a catalog from a JSON array of strategies
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let strategies: Vec<TradingStrategy> = serde_json::from_str(&raw)?;
        let registry = Self::from_strategies(strategies)?;
        info!(
            path = %path.display(),
            strategies = registry.len(),
            "Loaded strategy catalog"
        );
        Ok(registry)
    }

    /// Exact-match lookup; absence is not an error
    pub fn get_strategy_by_id(&self, id: &str) -> Option<&TradingStrategy> {
        let found = self.strategies.iter().find(|s| s.id == id);
        if found.is_none() {
            debug!(strategy_id = id, "Strategy lookup missed");
        }
        found
    }

    pub fn list(&self) -> &[TradingStrategy] {
        &self.strategies
    }

    pub fn by_type(&self, strategy_type: StrategyType) -> Vec<&TradingStrategy> {
        self.strategies
            .iter()
            .filter(|s| s.strategy_type == strategy_type)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_strategy(strategy: &TradingStrategy) -> Result<()> {
    if strategy.id.trim().is_empty() {
        return Err(EvaluationError::InvalidStrategy(
            "strategy id must not be empty".to_string(),
        ));
    }
    let percentages = [
        ("risk_percentage", strategy.risk_percentage),
        ("take_profit", strategy.take_profit),
        ("stop_loss", strategy.stop_loss),
    ];
    for (field, value) in percentages {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(EvaluationError::InvalidStrategy(format!(
                "{}: {} must be between 0 and 100, got {}",
                strategy.id, field, value
            )));
        }
    }
    Ok(())
}
