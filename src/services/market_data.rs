//! Market data provider interface for feeding the signal engine.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{EvaluationError, Result};
use crate::models::market::MarketSnapshot;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Latest snapshot for a symbol
    async fn snapshot(&self, symbol: &str) -> Result<MarketSnapshot>;

    /// Record a new snapshot, replacing the previous one for its symbol
    async fn publish(&self, snapshot: MarketSnapshot) -> Result<()>;
}

/// Process-local snapshot cache
#[derive(Default)]
pub struct InMemoryMarketData {
    snapshots: RwLock<HashMap<String, MarketSnapshot>>,
}

impl InMemoryMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.snapshots.read().await.keys().cloned().collect();
        symbols.sort();
        symbols
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryMarketData {
    async fn snapshot(&self, symbol: &str) -> Result<MarketSnapshot> {
        self.snapshots
            .read()
            .await
            .get(symbol)
            .cloned()
            .ok_or_else(|| EvaluationError::MarketDataUnavailable(symbol.to_string()))
    }

    async fn publish(&self, snapshot: MarketSnapshot) -> Result<()> {
        if !snapshot.price.is_finite() || snapshot.price <= 0.0 {
            return Err(EvaluationError::invalid_input(format!(
                "snapshot price for {} must be positive",
                snapshot.symbol
            )));
        }
        debug!(
            symbol = %snapshot.symbol,
            price = snapshot.price,
            indicators = snapshot.indicators.len(),
            "Market snapshot published"
        );
        self.snapshots
            .write()
            .await
            .insert(snapshot.symbol.clone(), snapshot);
        Ok(())
    }
}
