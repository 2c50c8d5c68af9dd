//! Main signal evaluation engine: registry lookup, analysis, aggregation and sizing.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::error::{EvaluationError, Result};
use crate::metrics::Metrics;
use crate::models::market::MarketSnapshot;
use crate::models::signal::{Evaluation, OrderRequest};
use crate::signals::aggregation::SignalAggregator;
use crate::signals::analyzer::MarketAnalyzer;
use crate::signals::sizing::PositionSizer;
use crate::strategies::StrategyRegistry;

#[derive(Clone)]
pub struct SignalEngine {
    registry: Arc<StrategyRegistry>,
    analyzer: MarketAnalyzer,
    metrics: Option<Arc<Metrics>>,
}

impl SignalEngine {
    pub fn new(registry: Arc<StrategyRegistry>, analyzer: MarketAnalyzer) -> Self {
        Self {
            registry,
            analyzer,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn analyzer(&self) -> &MarketAnalyzer {
        &self.analyzer
    }

    /// Run the full pipeline for one strategy against one snapshot.
    ///
    /// Position sizing and the order request are only produced for a buy or
    /// sell decision when a balance is supplied.
    pub fn evaluate(
        &self,
        strategy_id: &str,
        snapshot: &MarketSnapshot,
        balance: Option<f64>,
    ) -> Result<Evaluation> {
        let strategy = self
            .registry
            .get_strategy_by_id(strategy_id)
            .ok_or_else(|| EvaluationError::StrategyNotFound(strategy_id.to_string()))?;

        let conditions = self.analyzer.analyze_snapshot(strategy, snapshot);
        if conditions.is_empty() {
            warn!(
                strategy_id = %strategy.id,
                symbol = %snapshot.symbol,
                "Strategy produced no market conditions"
            );
            return Err(EvaluationError::NoConditions {
                strategy_id: strategy.id.clone(),
            });
        }

        let signal = SignalAggregator::aggregate(strategy, &conditions)?;
        if let Some(metrics) = &self.metrics {
            metrics.record_signal(signal.signal);
        }

        let position = match balance {
            Some(balance) if signal.signal.is_trade() => {
                Some(PositionSizer::size(strategy, snapshot.price, balance)?)
            }
            _ => None,
        };
        let order = position
            .as_ref()
            .and_then(|sizing| OrderRequest::market(snapshot.symbol.clone(), &signal, sizing));

        info!(
            strategy_id = %strategy.id,
            symbol = %snapshot.symbol,
            signal = %signal.signal,
            confidence = signal.confidence,
            quantity = position.map(|p| p.quantity),
            "Signal evaluated"
        );

        Ok(Evaluation {
            strategy_id: strategy.id.clone(),
            symbol: snapshot.symbol.clone(),
            conditions,
            signal,
            position,
            order,
            generated_at: Utc::now(),
        })
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(Arc::new(StrategyRegistry::new()), MarketAnalyzer::default())
    }
}
