//! Market condition analysis dispatching to per-strategy evaluators

use tracing::debug;

use crate::models::market::{IndicatorMap, MarketSnapshot};
use crate::models::signal::MarketCondition;
use crate::models::strategy::TradingStrategy;
use crate::signals::evaluators::EvaluatorRegistry;

#[derive(Debug, Clone)]
pub struct MarketAnalyzer {
    evaluators: EvaluatorRegistry,
}

impl MarketAnalyzer {
    pub fn new(evaluators: EvaluatorRegistry) -> Self {
        Self { evaluators }
    }

    pub fn evaluators(&self) -> &EvaluatorRegistry {
        &self.evaluators
    }

    /// Conditions for `strategy` given the current price, volume and indicators.
    ///
    /// Strategies without a registered evaluator produce no conditions.
    pub fn analyze(
        &self,
        strategy: &TradingStrategy,
        price: f64,
        volume: f64,
        indicators: &IndicatorMap,
    ) -> Vec<MarketCondition> {
        let Some(evaluator) = self.evaluators.get(&strategy.id) else {
            debug!(strategy_id = %strategy.id, "No evaluator registered for strategy");
            return Vec::new();
        };

        let conditions = evaluator.analyze(strategy, price, volume, indicators);
        debug!(
            strategy_id = %strategy.id,
            evaluator = evaluator.name(),
            conditions = conditions.len(),
            "Analyzed market conditions"
        );
        conditions
    }

    pub fn analyze_snapshot(
        &self,
        strategy: &TradingStrategy,
        snapshot: &MarketSnapshot,
    ) -> Vec<MarketCondition> {
        self.analyze(strategy, snapshot.price, snapshot.volume, &snapshot.indicators)
    }
}

impl Default for MarketAnalyzer {
    fn default() -> Self {
        Self::new(EvaluatorRegistry::with_defaults())
    }
}
