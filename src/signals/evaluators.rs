//! Per-strategy market evaluators
//!
//! Each evaluator turns raw indicator readings into [`MarketCondition`]s the
//! way one strategy interprets them. The [`EvaluatorRegistry`] maps strategy
//! ids to evaluators so new strategies are added by registration.

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::market::{IndicatorMap, AVERAGE_VOLUME, LOWER_BB, UPPER_BB, VWAP};
use crate::models::signal::{ConditionSignal, MarketCondition};
use crate::models::strategy::TradingStrategy;
use crate::signals::scoring::{band_position, percent_deviation};
use crate::strategies::catalog::{BREAKOUT_MOMENTUM, VWAP_SCALPING};

/// Strategy-specific interpretation of indicator readings
pub trait MarketEvaluator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Produce conditions in a stable order. Missing indicator keys yield
    /// no conditions for the affected branch.
    fn analyze(
        &self,
        strategy: &TradingStrategy,
        price: f64,
        volume: f64,
        indicators: &IndicatorMap,
    ) -> Vec<MarketCondition>;
}

/// Indicator value that is present, finite and non-zero
fn reading(indicators: &IndicatorMap, key: &str) -> Option<f64> {
    indicators
        .get(key)
        .copied()
        .filter(|v| v.is_finite() && *v != 0.0)
}

/// Price versus VWAP with volume confirmation
#[derive(Debug, Default, Clone, Copy)]
pub struct VwapEvaluator;

impl VwapEvaluator {
    pub const VOLUME_THRESHOLD_PARAM: &'static str = "volume_threshold";

    fn vwap_condition(price: f64, vwap: f64) -> MarketCondition {
        let deviation = percent_deviation(price, vwap);
        let signal = if deviation > 0.0 {
            ConditionSignal::Sell
        } else {
            ConditionSignal::Buy
        };
        MarketCondition::new("VWAP", deviation, signal, (deviation.abs() * 10.0).min(100.0))
    }

    fn volume_condition(
        volume: f64,
        average_volume: f64,
        threshold: Option<f64>,
    ) -> MarketCondition {
        let ratio = volume / average_volume;
        let signal = match threshold {
            Some(threshold) if ratio > threshold => ConditionSignal::Buy,
            _ => ConditionSignal::Neutral,
        };
        MarketCondition::new("Volume", ratio, signal, (ratio * 20.0).min(100.0))
    }
}

impl MarketEvaluator for VwapEvaluator {
    fn name(&self) -> &'static str {
        "vwap"
    }

    fn analyze(
        &self,
        strategy: &TradingStrategy,
        price: f64,
        volume: f64,
        indicators: &IndicatorMap,
    ) -> Vec<MarketCondition> {
        let Some(vwap) = reading(indicators, VWAP) else {
            return Vec::new();
        };

        let mut conditions = vec![Self::vwap_condition(price, vwap)];

        if let Some(average_volume) = reading(indicators, AVERAGE_VOLUME).filter(|v| *v > 0.0) {
            let threshold = strategy.numeric_parameter(Self::VOLUME_THRESHOLD_PARAM);
            conditions.push(Self::volume_condition(volume, average_volume, threshold));
        }

        conditions
    }
}

/// Price position inside the Bollinger bands
#[derive(Debug, Default, Clone, Copy)]
pub struct BollingerBreakoutEvaluator;

impl BollingerBreakoutEvaluator {
    pub const UPPER_ZONE: f64 = 0.8;
    pub const LOWER_ZONE: f64 = 0.2;
}

impl MarketEvaluator for BollingerBreakoutEvaluator {
    fn name(&self) -> &'static str {
        "bollinger_breakout"
    }

    fn analyze(
        &self,
        _strategy: &TradingStrategy,
        price: f64,
        _volume: f64,
        indicators: &IndicatorMap,
    ) -> Vec<MarketCondition> {
        let upper = reading(indicators, UPPER_BB);
        let lower = reading(indicators, LOWER_BB);
        let (Some(upper), Some(lower)) = (upper, lower) else {
            return Vec::new();
        };
        if upper == lower {
            return Vec::new();
        }

        let position = band_position(price, lower, upper);
        let signal = if position > Self::UPPER_ZONE {
            ConditionSignal::Sell
        } else if position < Self::LOWER_ZONE {
            ConditionSignal::Buy
        } else {
            ConditionSignal::Neutral
        };

        vec![MarketCondition::new(
            "BB Position",
            position,
            signal,
            (0.5 - position).abs() * 200.0,
        )]
    }
}

/// Lookup table from strategy id to evaluator
#[derive(Clone, Default)]
pub struct EvaluatorRegistry {
    evaluators: HashMap<String, Arc<dyn MarketEvaluator>>,
}

impl EvaluatorRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Evaluators for the built-in strategies
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(VWAP_SCALPING, Arc::new(VwapEvaluator));
        registry.register(BREAKOUT_MOMENTUM, Arc::new(BollingerBreakoutEvaluator));
        registry
    }

    /// Register (or replace) the evaluator for a strategy id
    pub fn register(
        &mut self,
        strategy_id: impl Into<String>,
        evaluator: Arc<dyn MarketEvaluator>,
    ) {
        self.evaluators.insert(strategy_id.into(), evaluator);
    }

    pub fn get(&self, strategy_id: &str) -> Option<&Arc<dyn MarketEvaluator>> {
        self.evaluators.get(strategy_id)
    }

    pub fn contains(&self, strategy_id: &str) -> bool {
        self.evaluators.contains_key(strategy_id)
    }
}

impl std::fmt::Debug for EvaluatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<_> = self.evaluators.keys().collect();
        ids.sort();
        f.debug_struct("EvaluatorRegistry")
            .field("strategies", &ids)
            .finish()
    }
}
