//! Signal, sizing and order models produced by the evaluation pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::signals::scoring::clamp_confidence;

/// Per-indicator verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionSignal {
    Buy,
    Sell,
    Neutral,
}

impl ConditionSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionSignal::Buy => "buy",
            ConditionSignal::Sell => "sell",
            ConditionSignal::Neutral => "neutral",
        }
    }
}

impl fmt::Display for ConditionSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One indicator's reading and verdict
///
/// Deserialized conditions go through [`MarketCondition::new`], so a
/// condition read from JSON is clamped like one built by an evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConditionFields")]
pub struct MarketCondition {
    pub indicator: String,
    pub value: f64,
    pub signal: ConditionSignal,
    /// Within `[0, 100]` unless overwritten after construction
    pub confidence: f64,
}

#[derive(Deserialize)]
struct ConditionFields {
    indicator: String,
    value: f64,
    signal: ConditionSignal,
    confidence: f64,
}

impl From<ConditionFields> for MarketCondition {
    fn from(fields: ConditionFields) -> Self {
        MarketCondition::new(
            fields.indicator,
            fields.value,
            fields.signal,
            fields.confidence,
        )
    }
}

impl MarketCondition {
    pub fn new(
        indicator: impl Into<String>,
        value: f64,
        signal: ConditionSignal,
        confidence: f64,
    ) -> Self {
        Self {
            indicator: indicator.into(),
            value,
            signal,
            confidence: clamp_confidence(confidence),
        }
    }
}

/// Aggregated decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalDecision {
    Buy,
    Sell,
    Hold,
}

impl SignalDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalDecision::Buy => "buy",
            SignalDecision::Sell => "sell",
            SignalDecision::Hold => "hold",
        }
    }

    pub fn is_trade(&self) -> bool {
        !matches!(self, SignalDecision::Hold)
    }
}

impl fmt::Display for SignalDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    pub signal: SignalDecision,
    pub confidence: f64,
    pub reasoning: Vec<String>,
}

/// Concrete order parameters from the fixed-fractional risk model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSizing {
    pub quantity: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Market,
    Limit,
}

/// Request shape accepted by the order-execution service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub symbol: String,
    pub quantity: f64,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<f64>,
}

impl OrderRequest {
    /// Market order for a buy/sell signal; `None` for hold or an empty position
    pub fn market(
        symbol: impl Into<String>,
        signal: &TradingSignal,
        sizing: &PositionSizing,
    ) -> Option<Self> {
        let side = match signal.signal {
            SignalDecision::Buy => OrderSide::Buy,
            SignalDecision::Sell => OrderSide::Sell,
            SignalDecision::Hold => return None,
        };
        if sizing.quantity <= 0.0 {
            return None;
        }
        Some(Self {
            symbol: symbol.into(),
            quantity: sizing.quantity,
            side,
            order_type: OrderType::Market,
            limit_price: None,
        })
    }

    pub fn with_limit_price(mut self, limit_price: f64) -> Self {
        self.order_type = OrderType::Limit;
        self.limit_price = Some(limit_price);
        self
    }
}

/// Full pipeline output for one strategy and one market snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub strategy_id: String,
    pub symbol: String,
    pub conditions: Vec<MarketCondition>,
    pub signal: TradingSignal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionSizing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderRequest>,
    pub generated_at: DateTime<Utc>,
}
