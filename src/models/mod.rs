//! Shared data models spanning the engine layers.

pub mod market;
pub mod signal;
pub mod strategy;

pub use market::{IndicatorMap, MarketSnapshot};
pub use signal::{
    ConditionSignal, Evaluation, MarketCondition, OrderRequest, OrderSide, OrderType,
    PositionSizing, SignalDecision, TradingSignal,
};
pub use strategy::{ParameterValue, StrategyType, TradingStrategy};
