//! Trading strategy catalog models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Strategy catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingStrategy {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub strategy_type: StrategyType,
    pub timeframe: String,
    pub indicators: Vec<String>,
    #[serde(default)]
    pub entry_conditions: Vec<String>,
    #[serde(default)]
    pub exit_conditions: Vec<String>,
    pub risk_percentage: f64,
    pub take_profit: f64,
    pub stop_loss: f64,
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterValue>,
}

impl TradingStrategy {
    /// Numeric parameter lookup; string values yield `None`
    pub fn numeric_parameter(&self, name: &str) -> Option<f64> {
        self.parameters.get(name).and_then(ParameterValue::as_f64)
    }

    pub fn uses_indicator(&self, indicator: &str) -> bool {
        self.indicators.iter().any(|i| i == indicator)
    }
}

/// Trading style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    Scalping,
    DayTrading,
    SwingTrading,
}

impl StrategyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyType::Scalping => "scalping",
            StrategyType::DayTrading => "day_trading",
            StrategyType::SwingTrading => "swing_trading",
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy-specific parameter (e.g. `volume_threshold = 1.5`, `vwap_period = "1d"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Number(f64),
    Text(String),
}

impl ParameterValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterValue::Number(value) => Some(*value),
            ParameterValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParameterValue::Number(_) => None,
            ParameterValue::Text(value) => Some(value.as_str()),
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Number(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Text(value.to_string())
    }
}
