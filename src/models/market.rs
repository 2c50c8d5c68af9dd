//! Market readings supplied by the data collaborator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Indicator key holding the volume-weighted average price
pub const VWAP: &str = "vwap";
/// Indicator key holding the rolling average volume
pub const AVERAGE_VOLUME: &str = "averageVolume";
/// Indicator key holding the upper Bollinger band
pub const UPPER_BB: &str = "upperBB";
/// Indicator key holding the lower Bollinger band
pub const LOWER_BB: &str = "lowerBB";

/// Named indicator values, keyed the way the dashboard sends them
pub type IndicatorMap = HashMap<String, f64>;

/// Latest market readings for a symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub symbol: String,
    pub price: f64,
    pub volume: f64,
    #[serde(default)]
    pub indicators: IndicatorMap,
    pub timestamp: DateTime<Utc>,
}

impl MarketSnapshot {
    pub fn new(symbol: impl Into<String>, price: f64, volume: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            volume,
            indicators: HashMap::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_indicator(mut self, name: impl Into<String>, value: f64) -> Self {
        self.indicators.insert(name.into(), value);
        self
    }
}
