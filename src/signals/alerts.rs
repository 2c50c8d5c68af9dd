//! Price alerts checked against the latest market snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

use crate::error::EvaluationError;
use crate::models::market::MarketSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    AtOrAbove,
    AtOrBelow,
    Above,
    Below,
}

impl Comparison {
    /// Two-character operators first so `>=` is never read as `>`
    const OPERATORS: [(&'static str, Comparison); 4] = [
        (">=", Comparison::AtOrAbove),
        ("<=", Comparison::AtOrBelow),
        (">", Comparison::Above),
        ("<", Comparison::Below),
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::AtOrAbove => ">=",
            Comparison::AtOrBelow => "<=",
            Comparison::Above => ">",
            Comparison::Below => "<",
        }
    }
}

/// A threshold on the latest price, written like `close >= 105.5`
///
/// Text before the operator is a label and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AlertCondition {
    pub comparison: Comparison,
    pub threshold: f64,
}

impl AlertCondition {
    pub fn new(comparison: Comparison, threshold: f64) -> Self {
        Self {
            comparison,
            threshold,
        }
    }

    pub fn is_met(&self, price: f64) -> bool {
        match self.comparison {
            Comparison::AtOrAbove => price >= self.threshold,
            Comparison::AtOrBelow => price <= self.threshold,
            Comparison::Above => price > self.threshold,
            Comparison::Below => price < self.threshold,
        }
    }
}

impl FromStr for AlertCondition {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (comparison, threshold) = Comparison::OPERATORS
            .iter()
            .find_map(|(operator, comparison)| {
                s.split_once(*operator).map(|(_, rest)| (*comparison, rest))
            })
            .ok_or_else(|| {
                EvaluationError::invalid_input(format!("alert condition has no comparison: {}", s))
            })?;

        let threshold: f64 = threshold.trim().parse().map_err(|_| {
            EvaluationError::invalid_input(format!("alert threshold is not a number: {}", s))
        })?;
        if !threshold.is_finite() {
            return Err(EvaluationError::invalid_input(format!(
                "alert threshold must be finite: {}",
                s
            )));
        }

        Ok(Self::new(comparison, threshold))
    }
}

impl TryFrom<String> for AlertCondition {
    type Error = EvaluationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AlertCondition> for String {
    fn from(condition: AlertCondition) -> Self {
        condition.to_string()
    }
}

impl fmt::Display for AlertCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "close {} {}", self.comparison.symbol(), self.threshold)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAlert {
    pub id: String,
    pub symbol: String,
    pub condition: AlertCondition,
    #[serde(default)]
    pub message: String,
}

/// Notification for an alert whose condition held
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertTrigger {
    pub alert_id: String,
    pub symbol: String,
    pub message: String,
    pub price: f64,
    pub triggered_at: DateTime<Utc>,
}

impl PriceAlert {
    /// `None` unless the snapshot is for this alert's symbol and meets its condition
    pub fn check(&self, snapshot: &MarketSnapshot) -> Option<AlertTrigger> {
        if snapshot.symbol != self.symbol || !self.condition.is_met(snapshot.price) {
            return None;
        }
        info!(
            alert_id = %self.id,
            symbol = %self.symbol,
            price = snapshot.price,
            condition = %self.condition,
            "Price alert triggered"
        );
        Some(AlertTrigger {
            alert_id: self.id.clone(),
            symbol: self.symbol.clone(),
            message: self.message.clone(),
            price: snapshot.price,
            triggered_at: Utc::now(),
        })
    }
}

/// Alerts triggered by `snapshot`, in input order
pub fn triggered_alerts(alerts: &[PriceAlert], snapshot: &MarketSnapshot) -> Vec<AlertTrigger> {
    alerts
        .iter()
        .filter_map(|alert| alert.check(snapshot))
        .collect()
}
