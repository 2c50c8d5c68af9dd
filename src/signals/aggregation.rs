//! Condition aggregation into a single trading decision

use crate::error::{EvaluationError, Result};
use crate::models::signal::{ConditionSignal, MarketCondition, SignalDecision, TradingSignal};
use crate::models::strategy::TradingStrategy;
use crate::signals::scoring::mean;

/// Average confidence must strictly exceed this to act
pub const CONFIDENCE_THRESHOLD: f64 = 70.0;

pub struct SignalAggregator;

impl SignalAggregator {
    /// Majority vote between buy and sell conditions, gated on average confidence.
    ///
    /// Neutral conditions count toward the average but not toward either side.
    /// Equal buy and sell counts always hold.
    pub fn aggregate(
        strategy: &TradingStrategy,
        conditions: &[MarketCondition],
    ) -> Result<TradingSignal> {
        let average_confidence = mean(conditions.iter().map(|c| c.confidence)).ok_or_else(|| {
            EvaluationError::invalid_input(format!(
                "cannot aggregate an empty condition list for {}",
                strategy.id
            ))
        })?;

        let buys = Self::count(conditions, ConditionSignal::Buy);
        let sells = Self::count(conditions, ConditionSignal::Sell);

        let signal = if buys > sells && average_confidence > CONFIDENCE_THRESHOLD {
            SignalDecision::Buy
        } else if sells > buys && average_confidence > CONFIDENCE_THRESHOLD {
            SignalDecision::Sell
        } else {
            SignalDecision::Hold
        };

        Ok(TradingSignal {
            signal,
            confidence: average_confidence,
            reasoning: Self::reasoning(conditions),
        })
    }

    fn count(conditions: &[MarketCondition], signal: ConditionSignal) -> usize {
        conditions.iter().filter(|c| c.signal == signal).count()
    }

    /// One line per condition, input order preserved
    pub fn reasoning(conditions: &[MarketCondition]) -> Vec<String> {
        conditions
            .iter()
            .map(|c| {
                format!(
                    "{}: {} ({:.1}% confidence)",
                    c.indicator,
                    c.signal.as_str().to_uppercase(),
                    c.confidence
                )
            })
            .collect()
    }
}
