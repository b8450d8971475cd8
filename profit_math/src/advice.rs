//! Human-readable trade advice
//!
//! Keeps the "should we trade?" wording away from the calculation itself.
//! Advice only interprets the sign of an already computed profit and never
//! changes it.

use crate::{max_profit, Price, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decision derived from the best achievable profit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum TradeAdvice<T> {
    /// Buying then selling makes money
    Sell { profit: T },
    /// Every possible trade breaks even or loses money
    DoNotTrade { profit: T },
}

impl<T: Price> TradeAdvice<T> {
    /// Interpret a computed profit
    pub fn from_profit(profit: T) -> Self {
        if profit > T::zero() {
            TradeAdvice::Sell { profit }
        } else {
            TradeAdvice::DoNotTrade { profit }
        }
    }
}

impl<T: Copy> TradeAdvice<T> {
    /// The profit this advice was derived from, unchanged
    pub fn profit(&self) -> T {
        match *self {
            TradeAdvice::Sell { profit } | TradeAdvice::DoNotTrade { profit } => profit,
        }
    }

    pub fn should_trade(&self) -> bool {
        matches!(self, TradeAdvice::Sell { .. })
    }
}

impl<T: fmt::Display> fmt::Display for TradeAdvice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAdvice::Sell { profit } => write!(f, "We should sell, profit is: {}", profit),
            TradeAdvice::DoNotTrade { profit } => {
                write!(f, "We shouldn't trade because profit is: {}", profit)
            }
        }
    }
}

/// Compute the best profit for `prices` and wrap it in advice
///
/// # Errors
/// Propagates [`crate::ProfitError::InsufficientData`] from [`max_profit`].
pub fn advise<T>(prices: &[T]) -> Result<TradeAdvice<T>>
where
    T: Price + fmt::Display,
{
    let advice = TradeAdvice::from_profit(max_profit(prices)?);
    tracing::debug!(points = prices.len(), %advice, "evaluated single-trade advice");
    Ok(advice)
}
