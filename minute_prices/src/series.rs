//! Validated minute price series

use crate::{MarketSession, Result, SeriesError};
use chrono::NaiveTime;
use profit_math::{Trade, TradeAdvice};
use serde::{Deserialize, Serialize};

/// Prices in dollars, one per sample since market open.
///
/// Read-only once built: there is no way to mutate the prices through this
/// type, and every value is finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PriceSeries {
    prices: Vec<f64>,
}

/// Best trade together with its clock times
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedTrade {
    pub trade: Trade<f64>,
    pub buy_time: NaiveTime,
    pub sell_time: NaiveTime,
}

impl PriceSeries {
    /// Build a series, rejecting NaN and infinite prices
    pub fn new(prices: Vec<f64>) -> Result<Self> {
        if let Some((minute, &value)) = prices.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(SeriesError::InvalidPrice { minute, value });
        }

        tracing::debug!(points = prices.len(), "built price series");
        Ok(Self { prices })
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Price at `minute` samples after the open
    pub fn get(&self, minute: usize) -> Option<f64> {
        self.prices.get(minute).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.prices.iter().copied()
    }

    /// Best profit from one buy and one later sell
    pub fn max_profit(&self) -> Result<f64> {
        Ok(profit_math::max_profit(&self.prices)?)
    }

    /// Best trade with sample indices
    pub fn best_trade(&self) -> Result<Trade<f64>> {
        Ok(profit_math::best_trade(&self.prices)?)
    }

    /// Best trade with buy and sell times resolved against `session`
    pub fn timed_trade(&self, session: &MarketSession) -> Result<TimedTrade> {
        let trade = self.best_trade()?;
        Ok(TimedTrade {
            trade,
            buy_time: session.time_at(trade.buy_index),
            sell_time: session.time_at(trade.sell_index),
        })
    }

    pub fn advice(&self) -> Result<TradeAdvice<f64>> {
        Ok(profit_math::advise(&self.prices)?)
    }
}

impl TryFrom<Vec<f64>> for PriceSeries {
    type Error = SeriesError;

    fn try_from(prices: Vec<f64>) -> Result<Self> {
        Self::new(prices)
    }
}

impl From<PriceSeries> for Vec<f64> {
    fn from(series: PriceSeries) -> Self {
        series.prices
    }
}

impl AsRef<[f64]> for PriceSeries {
    fn as_ref(&self) -> &[f64] {
        &self.prices
    }
}
