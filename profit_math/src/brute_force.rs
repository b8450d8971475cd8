//! Exhaustive O(n²) reference scan
//!
//! Tries every buy/sell pair. Too slow for a full trading day of minute
//! samples in hot paths, but trivially correct, which makes it the oracle
//! the linear scan is tested against.

use crate::{ensure_tradable, profit_at, Price, Result};

/// Best profit over every pair `i < j`, computed exhaustively.
///
/// Every pair is range-checked, so integer series whose extreme pairs do
/// not fit in `T` fail here even when [`crate::max_profit`] succeeds.
pub fn max_profit_quadratic<T: Price>(prices: &[T]) -> Result<T> {
    ensure_tradable(prices)?;

    let mut best = profit_at(prices[1], prices[0], 1)?;
    for (buy_index, &buy_price) in prices.iter().enumerate() {
        for (sell_index, &sell_price) in prices.iter().enumerate().skip(buy_index + 1) {
            let profit = profit_at(sell_price, buy_price, sell_index)?;
            if profit > best {
                best = profit;
            }
        }
    }

    Ok(best)
}
