//! Linear-time best single trade
//!
//! Both scans keep the lowest price seen strictly before the current sample,
//! so every candidate profit pairs a buy with a later sell.

use crate::{ensure_tradable, profit_at, Price, Result};
use serde::{Deserialize, Serialize};

/// A single buy followed by a later sell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trade<T> {
    /// Sample index of the purchase
    pub buy_index: usize,
    /// Sample index of the sale, always greater than `buy_index`
    pub sell_index: usize,
    /// Purchase price
    pub buy_price: T,
    /// Sale price
    pub sell_price: T,
}

impl<T: Price> Trade<T> {
    /// Sale price minus purchase price; negative for a loss.
    ///
    /// Trades returned by [`best_trade`] are range-checked, so this cannot
    /// overflow for them.
    pub fn profit(&self) -> T {
        self.sell_price - self.buy_price
    }

    /// Number of samples between purchase and sale
    pub fn holding_period(&self) -> usize {
        self.sell_index - self.buy_index
    }
}

/// Best profit from one buy and one strictly later sell.
///
/// The first candidate is `prices[1] - prices[0]`, so the result is the true
/// maximum over all pairs even when every pair loses money. Runs in O(n)
/// time with constant extra space.
///
/// # Errors
/// Returns [`crate::ProfitError::InsufficientData`] for fewer than two prices,
/// and [`crate::ProfitError::PriceOverflow`] when an integer candidate profit
/// does not fit in `T`.
///
/// # Example
/// ```
/// use profit_math::max_profit;
///
/// assert_eq!(max_profit(&[1, 5, 3, 2]).unwrap(), 4);
/// assert_eq!(max_profit(&[1.0, 1.0, 1.0]).unwrap(), 0.0);
/// ```
pub fn max_profit<T: Price>(prices: &[T]) -> Result<T> {
    ensure_tradable(prices)?;

    let mut min_price = prices[0];
    let mut best = profit_at(prices[1], prices[0], 1)?;

    for (index, &price) in prices.iter().enumerate().skip(1) {
        // min_price covers earlier samples only at this point
        let profit = profit_at(price, min_price, index)?;
        if profit > best {
            best = profit;
        }
        if price < min_price {
            min_price = price;
        }
    }

    Ok(best)
}

/// Best trade with the sample indices to buy and sell at.
///
/// Ties resolve to the earliest sale and, for that sale, the earliest
/// purchase at the lowest preceding price. `best_trade(p)?.profit()` always
/// equals `max_profit(p)?`.
///
/// # Errors
/// Same as [`max_profit`].
pub fn best_trade<T: Price>(prices: &[T]) -> Result<Trade<T>> {
    ensure_tradable(prices)?;

    let mut min_index = 0;
    let mut best_profit = profit_at(prices[1], prices[0], 1)?;
    let mut best = Trade {
        buy_index: 0,
        sell_index: 1,
        buy_price: prices[0],
        sell_price: prices[1],
    };

    for (index, &price) in prices.iter().enumerate().skip(1) {
        let buy_price = prices[min_index];
        let profit = profit_at(price, buy_price, index)?;
        if profit > best_profit {
            best_profit = profit;
            best = Trade {
                buy_index: min_index,
                sell_index: index,
                buy_price,
                sell_price: price,
            };
        }
        if price < buy_price {
            min_index = index;
        }
    }

    Ok(best)
}
