//! # Profit Math
//!
//! Single-trade profit calculations over a price series.
//! This crate answers one question: given the prices of a stock sampled at
//! fixed intervals, what is the best profit from buying once and selling once
//! at a strictly later sample?
//!
//! - [`max_profit`]: single-pass linear scan returning the best profit
//! - [`best_trade`]: same scan, also reporting which samples to buy and sell at
//! - [`brute_force::max_profit_quadratic`]: exhaustive reference scan
//! - [`advice`]: turns a computed profit into a human-readable decision
//!
//! ## Example
//!
//! ```
//! use profit_math::{max_profit, ProfitError};
//!
//! assert_eq!(max_profit(&[10, 7, 5, 8, 11, 9]).unwrap(), 6);
//! assert_eq!(max_profit(&[9, 7, 4, 1]).unwrap(), -2);
//! assert!(matches!(max_profit::<i32>(&[]), Err(ProfitError::InsufficientData(0))));
//! ```

use num_traits::Signed;
use thiserror::Error;

pub mod advice;
pub mod brute_force;
mod max_profit;

pub use advice::{advise, TradeAdvice};
pub use max_profit::{best_trade, max_profit, Trade};

/// Minimum number of samples needed to buy and then sell at a later sample
pub const MIN_PRICE_POINTS: usize = 2;

/// Errors that can occur in profit calculations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfitError {
    #[error("Evaluating profit requires at least 2 data points, got {0}")]
    InsufficientData(usize),

    #[error("Profit for sale at index {sell_index} does not fit in the price type")]
    PriceOverflow { sell_index: usize },
}

/// Result type for profit calculations
pub type Result<T> = std::result::Result<T, ProfitError>;

/// Numeric types usable as prices.
///
/// Only signed types qualify, since a profit can be a loss. Integer cents
/// and `f64` dollars both work; unsigned integers are rejected at compile
/// time:
///
/// ```compile_fail
/// profit_math::max_profit(&[900u32, 700, 400, 100]);
/// ```
///
/// Comparisons involving NaN are always false, so a NaN never becomes the
/// running minimum or the best profit unless it is the first candidate.
pub trait Price: Copy + PartialOrd + Signed {
    /// `self - buy`, or `None` when the difference is not representable
    fn checked_profit(self, buy: Self) -> Option<Self>;
}

macro_rules! impl_integer_price {
    ($($t:ty),*) => {
        $(
            impl Price for $t {
                fn checked_profit(self, buy: Self) -> Option<Self> {
                    self.checked_sub(buy)
                }
            }
        )*
    };
}

macro_rules! impl_float_price {
    ($($t:ty),*) => {
        $(
            impl Price for $t {
                fn checked_profit(self, buy: Self) -> Option<Self> {
                    Some(self - buy)
                }
            }
        )*
    };
}

impl_integer_price!(i8, i16, i32, i64, i128, isize);
impl_float_price!(f32, f64);

/// Fails with [`ProfitError::InsufficientData`] unless a trade is possible.
pub(crate) fn ensure_tradable<T>(prices: &[T]) -> Result<()> {
    if prices.len() < MIN_PRICE_POINTS {
        return Err(ProfitError::InsufficientData(prices.len()));
    }
    Ok(())
}

/// Profit of selling at `sell_index` for `sell` after buying at `buy`
pub(crate) fn profit_at<T: Price>(sell: T, buy: T, sell_index: usize) -> Result<T> {
    sell.checked_profit(buy).ok_or(ProfitError::PriceOverflow { sell_index })
}
