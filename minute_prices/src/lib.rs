//! # Minute Prices
//!
//! Intraday price series sampled at fixed minute intervals from market open.
//!
//! A [`PriceSeries`] is indexed by elapsed minutes since the open, so index 0
//! is the opening price. A [`MarketSession`] maps those indices back to clock
//! times (09:30 open with one-minute sampling by default).
//!
//! ## Usage Example
//!
//! ```
//! use minute_prices::{MarketSession, PriceSeries};
//!
//! let series = PriceSeries::new(vec![500.0, 498.5, 503.0, 501.0])?;
//! let trade = series.timed_trade(&MarketSession::default())?;
//!
//! assert_eq!(trade.trade.profit(), 4.5);
//! assert_eq!(trade.buy_time.to_string(), "09:31:00");
//! # Ok::<(), minute_prices::SeriesError>(())
//! ```

use profit_math::ProfitError;
use thiserror::Error;

mod series;
mod session;
pub mod utils;

pub use series::{PriceSeries, TimedTrade};
pub use session::MarketSession;

/// Errors that can occur when building or analysing a price series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("Invalid price at minute {minute}: {value}")]
    InvalidPrice { minute: usize, value: f64 },

    #[error("Invalid market session: {0}")]
    InvalidSession(String),

    #[error(transparent)]
    Profit(#[from] ProfitError),
}

/// Result type for price series operations
pub type Result<T> = std::result::Result<T, SeriesError>;
