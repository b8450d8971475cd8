//! # Stock Profit
//!
//! `stock_profit` finds the best profit from buying a stock once and selling
//! it once, later the same day, given prices sampled every minute since the
//! market opened.
//!
//! ## Example
//!
//! ```
//! use stock_profit::{max_profit, PriceSeries, ProfitError};
//!
//! // Index is minutes past the 09:30 open
//! let stock_prices_yesterday = [10.0, 7.0, 5.0, 8.0, 11.0, 9.0];
//! assert_eq!(max_profit(&stock_prices_yesterday).unwrap(), 6.0);
//!
//! let series = PriceSeries::new(stock_prices_yesterday.to_vec()).unwrap();
//! assert_eq!(series.best_trade().unwrap().buy_index, 2);
//!
//! assert_eq!(max_profit(&[500.0]), Err(ProfitError::InsufficientData(1)));
//! ```

pub use minute_prices::{utils, MarketSession, PriceSeries, SeriesError, TimedTrade};
pub use profit_math::brute_force;
pub use profit_math::{advise, best_trade, max_profit, Price, ProfitError, Trade, TradeAdvice};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_facade_reexports() {
        let prices = [1.0, 5.0, 3.0, 2.0];
        assert_eq!(max_profit(&prices).unwrap(), 4.0);
        assert_eq!(brute_force::max_profit_quadratic(&prices).unwrap(), 4.0);

        let series = PriceSeries::new(prices.to_vec()).unwrap();
        let timed = series.timed_trade(&MarketSession::default()).unwrap();
        assert_eq!(timed.buy_time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(timed.sell_time, NaiveTime::from_hms_opt(9, 31, 0).unwrap());
    }

    #[test]
    fn test_advice_wording() {
        let advice = advise(&[9.0, 7.0, 4.0, 1.0]).unwrap();
        assert_eq!(advice.to_string(), "We shouldn't trade because profit is: -2");
    }
}
