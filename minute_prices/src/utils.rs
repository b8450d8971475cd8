//! Utility functions for minute price series
//!
//! Synthetic data generation for tests, demos and benchmarks.

use crate::{PriceSeries, Result};
use rand::Rng;

/// Minutes in a regular 09:30-16:00 session
pub const REGULAR_SESSION_MINUTES: usize = 390;

/// Generate a random-walk price series
///
/// # Arguments
/// * `rng` - Random source; pass a seeded generator for reproducible series
/// * `points` - Number of samples to generate
/// * `base_price` - Opening price
/// * `volatility` - Maximum per-sample move as a fraction of price (0.0-1.0)
///
/// # Returns
/// * `Result<PriceSeries>` - Generated series, prices floored at one cent
pub fn generate_minute_prices<R: Rng + ?Sized>(
    rng: &mut R,
    points: usize,
    base_price: f64,
    volatility: f64,
) -> Result<PriceSeries> {
    let mut prices = Vec::with_capacity(points);
    let mut current_price = base_price;

    for minute in 0..points {
        if minute > 0 {
            // Volatility is higher near the open and the close
            let minute_factor = minute as f64 / points as f64;
            let intraday_volatility = 1.0 + 0.5 * (4.0 * (minute_factor - 0.5).powi(2));

            let price_change =
                current_price * volatility * intraday_volatility * (rng.gen::<f64>() - 0.5);
            current_price = (current_price + price_change).max(0.01);
        }
        prices.push(current_price);
    }

    PriceSeries::new(prices)
}
