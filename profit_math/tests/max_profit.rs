use profit_math::brute_force::max_profit_quadratic;
use profit_math::{advise, best_trade, max_profit, ProfitError, Trade, TradeAdvice};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

#[rstest]
#[case::price_goes_up_then_down(&[1, 5, 3, 2], 4)]
#[case::price_goes_down_then_up(&[7, 2, 8, 9], 7)]
#[case::price_goes_up_all_day(&[1, 6, 7, 9], 8)]
#[case::price_goes_down_all_day(&[9, 7, 4, 1], -2)]
#[case::price_stays_the_same_all_day(&[1, 1, 1, 1], 0)]
fn test_max_profit_cases(#[case] prices: &[i32], #[case] expected: i32) {
    assert_eq!(max_profit(prices).unwrap(), expected);
    assert_eq!(max_profit_quadratic(prices).unwrap(), expected);
}

#[rstest]
#[case::empty(&[])]
#[case::one_price(&[1.0])]
#[case::one_negative_price(&[-12.5])]
fn test_error_with_fewer_than_two_prices(#[case] prices: &[f64]) {
    let err = max_profit(prices).unwrap_err();
    assert_eq!(err, ProfitError::InsufficientData(prices.len()));
    assert!(best_trade(prices).is_err());
    assert!(max_profit_quadratic(prices).is_err());
}

#[test]
fn test_error_is_distinct_from_zero_profit() {
    let flat = max_profit(&[0.0, 0.0]);
    let empty = max_profit::<f64>(&[]);

    assert_eq!(flat, Ok(0.0));
    assert!(matches!(empty, Err(ProfitError::InsufficientData(0))));
}

#[test]
fn test_linear_matches_quadratic_on_random_series() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..500 {
        let len = rng.gen_range(2..60);
        // Small range forces duplicates, zeros and negatives
        let prices: Vec<i64> = (0..len).map(|_| rng.gen_range(-20..=20)).collect();

        let linear = max_profit(&prices).unwrap();
        assert_eq!(linear, max_profit_quadratic(&prices).unwrap(), "prices: {:?}", prices);
        assert_eq!(best_trade(&prices).unwrap().profit(), linear);
    }
}

#[test]
fn test_linear_matches_quadratic_on_random_float_series() {
    let mut rng = StdRng::seed_from_u64(390);

    for _ in 0..200 {
        let len = rng.gen_range(2..390);
        let prices: Vec<f64> = (0..len).map(|_| rng.gen_range(450.0..550.0)).collect();

        // Both scans take the difference of the same pair, so equality is exact
        assert_eq!(max_profit(&prices).unwrap(), max_profit_quadratic(&prices).unwrap());
    }
}

#[test]
fn test_extreme_i64_prices() {
    assert_eq!(max_profit(&[i64::MAX - 5, i64::MAX, i64::MAX - 1]), Ok(5));
    assert_eq!(max_profit(&[i64::MIN, i64::MIN + 7, -1]), Ok(i64::MAX));
    assert_eq!(
        max_profit(&[i64::MIN, 0]),
        Err(ProfitError::PriceOverflow { sell_index: 1 })
    );
    assert_eq!(
        max_profit(&[1, i64::MIN]),
        Err(ProfitError::PriceOverflow { sell_index: 1 })
    );
}

#[test]
fn test_every_i8_pair_matches_widened_subtraction() {
    for buy in i8::MIN..=i8::MAX {
        for sell in i8::MIN..=i8::MAX {
            let widened = i16::from(sell) - i16::from(buy);
            let expected = i8::try_from(widened)
                .map_err(|_| ProfitError::PriceOverflow { sell_index: 1 });

            assert_eq!(max_profit(&[buy, sell]), expected);
            assert_eq!(max_profit_quadratic(&[buy, sell]), expected);
            assert_eq!(best_trade(&[buy, sell]).map(|t| t.profit()), expected);
        }
    }
}

#[test]
fn test_best_trade_always_sells_after_buying() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let len = rng.gen_range(2..40);
        let prices: Vec<i32> = (0..len).map(|_| rng.gen_range(0..10)).collect();
        let trade = best_trade(&prices).unwrap();

        assert!(trade.sell_index > trade.buy_index);
        assert_eq!(trade.buy_price, prices[trade.buy_index]);
        assert_eq!(trade.sell_price, prices[trade.sell_index]);
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let prices = vec![310.5, 309.75, 312.0, 308.25, 311.5];
    let snapshot = prices.clone();

    let first = max_profit(&prices).unwrap();
    let second = max_profit(&prices).unwrap();

    assert_eq!(first, second);
    assert_eq!(prices, snapshot);
}

#[test]
fn test_advice_does_not_change_profit() {
    for prices in [[1, 5, 3, 2], [9, 7, 4, 1], [1, 1, 1, 1]] {
        let profit = max_profit(&prices).unwrap();
        assert_eq!(advise(&prices).unwrap().profit(), profit);
    }
}

#[test]
fn test_trade_serialization() {
    let trade = best_trade(&[500.0, 498.0, 503.5]).unwrap();
    let json = serde_json::to_value(trade).unwrap();

    assert_eq!(json["buy_index"], 1);
    assert_eq!(json["sell_index"], 2);
    assert_eq!(json["sell_price"], 503.5);

    let back: Trade<f64> = serde_json::from_value(json).unwrap();
    assert_eq!(back, trade);
}

#[test]
fn test_advice_serialization() {
    let advice = TradeAdvice::from_profit(-2);
    let json = serde_json::to_string(&advice).unwrap();
    assert_eq!(json, r#"{"decision":"do_not_trade","profit":-2}"#);
}
