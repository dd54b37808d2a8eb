//! Helper functions for building price series fixtures

use crate::{PriceObservation, PriceSeries};
use chrono::{Days, NaiveDate};

/// Generate a synthetic daily price series for testing
///
/// Produces `days` observations starting at 2024-01-01, following a random
/// walk around `base_price` with step size `base_price * volatility`. Prices
/// are clamped at zero so the series always satisfies the non-negative price
/// invariant.
///
/// # Arguments
/// * `days` - Number of daily observations to generate
/// * `base_price` - Starting price
/// * `volatility` - Relative step size (0.0-1.0 for reasonable values)
pub fn generate_test_series(days: usize, base_price: f64, volatility: f64) -> PriceSeries {
    use rand::{thread_rng, Rng};

    let mut rng = thread_rng();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut price = base_price;
    let mut observations = Vec::with_capacity(days);

    for day in 0..days {
        let date = start
            .checked_add_days(Days::new(day as u64))
            .expect("test series dates stay in range");

        observations.push(
            PriceObservation::new(date, price).expect("generated prices are non-negative"),
        );

        let step = base_price * volatility * rng.gen_range(-1.0..1.0);
        price = (price + step).max(0.0);
    }

    PriceSeries::from_observations(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_test_series() {
        let series = generate_test_series(50, 100.0, 0.05);
        assert_eq!(series.len(), 50);
        assert!(series.prices().iter().all(|p| *p >= 0.0));

        // Dates are sequential
        let dates = series.dates();
        for i in 1..dates.len() {
            assert!(dates[i] > dates[i - 1]);
        }
    }
}
