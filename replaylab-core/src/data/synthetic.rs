//! Synthetic price data — seeded random walk for offline runs and benches.

use crate::domain::{PricePoint, PriceSeries};
use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a deterministic multiplicative random-walk series.
///
/// Per-step returns are uniform in ±3%, weekend dates are skipped, and the
/// same seed always yields the same series. Prices stay positive and finite,
/// so the output satisfies the series contract by construction.
///
/// # Panics
/// If `start_price` is not positive and finite.
pub fn generate_series(bars: usize, start_price: f64, seed: u64) -> PriceSeries {
    assert!(
        start_price.is_finite() && start_price > 0.0,
        "start price must be positive and finite, got {start_price}"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(bars);
    let mut price = start_price;
    let mut date = NaiveDate::from_ymd_opt(2020, 1, 2).expect("valid base date");

    while points.len() < bars {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            points.push(PricePoint { date, price });
            let step_return: f64 = rng.gen_range(-0.03..0.03);
            price *= 1.0 + step_return;
        }
        date += chrono::Duration::days(1);
    }

    PriceSeries::new(points).expect("synthetic series is ordered and finite")
}
