//! Signal sources — strategies that map a price series to desired exposure.
//!
//! Strategies are pure functions: price series in, one `Signal` per input
//! index out. They are precomputed once before the simulation loop; the loop
//! applies the one-step execution delay itself, so strategies answer "what
//! exposure do I want given everything through index t", not "what should
//! trade at index t".

pub mod rolling;
pub mod volatility_breakout;

pub use volatility_breakout::VolatilityBreakout;

use crate::domain::PriceSeries;
use serde::{Deserialize, Serialize};

/// Desired exposure at one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    /// No exposure wanted.
    Flat,
    /// One unit of exposure wanted.
    Long,
}

/// Trait for signal sources.
///
/// The contract, which `run_simulation` checks where it can:
/// - `signals` returns exactly one value per input index;
/// - empty input yields empty output;
/// - indices before `lookback()` are `Flat` (internal warmup windows and
///   undefined intermediates resolve to `Flat`, never to an error value).
///
/// # No account access
/// `signals` takes only the price series. Strategies cannot see cash or
/// position state; that separation is enforced by the signature itself.
pub trait Strategy: Send + Sync {
    /// Human-readable name (e.g., "volatility_breakout_20").
    fn name(&self) -> &str;

    /// Number of leading indices guaranteed `Flat` while windows fill.
    fn lookback(&self) -> usize;

    /// Compute the desired-exposure series for the entire price history.
    fn signals(&self, series: &PriceSeries) -> Vec<Signal>;
}

/// Strategy that never wants exposure. Baseline and test stub.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStrategy;

impl Strategy for NullStrategy {
    fn name(&self) -> &str {
        "null"
    }

    fn lookback(&self) -> usize {
        0
    }

    fn signals(&self, series: &PriceSeries) -> Vec<Signal> {
        vec![Signal::Flat; series.len()]
    }
}

/// Create a price series from close prices for testing.
///
/// Dates are consecutive days starting 2024-01-02.
#[cfg(test)]
pub fn make_series(closes: &[f64]) -> PriceSeries {
    use crate::domain::PricePoint;
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint {
            date: base_date + chrono::Duration::days(i as i64),
            price,
        })
        .collect();
    PriceSeries::new(points).unwrap()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for numeric tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_strategy_is_always_flat() {
        let strat = NullStrategy;
        let series = make_series(&[100.0, 101.0, 102.0]);
        assert_eq!(strat.signals(&series), vec![Signal::Flat; 3]);
        assert_eq!(strat.name(), "null");
        assert_eq!(strat.lookback(), 0);
    }

    #[test]
    fn null_strategy_on_empty_series() {
        let strat = NullStrategy;
        assert!(strat.signals(&PriceSeries::empty()).is_empty());
    }

    #[test]
    fn signal_serde_uses_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Signal::Long).unwrap(), "\"LONG\"");
        assert_eq!(serde_json::to_string(&Signal::Flat).unwrap(), "\"FLAT\"");
    }
}
