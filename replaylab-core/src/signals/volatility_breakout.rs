//! Volatility breakout strategy.
//!
//! Wants exposure when the latest one-step return exceeds the trailing
//! sample standard deviation of returns: a move large relative to recent
//! volatility is read as the start of a trend. Lookback: `window` (the
//! return series itself consumes one index, the deviation window the rest).

use super::rolling::{pct_change, rolling_std};
use super::{Signal, Strategy};
use crate::domain::PriceSeries;

#[derive(Debug, Clone)]
pub struct VolatilityBreakout {
    window: usize,
    name: String,
}

impl VolatilityBreakout {
    pub const DEFAULT_WINDOW: usize = 20;

    pub fn new(window: usize) -> Self {
        assert!(window >= 2, "volatility window must be >= 2");
        Self {
            window,
            name: format!("volatility_breakout_{window}"),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for VolatilityBreakout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

impl Strategy for VolatilityBreakout {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window
    }

    fn signals(&self, series: &PriceSeries) -> Vec<Signal> {
        let closes: Vec<f64> = series.prices().collect();
        let rets = pct_change(&closes);
        let vol = rolling_std(&rets, self.window);

        // NaN compares false on either side, so warmup indices come out Flat.
        rets.iter()
            .zip(&vol)
            .map(|(&ret, &dev)| if ret > dev { Signal::Long } else { Signal::Flat })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::make_series;

    #[test]
    fn output_is_aligned_to_input() {
        let series = make_series(&[100.0, 101.0, 100.0, 110.0, 110.0, 108.0]);
        let strat = VolatilityBreakout::new(2);
        assert_eq!(strat.signals(&series).len(), series.len());
    }

    #[test]
    fn empty_series_yields_empty_signals() {
        let strat = VolatilityBreakout::default();
        assert!(strat.signals(&PriceSeries::empty()).is_empty());
    }

    #[test]
    fn series_shorter_than_window_is_all_flat() {
        let series = make_series(&[100.0, 105.0, 95.0]);
        let strat = VolatilityBreakout::new(10);
        assert_eq!(strat.signals(&series), vec![Signal::Flat; 3]);
    }

    #[test]
    fn warmup_indices_are_flat() {
        let series = make_series(&[100.0, 120.0, 80.0, 130.0, 90.0, 140.0, 95.0]);
        let strat = VolatilityBreakout::new(3);
        let signals = strat.signals(&series);
        for (i, signal) in signals.iter().enumerate().take(strat.lookback()) {
            assert_eq!(*signal, Signal::Flat, "index {i} inside lookback");
        }
    }

    #[test]
    fn fires_on_outsized_move() {
        // rets: [NaN, 0.01, -0.0099, 0.1, 0.0]
        // vol2: [NaN,  NaN, 0.01407, 0.0777, 0.0707]
        // Only the 10% jump at index 3 clears its trailing deviation.
        let series = make_series(&[100.0, 101.0, 100.0, 110.0, 110.0]);
        let strat = VolatilityBreakout::new(2);
        let signals = strat.signals(&series);
        assert_eq!(
            signals,
            vec![
                Signal::Flat,
                Signal::Flat,
                Signal::Flat,
                Signal::Long,
                Signal::Flat,
            ]
        );
    }

    #[test]
    fn constant_prices_never_fire() {
        let series = make_series(&[100.0; 30]);
        let strat = VolatilityBreakout::default();
        assert!(strat
            .signals(&series)
            .iter()
            .all(|s| *s == Signal::Flat));
    }

    #[test]
    fn spike_after_quiet_stretch_fires_once() {
        let mut closes = vec![100.0; 26];
        closes.push(120.0); // 20% move against near-zero trailing vol
        closes.push(120.0);
        let series = make_series(&closes);
        let strat = VolatilityBreakout::default();
        let signals = strat.signals(&series);
        assert_eq!(signals[26], Signal::Long);
        assert_eq!(signals[27], Signal::Flat);
        assert!(signals[..26].iter().all(|s| *s == Signal::Flat));
    }

    #[test]
    fn lookback_and_name_reflect_window() {
        let strat = VolatilityBreakout::new(14);
        assert_eq!(strat.lookback(), 14);
        assert_eq!(strat.name(), "volatility_breakout_14");
        assert_eq!(strat.window(), 14);
        assert_eq!(VolatilityBreakout::default().window(), 20);
    }

    #[test]
    #[should_panic(expected = "volatility window must be >= 2")]
    fn window_of_one_panics() {
        VolatilityBreakout::new(1);
    }
}
