//! Rolling-window helpers over raw f64 slices.
//!
//! Both functions are full-series and NaN-propagating: undefined positions
//! (warmup, or any window touching a non-finite input) come out as NaN and
//! are resolved to `Flat` by the strategies that consume them.

/// Step-over-step fractional change.
///
/// `out[0]` is NaN; `out[i] = (v[i] - v[i-1]) / v[i-1]`. A zero denominator
/// produces a non-finite value, which downstream windows treat as undefined.
pub fn pct_change(values: &[f64]) -> Vec<f64> {
    let mut result = vec![f64::NAN; values.len()];
    for i in 1..values.len() {
        result[i] = (values[i] - values[i - 1]) / values[i - 1];
    }
    result
}

/// Rolling sample standard deviation (n−1 denominator) over a trailing window.
///
/// `out[i]` is NaN until the window is full (`i + 1 < window`) and whenever
/// the window contains a non-finite value; otherwise it is the sample
/// std-dev of `values[i+1-window..=i]`.
///
/// # Panics
/// If `window < 2` (sample variance needs two observations).
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 2, "rolling_std window must be >= 2");

    let n = values.len();
    let mut result = vec![f64::NAN; n];

    for i in (window - 1)..n {
        let slice = &values[i + 1 - window..=i];
        if slice.iter().any(|v| !v.is_finite()) {
            continue;
        }
        let mean = slice.iter().sum::<f64>() / window as f64;
        let sum_sq: f64 = slice.iter().map(|v| (v - mean) * (v - mean)).sum();
        result[i] = (sum_sq / (window - 1) as f64).sqrt();
    }

    result
}
