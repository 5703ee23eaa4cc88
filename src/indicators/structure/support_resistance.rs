//! Prior-window support and resistance bands
//!
//! Both bands carry a one-bar lookback offset: row `i` reflects bars
//! `i - window .. i - 1`, so the current bar can never satisfy its own
//! breakout condition.

/// Highest high of the `window` bars preceding each row.
///
/// Rows without a full prior window are `None`.
pub fn resistance_series(highs: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling_prior(highs, window, f64::max)
}

/// Lowest low of the `window` bars preceding each row.
pub fn support_series(lows: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling_prior(lows, window, f64::min)
}

fn rolling_prior(values: &[f64], window: usize, pick: fn(f64, f64) -> f64) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 {
        return out;
    }

    for i in window..values.len() {
        let slice = &values[i - window..i];
        let mut extreme = slice[0];
        for &v in &slice[1..] {
            extreme = pick(extreme, v);
        }
        out[i] = Some(extreme);
    }

    out
}
