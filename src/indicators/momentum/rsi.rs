//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = average gain / average loss over a simple rolling window

/// Calculate the RSI column for a close-price series.
///
/// Row `i` averages the positive and negative close-to-close deltas over the
/// trailing `period` deltas (simple rolling mean, not Wilder smoothing).
/// Rows without a full delta window are `None`. A zero loss average leaves
/// the ratio undefined, so the row is reported as `None` rather than being
/// clamped to 100 — a flat or monotonically rising window has no momentum
/// reading.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 {
        return out;
    }

    for i in period..closes.len() {
        let mut gain_sum = 0.0;
        let mut loss_sum = 0.0;
        for j in (i - period + 1)..=i {
            let delta = closes[j] - closes[j - 1];
            if delta > 0.0 {
                gain_sum += delta;
            } else {
                loss_sum += -delta;
            }
        }

        let avg_loss = loss_sum / period as f64;
        if avg_loss == 0.0 {
            continue;
        }
        let avg_gain = gain_sum / period as f64;
        let rs = avg_gain / avg_loss;
        out[i] = Some(100.0 - 100.0 / (1.0 + rs));
    }

    out
}
