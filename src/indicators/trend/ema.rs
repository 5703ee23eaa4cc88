//! EMA (Exponential Moving Average) indicator

/// Calculate the EMA column for a close-price series.
///
/// Smoothing factor is derived from the span (alpha = 2 / (span + 1)), the
/// first value is seeded with the first close, and the recurrence runs
/// left-to-right with no look-ahead. Output is aligned 1:1 with the input
/// and defined for every row; an empty input yields an empty column.
pub fn ema_series(closes: &[f64], span: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(closes.len());
    if closes.is_empty() || span == 0 {
        return out;
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut ema = closes[0];
    out.push(ema);

    for &close in &closes[1..] {
        ema = alpha * close + (1.0 - alpha) * ema;
        out.push(ema);
    }

    out
}
