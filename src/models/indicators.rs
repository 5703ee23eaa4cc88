use serde::{Deserialize, Serialize};

use crate::models::candle::Candle;

/// A candle together with its derived indicator columns.
///
/// `compute_indicators` produces one of these per input candle, aligned by
/// position. Columns are `None` wherever the row lacks sufficient trailing
/// history (or, for RSI, where the loss average is zero and the oscillator
/// is undefined) — callers must treat `None` as "insufficient data", never
/// as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AugmentedCandle {
    #[serde(flatten)]
    pub candle: Candle,
    /// Exponential moving average of close, span 20, seeded from the first
    /// close. Defined for every row.
    pub ema20: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi14: Option<f64>,
    /// Highest high of the 20 bars preceding this one (current bar excluded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resistance20: Option<f64>,
    /// Lowest low of the 20 bars preceding this one (current bar excluded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support20: Option<f64>,
    /// Mean volume of the trailing 20 bars, current bar included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_volume20: Option<f64>,
}
