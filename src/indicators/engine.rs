//! Per-cycle indicator computation over the full candle series
//!
//! All columns are pure transforms recomputed from scratch every cycle; no
//! streaming state survives between invocations, so the engine is safe to
//! call from any execution model.

use crate::indicators::momentum::rsi_series;
use crate::indicators::structure::{resistance_series, support_series};
use crate::indicators::trend::ema_series;
use crate::indicators::volume::average_volume_series;
use crate::models::candle::Candle;
use crate::models::indicators::AugmentedCandle;

pub const EMA_SPAN: usize = 20;
pub const RSI_PERIOD: usize = 14;
pub const BAND_WINDOW: usize = 20;
pub const VOLUME_WINDOW: usize = 20;

/// Augment an ordered candle series with its indicator columns.
///
/// Output is aligned 1:1 with the input. Short series degrade gracefully:
/// rows lacking sufficient trailing history carry `None` columns rather
/// than failing.
pub fn compute_indicators(candles: &[Candle]) -> Vec<AugmentedCandle> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
    let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();

    let ema = ema_series(&closes, EMA_SPAN);
    let rsi = rsi_series(&closes, RSI_PERIOD);
    let resistance = resistance_series(&highs, BAND_WINDOW);
    let support = support_series(&lows, BAND_WINDOW);
    let avg_volume = average_volume_series(&volumes, VOLUME_WINDOW);

    candles
        .iter()
        .enumerate()
        .map(|(i, candle)| AugmentedCandle {
            candle: candle.clone(),
            ema20: ema[i],
            rsi14: rsi[i],
            resistance20: resistance[i],
            support20: support[i],
            avg_volume20: avg_volume[i],
        })
        .collect()
}
