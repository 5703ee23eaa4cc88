//! Breakout classification of the latest augmented candle

use crate::models::indicators::AugmentedCandle;
use crate::models::signal::Signal;

/// Named decisions for the two behaviors that are not symmetric defaults.
///
/// Both defaults reproduce the production scanner's behavior; flipping a
/// flag is a product decision, not a code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierPolicy {
    /// With no volume baseline yet (fewer than 20 bars), treat the baseline
    /// as zero so any traded volume passes the volume gate.
    pub high_volume_without_baseline: bool,
    /// Require RSI < 50 on the bearish path. The bullish path always
    /// requires RSI > 50; the bearish path historically does not check
    /// momentum at all.
    pub require_bearish_momentum: bool,
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        Self {
            high_volume_without_baseline: true,
            require_bearish_momentum: false,
        }
    }
}

/// Classify the latest bar into exactly one of the signal variants.
///
/// Comparisons against an undefined indicator column are false, so a series
/// too short for bands or RSI can never fire a breakout. Evaluation order
/// makes the variants mutually exclusive: a close cannot be above the
/// prior-window high and below the prior-window low at once.
pub fn classify(row: &AugmentedCandle, policy: ClassifierPolicy) -> Signal {
    let close = row.candle.close;

    let breakout_up = row.resistance20.is_some_and(|r| close > r);
    let breakout_down = row.support20.is_some_and(|s| close < s);
    let trend_up = close > row.ema20;
    let trend_down = close < row.ema20;
    let momentum_strong = row.rsi14.is_some_and(|r| r > 50.0);
    let momentum_weak = row.rsi14.is_some_and(|r| r < 50.0);

    let high_volume = match row.avg_volume20 {
        Some(avg) => row.candle.volume > avg,
        None => policy.high_volume_without_baseline && row.candle.volume > 0.0,
    };

    if breakout_up && trend_up && momentum_strong && high_volume {
        Signal::BullishBreakout
    } else if breakout_down
        && trend_down
        && high_volume
        && (!policy.require_bearish_momentum || momentum_weak)
    {
        Signal::BearishBreakdown
    } else {
        Signal::None
    }
}
