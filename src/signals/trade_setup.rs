//! Stop-loss/target derivation for a fired signal

use crate::models::signal::{Signal, TradeSetup, TradeSetupError};

/// Approximate sensitivity of the chosen in-the-money option to a one-point
/// move in the underlying.
pub const OPTION_DELTA: f64 = 0.6;

/// Target distance as a multiple of risk (1:2 risk-reward).
pub const REWARD_RISK_RATIO: f64 = 2.0;

/// Derive the trade setup from the signal bar.
///
/// Bullish entries stop below the bar's low; bearish entries stop above its
/// high; the target sits `REWARD_RISK_RATIO` risks beyond entry. Option-leg
/// points scale the underlying risk by `OPTION_DELTA`.
///
/// Risk is non-negative whenever `low <= entry <= high` holds; a negative
/// risk means the candle bounds are inconsistent and is returned as an
/// error rather than clamped.
pub fn compute_trade_setup(
    entry: f64,
    candle_low: f64,
    candle_high: f64,
    signal: Signal,
) -> Result<TradeSetup, TradeSetupError> {
    let (stop_loss, risk, target) = match signal {
        Signal::None => return Err(TradeSetupError::NoSignal),
        Signal::BullishBreakout => {
            let risk = entry - candle_low;
            (candle_low, risk, entry + REWARD_RISK_RATIO * risk)
        }
        Signal::BearishBreakdown => {
            let risk = candle_high - entry;
            (candle_high, risk, entry - REWARD_RISK_RATIO * risk)
        }
    };

    if risk < 0.0 {
        return Err(TradeSetupError::NegativeRisk { risk });
    }

    Ok(TradeSetup {
        underlying_stop_loss: stop_loss,
        underlying_target: target,
        option_risk_points: risk * OPTION_DELTA,
        option_reward_points: REWARD_RISK_RATIO * risk * OPTION_DELTA,
    })
}
