use serde::{Deserialize, Serialize};

use crate::models::instrument::OptionSide;

/// Outcome of classifying the latest bar. Produced fresh each cycle; carries
/// no identity across cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    None,
    BullishBreakout,
    BearishBreakdown,
}

impl Signal {
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Signal::None)
    }

    /// Option side bought when this signal fires.
    pub fn option_side(&self) -> Option<OptionSide> {
        match self {
            Signal::None => None,
            Signal::BullishBreakout => Some(OptionSide::Call),
            Signal::BearishBreakdown => Some(OptionSide::Put),
        }
    }
}

/// Stop-loss/target on the underlying plus the option-leg risk figures
/// derived from a fixed delta approximation. One per fired signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeSetup {
    pub underlying_stop_loss: f64,
    pub underlying_target: f64,
    pub option_risk_points: f64,
    pub option_reward_points: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TradeSetupError {
    /// No actionable signal; there is nothing to size.
    NoSignal,
    /// Computed risk was negative: the entry price lies outside the candle's
    /// low/high bounds, which indicates inconsistent upstream data.
    NegativeRisk { risk: f64 },
}

impl std::fmt::Display for TradeSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeSetupError::NoSignal => write!(f, "no actionable signal"),
            TradeSetupError::NegativeRisk { risk } => {
                write!(f, "negative risk {:.2}: entry outside candle bounds", risk)
            }
        }
    }
}

impl std::error::Error for TradeSetupError {}
