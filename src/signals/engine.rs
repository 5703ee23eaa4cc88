//! Per-cycle signal evaluation pipeline
//!
//! Pure with respect to its inputs: the engine holds only configuration,
//! and every cycle recomputes from the series it is handed.

use chrono::NaiveDate;

use crate::indicators::{compute_indicators, BAND_WINDOW};
use crate::models::candle::{Candle, CandleError};
use crate::models::indicators::AugmentedCandle;
use crate::models::instrument::ContractSelection;
use crate::models::signal::{Signal, TradeSetup, TradeSetupError};
use crate::options::catalog::InstrumentCatalog;
use crate::options::selector::select_option;
use crate::signals::classifier::{classify, ClassifierPolicy};
use crate::signals::trade_setup::compute_trade_setup;

/// Bars needed before the breakout bands are defined on the latest row.
pub const MIN_CANDLES: usize = BAND_WINDOW + 1;

/// Everything one cycle derives from the fetched series.
#[derive(Debug, Clone)]
pub struct ScanEvaluation {
    pub latest: AugmentedCandle,
    pub signal: Signal,
    pub setup: Option<TradeSetup>,
    pub contract: Option<ContractSelection>,
}

#[derive(Debug)]
pub enum EvaluationError {
    MalformedCandle(CandleError),
    InconsistentSetup(TradeSetupError),
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluationError::MalformedCandle(e) => write!(f, "malformed candle: {}", e),
            EvaluationError::InconsistentSetup(e) => write!(f, "inconsistent trade setup: {}", e),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvaluationError::MalformedCandle(e) => Some(e),
            EvaluationError::InconsistentSetup(e) => Some(e),
        }
    }
}

impl From<CandleError> for EvaluationError {
    fn from(e: CandleError) -> Self {
        EvaluationError::MalformedCandle(e)
    }
}

/// Stateless evaluator configured with the instrument identity and the
/// classifier policy.
#[derive(Debug, Clone)]
pub struct SignalEngine {
    pub exchange_segment: String,
    pub underlying: String,
    pub policy: ClassifierPolicy,
}

impl SignalEngine {
    pub fn new(exchange_segment: String, underlying: String, policy: ClassifierPolicy) -> Self {
        Self {
            exchange_segment,
            underlying,
            policy,
        }
    }

    /// Run the full pipeline over one fetched series.
    ///
    /// Returns `Ok(None)` for an empty series. A series shorter than
    /// `MIN_CANDLES` still evaluates — its indicator columns are undefined,
    /// so the classifier yields `Signal::None`. Only inconsistent data is
    /// an error: a malformed latest candle, or a fired signal whose entry
    /// lies outside the candle bounds.
    pub fn evaluate(
        &self,
        candles: &[Candle],
        catalog: &InstrumentCatalog,
        today: NaiveDate,
    ) -> Result<Option<ScanEvaluation>, EvaluationError> {
        let Some(last) = candles.last() else {
            return Ok(None);
        };
        last.validate()?;

        let augmented = compute_indicators(candles);
        let Some(latest) = augmented.last() else {
            return Ok(None);
        };

        let signal = classify(latest, self.policy);

        let (setup, contract) = if signal.is_actionable() {
            let setup = compute_trade_setup(
                latest.candle.close,
                latest.candle.low,
                latest.candle.high,
                signal,
            )
            .map_err(EvaluationError::InconsistentSetup)?;
            let contract = select_option(
                catalog,
                &self.exchange_segment,
                &self.underlying,
                latest.candle.close,
                signal,
                today,
            );
            (Some(setup), contract)
        } else {
            (None, None)
        };

        Ok(Some(ScanEvaluation {
            latest: latest.clone(),
            signal,
            setup,
            contract,
        }))
    }
}
