//! Target-strike derivation and contract selection

use chrono::NaiveDate;

use crate::models::instrument::{ContractSelection, OptionSide};
use crate::models::signal::Signal;
use crate::options::catalog::{ContractFilter, InstrumentCatalog, OPTIONS_INSTRUMENT_TYPE};

/// Exchange strike grid for the index.
pub const STRIKE_STEP: f64 = 50.0;

/// Distance into the money from ATM, chosen for a deeper option delta.
pub const ITM_OFFSET: f64 = 100.0;

/// Epsilon for matching catalog strikes against the target.
pub const STRIKE_TOLERANCE: f64 = 1.0;

/// At-the-money strike: spot rounded to the nearest grid multiple.
pub fn atm_strike(spot: f64) -> f64 {
    (spot / STRIKE_STEP).round() * STRIKE_STEP
}

/// Strike and option side targeted for a fired signal.
///
/// Bullish signals buy an in-the-money call one offset below ATM; bearish
/// signals buy an in-the-money put one offset above.
pub fn target_strike(spot: f64, signal: Signal) -> Option<(f64, OptionSide)> {
    let side = signal.option_side()?;
    let atm = atm_strike(spot);
    let strike = match side {
        OptionSide::Call => atm - ITM_OFFSET,
        OptionSide::Put => atm + ITM_OFFSET,
    };
    Some((strike, side))
}

/// Choose the options contract for the signal, or `None` when nothing in
/// the catalog sits within tolerance of the target strike.
///
/// The query asks for the nearest expiry on or after `today` among options
/// of the underlying whose symbol carries the side suffix. A `None` result
/// is a legitimate outcome (contract not listed, stale catalog) that
/// callers handle distinctly from classification errors.
pub fn select_option(
    catalog: &InstrumentCatalog,
    exchange_segment: &str,
    name: &str,
    spot: f64,
    signal: Signal,
    today: NaiveDate,
) -> Option<ContractSelection> {
    let (strike, side) = target_strike(spot, signal)?;

    let filter = ContractFilter {
        exchange_segment: exchange_segment.to_string(),
        name: name.to_string(),
        instrument_type: OPTIONS_INSTRUMENT_TYPE.to_string(),
        min_expiry: today,
        strike_near: Some(strike),
        strike_tolerance: STRIKE_TOLERANCE,
        symbol_suffix: Some(side.symbol_suffix().to_string()),
    };

    let instrument = catalog.nearest_expiry_match(&filter)?;
    Some(ContractSelection {
        token: instrument.token.clone(),
        symbol: instrument.symbol.clone(),
        strike: instrument.strike?,
    })
}
