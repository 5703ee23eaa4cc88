//! Options contract targeting and catalog lookup.

pub mod catalog;
pub mod selector;

pub use catalog::{ContractFilter, InstrumentCatalog, FUTURES_INSTRUMENT_TYPE, OPTIONS_INSTRUMENT_TYPE};
pub use selector::{atm_strike, select_option, target_strike, ITM_OFFSET, STRIKE_STEP, STRIKE_TOLERANCE};
