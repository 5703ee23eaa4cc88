use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Call/put side of an options contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionSide {
    Call,
    Put,
}

impl OptionSide {
    /// Trailing symbol tag used by the exchange ("CE"/"PE").
    pub fn symbol_suffix(&self) -> &'static str {
        match self {
            OptionSide::Call => "CE",
            OptionSide::Put => "PE",
        }
    }
}

/// One scrip master row after normalization.
///
/// `strike` is in index units (the published file carries strike × 100);
/// rows without a meaningful expiry or strike carry `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    pub token: String,
    pub symbol: String,
    pub name: String,
    pub exchange_segment: String,
    pub instrument_type: String,
    pub expiry: Option<NaiveDate>,
    pub strike: Option<f64>,
}

/// A chosen options contract. Absence of a selection (nothing listed near
/// the target strike) is modeled by `Option<ContractSelection>` at the call
/// site and is distinct from any transport failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractSelection {
    pub token: String,
    pub symbol: String,
    pub strike: f64,
}
