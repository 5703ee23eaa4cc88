//! In-memory instrument catalog with nearest-expiry lookup
//!
//! The catalog is a read-only lookup table built once from the scrip master
//! by the loader; the scanner core only queries it.

use chrono::NaiveDate;

use crate::models::instrument::Instrument;

pub const FUTURES_INSTRUMENT_TYPE: &str = "FUTIDX";
pub const OPTIONS_INSTRUMENT_TYPE: &str = "OPTIDX";

/// Predicate over instrument records.
///
/// Strike comparison uses an epsilon (`strike_tolerance`), never exact
/// float equality. `min_expiry` excludes expired contracts.
#[derive(Debug, Clone)]
pub struct ContractFilter {
    pub exchange_segment: String,
    pub name: String,
    pub instrument_type: String,
    pub min_expiry: NaiveDate,
    pub strike_near: Option<f64>,
    pub strike_tolerance: f64,
    pub symbol_suffix: Option<String>,
}

impl ContractFilter {
    fn matches(&self, instrument: &Instrument) -> bool {
        if instrument.exchange_segment != self.exchange_segment
            || instrument.name != self.name
            || instrument.instrument_type != self.instrument_type
        {
            return false;
        }

        match instrument.expiry {
            Some(expiry) if expiry >= self.min_expiry => {}
            _ => return false,
        }

        if let Some(near) = self.strike_near {
            match instrument.strike {
                Some(strike) if (strike - near).abs() < self.strike_tolerance => {}
                _ => return false,
            }
        }

        if let Some(ref suffix) = self.symbol_suffix {
            if !instrument.symbol.ends_with(suffix.as_str()) {
                return false;
            }
        }

        true
    }
}

/// Read-only collection of instrument records.
#[derive(Debug, Clone, Default)]
pub struct InstrumentCatalog {
    instruments: Vec<Instrument>,
}

impl InstrumentCatalog {
    pub fn new(instruments: Vec<Instrument>) -> Self {
        Self { instruments }
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Earliest-expiry instrument passing the filter.
    ///
    /// Ties on expiry keep the first record in catalog order, matching the
    /// published file's ordering.
    pub fn nearest_expiry_match(&self, filter: &ContractFilter) -> Option<&Instrument> {
        let mut best: Option<&Instrument> = None;
        for instrument in self.instruments.iter().filter(|i| filter.matches(i)) {
            match best {
                Some(current) if instrument.expiry >= current.expiry => {}
                _ => best = Some(instrument),
            }
        }
        best
    }

    /// Nearest-expiry futures contract for the underlying.
    ///
    /// Resolved once at startup to obtain the token the candle fetch polls.
    pub fn nearest_future(
        &self,
        exchange_segment: &str,
        name: &str,
        today: NaiveDate,
    ) -> Option<&Instrument> {
        let filter = ContractFilter {
            exchange_segment: exchange_segment.to_string(),
            name: name.to_string(),
            instrument_type: FUTURES_INSTRUMENT_TYPE.to_string(),
            min_expiry: today,
            strike_near: None,
            strike_tolerance: 0.0,
            symbol_suffix: None,
        };
        self.nearest_expiry_match(&filter)
    }
}
