use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One fixed-interval OHLCV sample.
///
/// Series are ordered by strictly increasing timestamp and rebuilt in full
/// each scan cycle; candles are never mutated once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Reject candles whose bounds cannot have come from real trades.
    ///
    /// A bar with `high < low` or non-finite fields indicates corrupt data
    /// upstream and is fatal to the cycle that observes it.
    pub fn validate(&self) -> Result<(), CandleError> {
        let fields = [self.open, self.high, self.low, self.close, self.volume];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(CandleError::NonFiniteField {
                timestamp: self.timestamp,
            });
        }
        if self.high < self.low {
            return Err(CandleError::InvertedRange {
                high: self.high,
                low: self.low,
            });
        }
        Ok(())
    }
}

/// Malformed candle data that cannot be computed over.
#[derive(Debug, Clone, PartialEq)]
pub enum CandleError {
    InvertedRange { high: f64, low: f64 },
    NonFiniteField { timestamp: DateTime<Utc> },
}

impl std::fmt::Display for CandleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandleError::InvertedRange { high, low } => {
                write!(f, "candle high {} below low {}", high, low)
            }
            CandleError::NonFiniteField { timestamp } => {
                write!(f, "candle at {} has a non-finite field", timestamp)
            }
        }
    }
}

impl std::error::Error for CandleError {}
