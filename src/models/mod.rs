pub mod candle;
pub mod indicators;
pub mod instrument;
pub mod signal;

pub use candle::{Candle, CandleError};
pub use indicators::AugmentedCandle;
pub use instrument::{ContractSelection, Instrument, OptionSide};
pub use signal::{Signal, TradeSetup, TradeSetupError};
