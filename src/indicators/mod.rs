pub mod engine;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volume;

pub use engine::{compute_indicators, BAND_WINDOW, EMA_SPAN, RSI_PERIOD, VOLUME_WINDOW};
