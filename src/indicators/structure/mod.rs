pub mod support_resistance;

pub use support_resistance::{resistance_series, support_series};
