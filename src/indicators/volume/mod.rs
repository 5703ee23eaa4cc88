pub mod average_volume;

pub use average_volume::average_volume_series;
