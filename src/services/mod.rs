pub mod angel;
pub mod market_data;
pub mod scrip_master;
