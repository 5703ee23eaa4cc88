//! Market data provider interface.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::models::candle::Candle;

/// Source of historical candles for one instrument token.
///
/// `from`/`to` are exchange-local wall-clock times. Implementations return
/// an error when data is unavailable (transport failure, market closed,
/// stale token) — never a silently empty series.
#[async_trait]
pub trait MarketDataProvider {
    async fn get_candles(
        &self,
        symbol_token: &str,
        interval: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>>;
}
