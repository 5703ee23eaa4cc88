//! Environment-backed configuration
//!
//! All settings are read from environment variables (loaded from `.env` by
//! the binary) with sensible defaults, so the scanner runs out of the box
//! against the production endpoints.

use std::env;

use crate::services::angel::SessionHandle;

/// Deployment environment name ("production", "sandbox", ...)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Base URL of the Angel One SmartAPI
pub fn get_api_base_url() -> String {
    env::var("ANGEL_API_BASE_URL")
        .unwrap_or_else(|_| "https://apiconnect.angelbroking.com".to_string())
}

/// URL of the published scrip master (full instrument catalog as JSON)
pub fn get_scrip_master_url() -> String {
    env::var("SCRIP_MASTER_URL").unwrap_or_else(|_| {
        "https://margincalculator.angelbroking.com/OpenAPI_File/files/OpenAPIScripMaster.json"
            .to_string()
    })
}

/// Underlying index name as it appears in the scrip master
pub fn get_underlying() -> String {
    env::var("SCAN_UNDERLYING").unwrap_or_else(|_| "NIFTY".to_string())
}

/// Exchange segment for the derivatives contracts
pub fn get_exchange_segment() -> String {
    env::var("SCAN_EXCHANGE_SEGMENT").unwrap_or_else(|_| "NFO".to_string())
}

/// Candle interval identifier understood by the broker API
pub fn get_candle_interval() -> String {
    env::var("SCAN_CANDLE_INTERVAL").unwrap_or_else(|_| "FIVE_MINUTE".to_string())
}

/// Seconds to sleep between scan cycles
pub fn get_scan_interval_seconds() -> u64 {
    env::var("SCAN_INTERVAL_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10)
}

/// Days of candle history requested each cycle
pub fn get_lookback_days() -> i64 {
    env::var("SCAN_LOOKBACK_DAYS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5)
}

/// Build the broker session handle from the environment.
///
/// `ANGEL_API_KEY` and `ANGEL_JWT_TOKEN` are required; the client network
/// identity headers fall back to placeholder values accepted by the API.
pub fn session_from_env() -> Result<SessionHandle, env::VarError> {
    let api_key = env::var("ANGEL_API_KEY")?;
    let jwt_token = env::var("ANGEL_JWT_TOKEN")?;

    Ok(SessionHandle {
        api_key,
        jwt_token,
        client_local_ip: env::var("CLIENT_LOCAL_IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
        client_public_ip: env::var("CLIENT_PUBLIC_IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
        mac_address: env::var("CLIENT_MAC_ADDRESS")
            .unwrap_or_else(|_| "00:00:00:00:00:00".to_string()),
    })
}
