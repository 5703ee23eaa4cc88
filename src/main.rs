//! Niftrix scanner
//!
//! Polls recent futures candles, classifies breakout conditions, and logs a
//! paired options trade setup when a signal fires.

use dotenvy::dotenv;
use niftrix::config;
use niftrix::core::scanner::{Scanner, ScannerConfig};
use niftrix::logging;
use niftrix::services::angel::AngelMarketDataProvider;
use niftrix::services::scrip_master;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    info!("Starting Niftrix scanner");
    info!(environment = %config::get_environment(), "Environment");

    let session = config::session_from_env()
        .map_err(|e| format!("missing broker credentials (ANGEL_API_KEY / ANGEL_JWT_TOKEN): {}", e))?;

    info!("Downloading scrip master...");
    let catalog = scrip_master::fetch_catalog(&config::get_scrip_master_url()).await?;
    info!(instruments = catalog.len(), "Instrument catalog loaded");

    let scanner_config = ScannerConfig::from_env();
    let provider = AngelMarketDataProvider::new(
        config::get_api_base_url(),
        scanner_config.exchange_segment.clone(),
        session,
    );

    let scanner = Scanner::new(provider, catalog, scanner_config)?;

    tokio::select! {
        _ = scanner.run() => {}
        _ = signal::ctrl_c() => {
            info!("Shutting down scanner");
        }
    }

    Ok(())
}
