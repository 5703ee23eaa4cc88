//! Scrip master download and normalization
//!
//! The broker publishes the full instrument catalog as one JSON array with
//! every field string-typed and strike prices multiplied by 100. This
//! loader downloads it (with retry), normalizes rows into [`Instrument`]s,
//! and skips rows it cannot make sense of rather than failing the load.

use backon::{ExponentialBuilder, Retryable};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::instrument::Instrument;
use crate::options::catalog::InstrumentCatalog;

const EXPIRY_FORMAT: &str = "%d%b%Y";

#[derive(Debug, Deserialize)]
struct ScripMasterRow {
    #[serde(default)]
    token: String,
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    expiry: String,
    #[serde(default)]
    strike: String,
    #[serde(default, rename = "instrumenttype")]
    instrument_type: String,
    #[serde(default, rename = "exch_seg")]
    exchange_segment: String,
}

fn normalize_row(row: ScripMasterRow) -> Instrument {
    let expiry = NaiveDate::parse_from_str(&row.expiry, EXPIRY_FORMAT).ok();

    // Published strikes are price * 100; non-derivative rows carry 0 or -1.
    let strike = row
        .strike
        .parse::<f64>()
        .ok()
        .filter(|s| *s > 0.0)
        .map(|s| s / 100.0);

    Instrument {
        token: row.token,
        symbol: row.symbol,
        name: row.name,
        exchange_segment: row.exchange_segment,
        instrument_type: row.instrument_type,
        expiry,
        strike,
    }
}

/// Download the scrip master and build the catalog.
///
/// Transient download failures are retried with exponential backoff before
/// the error reaches the caller.
pub async fn fetch_catalog(
    url: &str,
) -> Result<InstrumentCatalog, Box<dyn std::error::Error + Send + Sync>> {
    let http = reqwest::Client::new();

    let rows: Vec<ScripMasterRow> = (|| async {
        http.get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<ScripMasterRow>>()
            .await
    })
    .retry(ExponentialBuilder::default().with_max_times(3))
    .notify(|err, dur| {
        warn!(
            error = %err,
            retry_in_ms = dur.as_millis(),
            "scrip master download failed, retrying"
        );
    })
    .await?;

    let total = rows.len();
    let instruments: Vec<Instrument> = rows.into_iter().map(normalize_row).collect();
    debug!(rows = total, "scrip master loaded");

    Ok(InstrumentCatalog::new(instruments))
}
