//! Historical candle client for the Angel One SmartAPI
//!
//! Thin wrapper over the `getCandleData` endpoint: it formats the request
//! window, attaches the session headers, and parses the row arrays into
//! candles. All signal logic lives elsewhere.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::candle::Candle;
use crate::services::market_data::MarketDataProvider;

const CANDLE_DATA_PATH: &str = "/rest/secure/angelbroking/historical/v1/getCandleData";
const REQUEST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Broker session credentials, owned by the driver and passed in here.
///
/// The provider never refreshes or stores these beyond what it is given;
/// re-authentication is the driver's concern.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub api_key: String,
    pub jwt_token: String,
    pub client_local_ip: String,
    pub client_public_ip: String,
    pub mac_address: String,
}

#[derive(Debug, Serialize)]
struct CandleRequest<'a> {
    exchange: &'a str,
    symboltoken: &'a str,
    interval: &'a str,
    fromdate: String,
    todate: String,
}

/// Rows arrive as `[timestamp, open, high, low, close, volume]`.
type CandleRow = (String, f64, f64, f64, f64, f64);

#[derive(Debug, Deserialize)]
struct CandleResponse {
    status: bool,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<Vec<CandleRow>>,
}

pub struct AngelMarketDataProvider {
    http: reqwest::Client,
    base_url: String,
    exchange: String,
    session: SessionHandle,
}

impl AngelMarketDataProvider {
    pub fn new(base_url: String, exchange: String, session: SessionHandle) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            exchange,
            session,
        }
    }

    fn parse_row(row: &CandleRow) -> Result<Candle, Box<dyn std::error::Error + Send + Sync>> {
        let (ref ts, open, high, low, close, volume) = *row;
        let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(ts)
            .map_err(|e| format!("invalid candle timestamp '{}': {}", ts, e))?
            .with_timezone(&Utc);
        Ok(Candle::new(open, high, low, close, volume, timestamp))
    }
}

#[async_trait]
impl MarketDataProvider for AngelMarketDataProvider {
    async fn get_candles(
        &self,
        symbol_token: &str,
        interval: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>> {
        let request = CandleRequest {
            exchange: &self.exchange,
            symboltoken: symbol_token,
            interval,
            fromdate: from.format(REQUEST_TIME_FORMAT).to_string(),
            todate: to.format(REQUEST_TIME_FORMAT).to_string(),
        };

        let response = self
            .http
            .post(format!("{}{}", self.base_url, CANDLE_DATA_PATH))
            .header("Authorization", format!("Bearer {}", self.session.jwt_token))
            .header("X-PrivateKey", &self.session.api_key)
            .header("X-ClientLocalIP", &self.session.client_local_ip)
            .header("X-ClientPublicIP", &self.session.client_public_ip)
            .header("X-MACAddress", &self.session.mac_address)
            .header("X-UserType", "USER")
            .header("X-SourceID", "WEB")
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: CandleResponse = response.json().await?;
        if !body.status {
            return Err(format!("candle request rejected: {}", body.message).into());
        }

        // Empty data means market closed or a stale token; surfacing it as
        // an error keeps the cycle from classifying on nothing.
        let rows = match body.data {
            Some(rows) if !rows.is_empty() => rows,
            _ => return Err("no candle data returned".into()),
        };

        rows.iter().map(Self::parse_row).collect()
    }
}
