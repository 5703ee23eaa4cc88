//! Cooperative scan loop
//!
//! One cycle: fetch the trailing candle window, evaluate, render, sleep.
//! Cycles never overlap and share no state beyond the immutable catalog;
//! a failed cycle is logged and the next one proceeds.

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use tracing::{debug, error, info, warn};

use crate::config;
use crate::options::catalog::InstrumentCatalog;
use crate::options::selector::target_strike;
use crate::services::market_data::MarketDataProvider;
use crate::signals::classifier::ClassifierPolicy;
use crate::signals::engine::{ScanEvaluation, SignalEngine, MIN_CANDLES};

/// Exchange wall-clock offset (IST, UTC+05:30).
const IST_OFFSET_SECS: i64 = 5 * 3600 + 30 * 60;

fn ist_now() -> NaiveDateTime {
    (Utc::now() + chrono::Duration::seconds(IST_OFFSET_SECS)).naive_utc()
}

fn ist_today() -> NaiveDate {
    ist_now().date()
}

#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub exchange_segment: String,
    pub underlying: String,
    pub candle_interval: String,
    pub lookback_days: i64,
    pub scan_interval: Duration,
    pub policy: ClassifierPolicy,
}

impl ScannerConfig {
    pub fn from_env() -> Self {
        Self {
            exchange_segment: config::get_exchange_segment(),
            underlying: config::get_underlying(),
            candle_interval: config::get_candle_interval(),
            lookback_days: config::get_lookback_days(),
            scan_interval: Duration::from_secs(config::get_scan_interval_seconds()),
            policy: ClassifierPolicy::default(),
        }
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            exchange_segment: "NFO".to_string(),
            underlying: "NIFTY".to_string(),
            candle_interval: "FIVE_MINUTE".to_string(),
            lookback_days: 5,
            scan_interval: Duration::from_secs(10),
            policy: ClassifierPolicy::default(),
        }
    }
}

pub struct Scanner<P: MarketDataProvider> {
    provider: P,
    catalog: InstrumentCatalog,
    engine: SignalEngine,
    config: ScannerConfig,
    futures_token: String,
    futures_symbol: String,
}

impl<P: MarketDataProvider> Scanner<P> {
    /// Build a scanner, resolving the nearest-expiry futures contract the
    /// candle fetch will poll.
    pub fn new(
        provider: P,
        catalog: InstrumentCatalog,
        config: ScannerConfig,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let today = ist_today();
        let (futures_token, futures_symbol) = {
            let future = catalog
                .nearest_future(&config.exchange_segment, &config.underlying, today)
                .ok_or_else(|| {
                    format!(
                        "no {} futures contract listed on or after {}",
                        config.underlying, today
                    )
                })?;
            (future.token.clone(), future.symbol.clone())
        };

        info!(
            symbol = %futures_symbol,
            token = %futures_token,
            "scanning nearest-expiry future"
        );

        let engine = SignalEngine::new(
            config.exchange_segment.clone(),
            config.underlying.clone(),
            config.policy,
        );

        Ok(Self {
            provider,
            catalog,
            engine,
            config,
            futures_token,
            futures_symbol,
        })
    }

    /// Run cycles forever. Per-cycle failures are logged, never fatal.
    pub async fn run(&self) {
        info!(
            interval_seconds = self.config.scan_interval.as_secs(),
            "scanner started"
        );
        loop {
            if let Err(e) = self.scan_cycle().await {
                error!(error = %e, "scan cycle failed");
            }
            tokio::time::sleep(self.config.scan_interval).await;
        }
    }

    /// One fetch-evaluate-render pass.
    pub async fn scan_cycle(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let to = ist_now();
        let from = to - chrono::Duration::days(self.config.lookback_days);

        let candles = self
            .provider
            .get_candles(
                &self.futures_token,
                &self.config.candle_interval,
                from,
                to,
            )
            .await?;

        if candles.len() < MIN_CANDLES {
            debug!(
                count = candles.len(),
                min = MIN_CANDLES,
                "not enough candles for breakout bands yet"
            );
        }

        let Some(evaluation) = self.engine.evaluate(&candles, &self.catalog, to.date())? else {
            debug!("empty candle series, nothing to evaluate");
            return Ok(());
        };

        self.render(&evaluation);
        Ok(())
    }

    fn render(&self, evaluation: &ScanEvaluation) {
        let row = &evaluation.latest;
        let candle = &row.candle;

        info!(
            symbol = %self.futures_symbol,
            price = candle.close,
            change = candle.close - candle.open,
            ema20 = row.ema20,
            rsi14 = ?row.rsi14,
            volume = candle.volume,
            avg_volume20 = ?row.avg_volume20,
            "scan: {} @ {:.2}",
            self.futures_symbol,
            candle.close
        );

        if !evaluation.signal.is_actionable() {
            debug!("no signal");
            return;
        }

        match (&evaluation.contract, &evaluation.setup) {
            (Some(contract), Some(setup)) => {
                info!(
                    signal = ?evaluation.signal,
                    option = %contract.symbol,
                    strike = contract.strike,
                    underlying_stop_loss = setup.underlying_stop_loss,
                    underlying_target = setup.underlying_target,
                    option_risk_points = setup.option_risk_points,
                    option_reward_points = setup.option_reward_points,
                    "signal fired: {:?} -> {}",
                    evaluation.signal,
                    contract.symbol
                );
            }
            (None, _) => {
                let wanted = target_strike(candle.close, evaluation.signal)
                    .map(|(strike, _)| strike);
                warn!(
                    signal = ?evaluation.signal,
                    target_strike = ?wanted,
                    "signal fired but no contract listed near target strike"
                );
            }
            (Some(_), None) => {}
        }
    }
}
