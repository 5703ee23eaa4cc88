//! Unit tests for the instrument catalog lookup

use chrono::NaiveDate;
use niftrix::models::instrument::Instrument;
use niftrix::options::catalog::{
    ContractFilter, InstrumentCatalog, FUTURES_INSTRUMENT_TYPE, OPTIONS_INSTRUMENT_TYPE,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn future(token: &str, symbol: &str, expiry: NaiveDate) -> Instrument {
    Instrument {
        token: token.to_string(),
        symbol: symbol.to_string(),
        name: "NIFTY".to_string(),
        exchange_segment: "NFO".to_string(),
        instrument_type: FUTURES_INSTRUMENT_TYPE.to_string(),
        expiry: Some(expiry),
        strike: None,
    }
}

fn option(token: &str, symbol: &str, expiry: NaiveDate, strike: f64) -> Instrument {
    Instrument {
        token: token.to_string(),
        symbol: symbol.to_string(),
        name: "NIFTY".to_string(),
        exchange_segment: "NFO".to_string(),
        instrument_type: OPTIONS_INSTRUMENT_TYPE.to_string(),
        expiry: Some(expiry),
        strike: Some(strike),
    }
}

fn options_filter(min_expiry: NaiveDate, strike_near: f64, suffix: &str) -> ContractFilter {
    ContractFilter {
        exchange_segment: "NFO".to_string(),
        name: "NIFTY".to_string(),
        instrument_type: OPTIONS_INSTRUMENT_TYPE.to_string(),
        min_expiry,
        strike_near: Some(strike_near),
        strike_tolerance: 1.0,
        symbol_suffix: Some(suffix.to_string()),
    }
}

#[test]
fn nearest_future_picks_the_earliest_unexpired_contract() {
    let catalog = InstrumentCatalog::new(vec![
        future("1", "NIFTY28MAR24FUT", date(2024, 3, 28)),
        future("2", "NIFTY25JAN24FUT", date(2024, 1, 25)),
        future("3", "NIFTY29FEB24FUT", date(2024, 2, 29)),
    ]);

    let chosen = catalog
        .nearest_future("NFO", "NIFTY", date(2024, 1, 10))
        .expect("a future is listed");
    assert_eq!(chosen.token, "2");
}

#[test]
fn expired_futures_are_never_selected() {
    let catalog = InstrumentCatalog::new(vec![
        future("1", "NIFTY28DEC23FUT", date(2023, 12, 28)),
        future("2", "NIFTY25JAN24FUT", date(2024, 1, 25)),
    ]);

    let chosen = catalog
        .nearest_future("NFO", "NIFTY", date(2024, 1, 10))
        .expect("a live future is listed");
    assert_eq!(chosen.token, "2");
}

#[test]
fn expiry_on_the_query_date_still_counts() {
    let catalog = InstrumentCatalog::new(vec![future("1", "NIFTY25JAN24FUT", date(2024, 1, 25))]);
    assert!(catalog.nearest_future("NFO", "NIFTY", date(2024, 1, 25)).is_some());
    assert!(catalog.nearest_future("NFO", "NIFTY", date(2024, 1, 26)).is_none());
}

#[test]
fn nearest_future_ignores_other_instrument_types() {
    let catalog = InstrumentCatalog::new(vec![option(
        "9",
        "NIFTY25JAN2418000CE",
        date(2024, 1, 25),
        18_000.0,
    )]);
    assert!(catalog.nearest_future("NFO", "NIFTY", date(2024, 1, 10)).is_none());
}

#[test]
fn equal_expiries_keep_the_first_record() {
    let catalog = InstrumentCatalog::new(vec![
        future("first", "NIFTY25JAN24FUT", date(2024, 1, 25)),
        future("second", "NIFTY25JAN24FUT", date(2024, 1, 25)),
    ]);
    let chosen = catalog
        .nearest_future("NFO", "NIFTY", date(2024, 1, 10))
        .expect("listed");
    assert_eq!(chosen.token, "first");
}

#[test]
fn strike_filter_uses_a_tolerance_not_equality() {
    let catalog = InstrumentCatalog::new(vec![option(
        "1",
        "NIFTY25JAN2417450CE",
        date(2024, 1, 25),
        17_450.5,
    )]);

    let filter = options_filter(date(2024, 1, 10), 17_450.0, "CE");
    assert!(catalog.nearest_expiry_match(&filter).is_some());

    let far = options_filter(date(2024, 1, 10), 17_448.0, "CE");
    assert!(catalog.nearest_expiry_match(&far).is_none());
}

#[test]
fn instruments_without_a_strike_never_match_a_strike_filter() {
    let catalog = InstrumentCatalog::new(vec![future("1", "NIFTY25JAN24FUT", date(2024, 1, 25))]);
    let mut filter = options_filter(date(2024, 1, 10), 17_450.0, "CE");
    filter.instrument_type = FUTURES_INSTRUMENT_TYPE.to_string();
    filter.symbol_suffix = None;
    assert!(catalog.nearest_expiry_match(&filter).is_none());
}

#[test]
fn suffix_filter_separates_calls_from_puts() {
    let catalog = InstrumentCatalog::new(vec![
        option("1", "NIFTY25JAN2417450CE", date(2024, 1, 25), 17_450.0),
        option("2", "NIFTY25JAN2417450PE", date(2024, 1, 25), 17_450.0),
    ]);

    let calls = options_filter(date(2024, 1, 10), 17_450.0, "CE");
    assert_eq!(
        catalog.nearest_expiry_match(&calls).map(|i| i.token.as_str()),
        Some("1")
    );

    let puts = options_filter(date(2024, 1, 10), 17_450.0, "PE");
    assert_eq!(
        catalog.nearest_expiry_match(&puts).map(|i| i.token.as_str()),
        Some("2")
    );
}

#[test]
fn empty_catalog_finds_nothing() {
    let catalog = InstrumentCatalog::default();
    assert!(catalog.is_empty());
    assert!(catalog.nearest_future("NFO", "NIFTY", date(2024, 1, 10)).is_none());
}
