//! Unit tests for the stock catalogue and window options

use levelscope::indicators::IndicatorError;
use levelscope::models::catalog::{find_listing, resolve_symbol, BarInterval, Timeframe, STOCK_CATALOG};

#[test]
fn test_catalog_contents() {
    assert_eq!(STOCK_CATALOG.len(), 15);
    assert_eq!(STOCK_CATALOG[0].name, "Reliance Industries");
    assert_eq!(STOCK_CATALOG[0].symbol, "RELIANCE.NS");
}

#[test]
fn test_resolve_symbol_by_name() {
    assert_eq!(resolve_symbol("Reliance Industries"), "RELIANCE.NS");
    assert_eq!(resolve_symbol("larsen & toubro"), "LT.NS");
}

#[test]
fn test_resolve_symbol_passes_raw_tickers_through() {
    assert_eq!(resolve_symbol("TCS.NS"), "TCS.NS");
    assert_eq!(resolve_symbol(" AAPL "), "AAPL");
}

#[test]
fn test_find_listing_by_ticker() {
    let listing = find_listing("infy.ns").expect("listing");
    assert_eq!(listing.name, "Infosys");
    assert!(find_listing("AAPL").is_none());
}

#[test]
fn test_timeframe_parsing() {
    assert_eq!("6mo".parse::<Timeframe>().unwrap(), Timeframe::SixMonths);
    assert_eq!("1 Year".parse::<Timeframe>().unwrap(), Timeframe::OneYear);
    assert_eq!(
        "7d".parse::<Timeframe>(),
        Err(IndicatorError::UnknownTimeframe("7d".to_string()))
    );
    assert_eq!(Timeframe::default(), Timeframe::SixMonths);
}

#[test]
fn test_interval_parsing() {
    assert_eq!("1wk".parse::<BarInterval>().unwrap(), BarInterval::Weekly);
    assert_eq!("1 Month".parse::<BarInterval>().unwrap(), BarInterval::Monthly);
    assert!("4h".parse::<BarInterval>().is_err());
    assert_eq!(BarInterval::default(), BarInterval::Daily);
}

#[test]
fn test_wire_codes_round_trip_through_serde() {
    assert_eq!(serde_json::to_string(&Timeframe::FiveYears).unwrap(), "\"5y\"");
    assert_eq!(
        serde_json::from_str::<BarInterval>("\"1mo\"").unwrap(),
        BarInterval::Monthly
    );
    for timeframe in Timeframe::all() {
        assert_eq!(timeframe.as_str().parse::<Timeframe>().unwrap(), timeframe);
    }
}
