//! Instrument catalogue and look-back window options

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::indicators::error::IndicatorError;

/// A listed stock with its display name and exchange ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockListing {
    pub name: &'static str,
    pub symbol: &'static str,
}

pub const STOCK_CATALOG: &[StockListing] = &[
    StockListing { name: "Reliance Industries", symbol: "RELIANCE.NS" },
    StockListing { name: "Tata Consultancy Services", symbol: "TCS.NS" },
    StockListing { name: "HDFC Bank", symbol: "HDFCBANK.NS" },
    StockListing { name: "Infosys", symbol: "INFY.NS" },
    StockListing { name: "ICICI Bank", symbol: "ICICIBANK.NS" },
    StockListing { name: "Hindustan Unilever", symbol: "HINDUNILVR.NS" },
    StockListing { name: "State Bank of India", symbol: "SBIN.NS" },
    StockListing { name: "Bharti Airtel", symbol: "BHARTIARTL.NS" },
    StockListing { name: "Asian Paints", symbol: "ASIANPAINT.NS" },
    StockListing { name: "Bajaj Finance", symbol: "BAJFINANCE.NS" },
    StockListing { name: "Maruti Suzuki", symbol: "MARUTI.NS" },
    StockListing { name: "Tata Motors", symbol: "TATAMOTORS.NS" },
    StockListing { name: "Larsen & Toubro", symbol: "LT.NS" },
    StockListing { name: "Axis Bank", symbol: "AXISBANK.NS" },
    StockListing { name: "ITC", symbol: "ITC.NS" },
];

/// Find a catalogue entry by display name or ticker (case-insensitive)
pub fn find_listing(input: &str) -> Option<&'static StockListing> {
    let needle = input.trim();
    STOCK_CATALOG.iter().find(|listing| {
        listing.name.eq_ignore_ascii_case(needle) || listing.symbol.eq_ignore_ascii_case(needle)
    })
}

/// Map a display name to its ticker; anything else is treated as a raw ticker
pub fn resolve_symbol(input: &str) -> String {
    match find_listing(input) {
        Some(listing) => listing.symbol.to_string(),
        None => input.trim().to_string(),
    }
}

/// How far back to fetch bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
}

impl Timeframe {
    pub fn all() -> Vec<Timeframe> {
        vec![
            Timeframe::OneMonth,
            Timeframe::ThreeMonths,
            Timeframe::SixMonths,
            Timeframe::OneYear,
            Timeframe::TwoYears,
            Timeframe::FiveYears,
        ]
    }

    /// Wire code understood by the market data provider
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1mo",
            Timeframe::ThreeMonths => "3mo",
            Timeframe::SixMonths => "6mo",
            Timeframe::OneYear => "1y",
            Timeframe::TwoYears => "2y",
            Timeframe::FiveYears => "5y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1 Month",
            Timeframe::ThreeMonths => "3 Months",
            Timeframe::SixMonths => "6 Months",
            Timeframe::OneYear => "1 Year",
            Timeframe::TwoYears => "2 Years",
            Timeframe::FiveYears => "5 Years",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Timeframe::all()
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(needle) || t.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| IndicatorError::UnknownTimeframe(s.to_string()))
    }
}

/// Bar size of the fetched series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BarInterval {
    #[default]
    #[serde(rename = "1d")]
    Daily,
    #[serde(rename = "1wk")]
    Weekly,
    #[serde(rename = "1mo")]
    Monthly,
}

impl BarInterval {
    pub fn all() -> Vec<BarInterval> {
        vec![BarInterval::Daily, BarInterval::Weekly, BarInterval::Monthly]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BarInterval::Daily => "1d",
            BarInterval::Weekly => "1wk",
            BarInterval::Monthly => "1mo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BarInterval::Daily => "1 Day",
            BarInterval::Weekly => "1 Week",
            BarInterval::Monthly => "1 Month",
        }
    }
}

impl fmt::Display for BarInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BarInterval {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        BarInterval::all()
            .into_iter()
            .find(|i| i.as_str().eq_ignore_ascii_case(needle) || i.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| IndicatorError::UnknownInterval(s.to_string()))
    }
}
