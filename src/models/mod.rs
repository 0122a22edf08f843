//! Shared data models spanning the engine layers.

pub mod catalog;
pub mod indicators;
pub mod levels;

pub use catalog::{resolve_symbol, BarInterval, StockListing, Timeframe, STOCK_CATALOG};
pub use indicators::Candle;
pub use levels::{LevelParameters, LevelPartition, LevelRow, LevelTable, SupportResistanceLevels};
