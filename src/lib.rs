//! Support and resistance level detection over historical closing prices.
//!
//! The detection core lives in [`indicators::structure`] and is a pure,
//! synchronous pipeline. The remaining modules supply the collaborators around
//! it: market data, configuration, logging, metrics and the HTTP surface.

pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
