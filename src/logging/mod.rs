//! Tracing subscriber setup
//!
//! Production deployments emit one JSON object per event so log shippers can
//! index the structured fields (`symbol`, `range`, `levels`, ...). Everywhere
//! else events are printed as coloured text.

use crate::config::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "levelscope=info,tower_http=info,info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber for `config`'s environment
///
/// `RUST_LOG` overrides the default filter. Call once, before serving requests.
pub fn init_logging(config: &Config) {
    let registry = tracing_subscriber::registry().with(env_filter());

    if config.is_production() {
        registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_target(true),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(true),
            )
            .init();
    }
}
