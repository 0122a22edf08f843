use thiserror::Error;

/// Errors raised while reading or checking user-supplied detection inputs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("invalid numeric format: {0}")]
    InvalidNumericFormat(String),

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown timeframe: {0}")]
    UnknownTimeframe(String),

    #[error("unknown interval: {0}")]
    UnknownInterval(String),
}
