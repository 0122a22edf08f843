use std::collections::HashMap;
use crate::indicators::error::IndicatorError;
use crate::models::levels::LevelParameters;

pub fn parse_f64(value: &str) -> Result<f64, IndicatorError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| IndicatorError::InvalidNumericFormat(value.to_string()))
}

pub fn parse_usize(value: &str) -> Result<usize, IndicatorError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| IndicatorError::InvalidNumericFormat(value.to_string()))
}

/// Overlay `min_touches`, `distance` and `tolerance` entries from `data` onto `defaults`
///
/// Missing keys keep the default; present keys must parse.
pub fn parse_level_parameters_from_map(
    data: &HashMap<String, String>,
    defaults: LevelParameters,
) -> Result<LevelParameters, IndicatorError> {
    let min_touches = match data.get("min_touches") {
        Some(raw) => parse_usize(raw)?,
        None => defaults.min_touches,
    };

    let distance = match data.get("distance") {
        Some(raw) => parse_f64(raw)?,
        None => defaults.distance,
    };

    let tolerance = match data.get("tolerance") {
        Some(raw) => parse_f64(raw)?,
        None => defaults.tolerance,
    };

    Ok(LevelParameters {
        min_touches,
        distance,
        tolerance,
    })
}

/// Parse a comma- or whitespace-separated list of prices
pub fn parse_price_list(value: &str) -> Result<Vec<f64>, IndicatorError> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_f64)
        .collect()
}
