//! Range checks applied at the input boundary (HTTP, CLI)
//!
//! The detector itself accepts any parameter values.

use serde::Serialize;

use crate::indicators::error::IndicatorError;
use crate::models::levels::LevelParameters;

/// Inclusive bounds for one parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterBound {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterBound {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Accepted ranges for user-supplied level parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterBounds {
    pub min_touches: ParameterBound,
    pub distance: ParameterBound,
    pub tolerance: ParameterBound,
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            min_touches: ParameterBound { min: 2.0, max: 5.0, step: 1.0 },
            distance: ParameterBound { min: 1.0, max: 10.0, step: 1.0 },
            tolerance: ParameterBound { min: 0.001, max: 0.01, step: 0.001 },
        }
    }
}

fn check(field: &'static str, value: f64, bound: ParameterBound) -> Result<(), IndicatorError> {
    if bound.contains(value) {
        Ok(())
    } else {
        Err(IndicatorError::OutOfRange {
            field,
            value,
            min: bound.min,
            max: bound.max,
        })
    }
}

pub fn validate_level_parameters_within(
    params: &LevelParameters,
    bounds: &ParameterBounds,
) -> Result<(), IndicatorError> {
    check("min_touches", params.min_touches as f64, bounds.min_touches)?;
    check("distance", params.distance, bounds.distance)?;
    check("tolerance", params.tolerance, bounds.tolerance)?;
    Ok(())
}

pub fn validate_level_parameters(params: &LevelParameters) -> Result<(), IndicatorError> {
    validate_level_parameters_within(params, &ParameterBounds::default())
}
