//! Support and Resistance levels detection

use super::partition::{partition_levels, LevelClassifier, MeanClassifier};
use super::significance::detect_levels;
use crate::models::indicators::{closes, Candle};
use crate::models::levels::{LevelParameters, SupportResistanceLevels};

/// Detect levels in a closing-price series and lay them out as a table
///
/// Never fails: short series, no qualifying candidates and degenerate
/// parameters all produce an empty result.
pub fn calculate_support_resistance(
    closes: &[f64],
    params: LevelParameters,
) -> SupportResistanceLevels {
    calculate_support_resistance_with(closes, params, &MeanClassifier)
}

/// Same as [`calculate_support_resistance`] with a custom classifier
pub fn calculate_support_resistance_with(
    closes: &[f64],
    params: LevelParameters,
    classifier: &dyn LevelClassifier,
) -> SupportResistanceLevels {
    let levels = detect_levels(closes, params);
    let table = partition_levels(&levels, classifier);
    SupportResistanceLevels { levels, table }
}

/// Run detection on candle closes
pub fn calculate_support_resistance_from_candles(
    candles: &[Candle],
    params: LevelParameters,
) -> SupportResistanceLevels {
    calculate_support_resistance(&closes(candles), params)
}

/// Calculate support/resistance with default parameters (3 touches, 5.0 apart, 0.5%)
pub fn calculate_support_resistance_default(closes: &[f64]) -> SupportResistanceLevels {
    calculate_support_resistance(closes, LevelParameters::default())
}
