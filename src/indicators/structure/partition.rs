//! Support/resistance classification of accepted levels

use crate::models::levels::{LevelPartition, LevelTable};

/// Splits accepted levels into supports and resistances
pub trait LevelClassifier {
    fn partition(&self, levels: &[f64]) -> LevelPartition;

    fn name(&self) -> &'static str;
}

/// Classifies against the arithmetic mean of the accepted levels
///
/// Levels below the mean are supports, levels above it are resistances, and a
/// level exactly at the mean lands in neither group.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanClassifier;

impl LevelClassifier for MeanClassifier {
    fn partition(&self, levels: &[f64]) -> LevelPartition {
        if levels.is_empty() {
            return LevelPartition::default();
        }

        let mean = levels.iter().sum::<f64>() / levels.len() as f64;

        let mut supports: Vec<f64> = levels.iter().copied().filter(|&l| l < mean).collect();
        let mut resistances: Vec<f64> = levels.iter().copied().filter(|&l| l > mean).collect();

        supports.sort_by(|a, b| a.total_cmp(b));
        resistances.sort_by(|a, b| b.total_cmp(a));

        LevelPartition {
            supports,
            resistances,
        }
    }

    fn name(&self) -> &'static str {
        "mean"
    }
}

/// Partition with `classifier` and pad into a display table
pub fn partition_levels(levels: &[f64], classifier: &dyn LevelClassifier) -> LevelTable {
    LevelTable::from_partition(classifier.partition(levels))
}
