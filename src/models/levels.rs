use serde::{Deserialize, Serialize};

/// Tuning knobs for level detection
///
/// A price `p` touches level `l` when `|p - l| < l * tolerance`. Values are used
/// literally by the detector; range checks belong to whoever collects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelParameters {
    /// Minimum number of touches for a candidate to count as a level
    pub min_touches: usize,
    /// Minimum absolute gap between two accepted levels
    pub distance: f64,
    /// Relative band width used when counting touches
    pub tolerance: f64,
}

impl Default for LevelParameters {
    fn default() -> Self {
        Self {
            min_touches: 3,
            distance: 5.0,
            tolerance: 0.005,
        }
    }
}

impl LevelParameters {
    pub fn new(min_touches: usize, distance: f64, tolerance: f64) -> Self {
        Self {
            min_touches,
            distance,
            tolerance,
        }
    }
}

/// Accepted levels split into two labelled groups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelPartition {
    /// Ascending
    pub supports: Vec<f64>,
    /// Descending
    pub resistances: Vec<f64>,
}

/// Row-aligned support/resistance columns
///
/// Both columns always have the same length; `None` marks an absent cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelTable {
    pub supports: Vec<Option<f64>>,
    pub resistances: Vec<Option<f64>>,
}

/// One display row of a [`LevelTable`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelRow {
    pub support: Option<f64>,
    pub resistance: Option<f64>,
}

impl LevelTable {
    /// Pad the shorter side of a partition with `None` so both columns line up
    pub fn from_partition(partition: LevelPartition) -> Self {
        let rows = partition.supports.len().max(partition.resistances.len());
        let pad = |column: Vec<f64>| -> Vec<Option<f64>> {
            let mut padded: Vec<Option<f64>> = column.into_iter().map(Some).collect();
            padded.resize(rows, None);
            padded
        };

        Self {
            supports: pad(partition.supports),
            resistances: pad(partition.resistances),
        }
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty() && self.resistances.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = LevelRow> + '_ {
        self.supports
            .iter()
            .zip(self.resistances.iter())
            .map(|(&support, &resistance)| LevelRow {
                support,
                resistance,
            })
    }
}

/// Output of one detection run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportResistanceLevels {
    /// Accepted levels in acceptance (scan) order
    pub levels: Vec<f64>,
    pub table: LevelTable,
}

impl SupportResistanceLevels {
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
