//! Touch counting and greedy level acceptance
//!
//! A candidate becomes a level when the series revisits its price at least
//! `min_touches` times and no earlier accepted level lies within `distance`.
//! Acceptance is first-come: a later candidate never displaces an earlier level,
//! even one with fewer touches.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::extrema::scan_extrema;
use crate::models::levels::LevelParameters;

/// Count prices lying strictly inside the band `level ± level * tolerance`
///
/// Rescans the whole series on every call.
pub fn count_touches(level: f64, prices: &[f64], tolerance: f64) -> usize {
    let band = level * tolerance;
    prices.iter().filter(|&&p| (level - p).abs() < band).count()
}

/// Outcome of testing one candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum LevelVerdict {
    Accepted { touches: usize },
    TooFewTouches { touches: usize },
    TooClose { touches: usize, existing: f64 },
}

impl LevelVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, LevelVerdict::Accepted { .. })
    }

    pub fn touches(&self) -> usize {
        match *self {
            LevelVerdict::Accepted { touches }
            | LevelVerdict::TooFewTouches { touches }
            | LevelVerdict::TooClose { touches, .. } => touches,
        }
    }
}

/// Decides whether candidate prices qualify as levels against one series
#[derive(Debug, Clone, Copy)]
pub struct LevelSignificanceFilter<'a> {
    prices: &'a [f64],
    params: LevelParameters,
}

impl<'a> LevelSignificanceFilter<'a> {
    pub fn new(prices: &'a [f64], params: LevelParameters) -> Self {
        Self { prices, params }
    }

    /// Run the recurrence gate, then the separation gate against `accepted`
    pub fn evaluate(&self, level: f64, accepted: &[f64]) -> LevelVerdict {
        let touches = count_touches(level, self.prices, self.params.tolerance);
        if touches < self.params.min_touches {
            return LevelVerdict::TooFewTouches { touches };
        }

        match accepted
            .iter()
            .find(|&&existing| (level - existing).abs() < self.params.distance)
        {
            Some(&existing) => LevelVerdict::TooClose { touches, existing },
            None => LevelVerdict::Accepted { touches },
        }
    }

    pub fn is_significant(&self, level: f64, accepted: &[f64]) -> bool {
        self.evaluate(level, accepted).is_accepted()
    }
}

/// Scan for extrema and keep the significant ones, in scan order
pub fn detect_levels(prices: &[f64], params: LevelParameters) -> Vec<f64> {
    let filter = LevelSignificanceFilter::new(prices, params);
    let mut levels: Vec<f64> = Vec::new();

    for candidate in scan_extrema(prices) {
        let verdict = filter.evaluate(candidate.price, &levels);
        debug!(
            index = candidate.index,
            price = candidate.price,
            kind = ?candidate.kind,
            verdict = ?verdict,
            "Level candidate evaluated"
        );
        if verdict.is_accepted() {
            levels.push(candidate.price);
        }
    }

    levels
}
