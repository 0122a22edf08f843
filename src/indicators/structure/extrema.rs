//! Local extremum scanning over a closing-price series

use serde::{Deserialize, Serialize};

/// Number of bars at each end of the series that are never candidates
pub const EDGE_BARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtremumKind {
    Minimum,
    Maximum,
}

/// Candidate turning point found by [`scan_extrema`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    pub index: usize,
    pub price: f64,
    pub kind: ExtremumKind,
}

/// Price at `i` with its left and right neighbours, if both exist
fn neighbourhood(prices: &[f64], i: usize) -> Option<(f64, f64, f64)> {
    let left = prices.get(i.checked_sub(1)?)?;
    let right = prices.get(i.checked_add(1)?)?;
    Some((*left, prices[i], *right))
}

/// Price at `i` is strictly below both neighbours
///
/// The first and last bars, and out-of-range indices, are never minima.
pub fn is_local_minimum(prices: &[f64], i: usize) -> bool {
    neighbourhood(prices, i).is_some_and(|(left, price, right)| price < left && price < right)
}

/// Price at `i` is strictly above both neighbours
pub fn is_local_maximum(prices: &[f64], i: usize) -> bool {
    neighbourhood(prices, i).is_some_and(|(left, price, right)| price > left && price > right)
}

/// Yield local minima and maxima at indices `2..=n-3`, in index order
///
/// Flat runs produce nothing: a point equal to either neighbour is skipped.
/// Series shorter than five bars yield no candidates.
pub fn scan_extrema(prices: &[f64]) -> impl Iterator<Item = Extremum> + '_ {
    let end = prices.len().saturating_sub(EDGE_BARS);
    (EDGE_BARS..end).filter_map(move |i| {
        let kind = if is_local_minimum(prices, i) {
            ExtremumKind::Minimum
        } else if is_local_maximum(prices, i) {
            ExtremumKind::Maximum
        } else {
            return None;
        };

        Some(Extremum {
            index: i,
            price: prices[i],
            kind,
        })
    })
}
