//! Weighted aggregate scoring.

use crate::config::Weights;
use crate::risk::{Category, RiskState};

/// Restrict a raw value to the closed range 0..=10.
pub fn clamp(x: i64) -> u8 {
    x.clamp(0, 10) as u8
}

/// Weighted 0..=100 aggregate over all five categories.
///
/// raw = sum(value * weight) with each value in 0..=10 and weights summing
/// to 1.0, scaled by 10 and rounded half away from zero. With the default
/// weights a raw 5.35 scores 54.
pub fn compute_score(state: &RiskState, weights: &Weights) -> u8 {
    let raw: f64 = Category::ALL
        .iter()
        .map(|&c| f64::from(state.get(c)) * weights.get(c))
        .sum();
    (raw * 10.0).round() as u8
}
