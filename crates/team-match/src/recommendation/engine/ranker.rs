use std::cmp::Ordering;

use super::config::ScoringWeights;
use super::scorers::clamp01;

/// Weighted dimension total plus bonuses, clamped into `[0, 1]`.
pub(crate) fn composite_ratio(
    skill: f64,
    role: f64,
    personality: f64,
    weights: &ScoringWeights,
    bonus: f64,
) -> f64 {
    clamp01(
        skill * weights.skill + role * weights.role + personality * weights.personality + bonus,
    )
}

/// Ratio expressed on a 0-100 scale with two decimals.
pub(crate) fn to_percent(ratio: f64) -> f64 {
    (ratio * 10_000.0).round() / 100.0
}

/// Sorts descending by score. `sort_by` is stable, so equal scores keep retrieval order.
pub(crate) fn rank<T, F>(items: &mut [T], score: F)
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));
}
