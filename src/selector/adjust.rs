//! Bonus / equalization adjustment — pulls normalized weights toward a
//! pivot (mean or median) without ever crossing it.

use crate::selector::config::{AdjustmentRange, Pivot};

/// Reshape a weight distribution toward the pivot.
///
/// Pipeline per the equalization design:
/// 1. normalize the clamped weights so they sum to 1;
/// 2. compute the pivot target (mean or median of the normalized weights);
/// 3. move each in-range weight toward the target by the fraction
///    `bonus / (bonus + 100)` of its remaining gap.
///
/// The fraction is 0 at `bonus == 0` and approaches (never reaches) 1 as
/// `bonus` grows, so an adjusted weight lands strictly between its original
/// value and the target: the step shrinks as a weight nears the target and
/// a single application cannot overshoot. At f64 extremes where
/// `bonus + 100 == bonus` the quotient would round to exactly 1, collapsing
/// every in-range weight onto the target (an all-zero vector when the
/// target is 0), so the fraction is capped just below 1 to keep an
/// above-target weight strictly positive. Results are clamped at 0.
///
/// Callers guarantee a non-empty slice with total weight > 0.
pub(crate) fn equalize(
    weights: &[f64],
    pivot: Pivot,
    range: AdjustmentRange,
    bonus: f64,
) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    let normalized: Vec<f64> = weights.iter().map(|w| w / total).collect();

    let target = match pivot {
        Pivot::Mean => mean(&normalized),
        Pivot::Median => median(&normalized),
    };
    let factor = (bonus / (bonus + 100.0)).min(1.0 - f64::EPSILON);

    normalized
        .iter()
        .map(|&w| apply(w, target, factor, range).max(0.0))
        .collect()
}

fn apply(weight: f64, target: f64, factor: f64, range: AdjustmentRange) -> f64 {
    let below = weight < target;
    let above = weight > target;
    let nudge = match range {
        AdjustmentRange::BelowPivot => below,
        AdjustmentRange::AbovePivot => above,
        AdjustmentRange::All => below || above,
    };
    if nudge {
        weight + (target - weight) * factor
    } else {
        weight
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
