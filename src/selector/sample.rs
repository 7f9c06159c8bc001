//! Cumulative-weight construction and the O(log n) draw-and-map step.

use crate::rng::RandomSource;

/// Build the prefix-sum array over clamped weights.
///
/// Returns `(cumulative, total)` where `cumulative[i] = Σ_{j≤i} max(0, w_j)`.
/// The array is monotonically non-decreasing by construction.
pub(crate) fn cumulative(weights: &[f64]) -> (Vec<f64>, f64) {
    let mut running = 0.0;
    let cumulative = weights
        .iter()
        .map(|w| {
            running += w.max(0.0);
            running
        })
        .collect();
    (cumulative, running)
}

/// Draw a uniform value in `[0, total)` and map it to a candidate index.
pub(crate) fn draw_index(rng: &mut RandomSource, cumulative: &[f64], total: f64) -> usize {
    index_for(cumulative, rng.gen_below(total))
}

/// Map a draw to the first index whose cumulative weight exceeds it.
///
/// Candidate `i` owns the half-open interval `[cumulative[i-1],
/// cumulative[i])`, so a zero-weight candidate owns an empty interval and
/// can never be picked. The index is clamped into `[0, n-1]` to absorb
/// floating-point effects at the upper boundary.
pub(crate) fn index_for(cumulative: &[f64], draw: f64) -> usize {
    debug_assert!(!cumulative.is_empty());
    let idx = cumulative.partition_point(|&c| c <= draw);
    idx.min(cumulative.len() - 1)
}
