//! Weight model — the capability contract candidates implement.

/// Capability contract for anything the selector can draw from.
///
/// The engine only ever reads the weight, and always through
/// [`effective_weight`](Selectable::effective_weight): negative weights are
/// clamped to zero, never rejected. `set_weight` exists so callers can tune
/// weight tables in place; the engine itself never mutates a candidate.
pub trait Selectable {
    /// Raw selection weight. Higher = more likely to be picked.
    fn weight(&self) -> f64;

    /// Replace the raw selection weight.
    fn set_weight(&mut self, weight: f64);

    /// Weight as the engine sees it: `max(0.0, weight)`.
    fn effective_weight(&self) -> f64 {
        self.weight().max(0.0)
    }
}

/// A candidate borrowed for the duration of one selection call, paired with
/// its cached effective weight. The candidate's own weight field is never
/// touched; adjusted values live only in this pair.
#[derive(Debug)]
pub(crate) struct WeightedCandidate<'a, T> {
    pub item: &'a T,
    pub weight: f64,
}
