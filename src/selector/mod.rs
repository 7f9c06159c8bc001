//! Weighted selector — validation, selection modes, introspection, history.
//!
//! All selection modes route through the same pipeline: clamp weights →
//! optional equalization adjustment → cumulative array → binary-search draw.
//! The single and multiple paths share one draw primitive so they cannot
//! diverge.

pub mod config;

mod adjust;
mod history;
mod sample;

use thiserror::Error;

use crate::rng::RandomSource;
use crate::weight::{Selectable, WeightedCandidate};
use history::SelectionHistory;

pub use config::{AdjustmentRange, Pivot, SelectorConfig, SelectorBuilder};

// ─── Errors ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectError {
    /// A malformed argument: empty pool, negative bonus, bad count.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Total effective weight after clamping negatives is <= 0, so no
    /// candidate can ever be chosen.
    #[error("invalid weights: total effective weight is {total}, must be > 0")]
    InvalidWeights { total: f64 },

    /// An unrecognized pivot or range reached the adjustment step. With the
    /// current closed enums this cannot be constructed by the engine; the
    /// variant keeps the taxonomy complete should the configuration surface
    /// ever be opened up.
    #[error("unsupported configuration: {reason}")]
    UnsupportedConfiguration { reason: String },
}

impl SelectError {
    fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

// ─── Selector ────────────────────────────────────────────────────────

/// Stateful weighted selection engine.
///
/// Configured once (pivot, range, optional seed, optional history
/// capacity), then fed candidate slices per call. Selection methods take
/// `&mut self` — the RNG sequence and the history queue advance on every
/// successful draw — so concurrent use requires external synchronization;
/// the borrow checker enforces exclusive access within one thread.
#[derive(Debug, Clone)]
pub struct Selector<T> {
    pivot: Pivot,
    range: AdjustmentRange,
    rng: RandomSource,
    history: SelectionHistory<T>,
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Selector<T> {
    /// Mean pivot, all-range, ambient randomness, no history.
    pub fn new() -> Self {
        Self::from_config(SelectorConfig::default())
    }

    pub fn with_config(pivot: Pivot, range: AdjustmentRange) -> Self {
        Self::from_config(SelectorConfig {
            pivot,
            range,
            ..SelectorConfig::default()
        })
    }

    /// Deterministic selector: same seed + same call sequence reproduces
    /// the same selections.
    pub fn seeded(seed: u64) -> Self {
        Self::from_config(SelectorConfig {
            seed: Some(seed),
            ..SelectorConfig::default()
        })
    }

    pub fn seeded_with(seed: u64, pivot: Pivot, range: AdjustmentRange) -> Self {
        Self::from_config(SelectorConfig {
            pivot,
            range,
            seed: Some(seed),
            ..SelectorConfig::default()
        })
    }

    pub fn from_config(config: SelectorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::Ambient,
        };
        Self {
            pivot: config.pivot,
            range: config.range,
            rng,
            history: SelectionHistory::new(config.history_capacity),
        }
    }

    pub fn builder() -> SelectorBuilder {
        SelectorBuilder::new()
    }

    pub fn pivot(&self) -> Pivot {
        self.pivot
    }

    pub fn range(&self) -> AdjustmentRange {
        self.range
    }

    pub fn is_deterministic(&self) -> bool {
        self.rng.is_deterministic()
    }

    // ── History queries ──────────────────────────────────────────────

    /// Full history snapshot, oldest → newest.
    pub fn history(&self) -> Vec<&T> {
        self.history.snapshot()
    }

    /// The `n` most recent selections, oldest → newest.
    pub fn recent_history(&self, n: usize) -> Vec<&T> {
        self.history.last_n(n)
    }

    pub fn last_selected(&self) -> Option<&T> {
        self.history.last()
    }

    /// Was this candidate among the recent selections still in the queue?
    pub fn history_contains(&self, candidate: &T) -> bool
    where
        T: PartialEq,
    {
        self.history.contains(candidate)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_capacity(&self) -> usize {
        self.history.capacity()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

// ─── Introspection (no draw, no mutation) ────────────────────────────

impl<T: Selectable> Selector<T> {
    /// Per-candidate selection probability under the given bonus.
    ///
    /// Sums to 1 within floating-point tolerance over the full slice. A
    /// single-candidate pool mirrors the selection short circuit: `[1.0]`
    /// whatever the weight.
    pub fn probabilities(&self, candidates: &[T], bonus: f64) -> Result<Vec<f64>, SelectError> {
        Self::validate(candidates, bonus)?;
        if candidates.len() == 1 {
            return Ok(vec![1.0]);
        }
        let weights = self.prepare(effective_weights(candidates), bonus)?;
        let total: f64 = weights.iter().sum();
        Ok(weights.iter().map(|w| w / total).collect())
    }

    /// Adjusted weights on the normalized scale, before conversion to
    /// probabilities — exposes the equalization output directly. At
    /// `bonus == 0` this is just the normalized weight vector; a
    /// single-candidate pool short-circuits to `[1.0]` like selection does.
    pub fn adjusted_weights(&self, candidates: &[T], bonus: f64) -> Result<Vec<f64>, SelectError> {
        Self::validate(candidates, bonus)?;
        if candidates.len() == 1 {
            return Ok(vec![1.0]);
        }
        let effective = effective_weights(candidates);
        let total: f64 = effective.iter().sum();
        if total <= 0.0 {
            return Err(SelectError::InvalidWeights { total });
        }
        Ok(adjust::equalize(&effective, self.pivot, self.range, bonus))
    }

    fn validate(candidates: &[T], bonus: f64) -> Result<(), SelectError> {
        if candidates.is_empty() {
            return Err(SelectError::invalid_input("candidate pool is empty"));
        }
        if !bonus.is_finite() || bonus < 0.0 {
            return Err(SelectError::invalid_input(format!(
                "bonus must be finite and >= 0, got {}",
                bonus
            )));
        }
        Ok(())
    }

    /// Clamped weights → selection weights for this call: validated for a
    /// positive total, equalized when a bonus is in play.
    ///
    /// The post-equalization total is validated as well; sampling and
    /// probability division both require it to be positive.
    fn prepare(&self, effective: Vec<f64>, bonus: f64) -> Result<Vec<f64>, SelectError> {
        let total: f64 = effective.iter().sum();
        if total <= 0.0 {
            return Err(SelectError::InvalidWeights { total });
        }
        if bonus > 0.0 {
            let adjusted = adjust::equalize(&effective, self.pivot, self.range, bonus);
            let adjusted_total: f64 = adjusted.iter().sum();
            if adjusted_total <= 0.0 {
                return Err(SelectError::InvalidWeights {
                    total: adjusted_total,
                });
            }
            Ok(adjusted)
        } else {
            Ok(effective)
        }
    }
}

// ─── Selection ───────────────────────────────────────────────────────

impl<T: Selectable + Clone> Selector<T> {
    /// Select one candidate. Fails on an empty pool, a negative bonus, or a
    /// total effective weight of zero.
    pub fn select(&mut self, candidates: &[T], bonus: f64) -> Result<T, SelectError> {
        let idx = self.draw_indices(candidates, 1, bonus)?[0];
        let pick = candidates[idx].clone();
        self.history.record(pick.clone());
        Ok(pick)
    }

    /// Select `count` candidates with replacement: independent draws against
    /// the same (possibly bonus-adjusted) distribution, adjustment computed
    /// once. Duplicates are expected.
    pub fn select_multiple(
        &mut self,
        candidates: &[T],
        count: usize,
        bonus: f64,
    ) -> Result<Vec<T>, SelectError> {
        if count == 0 {
            return Err(SelectError::invalid_input("count must be > 0"));
        }
        let picks: Vec<T> = self
            .draw_indices(candidates, count, bonus)?
            .into_iter()
            .map(|idx| candidates[idx].clone())
            .collect();
        for pick in &picks {
            self.history.record(pick.clone());
        }
        Ok(picks)
    }

    /// Select `count` pairwise-distinct candidates (without replacement).
    ///
    /// Each draw removes the pick from the remaining pool; with a bonus in
    /// play the adjustment is recomputed against the shrinking set. Fails
    /// up front when `count` exceeds the pool size, and mid-sequence (with
    /// nothing recorded) if the remaining total weight hits zero.
    pub fn select_distinct(
        &mut self,
        candidates: &[T],
        count: usize,
        bonus: f64,
    ) -> Result<Vec<T>, SelectError> {
        Self::validate(candidates, bonus)?;
        if count == 0 {
            return Err(SelectError::invalid_input("count must be > 0"));
        }
        if count > candidates.len() {
            return Err(SelectError::invalid_input(format!(
                "count {} exceeds pool size {}",
                count,
                candidates.len()
            )));
        }

        let mut remaining: Vec<WeightedCandidate<'_, T>> = candidates
            .iter()
            .map(|item| WeightedCandidate {
                item,
                weight: item.effective_weight(),
            })
            .collect();

        let mut picks = Vec::with_capacity(count);
        for _ in 0..count {
            let idx = if remaining.len() == 1 {
                0
            } else {
                let weights =
                    self.prepare(remaining.iter().map(|c| c.weight).collect(), bonus)?;
                let (cumulative, total) = sample::cumulative(&weights);
                sample::draw_index(&mut self.rng, &cumulative, total)
            };
            picks.push(remaining.swap_remove(idx).item.clone());
        }

        for pick in &picks {
            self.history.record(pick.clone());
        }
        Ok(picks)
    }

    /// Non-failing form of [`select`](Self::select).
    pub fn try_select(&mut self, candidates: &[T], bonus: f64) -> Option<T> {
        self.select(candidates, bonus).ok()
    }

    /// Non-failing form of [`select_multiple`](Self::select_multiple).
    pub fn try_select_multiple(
        &mut self,
        candidates: &[T],
        count: usize,
        bonus: f64,
    ) -> Option<Vec<T>> {
        self.select_multiple(candidates, count, bonus).ok()
    }

    /// Non-failing form of [`select_distinct`](Self::select_distinct).
    pub fn try_select_distinct(
        &mut self,
        candidates: &[T],
        count: usize,
        bonus: f64,
    ) -> Option<Vec<T>> {
        self.select_distinct(candidates, count, bonus).ok()
    }

    /// Shared draw primitive for the with-replacement modes.
    ///
    /// A single-candidate pool short-circuits before weight validation:
    /// with one candidate there is nothing to weigh, so index 0 is returned
    /// even at weight zero.
    fn draw_indices(
        &mut self,
        candidates: &[T],
        count: usize,
        bonus: f64,
    ) -> Result<Vec<usize>, SelectError> {
        Self::validate(candidates, bonus)?;
        if candidates.len() == 1 {
            return Ok(vec![0; count]);
        }
        let weights = self.prepare(effective_weights(candidates), bonus)?;
        let (cumulative, total) = sample::cumulative(&weights);
        Ok((0..count)
            .map(|_| sample::draw_index(&mut self.rng, &cumulative, total))
            .collect())
    }
}

fn effective_weights<T: Selectable>(candidates: &[T]) -> Vec<f64> {
    candidates.iter().map(|c| c.effective_weight()).collect()
}

// ─── Tests ───────────────────────────────────────────────────────────
