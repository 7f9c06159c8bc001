//! Selector configuration — pivot/range modes, optional seed, history depth.

use serde::{Deserialize, Serialize};

use crate::selector::Selector;

/// Statistic that adjusted weights are pulled toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pivot {
    /// Arithmetic mean of the normalized weights.
    #[default]
    Mean,
    /// Median of the normalized weights (average of the two central
    /// elements for even counts).
    Median,
}

/// Which candidates receive the equalization adjustment, relative to the
/// pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentRange {
    /// Only candidates below the pivot are raised.
    BelowPivot,
    /// Only candidates above the pivot are lowered.
    AbovePivot,
    /// Both sides converge toward the pivot.
    #[default]
    All,
}

/// Complete selector configuration, immutable after construction.
///
/// Serializable so a host application can keep weight-table tuning in its
/// own config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub pivot: Pivot,
    pub range: AdjustmentRange,
    /// Present: deterministic `StdRng` seeded with this value.
    /// Absent: ambient thread-local RNG.
    pub seed: Option<u64>,
    /// 0 disables history tracking entirely.
    pub history_capacity: usize,
}

/// Fluent builder for [`Selector`].
#[derive(Debug, Clone, Default)]
pub struct SelectorBuilder {
    config: SelectorConfig,
}

impl SelectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn pivot(mut self, pivot: Pivot) -> Self {
        self.config.pivot = pivot;
        self
    }

    pub fn range(mut self, range: AdjustmentRange) -> Self {
        self.config.range = range;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    pub fn build<T>(self) -> Selector<T> {
        Selector::from_config(self.config)
    }
}
