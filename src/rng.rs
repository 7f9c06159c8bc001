//! Random draw sources — ambient thread-local RNG or seeded deterministic RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws for a selector.
///
/// `Seeded` wraps a `StdRng` seeded once at construction. Its sequence
/// advances on every draw and is owned by exactly one selector, so the same
/// seed plus the same call sequence reproduces the same selections.
///
/// `Ambient` takes the thread-local RNG fresh on every draw and holds no
/// state between calls, which keeps a selector `Send` regardless of which
/// source it was configured with.
#[derive(Debug, Clone)]
pub enum RandomSource {
    Ambient,
    Seeded(StdRng),
}

impl RandomSource {
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(StdRng::seed_from_u64(seed))
    }

    /// Uniform draw in `[0, upper)`.
    ///
    /// `upper` must be finite and > 0; callers validate total weight first.
    pub fn gen_below(&mut self, upper: f64) -> f64 {
        match self {
            Self::Ambient => rand::thread_rng().gen_range(0.0..upper),
            Self::Seeded(rng) => rng.gen_range(0.0..upper),
        }
    }

    pub fn is_deterministic(&self) -> bool {
        matches!(self, Self::Seeded(_))
    }
}
