//! Weighted random selection engine.
//!
//! Picks one or more items from a weighted candidate pool, with optional
//! "sweetening": a bonus scalar that pulls the weight distribution toward a
//! pivot (mean or median), dialing fairness continuously from pure weighted
//! (bonus 0) to nearly uniform (large bonus) without touching the
//! underlying weight table.
//!
//! - [`Selectable`] — the weight capability any candidate type implements
//! - [`Selector`] — selection with/without replacement, try-variants,
//!   probability introspection, bounded selection history
//! - Ambient or seed-deterministic randomness, chosen at construction
//!
//! ```
//! use weighted_select::{Selectable, Selector};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Drop {
//!     name: &'static str,
//!     weight: f64,
//! }
//!
//! impl Selectable for Drop {
//!     fn weight(&self) -> f64 {
//!         self.weight
//!     }
//!     fn set_weight(&mut self, weight: f64) {
//!         self.weight = weight;
//!     }
//! }
//!
//! let table = vec![
//!     Drop { name: "common", weight: 70.0 },
//!     Drop { name: "rare", weight: 20.0 },
//!     Drop { name: "epic", weight: 10.0 },
//! ];
//!
//! let mut selector = Selector::seeded(42);
//! let pick = selector.select(&table, 0.0).unwrap();
//! assert!(table.contains(&pick));
//!
//! // Sweetened: probabilities pulled toward 1/3 each.
//! let probs = selector.probabilities(&table, 10_000.0).unwrap();
//! assert!(probs.iter().all(|p| (p - 1.0 / 3.0).abs() < 0.01));
//! ```

pub mod rng;
pub mod selector;
pub mod weight;

pub use rng::RandomSource;
pub use selector::{
    AdjustmentRange, Pivot, SelectError, Selector, SelectorBuilder, SelectorConfig,
};
pub use weight::Selectable;
