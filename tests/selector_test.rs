//! End-to-end scenarios for the weighted selector.

use weighted_select::{
    AdjustmentRange, Pivot, SelectError, Selectable, Selector, SelectorBuilder,
};

#[derive(Debug, Clone, PartialEq)]
struct Reward {
    name: &'static str,
    weight: f64,
}

impl Reward {
    fn new(name: &'static str, weight: f64) -> Self {
        Self { name, weight }
    }
}

impl Selectable for Reward {
    fn weight(&self) -> f64 {
        self.weight
    }
    fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

fn pool_10_20_70() -> Vec<Reward> {
    vec![
        Reward::new("a", 10.0),
        Reward::new("b", 20.0),
        Reward::new("c", 70.0),
    ]
}

// ── Probability scenarios ────────────────────────────────────────────

#[test]
fn zero_bonus_probabilities_equal_weight_shares() {
    let selector = Selector::seeded(1);
    let probs = selector.probabilities(&pool_10_20_70(), 0.0).unwrap();
    let expected = [0.10, 0.20, 0.70];
    for (p, e) in probs.iter().zip(expected) {
        assert!((p - e).abs() < 1e-9, "got {}, expected {}", p, e);
    }
}

#[test]
fn large_bonus_mean_all_approaches_uniform() {
    let selector = Selector::seeded_with(1, Pivot::Mean, AdjustmentRange::All);
    let probs = selector.probabilities(&pool_10_20_70(), 10_000.0).unwrap();
    for p in &probs {
        assert!(
            (p - 1.0 / 3.0).abs() < 0.03,
            "expected ~1/3 under a huge bonus, got {}",
            p,
        );
    }
    let sum: f64 = probs.iter().sum();
    assert!((sum - 1.0).abs() < 1e-5);
}

#[test]
fn probabilities_sum_to_one_across_configurations() {
    for pivot in [Pivot::Mean, Pivot::Median] {
        for range in [
            AdjustmentRange::BelowPivot,
            AdjustmentRange::AbovePivot,
            AdjustmentRange::All,
        ] {
            for bonus in [0.0, 1.0, 50.0, 10_000.0] {
                let selector = Selector::seeded_with(1, pivot, range);
                let probs = selector.probabilities(&pool_10_20_70(), bonus).unwrap();
                let sum: f64 = probs.iter().sum();
                assert!(
                    (sum - 1.0).abs() < 1e-5,
                    "sum {} for pivot {:?} range {:?} bonus {}",
                    sum,
                    pivot,
                    range,
                    bonus,
                );
            }
        }
    }
}

#[test]
fn bonus_narrows_the_gap_monotonically() {
    let selector = Selector::seeded(1);
    let pool = pool_10_20_70();
    let mut previous_spread = f64::MAX;
    for bonus in [0.0, 10.0, 100.0, 1_000.0, 10_000.0] {
        let probs = selector.probabilities(&pool, bonus).unwrap();
        let spread = probs.iter().cloned().fold(f64::MIN, f64::max)
            - probs.iter().cloned().fold(f64::MAX, f64::min);
        assert!(
            spread < previous_spread,
            "spread {} did not shrink at bonus {}",
            spread,
            bonus,
        );
        previous_spread = spread;
    }
}

// ── Sampling distribution ────────────────────────────────────────────

#[test]
fn selection_frequencies_track_weights() {
    let mut selector = Selector::seeded(42);
    let pool = pool_10_20_70();
    let mut counts = [0u32; 3];
    for _ in 0..10_000 {
        let pick = selector.select(&pool, 0.0).unwrap();
        let idx = pool.iter().position(|r| r == &pick).unwrap();
        counts[idx] += 1;
    }
    // 10% / 20% / 70% within generous statistical slack.
    assert!((700..=1_300).contains(&counts[0]), "counts: {:?}", counts);
    assert!((1_600..=2_400).contains(&counts[1]), "counts: {:?}", counts);
    assert!((6_500..=7_500).contains(&counts[2]), "counts: {:?}", counts);
}

#[test]
fn sweetened_selection_frequencies_flatten() {
    let mut selector = Selector::seeded(42);
    let pool = pool_10_20_70();
    let mut counts = [0u32; 3];
    for _ in 0..10_000 {
        let pick = selector.select(&pool, 10_000.0).unwrap();
        let idx = pool.iter().position(|r| r == &pick).unwrap();
        counts[idx] += 1;
    }
    for count in counts {
        assert!(
            (2_800..=3_900).contains(&count),
            "expected ~3333 each, got {:?}",
            counts,
        );
    }
}

// ── Distinct selection ───────────────────────────────────────────────

#[test]
fn distinct_full_draw_returns_every_candidate_once() {
    let mut selector = Selector::seeded(7);
    let pool = pool_10_20_70();
    for _ in 0..100 {
        let picks = selector.select_distinct(&pool, 3, 0.0).unwrap();
        let mut names: Vec<_> = picks.iter().map(|p| p.name).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}

#[test]
fn distinct_overflow_fails_without_partial_result() {
    let mut selector: Selector<Reward> = SelectorBuilder::new()
        .seed(7)
        .history_capacity(10)
        .build();
    let err = selector.select_distinct(&pool_10_20_70(), 4, 0.0).unwrap_err();
    assert!(matches!(err, SelectError::InvalidInput { .. }));
    assert_eq!(selector.history_len(), 0);
}

#[test]
fn distinct_with_bonus_recomputes_over_shrinking_pool() {
    let mut selector = Selector::seeded_with(7, Pivot::Mean, AdjustmentRange::All);
    let pool = pool_10_20_70();
    for _ in 0..100 {
        let picks = selector.select_distinct(&pool, 2, 500.0).unwrap();
        assert_eq!(picks.len(), 2);
        assert_ne!(picks[0], picks[1]);
    }
}

// ── Error scenarios ──────────────────────────────────────────────────

#[test]
fn empty_pool_raises_invalid_input() {
    let mut selector: Selector<Reward> = Selector::seeded(1);
    assert!(matches!(
        selector.select(&[], 0.0),
        Err(SelectError::InvalidInput { .. })
    ));
    assert!(matches!(
        selector.probabilities(&[], 0.0),
        Err(SelectError::InvalidInput { .. })
    ));
}

#[test]
fn all_zero_weights_raise_invalid_weights() {
    let mut selector = Selector::seeded(1);
    let dead = vec![Reward::new("x", 0.0), Reward::new("y", 0.0)];
    assert!(matches!(
        selector.select(&dead, 0.0),
        Err(SelectError::InvalidWeights { .. })
    ));
    assert!(matches!(
        selector.select_multiple(&dead, 2, 0.0),
        Err(SelectError::InvalidWeights { .. })
    ));
}

// ── Determinism ──────────────────────────────────────────────────────

#[test]
fn seeded_selectors_replay_identical_sequences() {
    let pool = pool_10_20_70();
    let run = |seed: u64| -> Vec<&'static str> {
        let mut selector = Selector::seeded(seed);
        let mut names = Vec::new();
        for _ in 0..20 {
            names.push(selector.select(&pool, 0.0).unwrap().name);
        }
        for pick in selector.select_multiple(&pool, 10, 30.0).unwrap() {
            names.push(pick.name);
        }
        for pick in selector.select_distinct(&pool, 3, 30.0).unwrap() {
            names.push(pick.name);
        }
        names
    };

    assert_eq!(run(1234), run(1234));
    assert_ne!(run(1234), run(4321));
}

// ── History across calls ─────────────────────────────────────────────

#[test]
fn history_spans_selection_modes_in_order() {
    let mut selector: Selector<Reward> = SelectorBuilder::new()
        .seed(9)
        .history_capacity(100)
        .build();
    let pool = pool_10_20_70();

    let first = selector.select(&pool, 0.0).unwrap();
    let multiple = selector.select_multiple(&pool, 4, 0.0).unwrap();
    let distinct = selector.select_distinct(&pool, 3, 0.0).unwrap();

    let mut expected = vec![first];
    expected.extend(multiple);
    expected.extend(distinct);

    let snapshot: Vec<Reward> = selector.history().into_iter().cloned().collect();
    assert_eq!(snapshot, expected);
    assert_eq!(selector.last_selected(), expected.last());
}
