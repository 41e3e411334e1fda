//! Property-based tests for softmax and cross-entropy

use ferrite_intro::{cross_entropy, softmax, softmax_with, NumericConfig, Softmax};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_softmax_sums_to_one(
        logits in prop::collection::vec(-50.0f64..50.0, 1..64)
    ) {
        let probs = softmax(&logits).unwrap();
        let sum: f64 = probs.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {}", sum);
    }

    #[test]
    fn prop_softmax_entries_strictly_inside_unit_interval(
        logits in prop::collection::vec(-5.0f64..5.0, 2..32)
    ) {
        for p in softmax(&logits).unwrap() {
            prop_assert!(p > 0.0 && p < 1.0, "entry {} outside (0, 1)", p);
        }
    }

    #[test]
    fn prop_softmax_shift_invariant(
        logits in prop::collection::vec(-10.0f64..10.0, 1..32),
        c in -10.0f64..10.0,
    ) {
        // Unstabilized on purpose: magnitudes stay far from overflow.
        let config = NumericConfig::reference();
        let base = softmax_with(&logits, &config).unwrap();
        let shifted: Vec<f64> = logits.iter().map(|x| x + c).collect();
        let moved = softmax_with(&shifted, &config).unwrap();
        for (a, b) in base.iter().zip(moved.iter()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_softmax_backward_of_ones_vanishes(
        logits in prop::collection::vec(-10.0f64..10.0, 1..16)
    ) {
        // Outputs always sum to 1, so a uniform upstream gradient has no effect.
        let probs = softmax(&logits).unwrap();
        let ones = vec![1.0; probs.len()];
        for g in Softmax::backward(&probs, &ones).unwrap() {
            prop_assert!(g.abs() < 1e-12);
        }
    }

    #[test]
    fn prop_cross_entropy_non_negative(
        pairs in prop::collection::vec((any::<bool>(), 0.001f64..0.999), 0..64)
    ) {
        let labels: Vec<f64> = pairs.iter().map(|(y, _)| if *y { 1.0 } else { 0.0 }).collect();
        let predictions: Vec<f64> = pairs.iter().map(|(_, p)| *p).collect();
        let loss = cross_entropy(&labels, &predictions).unwrap();
        prop_assert!(loss >= 0.0 && loss.is_finite(), "loss = {}", loss);
    }
}
