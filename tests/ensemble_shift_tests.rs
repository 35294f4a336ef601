#![cfg(feature = "dev")]
//! Tests for the knot shift offsets used by ensemble members.

use approx::assert_relative_eq;
use proptest::prelude::*;

use robust_bspline::internals::algorithms::knots::shifted;
use robust_bspline::internals::ensemble::aggregate::shift_offsets;

#[test]
fn test_offsets_left_first() {
    // q = (1 - 0.2) / 2 = 0.4; both boundary gaps are 4
    let offsets = shift_offsets((0.0, 200.0), 4.0, 196.0, 2, 0.2);
    assert_eq!(offsets.len(), 4);
    assert_relative_eq!(offsets[0], -3.2, epsilon = 1e-12);
    assert_relative_eq!(offsets[1], -1.6, epsilon = 1e-12);
    assert_relative_eq!(offsets[2], 1.6, epsilon = 1e-12);
    assert_relative_eq!(offsets[3], 3.2, epsilon = 1e-12);
}

#[test]
fn test_offsets_use_each_boundary_gap() {
    let offsets = shift_offsets((0.0, 10.0), 1.0, 6.0, 1, 0.5);
    assert_relative_eq!(offsets[0], -0.5, epsilon = 1e-12);
    assert_relative_eq!(offsets[1], 2.0, epsilon = 1e-12);
}

#[test]
fn test_extreme_shift_leaves_proximity_gap() {
    let p = 0.001;
    let offsets = shift_offsets((0.0, 200.0), 4.0, 196.0, 3, p);
    assert_relative_eq!(4.0 + offsets[0], p * 4.0, epsilon = 1e-12);
    assert_relative_eq!(196.0 + offsets[5], 200.0 - p * 4.0, epsilon = 1e-12);
}

fn interior_knots() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01f64..0.99, 1..30).prop_map(|mut fractions| {
        fractions.sort_by(|a, b| a.partial_cmp(b).unwrap());
        fractions.dedup();
        fractions
    })
}

proptest! {
    #[test]
    fn prop_shifted_knots_stay_interior(
        fractions in interior_knots(),
        length in 10.0f64..1000.0,
        duplicates in 1usize..8,
        p in 0.001f64..0.999,
    ) {
        let knots: Vec<f64> = fractions.iter().map(|f| f * length).collect();
        let first = knots[0];
        let last = knots[knots.len() - 1];
        let offsets = shift_offsets((0.0, length), first, last, duplicates, p);

        prop_assert_eq!(offsets.len(), 2 * duplicates);
        prop_assert!(offsets[..duplicates].iter().all(|&o| o < 0.0));
        prop_assert!(offsets[duplicates..].iter().all(|&o| o > 0.0));

        for offset in offsets {
            let moved = shifted(&knots, offset);
            prop_assert!(moved.iter().all(|&k| k > 0.0 && k < length));
        }
    }
}
