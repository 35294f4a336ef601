#![cfg(feature = "dev")]
//! Tests for knot placement, pruning and shifting.

use approx::assert_relative_eq;

use robust_bspline::internals::algorithms::knots::{evenly_spaced, prune_in_runs, shifted};
use robust_bspline::internals::primitives::errors::SplineError;

fn grid(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

// ============================================================================
// Evenly Spaced Knots
// ============================================================================

#[test]
fn test_default_knot_count_on_200_samples() {
    // N = 200 / 23 = 8, starting at index 4
    let t = grid(200);
    let knots = evenly_spaced(&t, 23).unwrap();
    assert_eq!(knots.len(), 25);
    assert_eq!(knots[0], 4.0);
    assert_eq!(knots[1], 12.0);
    assert_eq!(*knots.last().unwrap(), 196.0);
}

#[test]
fn test_boundary_candidates_are_dropped() {
    // N = 1: the start index is clamped to 1 and the last sample is not interior
    let t = grid(5);
    assert_eq!(evenly_spaced(&t, 4).unwrap(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_repeated_time_stamps_are_skipped() {
    let t = [0.0, 1.0, 1.0, 1.0, 2.0, 3.0, 4.0];
    // N = 1, candidates t[1..]
    assert_eq!(evenly_spaced(&t, 7).unwrap(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_knot_count_errors() {
    let t = grid(10);
    assert_eq!(evenly_spaced(&t, 0), Err(SplineError::InvalidKnotCount(0)));
    assert_eq!(
        evenly_spaced(&t, 11),
        Err(SplineError::KnotSpacingTooSmall {
            n: 10,
            knot_count: 11
        })
    );
}

// ============================================================================
// Pruning
// ============================================================================

#[test]
fn test_prune_drops_knots_inside_runs() {
    let t = grid(101);
    let knots: Vec<f64> = (1..10).map(|i| i as f64 * 10.0).collect();
    let pruned = prune_in_runs(&knots, &t, &[42..59]);
    assert_eq!(
        pruned,
        vec![10.0, 20.0, 30.0, 40.0, 60.0, 70.0, 80.0, 90.0]
    );
}

#[test]
fn test_prune_keeps_knots_on_run_edges() {
    let t = grid(101);
    let knots = vec![40.0, 50.0, 60.0];
    // Span is [40, 60]; only strictly interior knots are removed
    assert_eq!(prune_in_runs(&knots, &t, &[40..61]), vec![40.0, 60.0]);
}

#[test]
fn test_prune_single_sample_run_is_noop() {
    let t = grid(20);
    let knots = vec![5.0, 10.0, 15.0];
    assert_eq!(prune_in_runs(&knots, &t, &[10..11]), knots);
}

#[test]
fn test_prune_multiple_runs() {
    let t = grid(100);
    let knots = vec![10.0, 20.0, 30.0, 40.0];
    assert_eq!(prune_in_runs(&knots, &t, &[8..13, 35..46]), vec![20.0, 30.0]);
}

// ============================================================================
// Shifting
// ============================================================================

#[test]
fn test_shifted() {
    let knots = [1.0, 2.0, 4.0];
    let moved = shifted(&knots, -0.25);
    assert_relative_eq!(moved[0], 0.75);
    assert_relative_eq!(moved[1], 1.75);
    assert_relative_eq!(moved[2], 3.75);
    // Input untouched
    assert_eq!(knots, [1.0, 2.0, 4.0]);
}
