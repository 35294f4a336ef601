//! Interior knot placement, pruning and shifting.
//!
//! ## Purpose
//!
//! This module derives the knot sets a model is built with:
//! - Evenly spaced knots taken from the sample grid
//! - Pruned knots that drop positions inside masked-out runs
//! - Rigidly shifted knots for ensemble members
//!
//! ## Invariants
//!
//! * Every function returns a new knot vector; inputs are never modified.
//! * Pruning never adds knots and preserves the order of retained ones.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::ops::Range;
use num_traits::Float;

use crate::primitives::errors::SplineError;

/// Pick every `N`-th sample, `N = n / knot_count`, starting at `max(N / 2, 1)`.
///
/// Samples that are not strictly inside `(t_0, t_{n-1})`, or that repeat the
/// previous knot, are skipped so that the result is a valid interior knot set.
pub fn evenly_spaced<T: Float>(t: &[T], knot_count: usize) -> Result<Vec<T>, SplineError> {
    if knot_count == 0 {
        return Err(SplineError::InvalidKnotCount(knot_count));
    }

    let n = t.len();
    let step = n / knot_count;
    if step == 0 {
        return Err(SplineError::KnotSpacingTooSmall { n, knot_count });
    }

    let lo = t[0];
    let hi = t[n - 1];
    let mut knots: Vec<T> = Vec::with_capacity(n / step + 1);
    for &candidate in t.iter().skip((step / 2).max(1)).step_by(step) {
        let interior = candidate > lo && candidate < hi;
        let advances = knots.last().is_none_or(|&last| candidate > last);
        if interior && advances {
            knots.push(candidate);
        }
    }

    Ok(knots)
}

/// Drop every knot lying strictly inside `(t[run.start], t[run.end - 1])` of any run.
pub fn prune_in_runs<T: Float>(knots: &[T], t: &[T], runs: &[Range<usize>]) -> Vec<T> {
    knots
        .iter()
        .copied()
        .filter(|&knot| {
            !runs.iter().any(|run| {
                let span_lo = t[run.start];
                let span_hi = t[run.end - 1];
                span_lo < knot && knot < span_hi
            })
        })
        .collect()
}

/// Translate every knot by `offset`.
pub fn shifted<T: Float>(knots: &[T], offset: T) -> Vec<T> {
    knots.iter().map(|&k| k + offset).collect()
}
