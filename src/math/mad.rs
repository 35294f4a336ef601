//! Median absolute residual for robust scale estimation.
//!
//! ## Purpose
//!
//! This module computes the robust spread used by the default inlier criterion:
//! the median of the absolute residuals over the current inliers.
//!
//! ## Design notes
//!
//! * **Algorithm**: Uses Quickselect (`select_nth_unstable_by`) for O(n) median finding.
//! * **Memory**: Works in-place on a caller-provided buffer.
//!
//! ## Invariants
//!
//! * The result is >= 0 for any non-empty input.
//! * Even-length inputs average the two middle values.
//! * An empty input yields NaN (no inliers, no scale).
//!
//! ## Non-goals
//!
//! * This module does not center the residuals before taking absolute values;
//!   residuals are already deviations from the fitted curve.

use core::cmp::Ordering::Equal;
use num_traits::Float;

// ============================================================================
// Median Absolute Residual
// ============================================================================

/// Median of `|r_i|`, computed in-place.
///
/// # Formula
///
/// ```text
/// scale = median(|r_i|)
/// ```
///
/// # Safety
///
/// This function modifies the provided `vals` slice.
#[inline]
pub fn median_abs_inplace<T: Float>(vals: &mut [T]) -> T {
    for val in vals.iter_mut() {
        *val = val.abs();
    }
    median_inplace(vals)
}

/// Median computed in-place using Quickselect.
///
/// NaN entries are ignored; returns NaN when nothing remains.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    // Move NaNs to the tail and work on the finite prefix.
    let mut len = 0;
    for i in 0..vals.len() {
        if !vals[i].is_nan() {
            vals.swap(len, i);
            len += 1;
        }
    }
    let vals = &mut vals[..len];

    let n = vals.len();
    if n == 0 {
        return T::nan();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 0 {
        // Largest value of the lower half
        let lower = vals[..mid].iter().copied().fold(T::neg_infinity(), T::max);
        (lower + upper) / (T::one() + T::one())
    } else {
        upper
    }
}
