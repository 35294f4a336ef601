//! Weight-mask helpers.
//!
//! A weight mask holds one non-negative weight per sample. It doubles as the
//! inlier indicator: a sample is an inlier exactly when its weight is non-zero.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

/// Boolean view of a weight mask (`true` = inlier).
pub fn inliers<T: Float>(weights: &[T]) -> Vec<bool> {
    weights.iter().map(|w| !w.is_zero()).collect()
}

/// 0/1 weight mask from a boolean inlier mask.
pub fn weights_from_mask<T: Float>(mask: &[bool]) -> Vec<T> {
    mask.iter()
        .map(|&keep| if keep { T::one() } else { T::zero() })
        .collect()
}

/// Number of inliers in a weight mask.
pub fn count_inliers<T: Float>(weights: &[T]) -> usize {
    weights.iter().filter(|w| !w.is_zero()).count()
}

/// Hamming distance between two equal-length boolean sequences.
///
/// Positions beyond the shorter sequence are not compared.
pub fn hamming(a: &[bool], b: &[bool]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Elementwise logical AND of `other` into `acc`.
pub fn and_assign(acc: &mut [bool], other: &[bool]) {
    for (a, &b) in acc.iter_mut().zip(other) {
        *a = *a && b;
    }
}
