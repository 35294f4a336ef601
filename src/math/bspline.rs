//! Cubic B-spline basis evaluation.
//!
//! ## Purpose
//!
//! This module evaluates the non-zero cubic B-spline basis functions at an
//! abscissa, for a clamped knot vector built from a domain and a set of
//! interior knots.
//!
//! ## Design notes
//!
//! * **Recurrence**: Cox–de Boor, computing only the `DEGREE + 1` non-zero
//!   functions of the knot span containing the abscissa.
//! * **Clamping**: Boundary knots are repeated `DEGREE + 1` times.
//! * **Extrapolation**: Points outside the domain use the first or last span,
//!   which continues the boundary polynomial piece.
//!
//! ## Invariants
//!
//! * Inside the domain the returned basis values are non-negative and sum to one.
//! * The full knot vector has `interior.len() + 2 * (DEGREE + 1)` entries.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

/// Spline degree. Fixed.
pub const DEGREE: usize = 3;

/// Spline order (`DEGREE + 1`).
pub const ORDER: usize = DEGREE + 1;

/// Clamped cubic knot vector over `[lo, hi]`.
pub fn clamped_knot_vector<T: Float>(lo: T, hi: T, interior: &[T]) -> Vec<T> {
    let mut knots = Vec::with_capacity(interior.len() + 2 * ORDER);
    knots.extend(core::iter::repeat(lo).take(ORDER));
    knots.extend_from_slice(interior);
    knots.extend(core::iter::repeat(hi).take(ORDER));
    knots
}

/// Number of basis functions for a clamped knot vector.
#[inline]
pub fn basis_count(knot_vector_len: usize) -> usize {
    knot_vector_len - ORDER
}

/// Index `s` of the knot span `[k_s, k_{s+1})` used to evaluate at `x`.
///
/// The result lies in `[DEGREE, basis_count - 1]`; the right boundary belongs
/// to the last span.
#[inline]
pub fn find_span<T: Float>(knots: &[T], x: T) -> usize {
    let m = basis_count(knots.len());
    let s = knots.partition_point(|&k| k <= x);
    s.saturating_sub(1).clamp(DEGREE, m - 1)
}

/// Values of the `ORDER` non-zero basis functions at `x` on span `span`.
///
/// Entry `r` belongs to basis function `span - DEGREE + r`.
#[inline]
pub fn basis_values<T: Float>(knots: &[T], span: usize, x: T) -> [T; ORDER] {
    let mut n = [T::zero(); ORDER];
    let mut left = [T::zero(); ORDER];
    let mut right = [T::zero(); ORDER];

    n[0] = T::one();
    for j in 1..ORDER {
        left[j] = x - knots[span + 1 - j];
        right[j] = knots[span + j] - x;
        let mut saved = T::zero();
        for r in 0..j {
            let temp = n[r] / (right[r + 1] + left[j - r]);
            n[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        n[j] = saved;
    }

    n
}

/// Evaluate a spline with coefficients `coeffs` at `x`.
#[inline]
pub fn evaluate<T: Float>(knots: &[T], coeffs: &[T], x: T) -> T {
    let span = find_span(knots, x);
    let basis = basis_values(knots, span, x);
    let offset = span - DEGREE;
    basis
        .iter()
        .zip(&coeffs[offset..offset + ORDER])
        .fold(T::zero(), |acc, (&b, &c)| acc + b * c)
}
