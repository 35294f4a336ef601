//! Linear algebra backend for the spline normal equations.
//!
//! ## Purpose
//!
//! This module bridges generic `Float` types to nalgebra for solving the
//! banded-but-small normal equations `BᵀW²B c = BᵀW²y` of a least-squares
//! spline fit.
//!
//! ## Design notes
//!
//! * Uses QR decomposition (Householder reflections) for numerical stability.
//! * Falls back to SVD when QR reports a singular triangular factor.
//! * Rank deficiency caused by knot placement is detected before solving, by
//!   the fit kernel's Schoenberg–Whitney check.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Debug + Send + Sync + 'static {
    /// Solve the `n x n` column-major system `a * x = b`.
    fn solve_normal(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_normal(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_normal_equations_f64(a, b, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_normal(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_normal_equations_f32(a, b, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Solve normal equations using f64 precision.
    pub fn solve_normal_equations_f64(
        normal: &[f64],
        rhs: &[f64],
        n_coeffs: usize,
    ) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_column_slice(n_coeffs, n_coeffs, normal);
        let rhs = DVector::from_column_slice(rhs);

        let qr = matrix.clone().qr();
        if let Some(solution) = qr.solve(&rhs) {
            if solution.iter().all(|v| v.is_finite()) {
                return Some(solution.as_slice().to_vec());
            }
        }

        matrix
            .svd(true, true)
            .solve(&rhs, f64::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f64>| s.as_slice().to_vec())
    }

    /// Solve normal equations using f32 precision.
    pub fn solve_normal_equations_f32(
        normal: &[f32],
        rhs: &[f32],
        n_coeffs: usize,
    ) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_column_slice(n_coeffs, n_coeffs, normal);
        let rhs = DVector::from_column_slice(rhs);

        let qr = matrix.clone().qr();
        if let Some(solution) = qr.solve(&rhs) {
            if solution.iter().all(|v| v.is_finite()) {
                return Some(solution.as_slice().to_vec());
            }
        }

        matrix
            .svd(true, true)
            .solve(&rhs, f32::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f32>| s.as_slice().to_vec())
    }
}
