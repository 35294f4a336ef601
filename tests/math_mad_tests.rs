#![cfg(feature = "dev")]
//! Tests for the median absolute residual.
//!
//! ## Test Organization
//!
//! 1. **Basic Computation** - Odd and even lengths
//! 2. **Edge Cases** - Empty, single, NaN and zero inputs

use approx::assert_relative_eq;

use robust_bspline::internals::math::mad::{median_abs_inplace, median_inplace};

// ============================================================================
// Basic Computation Tests
// ============================================================================

#[test]
fn test_median_odd_length() {
    let mut data = [5.0, 1.0, 3.0, 2.0, 4.0];
    assert_relative_eq!(median_inplace(&mut data), 3.0);
}

#[test]
fn test_median_even_length() {
    // Two middle values 2 and 3
    let mut data = [4.0, 1.0, 3.0, 2.0];
    assert_relative_eq!(median_inplace(&mut data), 2.5);
}

#[test]
fn test_median_abs_uses_magnitudes() {
    // |r| = [3, 1, 2, 4, 0.5] -> median 2
    let mut residuals = [-3.0, 1.0, -2.0, 4.0, 0.5];
    assert_relative_eq!(median_abs_inplace(&mut residuals), 2.0);
}

#[test]
fn test_median_abs_is_not_centered() {
    // All residuals on one side: no centering, so the scale is the median magnitude
    let mut residuals = [10.0, 11.0, 12.0];
    assert_relative_eq!(median_abs_inplace(&mut residuals), 11.0);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

#[test]
fn test_median_empty_is_nan() {
    let mut data: [f64; 0] = [];
    assert!(median_abs_inplace(&mut data).is_nan());
}

#[test]
fn test_median_single_value() {
    let mut data = [-7.0];
    assert_relative_eq!(median_abs_inplace(&mut data), 7.0);
}

#[test]
fn test_median_ignores_nan() {
    let mut data = [1.0, f64::NAN, 3.0, 2.0];
    assert_relative_eq!(median_inplace(&mut data), 2.0);

    let mut only_nan = [f64::NAN, f64::NAN];
    assert!(median_inplace(&mut only_nan).is_nan());
}

#[test]
fn test_median_of_exact_fit_is_zero() {
    let mut residuals = [0.0, -0.0, 0.0, 1.0, 0.0];
    assert_relative_eq!(median_abs_inplace(&mut residuals), 0.0);
}
