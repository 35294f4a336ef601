//! Input validation for spline models and their configuration.
//!
//! ## Purpose
//!
//! This module checks input series, weight masks, knot sets and the numeric
//! parameters of refinement and aggregation before any fit is attempted.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not check whether a fit is well-posed (the fit kernel does).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

use num_traits::Float;

use crate::primitives::errors::SplineError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for model configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a time series: non-empty, equal lengths, finite, `t` non-decreasing.
    pub fn validate_inputs<T: Float>(t: &[T], y: &[T]) -> Result<(), SplineError> {
        // Check 1: Non-empty arrays
        if t.is_empty() || y.is_empty() {
            return Err(SplineError::EmptyInput);
        }

        // Check 2: Matching lengths
        if t.len() != y.len() {
            return Err(SplineError::MismatchedInputs {
                t_len: t.len(),
                y_len: y.len(),
            });
        }

        // Check 3: All values finite
        for (i, &val) in t.iter().enumerate() {
            if !val.is_finite() {
                return Err(SplineError::InvalidNumericValue(format!(
                    "t[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(SplineError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Check 4: Ascending time stamps
        if let Some(i) = t.windows(2).position(|w| w[1] < w[0]) {
            return Err(SplineError::InvalidNumericValue(format!(
                "t is not ascending at index {}",
                i + 1
            )));
        }

        Ok(())
    }

    /// Validate a weight mask against the series length.
    pub fn validate_weights<T: Float>(weights: &[T], n: usize) -> Result<(), SplineError> {
        if weights.len() != n {
            return Err(SplineError::MismatchedWeights {
                expected: n,
                got: weights.len(),
            });
        }

        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < T::zero() {
                return Err(SplineError::InvalidWeight(format!(
                    "w[{}]={}",
                    i,
                    w.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate interior knots: finite, strictly ascending, strictly inside `(lo, hi)`.
    pub fn validate_knots<T: Float>(knots: &[T], lo: T, hi: T) -> Result<(), SplineError> {
        for (i, &k) in knots.iter().enumerate() {
            if !k.is_finite() || k <= lo || k >= hi {
                return Err(SplineError::InvalidKnots(format!(
                    "knot[{}]={} is not strictly inside ({}, {})",
                    i,
                    k.to_f64().unwrap_or(f64::NAN),
                    lo.to_f64().unwrap_or(f64::NAN),
                    hi.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        if let Some(i) = knots.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SplineError::InvalidKnots(format!(
                "knots are not strictly ascending at index {}",
                i + 1
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the refinement iteration limit.
    pub fn validate_max_iterations(max_iterations: usize) -> Result<(), SplineError> {
        if max_iterations == 0 {
            return Err(SplineError::InvalidMaxIterations(max_iterations));
        }
        Ok(())
    }

    /// Validate the number of shifted copies per side.
    pub fn validate_duplicates(duplicates: usize) -> Result<(), SplineError> {
        if duplicates == 0 {
            return Err(SplineError::InvalidDuplicates(duplicates));
        }
        Ok(())
    }

    /// Validate the proximity factor, which must lie in (0, 1).
    pub fn validate_proximity_factor<T: Float>(p: T) -> Result<(), SplineError> {
        if !p.is_finite() || p <= T::zero() || p >= T::one() {
            return Err(SplineError::InvalidProximityFactor(
                p.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Fail if the builder saw the same parameter twice.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SplineError> {
        if let Some(parameter) = duplicate_param {
            return Err(SplineError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
