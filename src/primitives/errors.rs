//! Error types for robust spline smoothing.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate: construction, fitting, refinement and aggregation.
//!
//! ## Design notes
//!
//! * **Taxonomy**: Configuration errors are raised before any fit is attempted;
//!   `FitSingularity` is produced by the fit kernel and surfaced unmodified.
//! * **no_std**: `Display` is implemented by hand; `std::error::Error` is only
//!   implemented with the `std` feature.
//!
//! ## Non-goals
//!
//! * Non-convergence of the refinement loop is not an error; it is reported
//!   through `ConvergenceRecord`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Error type for robust spline smoothing.
#[derive(Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Time or value arrays are empty.
    EmptyInput,

    /// Time and value arrays have different lengths.
    MismatchedInputs {
        /// Number of time stamps.
        t_len: usize,
        /// Number of values.
        y_len: usize,
    },

    /// A non-finite value was found where a finite one is required.
    InvalidNumericValue(String),

    /// The requested number of interior knots is zero.
    InvalidKnotCount(usize),

    /// The knot count is too large for the series: the derived sample step is zero.
    KnotSpacingTooSmall {
        /// Number of samples.
        n: usize,
        /// Requested number of knots.
        knot_count: usize,
    },

    /// Interior knots are not strictly ascending or not strictly inside the domain.
    InvalidKnots(String),

    /// Weight mask length differs from the series length.
    MismatchedWeights {
        /// Series length.
        expected: usize,
        /// Mask length.
        got: usize,
    },

    /// A weight is negative or non-finite.
    InvalidWeight(String),

    /// `max_iterations` must be positive.
    InvalidMaxIterations(usize),

    /// Ensemble duplicate count must be positive.
    InvalidDuplicates(usize),

    /// Proximity factor outside the open interval (0, 1).
    InvalidProximityFactor(f64),

    /// An operation needs at least one interior knot.
    NoInteriorKnots,

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },

    /// The weighted least-squares system is singular for the given knots and weights.
    FitSingularity(String),

    /// Evaluation outside the fitted domain under `ExtrapolationPolicy::Raise`.
    OutOfDomain(f64),
}

impl fmt::Display for SplineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { t_len, y_len } => {
                write!(f, "Length mismatch: t has {} points, y has {}", t_len, y_len)
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {}", s),
            Self::InvalidKnotCount(k) => {
                write!(f, "Invalid knot count: {} (must be at least 1)", k)
            }
            Self::KnotSpacingTooSmall { n, knot_count } => write!(
                f,
                "Knot count {} is too large for {} samples (derived step is zero)",
                knot_count, n
            ),
            Self::InvalidKnots(s) => write!(f, "Invalid knots: {}", s),
            Self::MismatchedWeights { expected, got } => write!(
                f,
                "Weight length mismatch: expected {}, got {}",
                expected, got
            ),
            Self::InvalidWeight(s) => write!(f, "Invalid weight: {}", s),
            Self::InvalidMaxIterations(m) => {
                write!(f, "Invalid max_iterations: {} (must be > 0)", m)
            }
            Self::InvalidDuplicates(d) => {
                write!(f, "Invalid duplicates: {} (must be > 0)", d)
            }
            Self::InvalidProximityFactor(p) => write!(
                f,
                "Invalid proximity factor: {} (must be > 0 and < 1)",
                p
            ),
            Self::NoInteriorKnots => write!(f, "Model has no interior knots"),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            Self::FitSingularity(s) => write!(f, "Singular spline fit: {}", s),
            Self::OutOfDomain(v) => write!(f, "Query point {} is outside the fitted domain", v),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SplineError {}
