//! Extrapolation policies for evaluating a spline outside its domain.
//!
//! ## Purpose
//!
//! A least-squares spline is only determined on `[t_0, t_{n-1}]`. This module
//! decides what a query outside that interval returns.
//!
//! ## Design notes
//!
//! * **Strategy Pattern**: Uses the `ExtrapolationPolicy` enum to select the behavior.
//! * **Default**: `Constant`, i.e. the value at the nearest domain boundary.
//!
//! ## Invariants
//!
//! * Queries inside the closed domain are never altered.
//! * NaN queries are passed through to the evaluator unchanged.

use num_traits::Float;

/// Policy for queries outside the fitted domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtrapolationPolicy {
    /// Continue the boundary polynomial pieces.
    Extrapolate,

    /// Return zero outside the domain.
    Zeros,

    /// Fail with `SplineError::OutOfDomain`.
    Raise,

    /// Return the value at the nearest boundary.
    #[default]
    Constant,
}

/// Where a query lands with respect to the domain after applying a policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<T> {
    /// Evaluate the spline at this abscissa.
    Evaluate(T),
    /// Use this value directly.
    Value(T),
    /// The query is out of domain and the policy forbids it.
    Rejected,
}

impl ExtrapolationPolicy {
    /// Resolve a query point against the closed domain `[lo, hi]`.
    #[inline]
    pub fn resolve<T: Float>(&self, x: T, lo: T, hi: T) -> Resolved<T> {
        if x >= lo && x <= hi || x.is_nan() {
            return Resolved::Evaluate(x);
        }

        match self {
            Self::Extrapolate => Resolved::Evaluate(x),
            Self::Zeros => Resolved::Value(T::zero()),
            Self::Raise => Resolved::Rejected,
            Self::Constant => Resolved::Evaluate(if x < lo { lo } else { hi }),
        }
    }
}
