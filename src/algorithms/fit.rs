//! Weighted least-squares cubic spline fitting.
//!
//! ## Purpose
//!
//! This module is the fit kernel: given samples, interior knots, per-sample
//! weights and an extrapolation policy, it produces a [`FittedSpline`] that
//! can be evaluated anywhere on the real line.
//!
//! ## Design notes
//!
//! * **Seam**: The kernel sits behind the [`SplineFitter`] trait so that models
//!   can be driven by an alternative solver.
//! * **Objective**: `Σ (w_i · (y_i − s(t_i)))²`. Weights multiply residuals, so a
//!   zero weight removes a sample from the objective but not from the domain.
//! * **Solver**: Normal equations assembled from the four non-zero basis
//!   functions per sample, solved through [`FloatLinalg::solve_normal`].
//! * **Well-posedness**: The Schoenberg–Whitney condition is checked on the
//!   positively weighted samples before solving.
//!
//! ## Invariants
//!
//! * The degree is always 3.
//! * Interior knots are strictly ascending and strictly inside `(t_0, t_{n-1})`.
//! * A fitted spline is never mutated after construction.
//!
//! ## Non-goals
//!
//! * This module does not decide weights or knot placement.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::boundary::{ExtrapolationPolicy, Resolved};
use crate::math::bspline::{self, DEGREE, ORDER};
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::SplineError;

// ============================================================================
// Fitted Spline
// ============================================================================

/// An immutable cubic spline produced by a fit kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedSpline<T> {
    knots: Vec<T>,
    coefficients: Vec<T>,
    extrapolation: ExtrapolationPolicy,
}

impl<T: FloatLinalg> FittedSpline<T> {
    /// Assemble a spline from a clamped knot vector and its coefficients.
    ///
    /// `coefficients.len()` must equal `knots.len() - 4`.
    pub fn from_parts(
        knots: Vec<T>,
        coefficients: Vec<T>,
        extrapolation: ExtrapolationPolicy,
    ) -> Result<Self, SplineError> {
        if knots.len() < 2 * ORDER || bspline::basis_count(knots.len()) != coefficients.len() {
            return Err(SplineError::InvalidKnots(format!(
                "{} knots cannot carry {} cubic coefficients",
                knots.len(),
                coefficients.len()
            )));
        }
        Ok(Self {
            knots,
            coefficients,
            extrapolation,
        })
    }

    /// Evaluate at a single point.
    pub fn evaluate_one(&self, x: T) -> Result<T, SplineError> {
        let lo = self.knots[0];
        let hi = self.knots[self.knots.len() - 1];
        match self.extrapolation.resolve(x, lo, hi) {
            Resolved::Evaluate(x) => Ok(bspline::evaluate(&self.knots, &self.coefficients, x)),
            Resolved::Value(v) => Ok(v),
            Resolved::Rejected => Err(SplineError::OutOfDomain(x.to_f64().unwrap_or(f64::NAN))),
        }
    }

    /// Evaluate at every query point.
    pub fn evaluate(&self, x: &[T]) -> Result<Vec<T>, SplineError> {
        x.iter().map(|&xi| self.evaluate_one(xi)).collect()
    }

    /// Full clamped knot vector (boundary knots repeated four times).
    pub fn knot_vector(&self) -> &[T] {
        &self.knots
    }

    /// Interior knots.
    pub fn interior_knots(&self) -> &[T] {
        &self.knots[ORDER..self.knots.len() - ORDER]
    }

    /// B-spline coefficients.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Out-of-domain policy.
    pub fn extrapolation(&self) -> ExtrapolationPolicy {
        self.extrapolation
    }

    /// Closed domain `[t_0, t_{n-1}]`.
    pub fn domain(&self) -> (T, T) {
        (self.knots[0], self.knots[self.knots.len() - 1])
    }
}

// ============================================================================
// Fitter Trait
// ============================================================================

/// A weighted least-squares cubic spline solver.
pub trait SplineFitter<T: FloatLinalg>: Debug + Send + Sync {
    /// Fit a cubic spline to `(t, y)` with the given interior knots and weights.
    fn fit(
        &self,
        t: &[T],
        y: &[T],
        interior_knots: &[T],
        weights: &[T],
        extrapolation: ExtrapolationPolicy,
    ) -> Result<FittedSpline<T>, SplineError>;
}

// ============================================================================
// Least-Squares Fitter
// ============================================================================

/// Dense normal-equation solver for cubic least-squares splines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeastSquaresFitter;

impl LeastSquaresFitter {
    /// Check the Schoenberg–Whitney condition on the positively weighted samples.
    ///
    /// Each basis function `j` must own a distinct abscissa `x` with
    /// `k_j < x < k_{j+4}`; the inequality is relaxed at the domain ends.
    pub fn check_schoenberg_whitney<T: FloatLinalg>(
        knots: &[T],
        t: &[T],
        weights: &[T],
    ) -> Result<(), SplineError> {
        let lo = knots[0];
        let hi = knots[knots.len() - 1];
        let m = bspline::basis_count(knots.len());

        let mut abscissae = t
            .iter()
            .zip(weights)
            .filter(|(_, w)| **w > T::zero())
            .map(|(&x, _)| x);

        let mut last: Option<T> = None;
        for j in 0..m {
            let left = knots[j];
            let right = knots[j + ORDER];
            let found = loop {
                match abscissae.next() {
                    None => break None,
                    Some(x) => {
                        if last.is_some_and(|l| x <= l) {
                            continue;
                        }
                        let after_left = x > left || (left == lo && x >= left);
                        if after_left {
                            break Some(x);
                        }
                    }
                }
            };

            match found {
                Some(x) if x < right || (right == hi && x <= right) => last = Some(x),
                _ => {
                    return Err(SplineError::FitSingularity(format!(
                        "interior knots do not satisfy the Schoenberg-Whitney conditions \
                         (basis function {} of {} has no supporting sample)",
                        j, m
                    )));
                }
            }
        }

        Ok(())
    }
}

impl<T: FloatLinalg> SplineFitter<T> for LeastSquaresFitter {
    fn fit(
        &self,
        t: &[T],
        y: &[T],
        interior_knots: &[T],
        weights: &[T],
        extrapolation: ExtrapolationPolicy,
    ) -> Result<FittedSpline<T>, SplineError> {
        Validator::validate_inputs(t, y)?;
        Validator::validate_weights(weights, t.len())?;

        let lo = t[0];
        let hi = t[t.len() - 1];
        Validator::validate_knots(interior_knots, lo, hi)?;

        let knots = bspline::clamped_knot_vector(lo, hi, interior_knots);
        Self::check_schoenberg_whitney(&knots, t, weights)?;

        let m = bspline::basis_count(knots.len());
        let mut normal = vec![T::zero(); m * m];
        let mut rhs = vec![T::zero(); m];

        for ((&x, &yi), &w) in t.iter().zip(y).zip(weights) {
            if w <= T::zero() {
                continue;
            }
            let w2 = w * w;
            let span = bspline::find_span(&knots, x);
            let basis = bspline::basis_values(&knots, span, x);
            let offset = span - DEGREE;

            for a in 0..ORDER {
                let wa = w2 * basis[a];
                rhs[offset + a] = rhs[offset + a] + wa * yi;
                for b in 0..ORDER {
                    let idx = (offset + a) + (offset + b) * m;
                    normal[idx] = normal[idx] + wa * basis[b];
                }
            }
        }

        let coefficients = T::solve_normal(&normal, &rhs, m).ok_or_else(|| {
            SplineError::FitSingularity("normal equations could not be solved".into())
        })?;

        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(SplineError::FitSingularity(
                "normal equations produced non-finite coefficients".into(),
            ));
        }

        FittedSpline::from_parts(knots, coefficients, extrapolation)
    }
}
