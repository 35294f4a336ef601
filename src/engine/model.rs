//! Robust cubic spline model with iterative outlier masking.
//!
//! ## Purpose
//!
//! This module owns the state of one robust spline fit: the time series, a
//! fixed interior knot set, the current weight mask and the spline fitted with
//! that mask. It exposes evaluation, inlier classification, the refinement
//! loop and knot pruning.
//!
//! ## Design notes
//!
//! * **Single mutation point**: `replace_mask` is the only operation that changes
//!   an existing model. It refits, recomputes in-sample predictions and
//!   invalidates the residual-scale cache.
//! * **Derived models**: `cure_knots` (and ensemble aggregation) never touch the
//!   receiver; they build new models sharing the same series storage.
//! * **Refinement**: Classify against the current fit, measure the Hamming
//!   distance to the committed mask, commit and repeat until the distance is
//!   within tolerance or the iteration limit is exhausted. On convergence the
//!   final candidate is not committed, so the committed mask may trail it by
//!   up to `target_distance` samples.
//!
//! ## Invariants
//!
//! * `weights.len() == series.len()` at all times.
//! * Knots are strictly ascending and strictly interior for the model's lifetime.
//! * The cached scale is valid iff no mask replacement happened since it was computed.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec, vec::Vec};
#[cfg(feature = "std")]
use std::sync::Arc;

use core::fmt;
use core::ops::Range;
use log::{debug, warn};

// Internal dependencies
use crate::algorithms::fit::{FittedSpline, LeastSquaresFitter, SplineFitter};
use crate::algorithms::knots;
use crate::algorithms::robustness::{AsymmetricMad, FitView, InlierCriterion, ResidualScaleCache};
use crate::engine::output::{ConvergenceRecord, ConvergenceStatus};
use crate::engine::validator::Validator;
use crate::math::boundary::ExtrapolationPolicy;
use crate::math::linalg::FloatLinalg;
use crate::math::mad;
use crate::primitives::errors::SplineError;
use crate::primitives::mask;
use crate::primitives::runs::RunEncoder;
use crate::primitives::series::TimeSeries;

// ============================================================================
// Configuration
// ============================================================================

/// Fit configuration carried by a model and forwarded to every model derived from it.
#[derive(Debug, Clone)]
pub struct FitSettings<T: FloatLinalg> {
    /// Out-of-domain evaluation policy.
    pub extrapolation: ExtrapolationPolicy,

    /// Inlier predicate used by `classify` and `refine`.
    pub criterion: Arc<dyn InlierCriterion<T>>,

    /// Weighted least-squares kernel.
    pub fitter: Arc<dyn SplineFitter<T>>,
}

impl<T: FloatLinalg> Default for FitSettings<T> {
    fn default() -> Self {
        Self {
            extrapolation: ExtrapolationPolicy::default(),
            criterion: Arc::new(AsymmetricMad::default()),
            fitter: Arc::new(LeastSquaresFitter),
        }
    }
}

/// Parameters of the refinement loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefineOptions {
    /// Hamming distance at or below which the loop stops.
    pub target_distance: usize,

    /// Maximum number of committed mask replacements.
    pub max_iterations: usize,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            target_distance: 1,
            max_iterations: 50,
        }
    }
}

impl RefineOptions {
    /// Default options (`target_distance = 1`, `max_iterations = 50`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the convergence tolerance.
    pub fn target_distance(mut self, target_distance: usize) -> Self {
        self.target_distance = target_distance;
        self
    }

    /// Set the iteration limit.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

// ============================================================================
// Spline Model
// ============================================================================

/// A cubic least-squares spline with a mutable inlier mask.
#[derive(Debug, Clone)]
pub struct SplineModel<T: FloatLinalg> {
    series: TimeSeries<T>,
    knots: Vec<T>,
    weights: Vec<T>,
    initial_weights: Vec<T>,
    settings: FitSettings<T>,
    fitted: FittedSpline<T>,
    predictions: Vec<T>,
    scale: ResidualScaleCache<T>,
}

impl<T: FloatLinalg> SplineModel<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a model on explicit interior knots and fit it.
    ///
    /// `weights` defaults to all ones.
    pub fn with_knots(
        series: TimeSeries<T>,
        knots: Vec<T>,
        weights: Option<Vec<T>>,
        settings: FitSettings<T>,
    ) -> Result<Self, SplineError> {
        let n = series.len();
        Validator::validate_knots(&knots, series.start(), series.end())?;

        let weights = weights.unwrap_or_else(|| vec![T::one(); n]);
        Validator::validate_weights(&weights, n)?;

        let fitted = settings.fitter.fit(
            series.t(),
            series.y(),
            &knots,
            &weights,
            settings.extrapolation,
        )?;
        let predictions = fitted.evaluate(series.t())?;

        Ok(Self {
            series,
            knots,
            initial_weights: weights.clone(),
            weights,
            settings,
            fitted,
            predictions,
            scale: ResidualScaleCache::new(),
        })
    }

    /// Build a model with roughly `knot_count` knots taken evenly from the sample grid.
    pub fn with_knot_count(
        series: TimeSeries<T>,
        knot_count: usize,
        weights: Option<Vec<T>>,
        settings: FitSettings<T>,
    ) -> Result<Self, SplineError> {
        let knots = knots::evenly_spaced(series.t(), knot_count)?;
        Self::with_knots(series, knots, weights, settings)
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate the current fit at arbitrary points.
    pub fn evaluate(&self, t: &[T]) -> Result<Vec<T>, SplineError> {
        self.fitted.evaluate(t)
    }

    /// Evaluate the current fit at one point.
    pub fn evaluate_one(&self, t: T) -> Result<T, SplineError> {
        self.fitted.evaluate_one(t)
    }

    /// Inlier mask of `(t, y)` under the model's criterion and current fit.
    pub fn classify(&self, t: &[T], y: &[T]) -> Result<Vec<bool>, SplineError> {
        if t.len() != y.len() {
            return Err(SplineError::MismatchedInputs {
                t_len: t.len(),
                y_len: y.len(),
            });
        }
        self.settings.criterion.classify(self, t, y)
    }

    // ========================================================================
    // State Transitions
    // ========================================================================

    /// Replace the weight mask and refit.
    ///
    /// On error the model is left unchanged.
    pub fn replace_mask(&mut self, weights: Vec<T>) -> Result<(), SplineError> {
        Validator::validate_weights(&weights, self.series.len())?;

        let fitted = self.settings.fitter.fit(
            self.series.t(),
            self.series.y(),
            &self.knots,
            &weights,
            self.settings.extrapolation,
        )?;
        let predictions = fitted.evaluate(self.series.t())?;

        self.weights = weights;
        self.fitted = fitted;
        self.predictions = predictions;
        self.scale.invalidate();
        Ok(())
    }

    /// Iteratively mask outliers until the mask stabilises.
    ///
    /// At most `max_iterations + 1` classifications are performed. Running out
    /// of iterations is reported in the record, not as an error.
    pub fn refine(&mut self, options: RefineOptions) -> Result<ConvergenceRecord, SplineError> {
        Validator::validate_max_iterations(options.max_iterations)?;

        let mut iteration = 0;
        let mut distance = 0;
        while iteration <= options.max_iterations {
            let candidate = self.classify(self.series.t(), self.series.y())?;
            distance = mask::hamming(&candidate, &self.inlier_mask());

            debug!(
                "refine: iteration={} distance={} inliers={}/{}",
                iteration,
                distance,
                candidate.iter().filter(|&&keep| keep).count(),
                candidate.len()
            );

            if distance <= options.target_distance {
                return Ok(ConvergenceRecord::new(
                    ConvergenceStatus::Converged,
                    iteration,
                    distance,
                ));
            }

            self.replace_mask(mask::weights_from_mask(&candidate))?;
            iteration += 1;
        }

        warn!(
            "refine: no convergence after {} iterations (distance={}, target={})",
            options.max_iterations, distance, options.target_distance
        );
        Ok(ConvergenceRecord::new(
            ConvergenceStatus::MaxIterationsExceeded,
            iteration,
            distance,
        ))
    }

    /// New model with the knots inside masked-out runs removed, refitted on the current mask.
    pub fn cure_knots(&self) -> Result<Self, SplineError> {
        let runs = self.outlier_runs();
        let pruned = knots::prune_in_runs(&self.knots, self.series.t(), &runs);

        debug!(
            "cure_knots: {} outlier runs, {} -> {} knots",
            runs.len(),
            self.knots.len(),
            pruned.len()
        );

        Self::with_knots(
            self.series.clone(),
            pruned,
            Some(self.weights.clone()),
            self.settings.clone(),
        )
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Underlying time series.
    pub fn series(&self) -> &TimeSeries<T> {
        &self.series
    }

    /// Time stamps.
    pub fn t(&self) -> &[T] {
        self.series.t()
    }

    /// Sample values.
    pub fn y(&self) -> &[T] {
        self.series.y()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Always `false` for a constructed model.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Interior knots.
    pub fn knots(&self) -> &[T] {
        &self.knots
    }

    /// Committed weight mask.
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Weight mask the model was constructed with.
    pub fn initial_weights(&self) -> &[T] {
        &self.initial_weights
    }

    /// Boolean view of the committed mask (`true` = inlier).
    pub fn inlier_mask(&self) -> Vec<bool> {
        mask::inliers(&self.weights)
    }

    /// Number of samples with non-zero weight.
    pub fn inlier_count(&self) -> usize {
        mask::count_inliers(&self.weights)
    }

    /// Maximal runs of masked-out samples in the committed mask.
    pub fn outlier_runs(&self) -> Vec<Range<usize>> {
        RunEncoder::outlier_runs(&self.inlier_mask())
    }

    /// Fitted values at the sample time stamps.
    pub fn predictions(&self) -> &[T] {
        &self.predictions
    }

    /// Current fitted spline.
    pub fn fitted(&self) -> &FittedSpline<T> {
        &self.fitted
    }

    /// Fit configuration.
    pub fn settings(&self) -> &FitSettings<T> {
        &self.settings
    }

    /// Whether the residual scale is currently cached.
    pub fn scale_is_cached(&self) -> bool {
        self.scale.is_valid()
    }

    fn compute_residual_scale(&self) -> T {
        let mut residuals: Vec<T> = self
            .series
            .y()
            .iter()
            .zip(&self.predictions)
            .zip(&self.weights)
            .filter(|(_, w)| !w.is_zero())
            .map(|((&y, &p), _)| y - p)
            .collect();
        mad::median_abs_inplace(&mut residuals)
    }
}

impl<T: FloatLinalg> FitView<T> for SplineModel<T> {
    fn predict(&self, t: &[T]) -> Result<Vec<T>, SplineError> {
        self.evaluate(t)
    }

    fn residual_scale(&self) -> T {
        self.scale.value_or_compute(|| self.compute_residual_scale())
    }
}

impl<T: FloatLinalg> fmt::Display for SplineModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f, "  Interior knots: {}", self.knots.len())?;
        writeln!(f, "  Inliers: {}", self.inlier_count())?;
        write!(f, "  Extrapolation: {:?}", self.settings.extrapolation)
    }
}
