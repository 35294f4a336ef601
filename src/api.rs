//! High-level API for robust spline smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder that collects the construction parameters of a
//! [`SplineModel`] and performs the initial fit.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.fit()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SplineModelBuilder`] via `RobustSpline::new()`.
//! 2. Chain configuration methods (`.knot_count()`, `.extrapolation()`, etc.).
//! 3. Call `.fit(&t, &y)` to obtain an initially fitted model.
//! 4. Call `refine`, `cure_knots` or `knot_shift_aggregate` on the model.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::sync::Arc;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::fit::{FittedSpline, LeastSquaresFitter, SplineFitter};
pub use crate::algorithms::robustness::{AsymmetricMad, FitView, InlierCriterion};
pub use crate::engine::model::{FitSettings, RefineOptions, SplineModel};
pub use crate::engine::output::{ConvergenceRecord, ConvergenceStatus};
pub use crate::ensemble::aggregate::{AggregateOutput, KnotShift};
pub use crate::math::boundary::ExtrapolationPolicy;
pub use crate::math::linalg::FloatLinalg;
pub use crate::primitives::errors::SplineError;
pub use crate::primitives::series::TimeSeries;

/// Fluent builder for robust spline models.
#[derive(Debug, Clone)]
pub struct SplineModelBuilder<T: FloatLinalg> {
    /// Target number of evenly placed interior knots (default: 23).
    pub knot_count: Option<usize>,

    /// Explicit interior knots; takes precedence over `knot_count`.
    pub knots: Option<Vec<T>>,

    /// Initial weight mask (default: all ones).
    pub weights: Option<Vec<T>>,

    /// Out-of-domain policy (default: `Constant`).
    pub extrapolation: Option<ExtrapolationPolicy>,

    /// Inlier criterion (default: `AsymmetricMad` with bounds -10 / +4).
    pub criterion: Option<Arc<dyn InlierCriterion<T>>>,

    /// Fit kernel (default: `LeastSquaresFitter`).
    pub fitter: Option<Arc<dyn SplineFitter<T>>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for SplineModelBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> SplineModelBuilder<T> {
    /// Default number of interior knots.
    pub const DEFAULT_KNOT_COUNT: usize = 23;

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            knot_count: None,
            knots: None,
            weights: None,
            extrapolation: None,
            criterion: None,
            fitter: None,
            duplicate_param: None,
        }
    }

    /// Set the target number of evenly placed interior knots.
    pub fn knot_count(mut self, knot_count: usize) -> Self {
        if self.knot_count.is_some() {
            self.duplicate_param = Some("knot_count");
        }
        self.knot_count = Some(knot_count);
        self
    }

    /// Use these interior knots verbatim (boundary knots must be omitted).
    pub fn knots(mut self, knots: Vec<T>) -> Self {
        if self.knots.is_some() {
            self.duplicate_param = Some("knots");
        }
        self.knots = Some(knots);
        self
    }

    /// Set the initial weight mask.
    pub fn weights(mut self, weights: Vec<T>) -> Self {
        if self.weights.is_some() {
            self.duplicate_param = Some("weights");
        }
        self.weights = Some(weights);
        self
    }

    /// Set the out-of-domain evaluation policy.
    pub fn extrapolation(mut self, policy: ExtrapolationPolicy) -> Self {
        if self.extrapolation.is_some() {
            self.duplicate_param = Some("extrapolation");
        }
        self.extrapolation = Some(policy);
        self
    }

    /// Set the inlier criterion.
    pub fn inlier_criterion(mut self, criterion: Arc<dyn InlierCriterion<T>>) -> Self {
        if self.criterion.is_some() {
            self.duplicate_param = Some("inlier_criterion");
        }
        self.criterion = Some(criterion);
        self
    }

    /// Set the fit kernel.
    pub fn fitter(mut self, fitter: Arc<dyn SplineFitter<T>>) -> Self {
        if self.fitter.is_some() {
            self.duplicate_param = Some("fitter");
        }
        self.fitter = Some(fitter);
        self
    }

    /// Fit settings implied by this builder.
    pub fn settings(&self) -> FitSettings<T> {
        let defaults = FitSettings::default();
        FitSettings {
            extrapolation: self.extrapolation.unwrap_or(defaults.extrapolation),
            criterion: self.criterion.clone().unwrap_or(defaults.criterion),
            fitter: self.fitter.clone().unwrap_or(defaults.fitter),
        }
    }

    /// Validate the configuration and fit a model to `(t, y)`.
    pub fn fit(self, t: &[T], y: &[T]) -> Result<SplineModel<T>, SplineError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let settings = self.settings();
        let series = TimeSeries::new(t, y)?;

        match self.knots {
            Some(knots) => SplineModel::with_knots(series, knots, self.weights, settings),
            None => SplineModel::with_knot_count(
                series,
                self.knot_count.unwrap_or(Self::DEFAULT_KNOT_COUNT),
                self.weights,
                settings,
            ),
        }
    }
}
