//! # Robust cubic B-spline smoothing
//!
//! Smooths a noisy time series that is contaminated by sparse outliers. A
//! cubic least-squares spline is fitted, samples that deviate too far from it
//! are masked out, and the fit is repeated until the mask stops changing. A
//! consensus over several shifted knot placements can then be used to remove
//! the dependence of the result on where the knots fall.
//!
//! ## How it works
//!
//! 1. Place interior knots every `N = n / knot_count` samples.
//! 2. Fit a weighted least-squares cubic spline (weights are 0/1 masks).
//! 3. Measure residuals in units of the median absolute residual over the
//!    current inliers, and keep samples inside an asymmetric band
//!    (`-10 <= r / scale <= 4` by default).
//! 4. Commit the new mask and refit until it differs from the previous one in
//!    at most `target_distance` positions.
//! 5. Optionally drop knots inside masked-out runs (`cure_knots`) and build a
//!    knot-shift consensus (`knot_shift_aggregate`).
//!
//! ## Quick Start
//!
//! ```rust
//! use robust_bspline::prelude::*;
//!
//! // Smooth signal with bounded pseudo-random noise and one spike
//! let noise = |i: usize| 0.1 * ((i as f64 * 12.9898).sin() * 43758.5453).fract();
//! let t: Vec<f64> = (0..200).map(|i| i as f64).collect();
//! let mut y: Vec<f64> = t.iter().enumerate().map(|(i, &x)| (x / 15.0).sin() + noise(i)).collect();
//! y[120] += 1.0;
//!
//! let mut model = RobustSpline::new().knot_count(20).fit(&t, &y)?;
//! // Require an exact fixed point: a lone spike is a one-sample mask change
//! let record = model.refine(RefineOptions::new().target_distance(0))?;
//!
//! println!("{}", record);
//! assert!(!model.inlier_mask()[120]);
//! # Result::<(), SplineError>::Ok(())
//! ```
//!
//! ### Knot-shift consensus
//!
//! ```rust
//! use robust_bspline::prelude::*;
//!
//! # let noise = |i: usize| 0.1 * ((i as f64 * 12.9898).sin() * 43758.5453).fract();
//! let t: Vec<f64> = (0..200).map(|i| i as f64).collect();
//! let mut y: Vec<f64> = t.iter().enumerate().map(|(i, &x)| (x / 15.0).sin() + noise(i)).collect();
//! y[60] += 1.0;
//!
//! let options = RefineOptions::new().target_distance(0);
//! let mut base = RobustSpline::new().fit(&t, &y)?;
//! base.refine(options)?;
//!
//! let aggregate = base.knot_shift_aggregate(&KnotShift::new().duplicates(2), options)?;
//!
//! assert_eq!(aggregate.members.len(), 4);
//! assert!(!aggregate.model.inlier_mask()[60]);
//! # Result::<(), SplineError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter              | Default          | Description                                        |
//! |------------------------|------------------|----------------------------------------------------|
//! | **knot_count**         | 23               | Target number of evenly placed interior knots      |
//! | **knots**              | None             | Explicit interior knots (overrides `knot_count`)   |
//! | **weights**            | all ones         | Initial weight mask                                |
//! | **extrapolation**      | `Constant`       | `Extrapolate`, `Zeros`, `Raise`, `Constant`        |
//! | **inlier_criterion**   | `AsymmetricMad`  | Pluggable `classify(t, y) -> mask` strategy        |
//! | **target_distance**    | 1                | Mask Hamming distance accepted as convergence      |
//! | **max_iterations**     | 50               | Committed mask replacements before giving up       |
//! | **duplicates**         | 3                | Shifted knot sets per side in the consensus        |
//! | **proximity_factor**   | 0.001            | Minimum remaining fraction of the boundary gap     |
//!
//! ## Convergence
//!
//! `refine` returns a [`ConvergenceRecord`](prelude::ConvergenceRecord). Running
//! out of iterations is a status, not an error. On convergence the last
//! candidate mask is *not* committed: the model keeps the mask committed by the
//! previous iteration, which may differ from the candidate in up to
//! `target_distance` positions. With the default tolerance of 1, a series whose
//! only outlier is a single sample converges immediately and keeps that sample;
//! use `target_distance(0)` to commit every change.
//!
//! ## Features
//!
//! * `std` (default): standard library support. Without it the crate is `no_std` + `alloc`.
//! * `parallel`: ensemble members are fitted as independent rayon tasks.
//! * `serde`: `Serialize`/`Deserialize` for configuration and record types.
//! * `dev`: exposes the internal layers through `internals` for testing.
//!
//! ## Logging
//!
//! Progress is reported through the `log` facade (`debug!` per refinement
//! iteration and ensemble member, `warn!` on non-convergence). Install any
//! logger to see it.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, the shared time series, weight-mask helpers and
// the outlier run scanner.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the cubic B-spline basis, the nalgebra solver bridge, the median
// absolute residual and extrapolation policies.
mod math;

// Layer 3: Algorithms - building blocks of a robust fit.
//
// Contains the least-squares fit kernel, knot placement and the inlier criteria.
mod algorithms;

// Layer 4: Engine - a single robust fit.
//
// Contains the spline model state machine, validation and convergence records.
mod engine;

// Layer 5: Ensemble - consensus over shifted knot placements.
mod ensemble;

// High-level fluent API.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use robust_bspline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        AggregateOutput, AsymmetricMad, ConvergenceRecord, ConvergenceStatus,
        ExtrapolationPolicy, FitSettings, FitView, FittedSpline, FloatLinalg, InlierCriterion,
        KnotShift, LeastSquaresFitter, RefineOptions, SplineError, SplineFitter,
        SplineModel, SplineModelBuilder as RobustSpline, TimeSeries,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal ensemble aggregation.
    pub mod ensemble {
        pub use crate::ensemble::*;
    }
    /// Public API.
    pub mod api {
        pub use crate::api::*;
    }
}
