//! Inlier classification for iterative outlier masking.
//!
//! ## Purpose
//!
//! This module decides, sample by sample, whether a point is an inlier of the
//! current fit. The refinement loop turns these decisions into the next weight
//! mask.
//!
//! ## Design notes
//!
//! * **Strategy**: Criteria implement [`InlierCriterion`] and are injected into
//!   a model; the refinement loop never looks at their internals.
//! * **Scale**: The default criterion measures residuals in units of the median
//!   absolute residual over the current inliers, which the model caches in a
//!   [`ResidualScaleCache`].
//! * **Asymmetry**: The default band tolerates deep dips (10 scale units below
//!   the curve) but only modest spikes (4 units above).
//!
//! ## Invariants
//!
//! * A cached scale is valid iff the weight mask has not been replaced since it
//!   was computed.
//! * A zero or NaN scale rejects every sample: `0 / 0` is NaN and fails the band test.
//! * Criteria are read-only with respect to the model.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;

use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::SplineError;

// ============================================================================
// Residual Scale Cache
// ============================================================================

// Thread-safe write-once slot with `std`; single-threaded without it.
#[cfg(feature = "std")]
type Slot<T> = std::sync::OnceLock<T>;
#[cfg(not(feature = "std"))]
type Slot<T> = core::cell::OnceCell<T>;

/// Invalidate-on-write cache for the residual scale of a fit.
///
/// With the `std` feature the cache is `Sync`, so a model can be shared
/// across threads for read-only queries; the first reader computes the value.
/// Invalidation needs exclusive access and only happens on mask replacement.
#[derive(Debug, Clone, Default)]
pub struct ResidualScaleCache<T> {
    value: Slot<T>,
}

impl<T: Copy> ResidualScaleCache<T> {
    /// An empty (invalid) cache.
    pub fn new() -> Self {
        Self { value: Slot::new() }
    }

    /// Drop the cached value.
    #[inline]
    pub fn invalidate(&mut self) {
        self.value.take();
    }

    /// Whether a value is cached.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.value.get().is_some()
    }

    /// Return the cached value, computing and storing it first if needed.
    #[inline]
    pub fn value_or_compute<F: FnOnce() -> T>(&self, compute: F) -> T {
        *self.value.get_or_init(compute)
    }
}

// ============================================================================
// Criterion Trait
// ============================================================================

/// Read-only view of a fit, as seen by an inlier criterion.
pub trait FitView<T: FloatLinalg> {
    /// Evaluate the current fit at arbitrary points.
    fn predict(&self, t: &[T]) -> Result<Vec<T>, SplineError>;

    /// Median absolute residual over the current inliers (cached).
    fn residual_scale(&self) -> T;
}

/// A pluggable inlier predicate: `classify(t, y) -> mask`.
pub trait InlierCriterion<T: FloatLinalg>: Debug + Send + Sync {
    /// Return `true` for every `(t_i, y_i)` considered an inlier of `fit`.
    fn classify(&self, fit: &dyn FitView<T>, t: &[T], y: &[T]) -> Result<Vec<bool>, SplineError>;
}

// ============================================================================
// Asymmetric MAD Band
// ============================================================================

/// Keep samples with `lower <= (y - f(t)) / scale <= upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsymmetricMad<T> {
    /// Lower bound on the scaled residual (below the curve).
    pub lower: T,
    /// Upper bound on the scaled residual (above the curve).
    pub upper: T,
}

impl<T: FloatLinalg> AsymmetricMad<T> {
    /// Default bound above the curve.
    pub const DEFAULT_UPPER: f64 = 4.0;

    /// Default bound below the curve.
    pub const DEFAULT_LOWER: f64 = -10.0;

    /// A band with explicit bounds.
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }
}

impl<T: FloatLinalg> Default for AsymmetricMad<T> {
    fn default() -> Self {
        Self {
            lower: T::from(Self::DEFAULT_LOWER).unwrap(),
            upper: T::from(Self::DEFAULT_UPPER).unwrap(),
        }
    }
}

impl<T: FloatLinalg> InlierCriterion<T> for AsymmetricMad<T> {
    fn classify(&self, fit: &dyn FitView<T>, t: &[T], y: &[T]) -> Result<Vec<bool>, SplineError> {
        let scale = fit.residual_scale();
        let predictions = fit.predict(t)?;

        Ok(y.iter()
            .zip(&predictions)
            .map(|(&yi, &pi)| {
                let dev = (yi - pi) / scale;
                self.lower <= dev && dev <= self.upper
            })
            .collect())
    }
}
