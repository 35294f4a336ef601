//! Immutable time series storage.
//!
//! The samples are held behind `Arc<[T]>` so that every model derived from the
//! same data (pruned models, ensemble members) reads one shared copy.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

use num_traits::Float;

use crate::engine::validator::Validator;
use crate::primitives::errors::SplineError;

/// Ordered samples `(t_i, y_i)` with ascending `t`.
#[derive(Debug, Clone)]
pub struct TimeSeries<T> {
    t: Arc<[T]>,
    y: Arc<[T]>,
}

impl<T: Float> TimeSeries<T> {
    /// Validate and copy the input slices.
    pub fn new(t: &[T], y: &[T]) -> Result<Self, SplineError> {
        Validator::validate_inputs(t, y)?;
        Ok(Self {
            t: Arc::from(t),
            y: Arc::from(y),
        })
    }

    /// Time stamps.
    #[inline]
    pub fn t(&self) -> &[T] {
        &self.t
    }

    /// Sample values.
    #[inline]
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Always `false` for a constructed series.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// First time stamp.
    #[inline]
    pub fn start(&self) -> T {
        self.t[0]
    }

    /// Last time stamp.
    #[inline]
    pub fn end(&self) -> T {
        self.t[self.t.len() - 1]
    }

    /// Whether both series share the same underlying storage.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.t, &other.t) && Arc::ptr_eq(&self.y, &other.y)
    }
}
