//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data types and low-level utilities shared by every
//! other layer:
//! - Error type
//! - Immutable time series storage
//! - Weight-mask helpers (inlier views, Hamming distance)
//! - Run-length scan of masked-out samples
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Ensemble
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Weight-mask helpers.
pub mod mask;

/// Run-length scan of outlier runs.
pub mod runs;

/// Immutable time series.
pub mod series;
