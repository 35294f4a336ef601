//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the fit kernel and
//! the inlier criteria:
//! - Cubic B-spline basis evaluation
//! - Normal-equation solving (nalgebra backend)
//! - Robust scale (median absolute residual)
//! - Out-of-domain evaluation policies
//!
//! These are reusable building blocks with no model-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Extrapolation policies.
pub mod boundary;

/// Cubic B-spline basis.
pub mod bspline;

/// Linear algebra backend.
pub mod linalg;

/// Median absolute residual.
pub mod mad;
