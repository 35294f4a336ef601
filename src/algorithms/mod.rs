//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the building blocks a robust spline model is made of:
//! - The weighted least-squares cubic spline kernel
//! - Knot placement, pruning and shifting
//! - Inlier criteria and the residual-scale cache
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Least-squares spline fit kernel.
pub mod fit;

/// Knot placement.
pub mod knots;

/// Inlier criteria.
pub mod robustness;
