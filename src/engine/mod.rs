//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer runs a single robust spline fit:
//! - The `SplineModel` state machine (fit, classify, refine, cure)
//! - Validation of inputs and parameters
//! - Convergence records
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Ensemble
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Robust spline model.
pub mod model;

/// Convergence records.
pub mod output;

/// Input and parameter validation.
pub mod validator;
