//! Layer 5: Ensemble
//!
//! # Purpose
//!
//! This layer combines several robust fits that differ only in knot placement
//! into one consensus model.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Ensemble ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Knot-shift aggregation.
pub mod aggregate;
