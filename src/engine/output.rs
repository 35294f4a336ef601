//! Result records of refinement runs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Terminal state of a refinement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvergenceStatus {
    /// The candidate mask was within the target distance of the committed mask.
    Converged,

    /// The iteration limit was exhausted first.
    MaxIterationsExceeded,
}

impl ConvergenceStatus {
    /// Numeric status code: 0 for convergence, 1 otherwise.
    pub fn code(&self) -> i32 {
        match self {
            Self::Converged => 0,
            Self::MaxIterationsExceeded => 1,
        }
    }

    /// Human-readable status message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Converged => "Converged",
            Self::MaxIterationsExceeded => "Maximum iteration limit exceeded",
        }
    }
}

/// Outcome of one call to `refine`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceRecord {
    /// Terminal state.
    pub status: ConvergenceStatus,

    /// Status message.
    pub message: String,

    /// Number of committed mask replacements.
    pub iterations: usize,

    /// Hamming distance measured by the last classification.
    pub final_distance: usize,
}

impl ConvergenceRecord {
    /// Build a record for `status`.
    pub fn new(status: ConvergenceStatus, iterations: usize, final_distance: usize) -> Self {
        Self {
            status,
            message: status.message().into(),
            iterations,
            final_distance,
        }
    }

    /// Whether refinement converged.
    pub fn is_converged(&self) -> bool {
        self.status == ConvergenceStatus::Converged
    }
}

impl fmt::Display for ConvergenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Refinement:")?;
        writeln!(f, "  Status:         {} ({})", self.message, self.status.code())?;
        writeln!(f, "  Iterations:     {}", self.iterations)?;
        write!(f, "  Final distance: {}", self.final_distance)
    }
}
