//! Run-length scan of masked-out samples.
//!
//! ## Purpose
//!
//! This module finds the maximal contiguous runs of outliers (`false` entries)
//! in an inlier mask. The runs are used to prune knots that sit inside
//! unsupported regions of the series.
//!
//! ## Design notes
//!
//! * **State machine**: A two-state scanner (`SeekStart`, `SeekEnd`) driven by
//!   an explicit transition function.
//! * **Sentinel**: A virtual `true` at index `n` closes a trailing run.
//!
//! ## Invariants
//!
//! * Runs are half-open `[start, end)`, non-empty, non-overlapping and sorted.
//! * `end <= n`; the sentinel index is a boundary marker only.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::ops::Range;

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Not inside a run of outliers.
    SeekStart,
    /// Inside a run of outliers.
    SeekEnd,
}

/// Action emitted by a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanAction {
    /// Nothing to record.
    None,
    /// A run starts at the current index.
    Open,
    /// The open run ends (exclusive) at the current index.
    Close,
}

impl ScanState {
    /// Transition table of the scanner.
    #[inline]
    pub fn step(self, kept: bool) -> (ScanState, ScanAction) {
        match (self, kept) {
            (ScanState::SeekStart, false) => (ScanState::SeekEnd, ScanAction::Open),
            (ScanState::SeekEnd, true) => (ScanState::SeekStart, ScanAction::Close),
            (state, _) => (state, ScanAction::None),
        }
    }
}

/// Encoder for maximal runs of masked-out samples.
pub struct RunEncoder;

impl RunEncoder {
    /// Return the half-open index ranges of every maximal run of `false`.
    pub fn outlier_runs(mask: &[bool]) -> Vec<Range<usize>> {
        Self::scan(mask.iter().copied())
    }

    fn scan<I: Iterator<Item = bool>>(mask: I) -> Vec<Range<usize>> {
        let mut runs = Vec::new();
        let mut state = ScanState::SeekStart;
        let mut start = 0;

        for (i, kept) in mask.chain(core::iter::once(true)).enumerate() {
            let (next, action) = state.step(kept);
            match action {
                ScanAction::Open => start = i,
                ScanAction::Close => runs.push(start..i),
                ScanAction::None => {}
            }
            state = next;
        }

        runs
    }
}
