//! Knot-shift aggregation of robust spline models.
//!
//! ## Purpose
//!
//! A single robust fit is sensitive to where its knots fall. This module refits
//! the series with rigidly shifted copies of a refined model's knot set, lets
//! each copy refine its own outlier mask, and combines all masks into one
//! consensus model.
//!
//! ## Design notes
//!
//! * **Shifts**: `q = (1 - p) / d`; copies `i = -d..=-1` move left by
//!   `i * (k_first - t_0) * q`, copies `i = 1..=d` move right by
//!   `i * (t_{n-1} - k_last) * q`.
//! * **Members**: Built with the base model's construction weights and fit
//!   settings, then refined independently.
//! * **Parallelism**: With the `parallel` feature members run as independent
//!   rayon tasks; the collect is the join barrier before the consensus step.
//! * **Consensus**: Elementwise AND of the base mask and every member mask.
//! * **Final model**: Base knots with the consensus mask, then `cure_knots`,
//!   then one more refinement.
//!
//! ## Invariants
//!
//! * Every shifted knot stays strictly inside the domain, at least a fraction
//!   `p` of the original boundary gap away from it.
//! * A sample masked by the base model or by any member is masked in the consensus.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use log::debug;

// Internal dependencies
use crate::algorithms::knots;
use crate::engine::model::{FitSettings, RefineOptions, SplineModel};
use crate::engine::output::ConvergenceRecord;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::SplineError;
use crate::primitives::mask;
use crate::primitives::series::TimeSeries;

// ============================================================================
// Configuration
// ============================================================================

/// Parameters of knot-shift aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnotShift<T> {
    /// Number of shifted copies on each side.
    pub duplicates: usize,

    /// Fraction of the boundary gap the extreme shift must leave, in (0, 1).
    pub proximity_factor: T,

    /// Run members as parallel tasks (effective with the `parallel` feature).
    pub parallel: bool,
}

impl<T: FloatLinalg> Default for KnotShift<T> {
    fn default() -> Self {
        Self {
            duplicates: 3,
            proximity_factor: T::from(0.001).unwrap(),
            parallel: cfg!(feature = "parallel"),
        }
    }
}

impl<T: FloatLinalg> KnotShift<T> {
    /// Default parameters (`duplicates = 3`, `proximity_factor = 0.001`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of shifted copies per side.
    pub fn duplicates(mut self, duplicates: usize) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Set the proximity factor.
    pub fn proximity_factor(mut self, proximity_factor: T) -> Self {
        self.proximity_factor = proximity_factor;
        self
    }

    /// Enable or disable parallel member fits.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

// ============================================================================
// Output
// ============================================================================

/// Result of knot-shift aggregation.
#[derive(Debug, Clone)]
pub struct AggregateOutput<T: FloatLinalg> {
    /// Cured and re-refined consensus model.
    pub model: SplineModel<T>,

    /// Refinement record of the consensus model.
    pub convergence: ConvergenceRecord,

    /// Refinement records of the members, left shifts first.
    pub members: Vec<ConvergenceRecord>,

    /// Committed inlier masks of the members, in the order of `members`.
    pub member_masks: Vec<Vec<bool>>,

    /// Consensus inlier mask before the final refinement.
    pub consensus: Vec<bool>,
}

// ============================================================================
// Aggregation
// ============================================================================

/// Offsets of the `2 * duplicates` shifted knot sets, left shifts first.
pub fn shift_offsets<T: FloatLinalg>(
    domain: (T, T),
    first_knot: T,
    last_knot: T,
    duplicates: usize,
    proximity_factor: T,
) -> Vec<T> {
    let d = T::from(duplicates).unwrap();
    let q = (T::one() - proximity_factor) / d;
    let scale_left = (first_knot - domain.0) * q;
    let scale_right = (domain.1 - last_knot) * q;

    let left = (1..=duplicates)
        .rev()
        .map(|i| -T::from(i).unwrap() * scale_left);
    let right = (1..=duplicates).map(|i| T::from(i).unwrap() * scale_right);
    left.chain(right).collect()
}

/// Mask and record of one refined member.
type MemberOutcome = (Vec<bool>, ConvergenceRecord);

/// Build one shifted member, refine it, and return its mask and record.
fn run_member<T: FloatLinalg>(
    series: &TimeSeries<T>,
    base_knots: &[T],
    offset: T,
    weights: &[T],
    settings: &FitSettings<T>,
    options: RefineOptions,
) -> Result<MemberOutcome, SplineError> {
    let mut member = SplineModel::with_knots(
        series.clone(),
        knots::shifted(base_knots, offset),
        Some(weights.to_vec()),
        settings.clone(),
    )?;
    let record = member.refine(options)?;

    debug!(
        "knot_shift: offset={:?} status={:?} iterations={} inliers={}",
        offset,
        record.status,
        record.iterations,
        member.inlier_count()
    );

    Ok((member.inlier_mask(), record))
}

/// Run every member; with `parallel`, members are independent rayon tasks.
#[cfg(feature = "parallel")]
fn run_members<T: FloatLinalg>(
    series: &TimeSeries<T>,
    base_knots: &[T],
    offsets: Vec<T>,
    weights: &[T],
    settings: &FitSettings<T>,
    options: RefineOptions,
    parallel: bool,
) -> Result<Vec<MemberOutcome>, SplineError> {
    if parallel {
        offsets
            .into_par_iter()
            .map(|offset| run_member(series, base_knots, offset, weights, settings, options))
            .collect()
    } else {
        offsets
            .into_iter()
            .map(|offset| run_member(series, base_knots, offset, weights, settings, options))
            .collect()
    }
}

/// Run every member sequentially.
#[cfg(not(feature = "parallel"))]
fn run_members<T: FloatLinalg>(
    series: &TimeSeries<T>,
    base_knots: &[T],
    offsets: Vec<T>,
    weights: &[T],
    settings: &FitSettings<T>,
    options: RefineOptions,
    _parallel: bool,
) -> Result<Vec<MemberOutcome>, SplineError> {
    offsets
        .into_iter()
        .map(|offset| run_member(series, base_knots, offset, weights, settings, options))
        .collect()
}

/// Aggregate `base` over shifted knot placements.
pub fn knot_shift_aggregate<T: FloatLinalg>(
    base: &SplineModel<T>,
    shift: &KnotShift<T>,
    options: RefineOptions,
) -> Result<AggregateOutput<T>, SplineError> {
    Validator::validate_duplicates(shift.duplicates)?;
    Validator::validate_proximity_factor(shift.proximity_factor)?;
    Validator::validate_max_iterations(options.max_iterations)?;

    let base_knots = base.knots();
    let (first, last) = match (base_knots.first(), base_knots.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(SplineError::NoInteriorKnots),
    };

    let series = base.series();
    let offsets = shift_offsets(
        (series.start(), series.end()),
        first,
        last,
        shift.duplicates,
        shift.proximity_factor,
    );
    let outcomes = run_members(
        series,
        base_knots,
        offsets,
        base.initial_weights(),
        base.settings(),
        options,
        shift.parallel,
    )?;

    let mut consensus = base.inlier_mask();
    let mut members = Vec::with_capacity(outcomes.len());
    let mut member_masks = Vec::with_capacity(outcomes.len());
    for (member_mask, record) in outcomes {
        mask::and_assign(&mut consensus, &member_mask);
        member_masks.push(member_mask);
        members.push(record);
    }

    debug!(
        "knot_shift: {} members, consensus keeps {}/{} samples",
        members.len(),
        consensus.iter().filter(|&&keep| keep).count(),
        consensus.len()
    );

    let seeded = SplineModel::with_knots(
        series.clone(),
        base_knots.to_vec(),
        Some(mask::weights_from_mask(&consensus)),
        base.settings().clone(),
    )?;
    let mut model = seeded.cure_knots()?;
    let convergence = model.refine(options)?;

    Ok(AggregateOutput {
        model,
        convergence,
        members,
        member_masks,
        consensus,
    })
}

impl<T: FloatLinalg> SplineModel<T> {
    /// Consensus model over `2 * shift.duplicates` shifted knot placements.
    ///
    /// See [`knot_shift_aggregate`].
    pub fn knot_shift_aggregate(
        &self,
        shift: &KnotShift<T>,
        options: RefineOptions,
    ) -> Result<AggregateOutput<T>, SplineError> {
        knot_shift_aggregate(self, shift, options)
    }
}
