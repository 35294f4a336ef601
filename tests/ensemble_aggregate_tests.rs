//! Tests for knot-shift aggregation through the public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use robust_bspline::prelude::*;

fn noise(i: usize) -> f64 {
    0.1 * ((i as f64 * 12.9898).sin() * 43758.5453).fract()
}

fn spiked_series() -> (Vec<f64>, Vec<f64>, [usize; 3]) {
    let t: Vec<f64> = (0..200).map(|i| i as f64).collect();
    let mut y: Vec<f64> = t
        .iter()
        .enumerate()
        .map(|(i, &x)| (x / 15.0).sin() + noise(i))
        .collect();
    let spikes = [40, 100, 160];
    for &i in &spikes {
        y[i] += 2.0;
    }
    (t, y, spikes)
}

fn refined_base() -> (SplineModel<f64>, [usize; 3]) {
    let (t, y, spikes) = spiked_series();
    let mut base = RobustSpline::new().fit(&t, &y).unwrap();
    base.refine(RefineOptions::default()).unwrap();
    (base, spikes)
}

// ============================================================================
// Aggregation Tests
// ============================================================================

#[test]
fn test_member_count() {
    let (base, _) = refined_base();
    let output = base
        .knot_shift_aggregate(&KnotShift::new(), RefineOptions::default())
        .unwrap();
    assert_eq!(output.members.len(), 6);

    let output = base
        .knot_shift_aggregate(&KnotShift::new().duplicates(1), RefineOptions::default())
        .unwrap();
    assert_eq!(output.members.len(), 2);
}

#[test]
fn test_consensus_is_subset_of_base_inliers() {
    let (base, spikes) = refined_base();
    let base_mask = base.inlier_mask();
    let output = base
        .knot_shift_aggregate(&KnotShift::new(), RefineOptions::default())
        .unwrap();

    assert_eq!(output.consensus.len(), base_mask.len());
    for (i, (&agreed, &kept)) in output.consensus.iter().zip(&base_mask).enumerate() {
        assert!(!agreed || kept, "sample {} kept by consensus but not by base", i);
    }
    for i in spikes {
        assert!(!output.consensus[i]);
        assert!(!output.model.inlier_mask()[i]);
    }
}

#[test]
fn test_consensus_is_base_and_member_masks() {
    let (base, _) = refined_base();
    let output = base
        .knot_shift_aggregate(&KnotShift::new(), RefineOptions::default())
        .unwrap();

    assert_eq!(output.member_masks.len(), output.members.len());
    let mut expected = base.inlier_mask();
    for member in &output.member_masks {
        assert_eq!(member.len(), expected.len());
        for (slot, &keep) in expected.iter_mut().zip(member) {
            *slot = *slot && keep;
        }
    }
    assert_eq!(output.consensus, expected);
}

/// Masks `sample` on the calls in `masking`, keeps everything otherwise.
#[derive(Debug)]
struct Scripted {
    calls: AtomicUsize,
    masking: [usize; 2],
    sample: usize,
    len: usize,
}

impl InlierCriterion<f64> for Scripted {
    fn classify(
        &self,
        _fit: &dyn FitView<f64>,
        _t: &[f64],
        _y: &[f64],
    ) -> Result<Vec<bool>, SplineError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let mut mask = vec![true; self.len];
        if self.masking.contains(&call) {
            mask[self.sample] = false;
        }
        Ok(mask)
    }
}

#[test]
fn test_sample_masked_by_one_member_only() {
    let (t, y, _) = spiked_series();
    // Call 0 is the base refinement; calls 1 and 2 belong to the first member
    let criterion = Arc::new(Scripted {
        calls: AtomicUsize::new(0),
        masking: [1, 2],
        sample: 77,
        len: t.len(),
    });
    let mut base = RobustSpline::new()
        .inlier_criterion(criterion.clone())
        .fit(&t, &y)
        .unwrap();
    let options = RefineOptions::new().target_distance(0);
    base.refine(options).unwrap();
    assert_eq!(criterion.calls.load(Ordering::SeqCst), 1);
    assert!(base.inlier_mask()[77]);

    let output = base
        .knot_shift_aggregate(&KnotShift::new().duplicates(1).parallel(false), options)
        .unwrap();

    assert_eq!(output.member_masks.len(), 2);
    assert!(!output.member_masks[0][77]);
    assert!(output.member_masks[1][77]);
    assert!(output.member_masks[0].iter().filter(|&&keep| !keep).count() == 1);
    assert!(!output.consensus[77]);
    assert_eq!(output.consensus.iter().filter(|&&keep| !keep).count(), 1);
}

#[test]
fn test_final_model_uses_base_knots() {
    let (base, _) = refined_base();
    let output = base
        .knot_shift_aggregate(&KnotShift::new(), RefineOptions::default())
        .unwrap();

    for knot in output.model.knots() {
        assert!(base.knots().contains(knot));
    }
    assert!(output.model.series().shares_storage(base.series()));
    assert!(output.convergence.is_converged());
    assert!(output.members.iter().all(|m| m.is_converged()));
}

#[test]
fn test_base_model_is_untouched() {
    let (base, _) = refined_base();
    let knots = base.knots().to_vec();
    let weights = base.weights().to_vec();

    base.knot_shift_aggregate(&KnotShift::new(), RefineOptions::default())
        .unwrap();

    assert_eq!(base.knots(), knots.as_slice());
    assert_eq!(base.weights(), weights.as_slice());
}

#[test]
fn test_sequential_and_parallel_agree() {
    let (base, _) = refined_base();
    let sequential = base
        .knot_shift_aggregate(&KnotShift::new().parallel(false), RefineOptions::default())
        .unwrap();
    let parallel = base
        .knot_shift_aggregate(&KnotShift::new().parallel(true), RefineOptions::default())
        .unwrap();

    assert_eq!(sequential.consensus, parallel.consensus);
    assert_eq!(sequential.members, parallel.members);
    assert_eq!(sequential.model.inlier_mask(), parallel.model.inlier_mask());
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_parameter_validation() {
    let (base, _) = refined_base();
    let options = RefineOptions::default();

    assert_eq!(
        base.knot_shift_aggregate(&KnotShift::new().duplicates(0), options)
            .unwrap_err(),
        SplineError::InvalidDuplicates(0)
    );
    for p in [0.0, 1.0, -0.5, f64::NAN] {
        assert!(matches!(
            base.knot_shift_aggregate(&KnotShift::new().proximity_factor(p), options),
            Err(SplineError::InvalidProximityFactor(_))
        ));
    }
    assert_eq!(
        base.knot_shift_aggregate(&KnotShift::new(), RefineOptions::new().max_iterations(0))
            .unwrap_err(),
        SplineError::InvalidMaxIterations(0)
    );
}

#[test]
fn test_requires_interior_knots() {
    let t: Vec<f64> = (0..50).map(|i| i as f64).collect();
    let y: Vec<f64> = t.iter().map(|&x| 0.1 * x).collect();
    let base = RobustSpline::new().knots(Vec::new()).fit(&t, &y).unwrap();
    assert_eq!(
        base.knot_shift_aggregate(&KnotShift::new(), RefineOptions::default())
            .unwrap_err(),
        SplineError::NoInteriorKnots
    );
}

#[test]
fn test_default_shift_parameters() {
    let shift = KnotShift::<f64>::default();
    assert_eq!(shift.duplicates, 3);
    assert_eq!(shift.proximity_factor, 0.001);
    assert_eq!(shift.parallel, cfg!(feature = "parallel"));
}
