#![cfg(feature = "dev")]

use robust_bspline::internals::primitives::errors::SplineError;

#[test]
fn test_spline_error_display() {
    // EmptyInput
    let err = SplineError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    // MismatchedInputs
    let err = SplineError::MismatchedInputs {
        t_len: 10,
        y_len: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: t has 10 points, y has 5"
    );

    // InvalidNumericValue
    let err = SplineError::InvalidNumericValue("y[3]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: y[3]=NaN");

    // InvalidKnotCount
    let err = SplineError::InvalidKnotCount(0);
    assert_eq!(
        format!("{}", err),
        "Invalid knot count: 0 (must be at least 1)"
    );

    // KnotSpacingTooSmall
    let err = SplineError::KnotSpacingTooSmall {
        n: 10,
        knot_count: 20,
    };
    assert_eq!(
        format!("{}", err),
        "Knot count 20 is too large for 10 samples (derived step is zero)"
    );

    // MismatchedWeights
    let err = SplineError::MismatchedWeights {
        expected: 10,
        got: 9,
    };
    assert_eq!(
        format!("{}", err),
        "Weight length mismatch: expected 10, got 9"
    );

    // InvalidMaxIterations
    let err = SplineError::InvalidMaxIterations(0);
    assert_eq!(
        format!("{}", err),
        "Invalid max_iterations: 0 (must be > 0)"
    );

    // InvalidDuplicates
    let err = SplineError::InvalidDuplicates(0);
    assert_eq!(format!("{}", err), "Invalid duplicates: 0 (must be > 0)");

    // InvalidProximityFactor
    let err = SplineError::InvalidProximityFactor(1.5);
    assert_eq!(
        format!("{}", err),
        "Invalid proximity factor: 1.5 (must be > 0 and < 1)"
    );

    // NoInteriorKnots
    let err = SplineError::NoInteriorKnots;
    assert_eq!(format!("{}", err), "Model has no interior knots");

    // DuplicateParameter
    let err = SplineError::DuplicateParameter {
        parameter: "knot_count",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'knot_count' was set multiple times. Each parameter can only be configured once."
    );

    // FitSingularity
    let err = SplineError::FitSingularity("no support".to_string());
    assert_eq!(format!("{}", err), "Singular spline fit: no support");

    // OutOfDomain
    let err = SplineError::OutOfDomain(-2.5);
    assert_eq!(
        format!("{}", err),
        "Query point -2.5 is outside the fitted domain"
    );
}

#[test]
fn test_spline_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&SplineError::EmptyInput);
}
