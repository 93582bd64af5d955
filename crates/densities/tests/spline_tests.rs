//! Tests for the interpolating cubic spline.
//!
//! ## Test Organization
//!
//! 1. **Exactness** - Polynomials up to cubic are reproduced
//! 2. **Short Grids** - Two- and three-point fits
//! 3. **Errors** - Invalid knots

use approx::assert_abs_diff_eq;

use densities::prelude::*;

// ============================================================================
// Exactness Tests
// ============================================================================

/// Test that cubic data on non-uniform knots is reproduced exactly.
#[test]
fn test_cubic_reproduced_nonuniform() {
    let f = |t: f64| 2.0 * t * t * t - t * t + 3.0 * t - 1.0;
    let x = [0.0, 0.3, 1.0, 1.4, 2.5, 3.0];
    let y: Vec<f64> = x.iter().map(|&t| f(t)).collect();
    let spline = CubicSpline::new(&x, &y).unwrap();

    for t in [0.1, 0.77, 1.9, 2.8] {
        assert_abs_diff_eq!(spline.evaluate(t, 0), f(t), epsilon = 1e-10);
    }
    assert_abs_diff_eq!(spline.evaluate(1.5, 1), 13.5, epsilon = 1e-9);
    assert_abs_diff_eq!(spline.evaluate(1.5, 3), 12.0, epsilon = 1e-8);
}

/// Test that four knots give the single interpolating cubic.
#[test]
fn test_four_knots() {
    let f = |t: f64| t * t * t - 2.0 * t;
    let x = [0.0, 1.0, 2.0, 3.0];
    let y: Vec<f64> = x.iter().map(|&t| f(t)).collect();
    let spline = CubicSpline::new(&x, &y).unwrap();

    assert_abs_diff_eq!(spline.evaluate(2.5, 0), f(2.5), epsilon = 1e-12);
}

/// Test that evaluation is zero outside the knots, but extrapolation continues the ends.
#[test]
fn test_outside_domain() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 2.0, 3.0];
    let spline = CubicSpline::new(&x, &y).unwrap();

    assert_eq!(spline.domain(), (0.0, 3.0));
    assert_eq!(spline.evaluate(-0.5, 0), 0.0);
    assert_eq!(spline.evaluate(3.5, 0), 0.0);
    assert_abs_diff_eq!(spline.value(3.5), 3.5, epsilon = 1e-12);
}

// ============================================================================
// Short Grid Tests
// ============================================================================

/// Test that two knots give a straight line.
#[test]
fn test_two_knots_linear() {
    let spline = CubicSpline::new(&[0.0, 2.0], &[1.0, 5.0]).unwrap();

    assert_abs_diff_eq!(spline.evaluate(0.5, 0), 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(spline.evaluate(0.5, 1), 2.0, epsilon = 1e-12);
    assert_eq!(spline.evaluate(0.5, 2), 0.0);
}

/// Test that three knots give the interpolating parabola.
#[test]
fn test_three_knots_parabola() {
    let spline = CubicSpline::new(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();

    assert_abs_diff_eq!(spline.evaluate(1.5, 0), 3.25, epsilon = 1e-12);
    assert_abs_diff_eq!(spline.evaluate(0.5, 2), 2.0, epsilon = 1e-12);
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test that invalid knots are rejected.
#[test]
fn test_invalid_knots() {
    assert!(matches!(
        CubicSpline::new(&[0.0], &[1.0]),
        Err(DensityError::InvalidAxis(_))
    ));
    assert!(matches!(
        CubicSpline::new(&[0.0, 2.0, 1.0], &[1.0, 1.0, 1.0]),
        Err(DensityError::InvalidAxis(_))
    ));
    assert!(matches!(
        CubicSpline::new(&[0.0, 1.0], &[1.0]),
        Err(DensityError::ShapeMismatch { .. })
    ));
}
