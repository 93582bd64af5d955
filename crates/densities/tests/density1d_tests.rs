//! Tests for 1D densities.
//!
//! These tests verify the `Density1D` type used for:
//! - Weight assignment and shape checks
//! - Normalization and trapezoidal integration
//! - Spline evaluation and derivatives
//! - Credible intervals with one- and two-sided limits
//!
//! ## Test Organization
//!
//! 1. **Construction** - Shapes, zero-fill, bounds
//! 2. **Normalization** - Integral and max modes
//! 3. **Evaluation** - Spline reproduction, derivatives, out-of-range points
//! 4. **Credible Intervals** - Reference values, nesting, edge truncation
//! 5. **Limit Grids** - Defaults, reuse, and staleness

use approx::{assert_abs_diff_eq, assert_relative_eq};

use densities::prelude::*;

fn axis(start: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| start + step * i as f64).collect()
}

fn gaussian(n: usize) -> Density1D<f64> {
    let x = axis(-5.0, 10.0 / (n - 1) as f64, n);
    let p = x.iter().map(|&v| (-0.5 * v * v).exp()).collect();
    Density1D::new(x, Some(p)).unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

/// Test that weights must match the axis length.
#[test]
fn test_shape_mismatch() {
    let x = axis(0.0, 1.0, 5);
    let result = Density1D::new(x, Some(vec![1.0, 2.0, 3.0, 4.0]));

    assert_eq!(
        result,
        Err(DensityError::ShapeMismatch {
            axis: 0,
            expected: 5,
            got: 4
        })
    );
}

/// Test that missing weights are zero-filled.
#[test]
fn test_zero_fill() {
    let density = Density1D::new(axis(0.0, 0.5, 4), None).unwrap();

    assert_eq!(density.weights(), &[0.0, 0.0, 0.0, 0.0]);
    assert_eq!(density.n(), 4);
    assert_relative_eq!(density.spacing(), 0.5);
}

/// Test that reassigning weights checks the shape and advances the generation.
#[test]
fn test_set_weights() {
    let mut density = Density1D::new(axis(0.0, 1.0, 3), None).unwrap();
    let before = density.generation();

    density.set_weights(Some(vec![1.0, 2.0, 1.0])).unwrap();
    assert_eq!(density.weights(), &[1.0, 2.0, 1.0]);
    assert!(density.generation() > before);

    let err = density.set_weights(Some(vec![1.0, 2.0])).unwrap_err();
    assert!(matches!(err, DensityError::ShapeMismatch { .. }));
    // Failed assignment leaves the weights untouched
    assert_eq!(density.weights(), &[1.0, 2.0, 1.0]);

    density.set_weights(None).unwrap();
    assert_eq!(density.weights(), &[0.0, 0.0, 0.0]);
}

/// Test that axes need two increasing, finite points.
#[test]
fn test_invalid_axis() {
    assert!(matches!(
        Density1D::new(vec![1.0], None),
        Err(DensityError::InvalidAxis(_))
    ));
    assert!(matches!(
        Density1D::new(vec![0.0, 1.0, 1.0], None),
        Err(DensityError::InvalidAxis(_))
    ));
    assert!(matches!(
        Density1D::new(vec![0.0, f64::NAN], None),
        Err(DensityError::InvalidAxis(_))
    ));
}

/// Test axis bounds and the view-range override.
#[test]
fn test_bounds() {
    let mut density = Density1D::new(axis(-2.0, 0.5, 9), None).unwrap();
    assert_eq!(density.bounds(), vec![(-2.0, 2.0)]);

    density.set_view_range(Some((-1.0, 1.5)));
    assert_eq!(density.bounds(), vec![(-1.0, 1.5)]);
}

// ============================================================================
// Normalization Tests
// ============================================================================

/// Test the trapezoidal integral: half weight at both ends.
#[test]
fn test_norm_integral() {
    let density = Density1D::new(axis(0.0, 0.5, 5), Some(vec![2.0, 1.0, 1.0, 1.0, 4.0])).unwrap();

    // (2/2 + 1 + 1 + 1 + 4/2) * 0.5
    assert_relative_eq!(density.norm_integral(), 3.0, epsilon = 1e-12);
    assert_relative_eq!(
        density.integrate(&[1.0, 1.0, 1.0, 1.0, 1.0]).unwrap(),
        2.0,
        epsilon = 1e-12
    );
    assert!(density.integrate(&[1.0, 1.0]).is_err());
}

/// Test that integral normalization yields unit integral.
#[test]
fn test_normalize_integral_round_trip() {
    let mut density = Density1D::new(
        axis(1.0, 0.25, 7),
        Some(vec![0.3, 1.7, 4.2, 9.0, 3.3, 0.8, 0.1]),
    )
    .unwrap();

    density.normalize(Normalization::Integral).unwrap();
    assert_relative_eq!(density.norm_integral(), 1.0, epsilon = 1e-12);

    // Idempotent
    density.normalize(Normalization::Integral).unwrap();
    assert_relative_eq!(density.norm_integral(), 1.0, epsilon = 1e-12);
}

/// Test that max normalization puts the peak at one.
#[test]
fn test_normalize_max() {
    let mut density = Density1D::new(axis(0.0, 1.0, 4), Some(vec![1.0, 4.0, 2.0, 0.0])).unwrap();
    density.normalize(Normalization::Max).unwrap();

    assert_eq!(density.weights(), &[0.25, 1.0, 0.5, 0.0]);
}

/// Test that the copying variant leaves the original untouched.
#[test]
fn test_normalized_copy() {
    let density = Density1D::new(axis(0.0, 1.0, 3), Some(vec![1.0, 2.0, 1.0])).unwrap();
    let normalized = density.normalized(Normalization::Integral).unwrap();

    assert_eq!(density.weights(), &[1.0, 2.0, 1.0]);
    assert_relative_eq!(normalized.norm_integral(), 1.0, epsilon = 1e-12);
}

/// Test that max normalization of an empty grid fails.
#[test]
fn test_normalize_empty_density() {
    let mut density = Density1D::new(axis(0.0, 1.0, 4), None).unwrap();

    assert_eq!(
        density.normalize(Normalization::Max),
        Err(DensityError::EmptyDensity)
    );
}

/// Test that integral normalization of an empty grid is not guarded.
#[test]
fn test_normalize_integral_zero_mass() {
    let mut density = Density1D::new(axis(0.0, 1.0, 4), None).unwrap();
    density.normalize(Normalization::Integral).unwrap();

    assert!(density.weights().iter().all(|w| w.is_nan()));
}

/// Test parsing normalization modes by name.
#[test]
fn test_normalization_from_str() {
    assert_eq!("integral".parse::<Normalization>(), Ok(Normalization::Integral));
    assert_eq!("max".parse::<Normalization>(), Ok(Normalization::Max));
    assert_eq!(
        "peak".parse::<Normalization>(),
        Err(DensityError::UnknownNormalizationMode("peak".to_string()))
    );
}

// ============================================================================
// Evaluation Tests
// ============================================================================

/// Test that the spline reproduces cubic weights and their derivatives.
#[test]
fn test_prob_reproduces_cubic() {
    let x = axis(0.0, 0.1, 11);
    let p = x.iter().map(|&v| v * v * v).collect();
    let mut density = Density1D::new(x, Some(p)).unwrap();

    let values = density.prob(&[0.0, 0.33, 0.55, 1.0], 0).unwrap();
    assert_abs_diff_eq!(values[0], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(values[1], 0.035937, epsilon = 1e-10);
    assert_abs_diff_eq!(values[2], 0.166375, epsilon = 1e-10);
    assert_abs_diff_eq!(values[3], 1.0, epsilon = 1e-12);

    assert_abs_diff_eq!(density.prob(&[0.55], 1).unwrap()[0], 0.9075, epsilon = 1e-9);
    assert_abs_diff_eq!(density.prob(&[0.55], 2).unwrap()[0], 3.3, epsilon = 1e-8);
    assert_abs_diff_eq!(density.prob(&[0.55], 3).unwrap()[0], 6.0, epsilon = 1e-6);
    assert_eq!(density.prob(&[0.55], 4).unwrap()[0], 0.0);
}

/// Test that evaluation outside the axis range returns zero.
#[test]
fn test_prob_no_extrapolation() {
    let mut density = gaussian(21);
    let values = density.prob(&[-5.5, -5.0, 0.0, 5.0, 6.0], 0).unwrap();

    assert_eq!(values[0], 0.0);
    assert!(values[1] > 0.0);
    assert_relative_eq!(values[2], 1.0, epsilon = 1e-12);
    assert!(values[3] > 0.0);
    assert_eq!(values[4], 0.0);
}

/// Test that the single-point wrapper agrees with batch evaluation.
#[test]
fn test_prob_at_matches_batch() {
    let mut density = gaussian(21);
    let batch = density.prob(&[0.3, -1.7], 0).unwrap();

    assert_eq!(density.prob_at(0.3).unwrap(), batch[0]);
    assert_eq!(density.prob_at(-1.7).unwrap(), batch[1]);
}

/// Test that changing the weights drops the cached spline.
#[test]
fn test_cache_invalidated_on_mutation() {
    let mut density = Density1D::new(axis(0.0, 1.0, 5), Some(vec![1.0; 5])).unwrap();
    assert_relative_eq!(density.prob_at(2.5).unwrap(), 1.0, epsilon = 1e-12);
    assert!(density.spline().is_some());

    density.set_weights(Some(vec![3.0; 5])).unwrap();
    assert!(density.spline().is_none());
    assert_relative_eq!(density.prob_at(2.5).unwrap(), 3.0, epsilon = 1e-12);

    density.normalize(Normalization::Max).unwrap();
    assert!(density.spline().is_none());
    assert_relative_eq!(density.prob_at(2.5).unwrap(), 1.0, epsilon = 1e-12);
}

// ============================================================================
// Credible Interval Tests
// ============================================================================

/// Test exact reference limits for a quadratic density (reproduced exactly by the spline).
///
/// With factor 10 the refined grid has 41 points over [-1, 1].
#[test]
fn test_limits_reference_values() {
    let x = vec![-1.0, -0.5, 0.0, 0.5, 1.0];
    let p = x.iter().map(|&v: &f64| 1.0 - v * v).collect();
    let mut density = Density1D::new(x, Some(p)).unwrap();

    let grid = density.limit_grid(Some(10)).unwrap();
    assert_eq!(grid.bign, 41);
    assert_relative_eq!(grid.norm, 26.65, epsilon = 1e-9);

    let intervals = density.limits(&[0.68, 0.95], Some(&grid), None).unwrap();

    assert_relative_eq!(intervals[0].lower, -0.463_533_333_333_333_5, epsilon = 1e-9);
    assert_relative_eq!(intervals[0].upper, 0.463_533_333_333_333_6, epsilon = 1e-9);
    assert!(intervals[0].is_two_tailed());

    assert_relative_eq!(intervals[1].lower, -0.8, epsilon = 1e-9);
    assert_relative_eq!(intervals[1].upper, 0.8, epsilon = 1e-9);
    assert!(intervals[1].is_two_tailed());
}

/// Test that the full probability spans the whole axis with no limits.
#[test]
fn test_limits_full_probability() {
    let mut density = gaussian(51);
    let (first, last) = (density.x()[0], density.x()[50]);
    let interval = density.limit(1.0).unwrap();

    assert_eq!(interval.as_tuple(), (first, last, false, false));
}

/// Test that narrower probabilities give nested intervals around the mode.
#[test]
fn test_limits_symmetric_nesting() {
    let mut density = gaussian(101);
    let intervals = density.limits(&[0.68, 0.95], None, None).unwrap();
    let (narrow, wide) = (intervals[0], intervals[1]);

    assert!(narrow.width() < wide.width());
    assert!(wide.lower < narrow.lower && narrow.upper < wide.upper);
    assert_abs_diff_eq!(narrow.lower + narrow.upper, 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(wide.lower + wide.upper, 0.0, epsilon = 1e-3);

    // Standard normal quantiles for the equal-density interval
    assert_abs_diff_eq!(narrow.upper, 0.9945, epsilon = 1e-2);
    assert_abs_diff_eq!(wide.upper, 1.9600, epsilon = 1e-2);
}

/// Test a density truncated at the upper edge: only a lower limit exists.
///
/// A ramp 2x on [0, 1] peaks at the boundary.
#[test]
fn test_limits_one_sided() {
    let x = vec![0.0, 0.25, 0.5, 0.75, 1.0];
    let p = x.iter().map(|&v: &f64| 2.0 * v).collect();
    let mut density = Density1D::new(x, Some(p)).unwrap();

    let intervals = density.limits(&[0.5, 0.68], None, Some(10)).unwrap();

    assert_relative_eq!(intervals[0].lower, 0.705_357_142_857_142_8, epsilon = 1e-9);
    assert_eq!(intervals[0].upper, 1.0);
    assert!(intervals[0].has_lower);
    assert!(!intervals[0].has_upper);

    assert_relative_eq!(intervals[1].lower, 0.596_739_130_434_782_8, epsilon = 1e-9);
    assert!(!intervals[1].has_upper);
}

/// Test that scalar and batch requests agree.
#[test]
fn test_limit_matches_batch() {
    let mut density = gaussian(41);
    let single = density.limit(0.9).unwrap();
    let batch = density.limits(&[0.9], None, None).unwrap();

    assert_eq!(batch.len(), 1);
    assert_eq!(single, batch[0]);
}

/// Test that invalid probabilities are rejected.
#[test]
fn test_limits_invalid_probability() {
    let mut density = gaussian(21);

    assert!(matches!(
        density.limit(-0.1),
        Err(DensityError::InvalidProbability(_))
    ));
    assert!(matches!(
        density.limits(&[0.5, f64::NAN], None, None),
        Err(DensityError::InvalidProbability(_))
    ));
}

/// Test the interval display notation: open ends mark missing limits.
#[test]
fn test_credible_interval_display() {
    let interval = CredibleInterval {
        lower: 0.5,
        upper: 1.0,
        has_lower: true,
        has_upper: false,
    };

    assert_eq!(interval.to_string(), "[0.5, 1)");
}

// ============================================================================
// Limit Grid Tests
// ============================================================================

/// Test the default refinement factor.
#[test]
fn test_limit_grid_default_factor() {
    let mut density = gaussian(101);
    let grid = density.limit_grid(None).unwrap();

    assert_eq!(grid.factor, 198);
    assert_eq!(grid.bign, 100 * 198 + 1);
    assert_eq!(grid.grid.len(), grid.bign);
    assert_eq!(grid.cumsum.len(), grid.bign);

    // Coarse grids still refine at least twofold
    let mut coarse = gaussian(15_000);
    assert_eq!(coarse.limit_grid(None).unwrap().factor, 2);
}

/// Test that a zero refinement factor is rejected.
#[test]
fn test_limit_grid_invalid_factor() {
    let mut density = gaussian(21);

    assert_eq!(
        density.limit_grid(Some(0)),
        Err(DensityError::InvalidFactor(0))
    );
}

/// Test that one grid serves repeated queries.
#[test]
fn test_limit_grid_reuse() {
    let mut density = gaussian(61);
    let grid = density.limit_grid(Some(50)).unwrap();

    let first = density.limits(&[0.68], Some(&grid), None).unwrap();
    let again = density.limits(&[0.95, 0.68], Some(&grid), None).unwrap();
    let fresh = density.limits(&[0.68], None, Some(50)).unwrap();

    assert_eq!(first[0], again[1]);
    assert_eq!(first[0], fresh[0]);
}

/// Test that a grid built before a weight change is rejected.
#[test]
fn test_limit_grid_stale() {
    let mut density = gaussian(21);
    let grid = density.limit_grid(None).unwrap();

    density.normalize(Normalization::Integral).unwrap();

    assert!(matches!(
        density.limits(&[0.68], Some(&grid), None),
        Err(DensityError::StaleLimitGrid { .. })
    ));
}
