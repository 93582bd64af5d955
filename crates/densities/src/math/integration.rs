//! Trapezoidal integration over uniform density grids.
//!
//! ## Purpose
//!
//! This module integrates grid weights with the composite trapezoidal rule,
//! which is how a density grid is normalized to unit mass.
//!
//! ## Key concepts
//!
//! * **1D**: End points carry half weight, interior points full weight.
//! * **2D**: Corner cells carry 1/4, other edge cells 1/2, interior cells 1.
//! * **Spacing**: The weighted sum is scaled by the cell length (1D) or area (2D).
//!
//! ## Invariants
//!
//! * Every axis has at least two points.
//! * Values are stored row-major, outermost axis first.

// External dependencies
use num_traits::Float;

/// Composite trapezoidal integral of `values` sampled every `spacing`.
pub fn trapezoid_1d<T: Float>(values: &[T], spacing: T) -> T {
    let n = values.len();
    debug_assert!(n >= 2, "trapezoid_1d: need at least 2 samples");

    let two = T::from(2.0).unwrap();
    let interior = values[1..n - 1].iter().fold(T::zero(), |acc, &v| acc + v);
    ((values[0] + values[n - 1]) / two + interior) * spacing
}

/// 2D trapezoidal integral of a `[ny, nx]` row-major grid with cell area `spacing`.
pub fn trapezoid_2d<T: Float>(values: &[T], nx: usize, ny: usize, spacing: T) -> T {
    debug_assert!(nx >= 2 && ny >= 2, "trapezoid_2d: need at least 2x2 samples");
    debug_assert_eq!(values.len(), nx * ny);

    let at = |j: usize, i: usize| values[j * nx + i];
    let two = T::from(2.0).unwrap();
    let four = T::from(4.0).unwrap();

    let mut interior = T::zero();
    for j in 1..ny - 1 {
        for i in 1..nx - 1 {
            interior = interior + at(j, i);
        }
    }

    let corners = at(0, 0) + at(0, nx - 1) + at(ny - 1, 0) + at(ny - 1, nx - 1);

    let mut edges = T::zero();
    for j in 1..ny - 1 {
        edges = edges + at(j, 0) + at(j, nx - 1);
    }
    for i in 1..nx - 1 {
        edges = edges + at(0, i) + at(ny - 1, i);
    }

    (interior + corners / four + edges / two) * spacing
}
