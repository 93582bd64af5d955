//! Contour levels by order statistics on cumulative grid mass.
//!
//! ## Purpose
//!
//! This module finds the density thresholds whose super-level sets enclose a
//! requested fraction of the total mass, for a grid of any dimension.
//!
//! ## Design notes
//!
//! * **Order statistic**: Sorting the cells and accumulating mass in that
//!   order turns "which level encloses mass m" into a single binary search.
//! * **Sub-bin resolution**: The threshold is interpolated linearly between
//!   the two sorted cells that bracket the target mass.
//! * **Edge weighting**: With the half-edge policy, boundary cells carry
//!   `2^-k` of their weight in both the total and the running sum.
//!
//! ## Key concepts
//!
//! * **Target**: `(1 - contour) * norm - missing_norm` is the mass that lies
//!   *below* the threshold.
//! * **Ordering**: Cells are ordered by their raw weight; the running sum and
//!   the interpolated values use the edge-weighted copies in that order.
//! * **Pairing**: Interpolation brackets the target with sorted entries
//!   `ix - 1` and `ix`.
//!
//! ## Invariants
//!
//! * One level is returned per requested contour, in request order.
//! * Larger enclosed mass never yields a higher level.
//!
//! ## Non-goals
//!
//! * This module does not validate requested probabilities.
//! * This module does not trace contour lines through the grid.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::boundary::{apply_edge_policy, EdgePolicy};
use crate::primitives::errors::DensityError;
use crate::primitives::shape::cell_count;
use crate::primitives::sorting::{argsort, cumulative_sum, search_sorted};

/// Confidence fractions used when none are requested.
pub const DEFAULT_CONTOURS: [f64; 2] = [0.68, 0.95];

// ============================================================================
// Solver Configuration
// ============================================================================

/// Options for the contour level solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourOptions<T> {
    /// Mass known to lie outside the grid (e.g. far tails that were not binned).
    pub missing_norm: T,

    /// Integrate boundary cells over half a bin in each direction.
    pub half_edge: bool,
}

impl<T: Float> Default for ContourOptions<T> {
    fn default() -> Self {
        Self {
            missing_norm: T::zero(),
            half_edge: true,
        }
    }
}

impl<T: Float> ContourOptions<T> {
    /// Set the mass known to lie outside the grid.
    pub fn missing_norm(mut self, missing_norm: T) -> Self {
        self.missing_norm = missing_norm;
        self
    }

    /// Enable or disable half-edge weighting.
    pub fn half_edge(mut self, half_edge: bool) -> Self {
        self.half_edge = half_edge;
        self
    }
}

// ============================================================================
// Solver
// ============================================================================

/// Density levels enclosing each of `contours` of the grid mass.
///
/// `values` is a row-major grid of non-negative weights with the given
/// `shape`. Fails with [`DensityError::ContourOutOfRange`] when a target mass
/// falls below the first (or beyond the last) entry of the running sum.
pub fn find_contour_levels<T: Float>(
    values: &[T],
    shape: &[usize],
    contours: &[T],
    options: ContourOptions<T>,
) -> Result<Vec<T>, DensityError> {
    let expected = cell_count(shape);
    if values.len() != expected {
        return Err(DensityError::LengthMismatch {
            expected,
            got: values.len(),
        });
    }

    let adjusted = apply_edge_policy(values, shape, EdgePolicy::from_half_edge(options.half_edge));
    let norm = adjusted.iter().fold(T::zero(), |acc, &v| acc + v);

    // Order by raw weight, accumulate edge-weighted mass
    let order = argsort(values);
    let sorted: Vec<T> = order.iter().map(|&i| adjusted[i]).collect();
    let cumsum = cumulative_sum(&sorted);

    contours
        .iter()
        .map(|&contour| {
            let target = (T::one() - contour) * norm - options.missing_norm;
            let ix = search_sorted(&cumsum, target);
            if ix == 0 || ix >= cumsum.len() {
                return Err(DensityError::ContourOutOfRange {
                    contour: contour.to_f64().unwrap_or(f64::NAN),
                });
            }

            let h = cumsum[ix] - cumsum[ix - 1];
            let d = (cumsum[ix] - target) / h;
            let level = sorted[ix] * (T::one() - d) + d * sorted[ix - 1];

            tracing::debug!(
                contour = contour.to_f64().unwrap_or(f64::NAN),
                index = ix,
                level = level.to_f64().unwrap_or(f64::NAN),
                "resolved contour level"
            );
            Ok(level)
        })
        .collect()
}
