//! Half-edge weighting for grid boundary cells.
//!
//! ## Purpose
//!
//! Grid cells on a boundary face only cover half a bin along that axis.
//! Weighting them down before accumulating mass keeps contour targets
//! consistent with the trapezoidal normalization.
//!
//! ## Key concepts
//!
//! * **Per-axis halving**: The first and last slice along every axis is halved.
//! * **Corners**: A cell on `k` boundary faces is scaled by `2^-k`.
//!
//! ## Invariants
//!
//! * The output has the same length and ordering as the input.
//! * Interior cells are left unchanged.
//!
//! ## Non-goals
//!
//! * This module does not modify input data in place.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::shape::{boundary_faces, strides};

// ============================================================================
// Edge Policy
// ============================================================================

/// How boundary cells contribute mass when accumulating a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Halve every boundary slice along each axis.
    #[default]
    HalfEdge,

    /// Count every cell with full weight.
    FullCell,
}

impl EdgePolicy {
    /// Policy for the `half_edge` flag.
    pub fn from_half_edge(half_edge: bool) -> Self {
        if half_edge {
            Self::HalfEdge
        } else {
            Self::FullCell
        }
    }
}

// ============================================================================
// Edge Weighting Function
// ============================================================================

/// Apply an edge policy to a row-major grid of the given `shape`.
pub fn apply_edge_policy<T: Float>(values: &[T], shape: &[usize], policy: EdgePolicy) -> Vec<T> {
    if policy == EdgePolicy::FullCell {
        return values.to_vec();
    }

    let strides = strides(shape);
    let half = T::from(0.5).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(flat, &v)| {
            let faces = boundary_faces(flat, shape, &strides);
            (0..faces).fold(v, |acc, _| acc * half)
        })
        .collect()
}
