//! Ordering utilities for order-statistic thresholding.
//!
//! ## Purpose
//!
//! This module provides the sort, cumulative-sum, and binary-search
//! primitives shared by the contour level solver and the credible-interval
//! search.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting so tied weights keep grid order.
//! * **Robustness**: NaN compares equal to everything and never panics.
//! * **Search**: `search_sorted` returns the leftmost insertion point, even
//!   when the cumulative sum is not monotone (negative spline samples).
//!
//! ## Key concepts
//!
//! ### Sort-Accumulate-Search Pattern
//! 1. **Sort**: Order grid values ascending, keeping the permutation.
//! 2. **Accumulate**: Running sum of (possibly reweighted) values in that order.
//! 3. **Search**: Locate where a target mass falls in the running sum.
//!
//! ## Invariants
//!
//! * The permutation is a valid permutation of `0..n`.
//! * `cumulative_sum(v)[i] == v[0] + ... + v[i]`.
//!
//! ## Non-goals
//!
//! * This module does not interpolate thresholds; see the algorithms layer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Indices that sort `values` in ascending order (stable).
#[inline]
pub fn argsort<T: Float>(values: &[T]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();

    // Fast path: already ascending (common for refined monotone tails)
    if values.windows(2).all(|w| w[0] <= w[1]) {
        return indices;
    }

    indices.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));
    indices
}

/// Sorted copy of `values` in ascending order.
#[inline]
pub fn sorted<T: Float>(values: &[T]) -> Vec<T> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    out
}

// ============================================================================
// Accumulation and Search
// ============================================================================

/// Running sum of `values`.
#[inline]
pub fn cumulative_sum<T: Float>(values: &[T]) -> Vec<T> {
    let mut acc = T::zero();
    values
        .iter()
        .map(|&v| {
            acc = acc + v;
            acc
        })
        .collect()
}

/// Leftmost index `i` such that inserting `target` before `sorted[i]` keeps order.
///
/// Plain bisection: `sorted[mid] < target` moves right, anything else moves left.
#[inline]
pub fn search_sorted<T: Float>(sorted: &[T], target: T) -> usize {
    let mut lo = 0;
    let mut hi = sorted.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if sorted[mid] < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}
