//! Layer 3: Algorithms
//!
//! This layer implements the order-statistic thresholding at the heart of the
//! crate: contour levels for grids of any dimension, and credible intervals
//! for 1D densities. It is orchestrated by the density types.

// Contour level solver.
pub mod contours;

// Refinement grid and credible-interval search.
pub mod limits;
