//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the density types:
//! - Trapezoidal integration weights
//! - Boundary (half-edge) weighting
//! - Interpolating cubic splines and bicubic surfaces
//!
//! These are reusable mathematical building blocks with no density-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Density
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Trapezoidal integration over uniform grids.
pub mod integration;

/// Half-edge boundary weighting.
pub mod boundary;

/// Cubic splines and bicubic surfaces.
pub mod spline;
