//! # densities: Contour levels and credible intervals from binned densities
//!
//! Turns a binned estimate of a 1D or 2D probability density into the two
//! artifacts plotting and reporting code needs:
//!
//! - **Contour levels**: density thresholds whose super-level sets enclose a
//!   requested probability mass (any number of dimensions).
//! - **Credible intervals**: for 1D densities, the equal-density coordinate
//!   range enclosing a requested mass, flagging sides cut off by the grid.
//!
//! Grids are reconstructed continuously with interpolating (not-a-knot)
//! cubic splines, integrated with the trapezoidal rule, and thresholded by
//! order statistics on cumulative mass.
//!
//! ## Quick Start
//!
//! ```rust
//! use densities::prelude::*;
//!
//! let x: Vec<f64> = (0..101).map(|i| -5.0 + 0.1 * i as f64).collect();
//! let p: Vec<f64> = x.iter().map(|&v| (-0.5 * v * v).exp()).collect();
//!
//! let mut density = Density1D::builder(x)
//!     .weights(p)
//!     .normalize(Integral)
//!     .build()?;
//!
//! let levels = density.contour_levels(&[0.68, 0.95])?;
//! assert!(levels[0] > levels[1]);
//!
//! let interval = density.limit(0.68)?;
//! assert!(interval.has_lower && interval.has_upper);
//! assert!((interval.upper - 1.0).abs() < 0.05);
//! # Result::<(), DensityError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, DensityError>`. Errors are
//! properties of the input (a mismatched weight array, an all-zero grid, a
//! contour too extreme for the grid) and retrying the same call fails again.
//!
//! ## Concurrency
//!
//! Spline reconstructions are cached lazily and the evaluation methods take
//! `&mut self`. To share a density between threads, call `ensure_built()`
//! first and evaluate through the returned spline or surface.
//!
//! ## Minimal Usage (no_std)
//!
//! ```toml
//! [dependencies]
//! densities = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - order-statistic thresholding.
mod algorithms;

// Layer 4: Engine - input validation.
mod engine;

// Layer 5: Density - density types and the shared grid contract.
mod density;

// High-level API: builders and the contour solver.
mod api;

pub use api::*;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        contour_levels, BicubicSurface, ContourOptions, CredibleInterval, CubicSpline, Density1D,
        Density1DBuilder, Density2D, Density2DBuilder, DensityError, GridDensity, LimitGrid,
        Normalization, Normalization::Integral, Normalization::Max, DEFAULT_CONTOURS,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod density {
        pub use crate::density::*;
    }
}
