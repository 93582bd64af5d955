//! Error types for density grid operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions raised while building density
//! grids, normalizing them, and extracting contour levels or credible
//! intervals from them.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., expected vs. actual axis sizes).
//! * **Deterministic**: Every error is a property of the input; retrying the same call fails again.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Shape validation**: Weight arrays must match the axis sizes exactly.
//! 2. **Normalization**: Max-normalization of an all-zero grid is undefined.
//! 3. **Coverage**: A requested mass may need more of the grid than is available.
//! 4. **Builder misuse**: Parameters set twice are reported at `build()`.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide partial results or fallbacks.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for density grid operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DensityError {
    /// The weight array disagrees with the axis sizes.
    ShapeMismatch {
        /// Axis index in storage order (outermost first).
        axis: usize,
        /// Number of points on the axis.
        expected: usize,
        /// Extent of the weight array along that axis.
        got: usize,
    },

    /// A flat weight array holds the wrong number of cells for the grid.
    LengthMismatch {
        /// Product of the axis sizes.
        expected: usize,
        /// Length of the flat array.
        got: usize,
    },

    /// Max-normalization requested on a grid whose maximum weight is zero.
    EmptyDensity,

    /// Normalization mode name is neither `"integral"` nor `"max"`.
    UnknownNormalizationMode(String),

    /// The cumulative mass needed for the requested contour falls outside the grid.
    ContourOutOfRange {
        /// The requested enclosed probability.
        contour: f64,
    },

    /// Axis coordinates are unusable (too short, non-finite, or not increasing).
    InvalidAxis(String),

    /// Requested probability is non-finite or outside `[0, 1]`.
    InvalidProbability(f64),

    /// Refinement factor for the limit grid must be at least 1.
    InvalidFactor(usize),

    /// A precomputed limit grid no longer matches the density weights.
    StaleLimitGrid {
        /// Weight generation the grid was built from.
        built: u64,
        /// Weight generation currently held by the density.
        current: u64,
    },

    /// Parameter was set multiple times in a builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DensityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::ShapeMismatch {
                axis,
                expected,
                got,
            } => write!(
                f,
                "Array size mismatch in density arrays: axis {axis} has {expected} points, weights have {got}"
            ),
            Self::LengthMismatch { expected, got } => write!(
                f,
                "Array size mismatch in density arrays: grid has {expected} cells, weights have {got}"
            ),
            Self::EmptyDensity => write!(f, "No samples in bin: maximum density is zero"),
            Self::UnknownNormalizationMode(mode) => {
                write!(f, "Unknown normalization mode: '{mode}' (expected 'integral' or 'max')")
            }
            Self::ContourOutOfRange { contour } => {
                write!(f, "Contour level for {contour} outside plotted ranges")
            }
            Self::InvalidAxis(msg) => write!(f, "Invalid axis: {msg}"),
            Self::InvalidProbability(p) => {
                write!(f, "Invalid probability: {p} (must be in [0, 1])")
            }
            Self::InvalidFactor(factor) => {
                write!(f, "Invalid refinement factor: {factor} (must be >= 1)")
            }
            Self::StaleLimitGrid { built, current } => write!(
                f,
                "Limit grid was built from weight generation {built}, density is at {current}"
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
            ),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for DensityError {}
