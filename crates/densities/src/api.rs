//! High-level API for density grids.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: fluent builders for
//! [`Density1D`] and [`Density2D`], and the free-standing contour level
//! solver for grids of any dimension.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Builders with sensible defaults for all optional parameters.
//! * **Validated**: Axes and shapes are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Density1D::builder(x)` or `Density2D::builder(x, y)`.
//! 2. Chain configuration methods (`.weights()`, `.view_range()`, etc.).
//! 3. Call `.build()` to validate and construct the density.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::contours::find_contour_levels;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::contours::{ContourOptions, DEFAULT_CONTOURS};
pub use crate::algorithms::limits::{CredibleInterval, LimitGrid};
pub use crate::density::density1d::Density1D;
pub use crate::density::density2d::Density2D;
pub use crate::density::{GridDensity, Normalization};
pub use crate::math::spline::{BicubicSurface, CubicSpline};
pub use crate::primitives::errors::DensityError;

// ============================================================================
// Contour Levels
// ============================================================================

/// Density levels enclosing each of `contours` of the mass of a row-major grid.
///
/// `shape` lists the extents outermost axis first. Any number of dimensions
/// is supported.
pub fn contour_levels<T: Float>(
    values: &[T],
    shape: &[usize],
    contours: &[T],
    options: ContourOptions<T>,
) -> Result<Vec<T>, DensityError> {
    Validator::validate_probabilities(contours)?;
    find_contour_levels(values, shape, contours, options)
}

// ============================================================================
// 1D Builder
// ============================================================================

/// Fluent builder for [`Density1D`].
#[derive(Debug, Clone)]
pub struct Density1DBuilder<T> {
    /// Axis coordinates.
    pub x: Vec<T>,

    /// Weights at each coordinate (zero-filled if unset).
    pub weights: Option<Vec<T>>,

    /// Range reported by `bounds()` instead of the axis ends.
    pub view_range: Option<(T, T)>,

    /// Normalization applied after construction.
    pub normalization: Option<Normalization>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Density1D<T> {
    /// Start building a density over `x`.
    pub fn builder(x: Vec<T>) -> Density1DBuilder<T> {
        Density1DBuilder::new(x)
    }
}

impl<T: Float> Density1DBuilder<T> {
    /// Create a new builder over `x` with default settings.
    pub fn new(x: Vec<T>) -> Self {
        Self {
            x,
            weights: None,
            view_range: None,
            normalization: None,
            duplicate_param: None,
        }
    }

    /// Set the weights at each coordinate.
    pub fn weights(mut self, weights: Vec<T>) -> Self {
        if self.weights.is_some() {
            self.duplicate_param = Some("weights");
        }
        self.weights = Some(weights);
        self
    }

    /// Set the range reported by `bounds()`.
    pub fn view_range(mut self, min: T, max: T) -> Self {
        if self.view_range.is_some() {
            self.duplicate_param = Some("view_range");
        }
        self.view_range = Some((min, max));
        self
    }

    /// Normalize the weights once the density is built.
    pub fn normalize(mut self, mode: Normalization) -> Self {
        if self.normalization.is_some() {
            self.duplicate_param = Some("normalize");
        }
        self.normalization = Some(mode);
        self
    }

    /// Validate and construct the density.
    pub fn build(self) -> Result<Density1D<T>, DensityError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let mut density = Density1D::new(self.x, self.weights)?;
        density.set_view_range(self.view_range);
        if let Some(mode) = self.normalization {
            density.normalize(mode)?;
        }
        Ok(density)
    }
}

// ============================================================================
// 2D Builder
// ============================================================================

/// Fluent builder for [`Density2D`].
#[derive(Debug, Clone)]
pub struct Density2DBuilder<T> {
    /// `x` coordinates.
    pub x: Vec<T>,

    /// `y` coordinates.
    pub y: Vec<T>,

    /// Row-major `[y][x]` weights (zero-filled if unset).
    pub weights: Option<Vec<T>>,

    /// Ranges reported by `bounds()`, `x` first.
    pub view_ranges: Option<[(T, T); 2]>,

    /// Normalization applied after construction.
    pub normalization: Option<Normalization>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    /// First row-shape error seen by `rows()`, reported at `build()`.
    #[doc(hidden)]
    pub shape_error: Option<DensityError>,
}

impl<T: Float> Density2D<T> {
    /// Start building a density over `x` by `y`.
    pub fn builder(x: Vec<T>, y: Vec<T>) -> Density2DBuilder<T> {
        Density2DBuilder::new(x, y)
    }
}

impl<T: Float> Density2DBuilder<T> {
    /// Create a new builder over `x` by `y` with default settings.
    pub fn new(x: Vec<T>, y: Vec<T>) -> Self {
        Self {
            x,
            y,
            weights: None,
            view_ranges: None,
            normalization: None,
            duplicate_param: None,
            shape_error: None,
        }
    }

    /// Set the row-major `[y][x]` weights.
    pub fn weights(mut self, weights: Vec<T>) -> Self {
        if self.weights.is_some() {
            self.duplicate_param = Some("weights");
        }
        self.weights = Some(weights);
        self
    }

    /// Set the weights from rows, one row per `y` coordinate.
    ///
    /// Each row must hold one weight per `x` coordinate; a mismatch is
    /// reported by `build()` as [`DensityError::ShapeMismatch`].
    pub fn rows(mut self, rows: &[Vec<T>]) -> Self {
        if let Err(err) = Validator::validate_rows(rows, self.y.len(), self.x.len()) {
            self.shape_error.get_or_insert(err);
        }
        let flat = rows.iter().flat_map(|row| row.iter().copied()).collect();
        self.weights(flat)
    }

    /// Set the ranges reported by `bounds()`, `x` first.
    pub fn view_ranges(mut self, x_range: (T, T), y_range: (T, T)) -> Self {
        if self.view_ranges.is_some() {
            self.duplicate_param = Some("view_ranges");
        }
        self.view_ranges = Some([x_range, y_range]);
        self
    }

    /// Normalize the weights once the density is built.
    pub fn normalize(mut self, mode: Normalization) -> Self {
        if self.normalization.is_some() {
            self.duplicate_param = Some("normalize");
        }
        self.normalization = Some(mode);
        self
    }

    /// Validate and construct the density.
    pub fn build(self) -> Result<Density2D<T>, DensityError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        if let Some(err) = self.shape_error {
            return Err(err);
        }
        let mut density = Density2D::new(self.x, self.y, self.weights)?;
        density.set_view_ranges(self.view_ranges);
        if let Some(mode) = self.normalization {
            density.normalize(mode)?;
        }
        Ok(density)
    }
}
