//! Layer 5: Density
//!
//! # Purpose
//!
//! This layer provides the density types consumed by plotting and reporting
//! code, and the shared [`GridDensity`] contract they implement:
//! normalization, weight assignment, bounds, and contour levels.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Density ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! ## Concurrency
//!
//! Spline reconstructions are built lazily on first evaluation, which needs
//! `&mut self`. Call `ensure_built` before sharing a density across threads
//! and evaluate through the returned reference.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::contours::{find_contour_levels, ContourOptions, DEFAULT_CONTOURS};
use crate::engine::validator::Validator;
use crate::primitives::errors::DensityError;

/// Weight storage with shape checks.
pub mod grid;

/// 1D densities with credible intervals.
pub mod density1d;

/// 2D densities.
pub mod density2d;

// ============================================================================
// Normalization Mode
// ============================================================================

/// How [`GridDensity::normalize`] rescales the weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Divide by the trapezoidal integral so the density integrates to one.
    #[default]
    Integral,

    /// Divide by the largest weight so the peak is one.
    Max,
}

impl FromStr for Normalization {
    type Err = DensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integral" => Ok(Self::Integral),
            "max" => Ok(Self::Max),
            other => Err(DensityError::UnknownNormalizationMode(other.to_string())),
        }
    }
}

// ============================================================================
// Grid Density Contract
// ============================================================================

/// Shared behaviour of binned densities.
pub trait GridDensity<T: Float> {
    /// Axis coordinates in storage order (outermost first).
    fn axes(&self) -> Vec<&[T]>;

    /// Flat weights in storage order.
    fn weights(&self) -> &[T];

    /// Replace the weights (`None` zero-fills) and drop any cached reconstruction.
    fn set_weights(&mut self, weights: Option<Vec<T>>) -> Result<(), DensityError>;

    /// Trapezoidal integral of the current weights.
    fn norm_integral(&self) -> T;

    /// Explicit view ranges, `x` first, if set.
    fn view_ranges(&self) -> Option<Vec<(T, T)>>;

    /// Counter advanced on every weight assignment.
    fn generation(&self) -> u64;

    /// Weight array extents, outermost axis first.
    fn shape(&self) -> Vec<usize> {
        self.axes().iter().map(|axis| axis.len()).collect()
    }

    /// `(min, max)` per axis in `x, y, ...` order, or the view ranges if set.
    fn bounds(&self) -> Vec<(T, T)> {
        if let Some(ranges) = self.view_ranges() {
            return ranges;
        }
        self.axes()
            .iter()
            .rev()
            .map(|axis| (axis[0], axis[axis.len() - 1]))
            .collect()
    }

    /// Rescale the weights in place.
    ///
    /// `Integral` divides by [`GridDensity::norm_integral`] unchecked, so a
    /// grid that integrates to zero comes back as NaN or infinity.
    fn normalize(&mut self, mode: Normalization) -> Result<(), DensityError> {
        let norm = normalization_constant(mode, self.weights(), || self.norm_integral())?;
        let scaled = self.weights().iter().map(|&w| w / norm).collect();
        self.set_weights(Some(scaled))
    }

    /// Normalized copy, leaving `self` untouched.
    fn normalized(&self, mode: Normalization) -> Result<Self, DensityError>
    where
        Self: Clone + Sized,
    {
        let mut copy = self.clone();
        copy.normalize(mode)?;
        Ok(copy)
    }

    /// Density levels enclosing each of `contours` of the mass.
    fn contour_levels(&self, contours: &[T]) -> Result<Vec<T>, DensityError> {
        Validator::validate_probabilities(contours)?;
        find_contour_levels(
            self.weights(),
            &self.shape(),
            contours,
            ContourOptions::default(),
        )
    }

    /// Contour levels for the default 68% and 95% fractions.
    fn default_contour_levels(&self) -> Result<Vec<T>, DensityError> {
        let contours: Vec<T> = DEFAULT_CONTOURS
            .iter()
            .map(|&c| T::from(c).unwrap())
            .collect();
        self.contour_levels(&contours)
    }
}

/// Divisor applied by [`GridDensity::normalize`].
pub fn normalization_constant<T: Float>(
    mode: Normalization,
    weights: &[T],
    integral: impl FnOnce() -> T,
) -> Result<T, DensityError> {
    match mode {
        Normalization::Integral => Ok(integral()),
        Normalization::Max => {
            let max = weights
                .iter()
                .fold(T::neg_infinity(), |acc, &w| if w > acc || w.is_nan() { w } else { acc });
            if max == T::zero() {
                return Err(DensityError::EmptyDensity);
            }
            Ok(max)
        }
    }
}
