//! One-dimensional binned densities.
//!
//! ## Purpose
//!
//! This module provides [`Density1D`], a density sampled on a uniform axis.
//! It reconstructs a continuous curve with an interpolating cubic spline,
//! integrates with the trapezoidal rule, and extracts equal-density credible
//! intervals that may be cut off by the grid edges.
//!
//! ## Design notes
//!
//! * **Lazy reconstruction**: The spline is fitted on first evaluation and
//!   dropped whenever the weights change.
//! * **Batch evaluation**: [`Density1D::prob`] takes and returns slices;
//!   [`Density1D::prob_at`] is the single-point convenience.
//! * **Explicit refinement**: [`Density1D::limit_grid`] returns an immutable
//!   [`LimitGrid`] that can be passed back into [`Density1D::limits`].
//!
//! ## Invariants
//!
//! * `weights().len() == x().len()` at all times.
//! * The cached spline, when present, was fitted to the current weights.
//!
//! ## Non-goals
//!
//! * This module does not bin raw samples.
//! * This module does not check that the axis is uniformly spaced.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::limits::{default_factor, find_limits, CredibleInterval, LimitGrid};
use crate::density::grid::WeightGrid;
use crate::density::GridDensity;
use crate::engine::validator::Validator;
use crate::math::integration::trapezoid_1d;
use crate::math::spline::CubicSpline;
use crate::primitives::errors::DensityError;

// ============================================================================
// Density1D
// ============================================================================

/// Density sampled at uniformly spaced points `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Density1D<T> {
    x: Vec<T>,
    grid: WeightGrid<T>,
    spacing: T,
    view_range: Option<(T, T)>,
    spline: Option<CubicSpline<T>>,
}

impl<T: Float> Density1D<T> {
    /// Density over `x` with weights `p` (`None` zero-fills).
    pub fn new(x: Vec<T>, p: Option<Vec<T>>) -> Result<Self, DensityError> {
        Validator::validate_axis(&x, "x")?;
        let grid = WeightGrid::new(vec![x.len()], p)?;
        let spacing = x[1] - x[0];
        Ok(Self {
            x,
            grid,
            spacing,
            view_range: None,
            spline: None,
        })
    }

    /// Override the range reported by [`GridDensity::bounds`].
    pub fn set_view_range(&mut self, range: Option<(T, T)>) {
        self.view_range = range;
    }

    /// Axis coordinates.
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// Number of grid points.
    pub fn n(&self) -> usize {
        self.x.len()
    }

    /// Distance between neighbouring grid points.
    pub fn spacing(&self) -> T {
        self.spacing
    }

    // ========================================================================
    // Reconstruction
    // ========================================================================

    /// Fit the spline if it is not cached and return it.
    pub fn ensure_built(&mut self) -> Result<&CubicSpline<T>, DensityError> {
        cached_spline(&mut self.spline, &self.x, &self.grid)
    }

    /// Cached spline, if one has been fitted to the current weights.
    pub fn spline(&self) -> Option<&CubicSpline<T>> {
        self.spline.as_ref()
    }

    /// Density (or its `derivative`-th derivative) at each of `xs`.
    ///
    /// Points outside `[x[0], x[n - 1]]` evaluate to zero.
    pub fn prob(&mut self, xs: &[T], derivative: usize) -> Result<Vec<T>, DensityError> {
        let spline = self.ensure_built()?;
        Ok(xs.iter().map(|&x| spline.evaluate(x, derivative)).collect())
    }

    /// Density at a single point.
    pub fn prob_at(&mut self, x: T) -> Result<T, DensityError> {
        Ok(self.ensure_built()?.evaluate(x, 0))
    }

    // ========================================================================
    // Integration
    // ========================================================================

    /// Trapezoidal integral of `values` sampled on this density's axis.
    pub fn integrate(&self, values: &[T]) -> Result<T, DensityError> {
        Validator::validate_weights(values.len(), &[self.x.len()])?;
        Ok(trapezoid_1d(values, self.spacing))
    }

    // ========================================================================
    // Credible Intervals
    // ========================================================================

    /// Refined resampling used by the interval search.
    ///
    /// `factor` defaults to `max(2, 20000 / n)` refined points per cell.
    pub fn limit_grid(&mut self, factor: Option<usize>) -> Result<LimitGrid<T>, DensityError> {
        let factor = factor.unwrap_or_else(|| default_factor(self.x.len()));
        Validator::validate_factor(factor)?;
        let spline = cached_spline(&mut self.spline, &self.x, &self.grid)?;
        LimitGrid::build(
            spline,
            &self.x,
            self.grid.values(),
            factor,
            self.grid.generation(),
        )
    }

    /// Credible intervals enclosing each probability in `ps`, in order.
    ///
    /// Uses `grid` when given (it must come from the current weights),
    /// otherwise builds one with `accuracy_factor`.
    pub fn limits(
        &mut self,
        ps: &[T],
        grid: Option<&LimitGrid<T>>,
        accuracy_factor: Option<usize>,
    ) -> Result<Vec<CredibleInterval<T>>, DensityError> {
        Validator::validate_probabilities(ps)?;

        let owned;
        let grid = match grid {
            Some(grid) => {
                if grid.generation != self.grid.generation() {
                    return Err(DensityError::StaleLimitGrid {
                        built: grid.generation,
                        current: self.grid.generation(),
                    });
                }
                grid
            }
            None => {
                owned = self.limit_grid(accuracy_factor)?;
                &owned
            }
        };

        let x_last = self.x[self.x.len() - 1];
        ps.iter().map(|&p| find_limits(grid, x_last, p)).collect()
    }

    /// Credible interval enclosing probability `p`.
    pub fn limit(&mut self, p: T) -> Result<CredibleInterval<T>, DensityError> {
        Validator::validate_probability(p)?;
        let grid = self.limit_grid(None)?;
        find_limits(&grid, self.x[self.x.len() - 1], p)
    }
}

// Fitted spline for the current weights, fitting it on first use.
fn cached_spline<'a, T: Float>(
    cache: &'a mut Option<CubicSpline<T>>,
    x: &[T],
    grid: &WeightGrid<T>,
) -> Result<&'a CubicSpline<T>, DensityError> {
    let spline = match cache.take() {
        Some(spline) => spline,
        None => {
            tracing::debug!(
                n = x.len(),
                generation = grid.generation(),
                "fitting 1D density spline"
            );
            CubicSpline::new(x, grid.values())?
        }
    };
    Ok(cache.insert(spline))
}

impl<T: Float> GridDensity<T> for Density1D<T> {
    fn axes(&self) -> Vec<&[T]> {
        vec![self.x.as_slice()]
    }

    fn shape(&self) -> Vec<usize> {
        self.grid.shape().to_vec()
    }

    fn weights(&self) -> &[T] {
        self.grid.values()
    }

    fn set_weights(&mut self, weights: Option<Vec<T>>) -> Result<(), DensityError> {
        self.grid.assign(weights)?;
        self.spline = None;
        Ok(())
    }

    fn norm_integral(&self) -> T {
        trapezoid_1d(self.grid.values(), self.spacing)
    }

    fn view_ranges(&self) -> Option<Vec<(T, T)>> {
        self.view_range.map(|range| vec![range])
    }

    fn generation(&self) -> u64 {
        self.grid.generation()
    }
}
