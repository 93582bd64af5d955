//! Two-dimensional binned densities.
//!
//! [`Density2D`] holds weights on a uniform `x` by `y` grid, stored row-major
//! as `[y][x]`. It integrates with the 2D trapezoidal rule and evaluates a
//! bicubic interpolating surface built on first use. Contour levels come
//! from the shared [`GridDensity`] contract.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::density::grid::WeightGrid;
use crate::density::GridDensity;
use crate::engine::validator::Validator;
use crate::math::integration::trapezoid_2d;
use crate::math::spline::BicubicSurface;
use crate::primitives::errors::DensityError;

/// Density sampled on the grid `x` by `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Density2D<T> {
    x: Vec<T>,
    y: Vec<T>,
    grid: WeightGrid<T>,
    // Cell area
    spacing: T,
    view_ranges: Option<[(T, T); 2]>,
    surface: Option<BicubicSurface<T>>,
}

impl<T: Float> Density2D<T> {
    /// Density over `x` and `y` with row-major `[y][x]` weights (`None` zero-fills).
    pub fn new(x: Vec<T>, y: Vec<T>, p: Option<Vec<T>>) -> Result<Self, DensityError> {
        Validator::validate_axis(&x, "x")?;
        Validator::validate_axis(&y, "y")?;
        let grid = WeightGrid::new(vec![y.len(), x.len()], p)?;
        let spacing = (x[1] - x[0]) * (y[1] - y[0]);
        Ok(Self {
            x,
            y,
            grid,
            spacing,
            view_ranges: None,
            surface: None,
        })
    }

    /// Override the ranges reported by [`GridDensity::bounds`], `x` first.
    pub fn set_view_ranges(&mut self, ranges: Option<[(T, T); 2]>) {
        self.view_ranges = ranges;
    }

    /// `x` coordinates.
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// `y` coordinates.
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// Cell area.
    pub fn spacing(&self) -> T {
        self.spacing
    }

    /// Weight at grid point `(x[ix], y[iy])`.
    pub fn weight(&self, ix: usize, iy: usize) -> Option<T> {
        if ix >= self.x.len() {
            return None;
        }
        self.grid.values().get(iy * self.x.len() + ix).copied()
    }

    /// Fit the surface if it is not cached and return it.
    pub fn ensure_built(&mut self) -> Result<&BicubicSurface<T>, DensityError> {
        let surface = match self.surface.take() {
            Some(surface) => surface,
            None => {
                tracing::debug!(
                    nx = self.x.len(),
                    ny = self.y.len(),
                    generation = self.grid.generation(),
                    "fitting 2D density surface"
                );
                BicubicSurface::new(&self.x, &self.y, self.grid.values())?
            }
        };
        Ok(self.surface.insert(surface))
    }

    /// Density at each `(x, y)` point; points off the grid are clamped onto it.
    pub fn prob(&mut self, points: &[(T, T)]) -> Result<Vec<T>, DensityError> {
        let surface = self.ensure_built()?;
        Ok(points
            .iter()
            .map(|&(x, y)| surface.evaluate(x, y))
            .collect())
    }

    /// Density at a single point.
    pub fn prob_at(&mut self, x: T, y: T) -> Result<T, DensityError> {
        Ok(self.ensure_built()?.evaluate(x, y))
    }

    /// 2D trapezoidal integral of row-major `[y][x]` `values` on this grid.
    pub fn integrate(&self, values: &[T]) -> Result<T, DensityError> {
        Validator::validate_weights(values.len(), &[self.y.len(), self.x.len()])?;
        Ok(trapezoid_2d(
            values,
            self.x.len(),
            self.y.len(),
            self.spacing,
        ))
    }
}

impl<T: Float> GridDensity<T> for Density2D<T> {
    fn axes(&self) -> Vec<&[T]> {
        vec![self.y.as_slice(), self.x.as_slice()]
    }

    fn shape(&self) -> Vec<usize> {
        self.grid.shape().to_vec()
    }

    fn weights(&self) -> &[T] {
        self.grid.values()
    }

    fn set_weights(&mut self, weights: Option<Vec<T>>) -> Result<(), DensityError> {
        self.grid.assign(weights)?;
        self.surface = None;
        Ok(())
    }

    fn norm_integral(&self) -> T {
        trapezoid_2d(
            self.grid.values(),
            self.x.len(),
            self.y.len(),
            self.spacing,
        )
    }

    fn view_ranges(&self) -> Option<Vec<(T, T)>> {
        self.view_ranges.map(|ranges| ranges.to_vec())
    }

    fn generation(&self) -> u64 {
        self.grid.generation()
    }
}
