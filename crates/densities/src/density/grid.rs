//! Shape-checked weight storage shared by the density types.
//!
//! ## Purpose
//!
//! Both density types own an N-dimensional weight array whose extents must
//! match their axes. This module holds that array together with a
//! generation counter that advances on every assignment, so caches and
//! precomputed grids can tell when they are out of date.
//!
//! ## Invariants
//!
//! * `values.len()` equals the product of `shape`.
//! * `generation` strictly increases with every successful assignment.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::DensityError;
use crate::primitives::shape::cell_count;

/// Row-major weights with a fixed shape.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightGrid<T> {
    values: Vec<T>,
    shape: Vec<usize>,
    generation: u64,
}

impl<T: Float> WeightGrid<T> {
    /// Weights of the given `shape`; `None` zero-fills.
    pub fn new(shape: Vec<usize>, values: Option<Vec<T>>) -> Result<Self, DensityError> {
        let mut grid = Self {
            values: Vec::new(),
            shape,
            generation: 0,
        };
        grid.assign(values)?;
        Ok(grid)
    }

    /// Replace the weights; `None` zero-fills.
    pub fn assign(&mut self, values: Option<Vec<T>>) -> Result<(), DensityError> {
        self.values = match values {
            Some(values) => {
                Validator::validate_weights(values.len(), &self.shape)?;
                values
            }
            None => vec![T::zero(); cell_count(&self.shape)],
        };
        self.generation += 1;
        Ok(())
    }

    /// Flat weights, outermost axis first.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Extents in storage order.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Assignment counter.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
