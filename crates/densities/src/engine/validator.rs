//! Input validation for density axes, weights, and queries.
//!
//! ## Purpose
//!
//! This module checks the inputs that the density types accept from
//! upstream binning code and from downstream queries: axis coordinates,
//! weight array shapes, requested probabilities, and refinement factors.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Axes**: At least two finite, strictly increasing coordinates.
//! * **Shapes**: Weight extents must equal axis sizes, outermost axis first.
//! * **Probabilities**: Finite and within `[0, 1]`.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check that axes are uniformly spaced.
//! * This module does not reject negative weights.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DensityError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for density grid inputs.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Axis Validation
    // ========================================================================

    /// Validate an axis coordinate array.
    pub fn validate_axis<T: Float>(axis: &[T], name: &str) -> Result<(), DensityError> {
        // Check 1: Enough points to define a spacing
        if axis.len() < 2 {
            return Err(DensityError::InvalidAxis(format!(
                "{name} needs at least 2 points, got {}",
                axis.len()
            )));
        }

        // Check 2: Finite values
        if let Some(i) = axis.iter().position(|v| !v.is_finite()) {
            return Err(DensityError::InvalidAxis(format!(
                "{name}[{i}]={}",
                axis[i].to_f64().unwrap_or(f64::NAN)
            )));
        }

        // Check 3: Strictly increasing
        if let Some(i) = axis.windows(2).position(|w| w[1] <= w[0]) {
            return Err(DensityError::InvalidAxis(format!(
                "{name} must be strictly increasing ({name}[{}] >= {name}[{}])",
                i,
                i + 1
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Shape Validation
    // ========================================================================

    /// Validate that a flat weight array of `len` cells fits `axis_sizes`.
    ///
    /// `axis_sizes` is in storage order (outermost first). A single axis
    /// reports its own extent; otherwise only the cell count is known.
    pub fn validate_weights(len: usize, axis_sizes: &[usize]) -> Result<(), DensityError> {
        let expected: usize = axis_sizes.iter().product();
        if len == expected {
            return Ok(());
        }
        match axis_sizes {
            [size] => Err(DensityError::ShapeMismatch {
                axis: 0,
                expected: *size,
                got: len,
            }),
            _ => Err(DensityError::LengthMismatch { expected, got: len }),
        }
    }

    /// Validate nested rows against `[rows, columns]` extents.
    ///
    /// Reports the row count first, then the first row of the wrong width.
    pub fn validate_rows<T>(
        rows: &[Vec<T>],
        n_rows: usize,
        n_cols: usize,
    ) -> Result<(), DensityError> {
        if rows.len() != n_rows {
            return Err(DensityError::ShapeMismatch {
                axis: 0,
                expected: n_rows,
                got: rows.len(),
            });
        }
        if let Some(row) = rows.iter().find(|row| row.len() != n_cols) {
            return Err(DensityError::ShapeMismatch {
                axis: 1,
                expected: n_cols,
                got: row.len(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Query Validation
    // ========================================================================

    /// Validate a requested enclosed probability.
    pub fn validate_probability<T: Float>(p: T) -> Result<(), DensityError> {
        if !p.is_finite() || p < T::zero() || p > T::one() {
            return Err(DensityError::InvalidProbability(
                p.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a list of requested probabilities.
    pub fn validate_probabilities<T: Float>(ps: &[T]) -> Result<(), DensityError> {
        ps.iter().try_for_each(|&p| Self::validate_probability(p))
    }

    /// Validate a limit-grid refinement factor.
    pub fn validate_factor(factor: usize) -> Result<(), DensityError> {
        if factor == 0 {
            return Err(DensityError::InvalidFactor(factor));
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Report a parameter that was configured more than once.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), DensityError> {
        if let Some(parameter) = duplicate {
            return Err(DensityError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
