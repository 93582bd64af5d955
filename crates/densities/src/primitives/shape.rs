//! Shape helpers for row-major N-dimensional weight arrays.
//!
//! Grids are stored flat in row-major order with the outermost axis first,
//! so a 2D density over `(x, y)` has shape `[ny, nx]`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Total number of cells described by `shape`.
#[inline]
pub fn cell_count(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Row-major strides for `shape`.
pub fn strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for axis in (0..shape.len().saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1] * shape[axis + 1];
    }
    strides
}

/// Number of grid faces (first or last slice along some axis) a flat index lies on.
///
/// An axis of extent 1 counts twice: its only slice is both first and last.
#[inline]
pub fn boundary_faces(flat: usize, shape: &[usize], strides: &[usize]) -> u32 {
    let mut faces = 0;
    for (&size, &stride) in shape.iter().zip(strides) {
        let idx = (flat / stride) % size;
        if idx == 0 {
            faces += 1;
        }
        if idx == size - 1 {
            faces += 1;
        }
    }
    faces
}
