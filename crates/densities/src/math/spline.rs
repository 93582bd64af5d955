//! Interpolating cubic splines with not-a-knot end conditions.
//!
//! ## Purpose
//!
//! This module reconstructs a continuous density from grid samples. The 1D
//! spline passes exactly through every sample; the bicubic surface is its
//! tensor product over a rectangular grid.
//!
//! ## Design notes
//!
//! * **Smoothing-free**: Interpolation only; no smoothing parameter.
//! * **Not-a-knot**: The third derivative is continuous across the second and
//!   second-to-last knots, so cubic data is reproduced exactly.
//! * **Piecewise storage**: Each interval keeps `[a, b, c, d]` for
//!   `a + b t + c t^2 + d t^3` with `t = x - x_i`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Second-derivative system**: Interior second derivatives solve a
//!   tridiagonal system; the end values are eliminated with not-a-knot.
//! * **Short grids**: Two points give the line, three points the parabola.
//! * **Tensor product**: Per-row x-splines, then y-splines through each row
//!   coefficient, which is exactly the separable bicubic interpolant.
//!
//! ## Invariants
//!
//! * Knots are strictly increasing and there are at least two of them.
//! * `spline.value(x_i) == y_i` up to rounding for every knot.
//!
//! ## Non-goals
//!
//! * This module does not fit smoothing or weighted splines.
//! * This module does not handle scattered (non-grid) 2D data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DensityError;

// ============================================================================
// 1D Cubic Spline
// ============================================================================

/// Piecewise cubic interpolant through `(x_i, y_i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline<T> {
    knots: Vec<T>,
    coeffs: Vec<[T; 4]>,
}

impl<T: Float> CubicSpline<T> {
    /// Fit the not-a-knot interpolating spline.
    pub fn new(x: &[T], y: &[T]) -> Result<Self, DensityError> {
        if x.len() != y.len() {
            return Err(DensityError::ShapeMismatch {
                axis: 0,
                expected: x.len(),
                got: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(DensityError::InvalidAxis(format!(
                "spline needs at least 2 knots, got {}",
                x.len()
            )));
        }
        if let Some(i) = x
            .windows(2)
            .position(|w| w[1].partial_cmp(&w[0]) != Some(Ordering::Greater))
        {
            return Err(DensityError::InvalidAxis(format!(
                "knots must be strictly increasing (x[{}] >= x[{}])",
                i,
                i + 1
            )));
        }

        let m = second_derivatives(x, y);
        let coeffs = x
            .windows(2)
            .enumerate()
            .map(|(i, w)| {
                let h = w[1] - w[0];
                let six = T::from(6.0).unwrap();
                let two = T::from(2.0).unwrap();
                let b = (y[i + 1] - y[i]) / h - h * (two * m[i] + m[i + 1]) / six;
                [y[i], b, m[i] / two, (m[i + 1] - m[i]) / (six * h)]
            })
            .collect();

        Ok(Self {
            knots: x.to_vec(),
            coeffs,
        })
    }

    /// Knot coordinates.
    pub fn knots(&self) -> &[T] {
        &self.knots
    }

    /// Lower and upper end of the fitted range.
    pub fn domain(&self) -> (T, T) {
        (self.knots[0], self.knots[self.knots.len() - 1])
    }

    /// Value or `derivative`-th derivative at `x`; zero outside the knot range.
    #[inline]
    pub fn evaluate(&self, x: T, derivative: usize) -> T {
        let (lo, hi) = self.domain();
        if x < lo || x > hi {
            return T::zero();
        }
        self.extrapolate(x, derivative)
    }

    /// Value at `x`, continuing the end pieces beyond the knot range.
    #[inline]
    pub fn value(&self, x: T) -> T {
        self.extrapolate(x, 0)
    }

    /// Evaluate using the polynomial piece nearest to `x`.
    pub fn extrapolate(&self, x: T, derivative: usize) -> T {
        let i = self.interval(x);
        let [a, b, c, d] = self.coeffs[i];
        let t = x - self.knots[i];
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let six = T::from(6.0).unwrap();
        match derivative {
            0 => a + t * (b + t * (c + t * d)),
            1 => b + t * (two * c + three * d * t),
            2 => two * c + six * d * t,
            3 => six * d,
            _ => T::zero(),
        }
    }

    // Index of the interval containing `x`, clamped to the end intervals.
    #[inline]
    fn interval(&self, x: T) -> usize {
        let upper = self.knots.partition_point(|&k| k <= x);
        upper.saturating_sub(1).min(self.coeffs.len() - 1)
    }
}

// Second derivatives at every knot under not-a-knot end conditions.
fn second_derivatives<T: Float>(x: &[T], y: &[T]) -> Vec<T> {
    let n = x.len();
    let two = T::from(2.0).unwrap();
    let six = T::from(6.0).unwrap();

    if n == 2 {
        return vec![T::zero(); 2];
    }

    let h: Vec<T> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let slope: Vec<T> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();

    if n == 3 {
        // Single parabola: constant curvature
        let curvature = two * (slope[1] - slope[0]) / (h[0] + h[1]);
        return vec![curvature; 3];
    }

    // Unknowns M_1..M_{n-2}; row r corresponds to knot r + 1
    let size = n - 2;
    let mut lower = vec![T::zero(); size];
    let mut diag = vec![T::zero(); size];
    let mut upper = vec![T::zero(); size];
    let mut rhs = vec![T::zero(); size];
    for r in 0..size {
        let i = r + 1;
        lower[r] = h[i - 1];
        diag[r] = two * (h[i - 1] + h[i]);
        upper[r] = h[i];
        rhs[r] = six * (slope[i] - slope[i - 1]);
    }

    // Left: M_0 = (1 + h0/h1) M_1 - (h0/h1) M_2
    let g = h[0] / h[1];
    diag[0] = diag[0] + h[0] * (T::one() + g);
    upper[0] = upper[0] - h[0] * g;
    lower[0] = T::zero();

    // Right: M_{n-1} = (1 + g) M_{n-2} - g M_{n-3}, g = h_{n-2} / h_{n-3}
    let g = h[n - 2] / h[n - 3];
    diag[size - 1] = diag[size - 1] + h[n - 2] * (T::one() + g);
    lower[size - 1] = lower[size - 1] - h[n - 2] * g;
    upper[size - 1] = T::zero();

    let interior = solve_tridiagonal(&lower, &diag, &upper, &rhs);

    let mut m = Vec::with_capacity(n);
    let g_left = h[0] / h[1];
    m.push((T::one() + g_left) * interior[0] - g_left * interior[1]);
    m.extend_from_slice(&interior);
    let g_right = h[n - 2] / h[n - 3];
    m.push((T::one() + g_right) * interior[size - 1] - g_right * interior[size - 2]);
    m
}

/// Solve a tridiagonal system with the Thomas algorithm.
///
/// `lower[0]` and `upper[n - 1]` are ignored.
pub fn solve_tridiagonal<T: Float>(lower: &[T], diag: &[T], upper: &[T], rhs: &[T]) -> Vec<T> {
    let n = diag.len();
    let mut c = vec![T::zero(); n];
    let mut d = vec![T::zero(); n];

    c[0] = upper[0] / diag[0];
    d[0] = rhs[0] / diag[0];
    for i in 1..n {
        let denom = diag[i] - lower[i] * c[i - 1];
        c[i] = upper[i] / denom;
        d[i] = (rhs[i] - lower[i] * d[i - 1]) / denom;
    }

    let mut out = vec![T::zero(); n];
    out[n - 1] = d[n - 1];
    for i in (0..n - 1).rev() {
        out[i] = d[i] - c[i] * out[i + 1];
    }
    out
}

// ============================================================================
// Bicubic Surface
// ============================================================================

/// Tensor-product cubic interpolant over a rectangular grid.
#[derive(Debug, Clone, PartialEq)]
pub struct BicubicSurface<T> {
    x_knots: Vec<T>,
    y_knots: Vec<T>,
    // One y-spline per (x-interval, coefficient) pair
    patches: Vec<[CubicSpline<T>; 4]>,
}

impl<T: Float> BicubicSurface<T> {
    /// Fit through `values`, stored row-major as `[y][x]` (shape `[ny, nx]`).
    pub fn new(x: &[T], y: &[T], values: &[T]) -> Result<Self, DensityError> {
        let nx = x.len();
        let ny = y.len();
        if nx < 2 || ny < 2 {
            return Err(DensityError::InvalidAxis(format!(
                "surface needs at least 2x2 knots, got {nx}x{ny}"
            )));
        }
        if values.len() != nx * ny {
            return Err(DensityError::LengthMismatch {
                expected: nx * ny,
                got: values.len(),
            });
        }

        let rows = values
            .chunks(nx)
            .map(|row| CubicSpline::new(x, row))
            .collect::<Result<Vec<_>, _>>()?;

        let mut patches = Vec::with_capacity(nx.saturating_sub(1));
        let mut column = vec![T::zero(); ny];
        for i in 0..nx - 1 {
            let mut fit = |k: usize| -> Result<CubicSpline<T>, DensityError> {
                for (j, row) in rows.iter().enumerate() {
                    column[j] = row.coeffs[i][k];
                }
                CubicSpline::new(y, &column)
            };
            patches.push([fit(0)?, fit(1)?, fit(2)?, fit(3)?]);
        }

        Ok(Self {
            x_knots: x.to_vec(),
            y_knots: y.to_vec(),
            patches,
        })
    }

    /// Value at `(x, y)`; coordinates outside the grid are clamped onto its edge.
    pub fn evaluate(&self, x: T, y: T) -> T {
        let x = clamp(x, self.x_knots[0], self.x_knots[self.x_knots.len() - 1]);
        let y = clamp(y, self.y_knots[0], self.y_knots[self.y_knots.len() - 1]);

        let upper = self.x_knots.partition_point(|&k| k <= x);
        let i = upper.saturating_sub(1).min(self.patches.len() - 1);
        let t = x - self.x_knots[i];

        let [a, b, c, d] = &self.patches[i];
        a.value(y) + t * (b.value(y) + t * (c.value(y) + t * d.value(y)))
    }
}

#[inline]
fn clamp<T: Float>(v: T, lo: T, hi: T) -> T {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
