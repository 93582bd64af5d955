//! Credible intervals from a refined 1D density curve.
//!
//! ## Purpose
//!
//! This module resamples a 1D spline reconstruction on a fine grid and
//! finds the equal-density interval enclosing a requested probability,
//! reporting when the interval is cut off by the grid edge.
//!
//! ## Design notes
//!
//! * **Refinement**: The spline is sampled `factor` times per grid cell so
//!   that threshold crossings are resolved well below the bin width.
//! * **Reuse**: A [`LimitGrid`] is an immutable value; one grid serves any
//!   number of probabilities while the density weights are unchanged.
//! * **Generations**: Each grid records the weight generation it was built
//!   from so stale grids can be rejected.
//!
//! ## Key concepts
//!
//! * **Normalization**: The refined sum minus half of the *coarse* end
//!   weights.
//! * **Threshold**: Interpolated between sorted refined samples `ix` and
//!   `ix + 1` around the target mass `(1 - p) * norm`.
//! * **One-sided limits**: If the curve at an edge is already above the
//!   threshold, that side has no limit and the edge coordinate is reported.
//!
//! ## Invariants
//!
//! * `bign == (n - 1) * factor + 1`.
//! * `lower <= upper` for every returned interval with both limits found.
//!
//! ## Non-goals
//!
//! * This module does not compute multi-modal (disjoint) intervals.
//! * This module does not extend to more than one dimension.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::math::spline::CubicSpline;
use crate::primitives::errors::DensityError;
use crate::primitives::sorting::{cumulative_sum, search_sorted, sorted};

/// Upper bound on refined points used to pick the default factor.
pub const TARGET_REFINED_POINTS: usize = 20_000;

// ============================================================================
// Refinement Grid
// ============================================================================

/// Fine resampling of a 1D density used by the credible-interval search.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitGrid<T> {
    /// Refined samples per coarse cell.
    pub factor: usize,

    /// Number of refined samples, `(n - 1) * factor + 1`.
    pub bign: usize,

    /// Spline values at the refined points, in coordinate order.
    pub grid: Vec<T>,

    /// `grid` sorted ascending.
    pub sorted: Vec<T>,

    /// Running sum of `sorted`.
    pub cumsum: Vec<T>,

    /// Refined mass with the coarse end-point correction.
    pub norm: T,

    /// First coarse coordinate.
    pub origin: T,

    /// Distance between refined samples.
    pub fine_spacing: T,

    /// Weight generation of the density this grid was built from.
    pub generation: u64,
}

/// Default refinement: about 20000 refined points, and at least 2 per cell.
#[inline]
pub fn default_factor(n: usize) -> usize {
    (TARGET_REFINED_POINTS / n.max(1)).max(2)
}

impl<T: Float> LimitGrid<T> {
    /// Resample `spline` over the coarse axis `x` with coarse weights `weights`.
    pub fn build(
        spline: &CubicSpline<T>,
        x: &[T],
        weights: &[T],
        factor: usize,
        generation: u64,
    ) -> Result<Self, DensityError> {
        if factor == 0 {
            return Err(DensityError::InvalidFactor(factor));
        }

        let n = x.len();
        let bign = (n - 1) * factor + 1;
        let origin = x[0];
        let spacing = x[1] - x[0];
        let factor_t = T::from(factor).unwrap();

        let grid: Vec<T> = (0..bign)
            .map(|k| spline.value(origin + T::from(k).unwrap() * spacing / factor_t))
            .collect();

        let half = T::from(0.5).unwrap();
        let total = grid.iter().fold(T::zero(), |acc, &v| acc + v);
        let norm = total - half * weights[n - 1] - half * weights[0];

        let sorted = sorted(&grid);
        let cumsum = cumulative_sum(&sorted);

        tracing::debug!(factor, bign, generation, "built limit grid");

        Ok(Self {
            factor,
            bign,
            grid,
            sorted,
            cumsum,
            norm,
            origin,
            fine_spacing: spacing / factor_t,
            generation,
        })
    }
}

// ============================================================================
// Credible Interval
// ============================================================================

/// Equal-density interval enclosing a requested probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CredibleInterval<T> {
    /// Lower bound, or the first grid coordinate when there is no lower limit.
    pub lower: T,

    /// Upper bound, or the last grid coordinate when there is no upper limit.
    pub upper: T,

    /// Whether the density crosses the threshold inside the grid on the left.
    pub has_lower: bool,

    /// Whether the density crosses the threshold inside the grid on the right.
    pub has_upper: bool,
}

impl<T: Float> CredibleInterval<T> {
    /// Distance between the bounds.
    pub fn width(&self) -> T {
        self.upper - self.lower
    }

    /// Both limits lie strictly inside the grid.
    pub fn is_two_tailed(&self) -> bool {
        self.has_lower && self.has_upper
    }

    /// As a `(lower, upper, has_lower, has_upper)` tuple.
    pub fn as_tuple(&self) -> (T, T, bool, bool) {
        (self.lower, self.upper, self.has_lower, self.has_upper)
    }
}

impl<T: Float + Display> Display for CredibleInterval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let lo = if self.has_lower { "[" } else { "(" };
        let hi = if self.has_upper { "]" } else { ")" };
        write!(f, "{lo}{}, {}{hi}", self.lower, self.upper)
    }
}

// ============================================================================
// Limit Search
// ============================================================================

/// Credible interval enclosing probability `p`, searched on `grid`.
///
/// `x_last` is the last coarse coordinate, reported when there is no upper limit.
pub fn find_limits<T: Float>(
    grid: &LimitGrid<T>,
    x_last: T,
    p: T,
) -> Result<CredibleInterval<T>, DensityError> {
    let out_of_range = || DensityError::ContourOutOfRange {
        contour: p.to_f64().unwrap_or(f64::NAN),
    };

    let target = (T::one() - p) * grid.norm;
    let ix = search_sorted(&grid.cumsum, target);
    if ix >= grid.bign {
        return Err(out_of_range());
    }

    let mut trial = grid.sorted[ix];
    if ix > 0 {
        if ix + 1 >= grid.bign {
            return Err(out_of_range());
        }
        let d = grid.cumsum[ix] - grid.cumsum[ix - 1];
        let frac = (grid.cumsum[ix] - target) / d;
        trial = (T::one() - frac) * trial + frac * grid.sorted[ix + 1];
    }

    let samples = &grid.grid;
    let last = grid.bign - 1;

    let has_lower = samples[0] < trial;
    let lower = if has_lower {
        let i = first_crossing(samples.iter().enumerate(), trial);
        let d = (samples[i] - trial) / (samples[i] - samples[i - 1]);
        grid.origin + (T::from(i).unwrap() - d) * grid.fine_spacing
    } else {
        grid.origin
    };

    let has_upper = samples[last] < trial;
    let upper = if has_upper {
        let i = first_crossing(samples.iter().enumerate().rev(), trial);
        let d = (samples[i] - trial) / (samples[i] - samples[i + 1]);
        grid.origin + (T::from(i).unwrap() + d) * grid.fine_spacing
    } else {
        x_last
    };

    tracing::debug!(
        p = p.to_f64().unwrap_or(f64::NAN),
        has_lower,
        has_upper,
        "resolved credible interval"
    );

    Ok(CredibleInterval {
        lower,
        upper,
        has_lower,
        has_upper,
    })
}

// First sample above `trial` in scan order; the peak itself when the
// threshold equals the maximum.
fn first_crossing<'a, T, I>(mut scan: I, trial: T) -> usize
where
    T: Float + 'a,
    I: Iterator<Item = (usize, &'a T)> + Clone,
{
    scan.clone()
        .find(|&(_, &v)| v > trial)
        .or_else(|| scan.find(|&(_, &v)| v >= trial))
        .map_or(0, |(i, _)| i)
}
