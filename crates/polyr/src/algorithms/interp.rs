//! Piecewise-linear interpolation with binary-search bracketing.
//!
//! ## Purpose
//!
//! This module estimates a function's value at query points from a table of
//! monotonically increasing nodes `xp` and corresponding values `fp`, by
//! linear blending between the two nodes straddling each query.
//!
//! ## Design notes
//!
//! * **Bracketing**: Each interior query bisects the `[lo, hi]` index window
//!   until `hi - lo == 1`, giving `O(log nodes)` work per element.
//! * **Boundary fill**: Queries at or beyond the first/last node take the
//!   `left`/`right` fill value; the caller derives the defaults from `fp`'s
//!   boundary entries.
//! * **Exactness**: A query exactly at an interior node lands with that node
//!   as the upper bracket and a blend factor of exactly one, so `interp` at
//!   `xp[i]` computes `fp[lo] + (fp[hi] - fp[lo])`. This equals `fp[i]` up to
//!   one rounding in the final add; it is bit-exact when the neighboring
//!   values are of comparable magnitude.
//!
//! ## Invariants
//!
//! * `xp.len() == fp.len() >= 2` (established by the engine validator).
//! * After bracketing, `xp[lo] < v <= xp[hi]` with `hi == lo + 1`.
//!
//! ## Non-goals
//!
//! * `xp` strictly increasing is a precondition, not verified here; violating
//!   it yields unspecified (finite-arithmetic) output, never a panic.
//! * No spline or higher-order interpolation.

// External dependencies
use num_traits::Float;

// ============================================================================
// Bracketing
// ============================================================================

/// Find the adjacent node pair straddling `v` by bisection.
///
/// The caller guarantees `xp[0] < v < xp[xp.len() - 1]`.
#[inline]
pub fn bracket<T: Float>(xp: &[T], v: T) -> (usize, usize) {
    let mut lo = 0;
    let mut hi = xp.len() - 1;

    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if v <= xp[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    (lo, hi)
}

// ============================================================================
// Per-Element Interpolation
// ============================================================================

/// Interpolate a single query value against the table.
///
/// Boundary queries (`v <= xp[0]`, `v >= xp[last]`) take the `left`/`right`
/// fill values; interior queries are linearly blended between their bracket.
#[inline]
pub fn interp_point<T: Float>(xp: &[T], fp: &[T], v: T, left: T, right: T) -> T {
    if v <= xp[0] {
        return left;
    }
    if v >= xp[xp.len() - 1] {
        return right;
    }

    let (lo, hi) = bracket(xp, v);
    fp[lo] + (v - xp[lo]) * (fp[hi] - fp[lo]) / (xp[hi] - xp[lo])
}
