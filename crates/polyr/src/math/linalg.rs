//! In-place Gauss-Jordan matrix inversion.
//!
//! ## Purpose
//!
//! This module provides the matrix-inversion primitive consumed by the
//! polynomial fitter. The contract is narrow: a square matrix in a flat
//! row-major buffer is inverted in place, and a success flag is returned.
//!
//! ## Design notes
//!
//! * **Partial pivoting**: Each elimination column selects the row with the
//!   largest remaining pivot magnitude, so systems that merely need a row
//!   swap are not misreported as singular.
//! * **Failure contract**: On `false`, the buffer's contents are unspecified
//!   and must not be reused.
//! * **Pure**: No state is retained between invocations.
//!
//! ## Invariants
//!
//! * `a.len() == d * d`.
//! * On success, `a` holds the inverse of the original matrix.
//!
//! ## Non-goals
//!
//! * No decompositions, condition-number estimates, or least-squares solves.
//! * No iterative refinement of the computed inverse.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Inversion
// ============================================================================

/// Invert a `d x d` row-major matrix in place.
///
/// Returns `false` if the matrix is singular; the buffer must then be
/// discarded.
pub fn invert_matrix<T: Float>(a: &mut [T], d: usize) -> bool {
    debug_assert_eq!(a.len(), d * d);

    // The accumulator starts as the identity and receives every row
    // operation applied to `a`; once `a` is reduced to the identity, the
    // accumulator holds the inverse.
    let mut inv: Vec<T> = vec![T::zero(); d * d];
    for m in 0..d {
        inv[m * d + m] = T::one();
    }

    for col in 0..d {
        // Partial pivoting: pick the row with the largest pivot magnitude.
        let mut pivot_row = col;
        let mut pivot_mag = a[col * d + col].abs();
        for row in (col + 1)..d {
            let mag = a[row * d + col].abs();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = row;
            }
        }

        if pivot_mag <= T::epsilon() {
            return false;
        }

        if pivot_row != col {
            swap_rows(a, d, pivot_row, col);
            swap_rows(&mut inv, d, pivot_row, col);
        }

        // Normalize the pivot row.
        let pivot = a[col * d + col];
        for k in 0..d {
            a[col * d + k] = a[col * d + k] / pivot;
            inv[col * d + k] = inv[col * d + k] / pivot;
        }

        // Eliminate the pivot column from every other row.
        for row in 0..d {
            if row == col {
                continue;
            }
            let factor = a[row * d + col];
            if factor == T::zero() {
                continue;
            }
            for k in 0..d {
                a[row * d + k] = a[row * d + k] - factor * a[col * d + k];
                inv[row * d + k] = inv[row * d + k] - factor * inv[col * d + k];
            }
        }
    }

    a.copy_from_slice(&inv);
    true
}

/// Swap two rows of a `d`-column row-major buffer.
#[inline]
fn swap_rows<T>(a: &mut [T], d: usize, r1: usize, r2: usize) {
    for k in 0..d {
        a.swap(r1 * d + k, r2 * d + k);
    }
}
