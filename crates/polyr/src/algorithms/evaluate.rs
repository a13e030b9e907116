//! Polynomial evaluation by Horner's method.
//!
//! ## Purpose
//!
//! This module evaluates a polynomial, given as coefficients
//! highest-degree-first, at every element of an input sequence or array.
//!
//! ## Design notes
//!
//! * **Element-wise over arbitrary shape**: Two-dimensional inputs are
//!   evaluated over the full flat row-major buffer, and the output mirrors
//!   the input shape. Plain sequences produce a single-row result.
//! * **Always floating-point**: The output element type matches the working
//!   `Float` type regardless of how the inputs were produced; there is no
//!   integer fast path.
//! * **Allocation**: One local copy of the coefficients, one collected copy
//!   of the points, and the output array; nothing else.
//!
//! ## Invariants
//!
//! * Output shape equals the input's logical shape.
//! * Total work is `O(elements × coefficients)`.
//!
//! ## Non-goals
//!
//! * No broadcasting and no symbolic manipulation of coefficients.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::result::Result;

// Internal dependencies
use crate::math::horner::HornerEval;
use crate::primitives::array::Array;
use crate::primitives::errors::PolyError;
use crate::primitives::sequence::Sequence;

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate the polynomial `coefficients` at every element of `points`.
///
/// `coefficients[0]` is the highest-degree coefficient. The result has the
/// same shape as `points`.
pub fn evaluate<T, P, X>(coefficients: &P, points: &X) -> Result<Array<T>, PolyError>
where
    T: HornerEval,
    P: Sequence<T> + ?Sized,
    X: Sequence<T> + ?Sized,
{
    let p: Vec<T> = coefficients.values().collect();
    if p.is_empty() {
        return Err(PolyError::EmptyCoefficients);
    }

    let (rows, cols) = points.shape();
    let xs: Vec<T> = points.values().collect();

    let mut out = Array::zeros(rows, cols);
    T::horner_batch(&p, &xs, out.as_mut_slice());
    Ok(out)
}
