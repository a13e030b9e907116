//! High-level API for polynomial evaluation, fitting, and interpolation.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. Each is a single
//! synchronous call: inputs are validated, the corresponding algorithm runs,
//! and a freshly allocated [`Array`] is handed to the caller.
//!
//! ## Design notes
//!
//! * **Named entry points**: Fitting with implied or explicit x-samples uses
//!   two explicitly named functions ([`polyfit`] / [`polyfit_with_x`])
//!   instead of argument-count dispatch.
//! * **Optional fill values**: `interp` takes `Option<T>` for the boundary
//!   fill values; `None` means "derive from `fp`'s boundary entries".
//! * **Stateless**: No state is held across calls and no input is mutated.
//!
//! ## Key concepts
//!
//! * **Sequence inputs**: Anything implementing [`Sequence`] — slices,
//!   fixed-size arrays, `Vec`s, or [`Array`]s — is accepted where a
//!   coefficient list, sample list, or query set is expected.
//! * **Shape mirroring**: Evaluation and interpolation outputs mirror the
//!   query input's shape; fitted coefficients come back as `(degree + 1, 1)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::result::Result;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::evaluate;
use crate::algorithms::fit;
use crate::algorithms::interp::interp_point;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::math::horner::HornerEval;
pub use crate::primitives::array::Array;
pub use crate::primitives::errors::PolyError;
pub use crate::primitives::sequence::Sequence;

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate a polynomial at every element of `points`.
///
/// `coefficients[0]` is the highest-degree coefficient and the last entry is
/// the constant term. The output has the same shape as `points`; plain
/// sequences produce a single-row array.
///
/// # Errors
///
/// [`PolyError::EmptyCoefficients`] if the coefficient sequence is empty.
///
/// # Examples
///
/// ```rust
/// use polyr::prelude::*;
///
/// // x^2 at 0, 1, 2, 3
/// let out = polyval(&[1.0, 0.0, 0.0], &[0.0, 1.0, 2.0, 3.0])?;
/// assert_eq!(out.as_slice(), &[0.0, 1.0, 4.0, 9.0]);
/// # Result::<(), PolyError>::Ok(())
/// ```
pub fn polyval<T, P, X>(coefficients: &P, points: &X) -> Result<Array<T>, PolyError>
where
    T: HornerEval,
    P: Sequence<T> + ?Sized,
    X: Sequence<T> + ?Sized,
{
    evaluate::evaluate(coefficients, points)
}

// ============================================================================
// Fitting
// ============================================================================

/// Fit a least-squares polynomial to `y` sampled at `x = 0, 1, …, n - 1`.
///
/// Returns the coefficients highest-degree-first as a `(degree + 1, 1)`
/// array.
///
/// # Errors
///
/// * [`PolyError::EmptyInput`] if `y` is empty.
/// * [`PolyError::DegreeTooLarge`] if `degree` exceeds the supported bound.
/// * [`PolyError::DegreeTooHigh`] if `degree + 1 > y.len()`.
///
/// # Examples
///
/// ```rust
/// use polyr::prelude::*;
///
/// // y = 2x + 3
/// let coeffs = polyfit(&[3.0f64, 5.0, 7.0, 9.0, 11.0], 1)?;
/// assert!((coeffs.get(0).unwrap() - 2.0).abs() < 1e-9);
/// assert!((coeffs.get(1).unwrap() - 3.0).abs() < 1e-9);
/// # Result::<(), PolyError>::Ok(())
/// ```
pub fn polyfit<T, Y>(y: &Y, degree: usize) -> Result<Array<T>, PolyError>
where
    T: Float,
    Y: Sequence<T> + ?Sized,
{
    let n = y.len();
    Validator::validate_samples(n, n)?;
    Validator::validate_degree(degree, n)?;

    // Uniformly spaced sample points 0, 1, …, n - 1 are always distinct.
    let x: Vec<T> = (0..n).map(|i| T::from(i).unwrap()).collect();
    let y: Vec<T> = y.values().collect();

    fit::fit(&x, &y, degree)
}

/// Fit a least-squares polynomial to the explicit samples `(x, y)`.
///
/// Returns the coefficients highest-degree-first as a `(degree + 1, 1)`
/// array.
///
/// # Errors
///
/// * [`PolyError::EmptyInput`] if `y` is empty.
/// * [`PolyError::MismatchedInputs`] if `x` and `y` differ in length.
/// * [`PolyError::DegreeTooLarge`] if `degree` exceeds the supported bound.
/// * [`PolyError::DegreeTooHigh`] if `degree + 1 > y.len()`.
/// * [`PolyError::SingularMatrix`] if the x-samples are not all distinct, or
///   the normal-equations matrix otherwise cannot be inverted.
pub fn polyfit_with_x<T, X, Y>(x: &X, y: &Y, degree: usize) -> Result<Array<T>, PolyError>
where
    T: Float,
    X: Sequence<T> + ?Sized,
    Y: Sequence<T> + ?Sized,
{
    Validator::validate_samples(x.len(), y.len())?;
    Validator::validate_degree(degree, y.len())?;

    let x: Vec<T> = x.values().collect();
    Validator::validate_distinct(&x)?;
    let y: Vec<T> = y.values().collect();

    fit::fit(&x, &y, degree)
}

// ============================================================================
// Interpolation
// ============================================================================

/// Piecewise-linear interpolation of `x` against the table `(xp, fp)`.
///
/// `xp` must hold a strictly increasing sequence of nodes (a precondition,
/// not verified; violating it yields unspecified output). Queries at or
/// beyond the boundary nodes take `left`/`right`, which default to `fp`'s
/// first and last entries. The output mirrors `x`'s shape.
///
/// # Errors
///
/// * [`PolyError::MismatchedTable`] if `xp` and `fp` differ in length.
/// * [`PolyError::TableTooShort`] if the table has fewer than 2 entries.
///
/// # Examples
///
/// ```rust
/// use polyr::prelude::*;
///
/// let out = interp(
///     &[-5.0, 0.0, 5.0, 10.0, 15.0],
///     &[0.0, 10.0],
///     &[0.0, 100.0],
///     None,
///     None,
/// )?;
/// assert_eq!(out.as_slice(), &[0.0, 0.0, 50.0, 100.0, 100.0]);
/// # Result::<(), PolyError>::Ok(())
/// ```
pub fn interp<T, X>(
    x: &X,
    xp: &[T],
    fp: &[T],
    left: Option<T>,
    right: Option<T>,
) -> Result<Array<T>, PolyError>
where
    T: Float,
    X: Sequence<T> + ?Sized,
{
    Validator::validate_table(xp.len(), fp.len())?;

    let left = left.unwrap_or(fp[0]);
    let right = right.unwrap_or(fp[fp.len() - 1]);

    let (rows, cols) = x.shape();
    let mut out = Array::zeros(rows, cols);
    for (entry, v) in out.as_mut_slice().iter_mut().zip(x.values()) {
        *entry = interp_point(xp, fp, v, left, right);
    }

    Ok(out)
}
