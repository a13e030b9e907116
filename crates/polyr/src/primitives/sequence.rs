//! Finite-sequence input protocol.
//!
//! ## Purpose
//!
//! This module defines the [`Sequence`] trait, the narrow "any iterable"
//! interface accepted wherever a coefficient list, sample list, or 1-D input
//! is expected: a known length plus a finite, single-pass stream of numeric
//! scalars.
//!
//! ## Design notes
//!
//! * **Narrow**: One interface (`len` + `values`) instead of duck-typing on
//!   concrete container kinds.
//! * **Shape-aware**: Plain sequences report a one-row shape `(1, len)`;
//!   [`Array`] reports its true shape, so outputs can mirror it.
//! * **Lazy**: `values` yields elements on demand; callers that need random
//!   access collect once into a scratch buffer.
//!
//! ## Invariants
//!
//! * `values()` yields exactly `len()` elements.
//! * `shape() == (rows, cols)` implies `rows * cols == len()`.
//!
//! ## Non-goals
//!
//! * This module does not validate element values (NaN/Inf pass through).
//! * No support for unsized or infinite streams.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::iter::Copied;
use core::slice;
use num_traits::Float;

// Internal dependencies
use crate::primitives::array::Array;

// ============================================================================
// Sequence Trait
// ============================================================================

/// A finite, single-pass sequence of numeric scalars with a known length.
pub trait Sequence<T: Float> {
    /// Iterator over the sequence's values.
    type Values<'a>: Iterator<Item = T>
    where
        Self: 'a,
        T: 'a;

    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// Whether the sequence is empty.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Logical shape as `(rows, cols)`.
    ///
    /// Plain sequences are one row wide; arrays report their true shape.
    #[inline]
    fn shape(&self) -> (usize, usize) {
        (1, self.len())
    }

    /// Iterate the sequence's values in order.
    fn values(&self) -> Self::Values<'_>;
}

// ============================================================================
// Implementations
// ============================================================================

impl<T: Float> Sequence<T> for [T] {
    type Values<'a>
        = Copied<slice::Iter<'a, T>>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn values(&self) -> Self::Values<'_> {
        self.iter().copied()
    }
}

impl<T: Float, const N: usize> Sequence<T> for [T; N] {
    type Values<'a>
        = Copied<slice::Iter<'a, T>>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn values(&self) -> Self::Values<'_> {
        self.iter().copied()
    }
}

impl<T: Float> Sequence<T> for Vec<T> {
    type Values<'a>
        = Copied<slice::Iter<'a, T>>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn values(&self) -> Self::Values<'_> {
        self.iter().copied()
    }
}

impl<T: Float> Sequence<T> for Array<T> {
    type Values<'a>
        = Copied<slice::Iter<'a, T>>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        Array::len(self)
    }

    /// Arrays keep their two-dimensional shape.
    #[inline]
    fn shape(&self) -> (usize, usize) {
        Array::shape(self)
    }

    #[inline]
    fn values(&self) -> Self::Values<'_> {
        self.as_slice().iter().copied()
    }
}
