//! Dense row-major numeric array.
//!
//! ## Purpose
//!
//! This module provides [`Array`], the single data abstraction shared by all
//! three operations: a dense numeric buffer plus a `(rows, cols)` shape.
//! Operations allocate their own output array and hand it to the caller, who
//! becomes sole owner; inputs are never mutated.
//!
//! ## Design notes
//!
//! * **Row-major**: Element `(r, c)` lives at flat index `r * cols + c`.
//! * **Owned**: Backed by a `Vec<T>`; scratch and output buffers are released
//!   by drop on every exit path, including error paths.
//! * **Generics**: Generic over `Float` types; element reads always yield a
//!   floating-point value.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols` at all times.
//! * The shape never changes after construction.
//!
//! ## Non-goals
//!
//! * No N-dimensional shapes, broadcasting, views, or strided layouts.
//! * No in-place reshaping or element-type conversion machinery.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyError;

// ============================================================================
// Array
// ============================================================================

/// A dense, row-major two-dimensional numeric array.
#[derive(Debug, Clone, PartialEq)]
pub struct Array<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> Array<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a zero-filled array of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create an array from a flat row-major buffer.
    ///
    /// Fails with [`PolyError::InvalidShape`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, PolyError> {
        if data.len() != rows * cols {
            return Err(PolyError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a single-row array from a slice.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            rows: 1,
            cols: values.len(),
            data: values.to_vec(),
        }
    }

    // ========================================================================
    // Shape Queries
    // ========================================================================

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // ========================================================================
    // Element Access
    // ========================================================================

    /// Read element `i` of the flat row-major buffer.
    #[inline]
    pub fn get(&self, i: usize) -> Option<T> {
        self.data.get(i).copied()
    }

    /// The flat row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the flat row-major buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the array, returning the flat row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// View the array as a one-dimensional slice.
    ///
    /// Succeeds only for arrays with a single row or a single column; this is
    /// how interpolation tables stored as arrays are handed to [`interp`].
    ///
    /// [`interp`]: crate::interp
    pub fn as_one_dimensional(&self) -> Result<&[T], PolyError> {
        if self.rows != 1 && self.cols != 1 {
            return Err(PolyError::TableNotOneDimensional {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&self.data)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Array ({} x {}):", self.rows, self.cols)?;
        for r in 0..self.rows {
            write!(f, "  [")?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[r * self.cols + c])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
