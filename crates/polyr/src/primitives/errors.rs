//! Error types for polynomial and interpolation operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur during polynomial
//! evaluation, least-squares fitting, and piecewise-linear interpolation,
//! covering input validation, shape mismatches, and singular systems.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Synchronous**: Errors are raised at the point of detection and abort the
//!   whole operation; there is no retry and no partial result.
//! * **No-std**: Implements `Display` via `core::fmt`; `std::error::Error` is
//!   gated on the `std` feature.
//!
//! ## Key concepts
//!
//! 1. **Shape errors**: Mismatched paired sequences, undersized tables.
//! 2. **Degree errors**: More degrees of freedom than data points.
//! 3. **Singular systems**: Normal-equations matrix with no inverse.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for polynomial and interpolation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyError {
    /// Polynomial evaluation requires at least one coefficient.
    EmptyCoefficients,

    /// Fitting requires a non-empty sample set.
    EmptyInput,

    /// `x` and `y` sample sequences must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` sequence.
        x_len: usize,
        /// Number of elements in the `y` sequence.
        y_len: usize,
    },

    /// A degree-`d` fit needs at least `d + 1` samples.
    DegreeTooHigh {
        /// Requested polynomial degree.
        degree: usize,
        /// Number of samples provided.
        samples: usize,
    },

    /// Requested degree exceeds the supported range.
    DegreeTooLarge {
        /// Requested polynomial degree.
        degree: usize,
    },

    /// Interpolation nodes and values must have the same length.
    MismatchedTable {
        /// Number of nodes in `xp`.
        xp_len: usize,
        /// Number of values in `fp`.
        fp_len: usize,
    },

    /// Interpolation tables need at least 2 entries.
    TableTooShort {
        /// Number of entries provided.
        got: usize,
    },

    /// Interpolation tables must be one-dimensional (one row or one column).
    TableNotOneDimensional {
        /// Number of rows in the offending array.
        rows: usize,
        /// Number of columns in the offending array.
        cols: usize,
    },

    /// The normal-equations matrix is singular and cannot be inverted.
    SingularMatrix,

    /// Backing buffer length does not match the requested shape.
    InvalidShape {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// Length of the supplied buffer.
        len: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PolyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyCoefficients => {
                write!(f, "Coefficient sequence is empty; need at least 1")
            }
            Self::EmptyInput => write!(f, "Input sample set is empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} samples, y has {y_len}")
            }
            Self::DegreeTooHigh { degree, samples } => {
                write!(
                    f,
                    "More degrees of freedom than data points: degree {degree} needs at least {} samples, got {samples}",
                    degree + 1
                )
            }
            Self::DegreeTooLarge { degree } => {
                write!(f, "Degree {degree} exceeds the supported maximum of 255")
            }
            Self::MismatchedTable { xp_len, fp_len } => {
                write!(f, "Table mismatch: xp has {xp_len} nodes, fp has {fp_len}")
            }
            Self::TableTooShort { got } => {
                write!(f, "Interpolation table has {got} entries; need at least 2")
            }
            Self::TableNotOneDimensional { rows, cols } => {
                write!(
                    f,
                    "Interpolation table of shape ({rows}, {cols}) is not one-dimensional"
                )
            }
            Self::SingularMatrix => write!(f, "Could not invert normal-equations matrix"),
            Self::InvalidShape { rows, cols, len } => {
                write!(
                    f,
                    "Buffer of length {len} does not match shape ({rows}, {cols})"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PolyError {}
