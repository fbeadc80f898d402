//! Error types for series construction and lookup.
//!
//! This module provides:
//! - [`SeriesError`]: every failure a series can report
//! - [`ErrorKind`]: the two broad categories callers usually branch on

use thiserror::Error;

/// Broad category of a [`SeriesError`].
///
/// # Variants
/// - `LookupFailure`: the query point has no value under the active policy
/// - `PreconditionViolation`: the input data cannot form a valid series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The query point has no value under the active policy.
    LookupFailure,
    /// The input data cannot form a valid series.
    PreconditionViolation,
}

/// Series errors.
///
/// Lookup failures are raised at query time; every other variant is raised
/// at construction time so that an invalid series never exists.
///
/// # Examples
/// ```
/// use series_core::{ErrorKind, SeriesError};
///
/// let err = SeriesError::NoValueAt { x: 2.5 };
/// assert_eq!(format!("{}", err), "No value at x = 2.5");
/// assert_eq!(err.kind(), ErrorKind::LookupFailure);
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeriesError {
    /// No stored value applies at the query point.
    #[error("No value at x = {x}")]
    NoValueAt {
        /// The query point
        x: f64,
    },

    /// The series has no data points.
    #[error("Series must contain at least one point")]
    EmptySeries,

    /// Key and value slices differ in length.
    #[error("xs and ys must have same length: got {xs} and {ys}")]
    LengthMismatch {
        /// Number of keys provided
        xs: usize,
        /// Number of values provided
        ys: usize,
    },

    /// A key is NaN or infinite.
    #[error("Key at index {index} is not finite")]
    NonFiniteKey {
        /// Position of the offending pair in the input
        index: usize,
    },

    /// The same key appears more than once.
    #[error("Duplicate key x = {x}")]
    DuplicateKey {
        /// The repeated key
        x: f64,
    },
}

impl SeriesError {
    /// Return the category of this error.
    ///
    /// # Example
    ///
    /// ```
    /// use series_core::{ErrorKind, SeriesError};
    ///
    /// assert_eq!(
    ///     SeriesError::EmptySeries.kind(),
    ///     ErrorKind::PreconditionViolation
    /// );
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            SeriesError::NoValueAt { .. } => ErrorKind::LookupFailure,
            SeriesError::EmptySeries
            | SeriesError::LengthMismatch { .. }
            | SeriesError::NonFiniteKey { .. }
            | SeriesError::DuplicateKey { .. } => ErrorKind::PreconditionViolation,
        }
    }

    /// True if this is a lookup failure.
    #[inline]
    pub fn is_lookup_failure(&self) -> bool {
        self.kind() == ErrorKind::LookupFailure
    }
}
