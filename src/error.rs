//! Error types for linear code analysis.

use thiserror::Error;

/// Errors raised while building a code description.
///
/// All failures happen at construction time: once a [`crate::LinearCode`] or
/// [`crate::Matrix`] exists, every query on it is infallible. A missing
/// generator matrix is deliberately *not* an error; see
/// [`crate::code::generator`].
#[derive(Debug, Error)]
pub enum Error {
    /// The matrix string does not follow the bracketed numeric grammar,
    /// contains a non-integer token, or uses an unsupported notation.
    #[error("parse error: {0}")]
    Parse(String),

    /// The parsed grid is not usable as a matrix (no rows, empty rows,
    /// or rows of differing lengths).
    #[error("invalid matrix: {0}")]
    InvalidMatrix(String),

    /// A construction parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for linear code analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
