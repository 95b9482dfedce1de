//! Error types for the parallax_view crate
//!
//! Only malformed call inputs (shape errors at the dynamic-input boundary)
//! are reported through `Error`. Degenerate geometry — zero-length basis
//! vectors, coincident clipping planes, an eye on the screen plane — is
//! never an error: it propagates as Inf/NaN values in the returned matrix
//! or frustum, matching floating-point semantics.

use std::fmt;

/// Result type for parallax_view operations
pub type Result<T> = std::result::Result<T, Error>;

/// parallax_view errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Input not reducible to the expected shape (e.g. a slice that does
    /// not hold exactly 3 components)
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
