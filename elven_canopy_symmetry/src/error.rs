// Error type for the input-checked query layer (`checked.rs`).
//
// The core queries take `&str` and cannot fail; "no marker" is an empty
// result, never an error. The only failure is a caller handing a
// non-string value to a checked wrapper.

use thiserror::Error;

/// Result alias for checked queries.
pub type Result<T> = std::result::Result<T, SymmetryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymmetryError {
    /// A query received a value that is not a string.
    #[error("{function}: expected a string name, got {actual}")]
    InvalidInputType {
        /// Name of the query that rejected the value.
        function: &'static str,
        /// Type of the value actually received.
        actual: &'static str,
    },
}
