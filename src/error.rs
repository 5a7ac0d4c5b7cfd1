//! Error type for sort requests and for parsing algorithm and field names.

use thiserror::Error;

/// Result type alias for strategy_sort operations
pub type Result<T> = std::result::Result<T, SortError>;

/// Error type for strategy_sort operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A required argument of a sort request was not supplied
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// The argument name
        argument: &'static str,
        /// Explanation of why it's invalid
        reason: &'static str,
    },

    /// The text does not name one of the sort algorithms
    #[error("Unknown sort algorithm '{0}' (expected one of: bubble, insertion, selection, merge, quick)")]
    UnknownAlgorithm(String),

    /// The text does not name one of the record fields
    #[error("Unknown sort field '{0}' (expected one of: age, name, surname)")]
    UnknownField(String),
}
