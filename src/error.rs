//! Error type shared by every fallible operation in the crate.

/// Errors raised by grid, union-find, and experiment construction or queries.
///
/// Both variants signal caller mistakes. Nothing is retried internally and
/// no state is mutated before the check fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PercolationError {
    /// A size or count parameter is not usable (e.g. a zero grid size).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An index lies outside the inclusive range `[min, max]`.
    #[error("index {index} out of range [{min}, {max}]")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Smallest valid index.
        min: usize,
        /// Largest valid index.
        max: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PercolationError>;
