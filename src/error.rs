//! Error types shared by the data model, the solvers and the loader.

/// Errors raised by knapsack operations.
///
/// Admission failures are not errors: [`KnapsackState::add_item`] returns
/// `false` instead. Everything here propagates to the caller unchanged.
///
/// [`KnapsackState::add_item`]: crate::model::KnapsackState::add_item
#[derive(Debug, thiserror::Error)]
pub enum KnapsackError {
    /// Catalog index outside `[-len, len)`.
    ///
    /// Indicates a logic error in the caller; solvers never produce it
    /// for a well-formed catalog.
    #[error("index {index} out of bounds for catalog of length {len}")]
    OutOfBounds {
        /// Requested index (negative values count from the end).
        index: isize,
        /// Catalog length at the time of access.
        len: usize,
    },

    /// A record in the input source could not be interpreted.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the source (0 when the whole source is at fault).
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Tried to remove an item from an empty selection.
    #[error("cannot remove an item from an empty selection")]
    EmptySelection,

    /// Solver configuration rejected by `validate`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Underlying read or write failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl KnapsackError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;
