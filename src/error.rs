use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KDIndexError {
    /// No entry matched the query, or the index holds no entries.
    #[error("Entry not found")]
    NotFound,

    /// A point was supplied whose number of coordinates differs from the index's dimensionality.
    #[error("Expected a point with {expected} coordinates, got {actual}.")]
    DimensionMismatch {
        /// Dimensionality of the index
        expected: usize,
        /// Number of coordinates in the supplied point
        actual: usize,
    },

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, KDIndexError>;
