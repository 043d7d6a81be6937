//! Error types for building and searching.

/// Reasons a tree could not be built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// No points were given
    #[error("cannot build a tree from an empty point set")]
    Empty,
    /// A point has a NaN coordinate, which has no place in the ordering
    #[error("point at index {index} has a NaN coordinate")]
    NanCoordinate {
        /// Position of the offending point in the input
        index: usize,
    },
}

/// Invalid arguments to a bounded search.
///
/// Distinct from a search that legitimately found nothing, which returns `Ok(0)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The requested number of points is negative
    #[error("requested point count {0} is negative")]
    NegativeCount(i32),
    /// The destination cannot hold the requested number of points
    #[error("destination holds {capacity} points but {requested} were requested")]
    BufferTooSmall {
        /// Requested number of points
        requested: usize,
        /// Length of the destination slice
        capacity: usize,
    },
}

impl SearchError {
    /// Negative sentinel reported for this error at a C boundary
    pub fn code(&self) -> i32 {
        match self {
            Self::NegativeCount(_) => -1,
            Self::BufferTooSmall { .. } => -2,
        }
    }
}

