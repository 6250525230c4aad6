use thiserror::Error;

/// Errors returned by the clustering engine and its helpers.
///
/// Every variant is a precondition failure detected before any state is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two compared points have a different number of components.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimensionality of the first point.
        expected: usize,
        /// Dimensionality of the second point.
        found: usize,
    },

    /// A minimum was requested over zero candidates.
    #[error("cannot find argmin of empty sequence")]
    EmptySequence,

    /// A run was started without any centroids.
    #[error("no cluster centroids are defined")]
    NoCentroidsDefined,

    /// Not enough distinct samples to seed the requested number of centroids.
    #[error("insufficient data to choose {requested} centroids: only {available} distinct points")]
    InsufficientData {
        /// Requested number of centroids.
        requested: usize,
        /// Number of distinct points in the sample set.
        available: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
