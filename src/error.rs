use thiserror::Error;

/// Errors returned by the clustering engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Dataset is empty, or its first point has no coordinates.
    #[error("empty input")]
    EmptyInput,

    /// Invalid configuration value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// A point's dimensionality differs from the dataset's (or the model's).
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A fitted-model query was made before a successful `fit`.
    #[error("model has not been fitted")]
    NotFitted,
}

/// Coarse classification of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected at construction time.
    InvalidConfiguration,
    /// Rejected dataset at `fit` (or `predict`) time.
    InvalidInput,
    /// Query on an engine with no successful fit.
    NotFitted,
}

impl Error {
    /// Which of the three error kinds this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidParameter { .. } => ErrorKind::InvalidConfiguration,
            Error::EmptyInput
            | Error::InvalidClusterCount { .. }
            | Error::DimensionMismatch { .. } => ErrorKind::InvalidInput,
            Error::NotFitted => ErrorKind::NotFitted,
        }
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
