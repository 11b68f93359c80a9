//! Error types for the walk classifier.

use thiserror::Error;

/// Errors raised while recording, extracting and classifying walks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A run length is not covered by any bucket of a bucket table.
    #[error("run length {0} is not covered by any bucket")]
    OutOfRangeRunLength(usize),

    /// A run length below 1, or a parameter that is not finite or out of its
    /// domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A step value that is neither +1 nor -1.
    #[error("invalid step '{0}'")]
    InvalidStep(String),

    /// The walk already holds the maximum number of steps.
    #[error("walk is full ({0} steps)")]
    WalkFull(usize),

    /// The walk was analyzed and does not accept more steps.
    #[error("walk was already analyzed")]
    WalkAnalyzed,
}

/// Errors raised while loading or validating a model configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("can't read the model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed model description: {0}")]
    Json(#[from] serde_json::Error),

    /// A malformed or overlapping bucket.
    #[error("bad bucket table: {0}")]
    Bucket(String),

    #[error(transparent)]
    Model(#[from] Error),
}
