mod scoring_error;

pub use scoring_error::ScoringError;

use std::path::PathBuf;

/// Top-level error for every Skepesis crate.
#[derive(Debug, thiserror::Error)]
pub enum SkepesisError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SkepesisResult<T> = Result<T, SkepesisError>;
