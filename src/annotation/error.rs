use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by annotation providers.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// The provider has no annotation for this sentence.
    #[error("no annotation available for sentence: {text:?}")]
    NotFound { text: String },

    /// Annotation file could not be read.
    #[error("failed to read annotations from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the annotation file is not a valid annotation record.
    #[error("malformed annotation record at {path}:{line}: {source}")]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Provider configuration is unusable.
    #[error("invalid annotator configuration: {reason}")]
    InvalidConfig { reason: String },
}
