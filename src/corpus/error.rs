use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a sentence-pair corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to open corpus {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read corpus: {0}")]
    Read(#[from] std::io::Error),

    /// A line has fewer than the five tab-separated fields.
    #[error("line {line}: expected 5 tab-separated fields, found {found}")]
    MissingFields { line: usize, found: usize },

    #[error("line {line}: label must be 0 or 1, got '{value}'")]
    InvalidLabel { line: usize, value: String },
}
