use thiserror::Error;

use crate::assignment::AssignmentError;
use crate::graph::GraphError;

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("assignment error: {0}")]
    Assignment(#[from] AssignmentError),

    /// A generator returned a different number of values than it declares.
    #[error("generator {generator} produced {actual} features, expected {expected}")]
    ArityMismatch {
        generator: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The generator list does not line up with the versioned manifest.
    #[error("manifest mismatch at position {position}: expected {expected}, found {found}")]
    ManifestMismatch {
        position: usize,
        expected: String,
        found: String,
    },

    /// The selector mask does not cover the feature vector exactly.
    #[error("mask length {mask_len} does not match feature vector length {feature_len}")]
    MaskLength { mask_len: usize, feature_len: usize },

    #[error("invalid mask character {found:?} at position {position}")]
    InvalidMask { position: usize, found: char },
}
