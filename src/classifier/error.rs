use thiserror::Error;

use crate::features::FeatureError;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("feature extraction failed: {0}")]
    Features(#[from] FeatureError),

    /// The model was trained on a different feature layout.
    #[error("classifier expects {expected} features, got {actual}")]
    InputLength { expected: usize, actual: usize },

    #[error("prediction failed: {reason}")]
    PredictionFailed { reason: String },
}
