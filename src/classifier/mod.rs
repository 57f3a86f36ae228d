//! Paraphrase decision on top of the feature extractor.
//!
//! The trained model itself lives outside this crate; anything implementing
//! [`ParaphraseClassifier`] over the masked feature vector can be plugged into
//! a [`ParaphraseDetector`].

mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;

#[cfg(test)]
mod tests;

pub use error::ClassifierError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockClassifier;

use std::fmt;

use rayon::prelude::*;
use tracing::debug;

use crate::features::FeatureExtractor;

/// Classifier output.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// `1` for paraphrase, `0` otherwise.
    pub label: u8,
    /// Class probabilities indexed by label.
    pub probabilities: Vec<f64>,
}

impl Prediction {
    /// Two-class prediction from the paraphrase probability, labeled at 0.5.
    pub fn from_probability(p_paraphrase: f64) -> Self {
        Self {
            label: u8::from(p_paraphrase >= 0.5),
            probabilities: vec![1.0 - p_paraphrase, p_paraphrase],
        }
    }

    #[inline]
    pub fn is_paraphrase(&self) -> bool {
        self.label == 1
    }

    /// Probability of the predicted label.
    pub fn confidence(&self) -> Option<f64> {
        self.probabilities.get(usize::from(self.label)).copied()
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_paraphrase() {
            "PARAPHRASE"
        } else {
            "NOT_PARAPHRASE"
        };
        match self.confidence() {
            Some(p) => write!(f, "{status} (p: {p:.4})"),
            None => write!(f, "{status}"),
        }
    }
}

/// A trained binary classifier over masked feature vectors.
pub trait ParaphraseClassifier: Send + Sync {
    /// Number of features the model expects.
    fn input_len(&self) -> usize;

    fn predict(&self, features: &[f64]) -> Result<Prediction, ClassifierError>;
}

/// Feature extraction followed by classification.
pub struct ParaphraseDetector<C> {
    extractor: FeatureExtractor,
    classifier: C,
}

impl<C> fmt::Debug for ParaphraseDetector<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParaphraseDetector")
            .field("extractor", &self.extractor)
            .finish_non_exhaustive()
    }
}

impl<C: ParaphraseClassifier> ParaphraseDetector<C> {
    /// Fails if the classifier's input length differs from the extractor's output.
    pub fn new(extractor: FeatureExtractor, classifier: C) -> Result<Self, ClassifierError> {
        if classifier.input_len() != extractor.output_len() {
            return Err(ClassifierError::InputLength {
                expected: classifier.input_len(),
                actual: extractor.output_len(),
            });
        }
        Ok(Self {
            extractor,
            classifier,
        })
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn detect(&self, s1: &str, s2: &str) -> Result<Prediction, ClassifierError> {
        let features = self.extractor.extract(s1, s2)?;
        let prediction = self.classifier.predict(&features)?;

        debug!(
            label = prediction.label,
            confidence = prediction.confidence(),
            "Classified sentence pair"
        );

        Ok(prediction)
    }

    /// [`detect`](Self::detect) over many pairs in parallel, preserving order.
    pub fn detect_batch<S>(&self, pairs: &[(S, S)]) -> Vec<Result<Prediction, ClassifierError>>
    where
        S: AsRef<str> + Sync,
    {
        pairs
            .par_iter()
            .map(|(s1, s2)| self.detect(s1.as_ref(), s2.as_ref()))
            .collect()
    }
}
