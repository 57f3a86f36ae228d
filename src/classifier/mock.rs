use super::{ClassifierError, ParaphraseClassifier, Prediction};

/// Deterministic stand-in for a trained model: the paraphrase probability is
/// the mean feature value clamped to `[0, 1]`.
#[derive(Debug, Clone)]
pub struct MockClassifier {
    input_len: usize,
}

impl MockClassifier {
    pub fn new(input_len: usize) -> Self {
        Self { input_len }
    }
}

impl ParaphraseClassifier for MockClassifier {
    fn input_len(&self) -> usize {
        self.input_len
    }

    fn predict(&self, features: &[f64]) -> Result<Prediction, ClassifierError> {
        if features.len() != self.input_len {
            return Err(ClassifierError::InputLength {
                expected: self.input_len,
                actual: features.len(),
            });
        }
        if features.is_empty() {
            return Err(ClassifierError::PredictionFailed {
                reason: "empty feature vector".to_string(),
            });
        }

        let mean = features.iter().sum::<f64>() / features.len() as f64;
        Ok(Prediction::from_probability(mean.clamp(0.0, 1.0)))
    }
}
