use super::*;
use crate::annotation::{PrecomputedAnnotator, StubAnnotator};
use crate::features::{FeatureEnsemble, FeatureError};
use crate::idf::IdfTable;
use std::sync::Arc;

fn extractor() -> FeatureExtractor {
    let idf = Arc::new(IdfTable::fit(["a quick brown fox", "the lazy dog"]).unwrap());
    FeatureExtractor::standard(Arc::new(StubAnnotator::default()), idf).unwrap()
}

#[test]
fn test_prediction_from_probability() {
    let p = Prediction::from_probability(0.8);
    assert!(p.is_paraphrase());
    assert_eq!(p.label, 1);
    assert!((p.confidence().unwrap() - 0.8).abs() < 1e-12);

    let p = Prediction::from_probability(0.25);
    assert!(!p.is_paraphrase());
    assert!((p.confidence().unwrap() - 0.75).abs() < 1e-12);
}

#[test]
fn test_prediction_display() {
    assert_eq!(
        Prediction::from_probability(0.5).to_string(),
        "PARAPHRASE (p: 0.5000)"
    );
    let empty = Prediction {
        label: 0,
        probabilities: vec![],
    };
    assert_eq!(empty.to_string(), "NOT_PARAPHRASE");
}

#[test]
fn test_mock_rejects_wrong_length() {
    let mock = MockClassifier::new(3);
    assert!(matches!(
        mock.predict(&[1.0]),
        Err(ClassifierError::InputLength {
            expected: 3,
            actual: 1
        })
    ));
    assert!(matches!(
        MockClassifier::new(0).predict(&[]),
        Err(ClassifierError::PredictionFailed { .. })
    ));
}

#[test]
fn test_mock_uses_mean() {
    let mock = MockClassifier::new(4);
    assert!(mock.predict(&[1.0, 1.0, 0.5, 0.5]).unwrap().is_paraphrase());
    assert!(!mock.predict(&[0.0, 0.0, 0.5, 0.5]).unwrap().is_paraphrase());
}

#[test]
fn test_detector_checks_input_len() {
    let result = ParaphraseDetector::new(extractor(), MockClassifier::new(7));
    assert!(matches!(result, Err(ClassifierError::InputLength { .. })));
}

#[test]
fn test_detector_classifies() {
    let extractor = extractor();
    let len = extractor.output_len();
    let detector = ParaphraseDetector::new(extractor, MockClassifier::new(len)).unwrap();

    let prediction = detector.detect("a quick brown fox", "a quick brown fox").unwrap();
    assert_eq!(prediction.probabilities.len(), 2);
    let sum: f64 = prediction.probabilities.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn test_detect_batch_matches_single() {
    let extractor = extractor();
    let len = extractor.output_len();
    let detector = ParaphraseDetector::new(extractor, MockClassifier::new(len)).unwrap();
    let pairs = [("a quick brown fox", "the lazy dog"), ("x", "x y")];

    let batch = detector.detect_batch(&pairs);
    for ((s1, s2), result) in pairs.iter().zip(batch) {
        assert_eq!(result.unwrap(), detector.detect(s1, s2).unwrap());
    }
}

#[test]
fn test_feature_errors_propagate() {
    let idf = Arc::new(IdfTable::fit(["a"]).unwrap());
    let ensemble = FeatureEnsemble::standard(idf).unwrap();
    let extractor = FeatureExtractor::new(Arc::new(PrecomputedAnnotator::new()), ensemble);
    let len = extractor.output_len();
    let detector = ParaphraseDetector::new(extractor, MockClassifier::new(len)).unwrap();

    assert!(matches!(
        detector.detect("missing", "annotation"),
        Err(ClassifierError::Features(FeatureError::Graph(_)))
    ));
}
