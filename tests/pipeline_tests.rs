//! End-to-end extraction over the stub annotator.

mod common;

use std::sync::Arc;

use common::fixtures::{SAMPLE_MSRP, assert_close, sample_pairs, stub_extractor, write_msrp};
use sentsim::annotation::StubAnnotator;
use sentsim::classifier::{MockClassifier, ParaphraseDetector};
use sentsim::constants::FEATURE_VECTOR_LEN_V1;
use sentsim::corpus::{load_msrp, reference_sentences};
use sentsim::features::{FeatureEnsemble, FeatureExtractor, FeatureSelector};
use sentsim::idf::IdfTable;

#[test]
fn test_masked_vector_has_selected_length() {
    let extractor = stub_extractor();
    assert_eq!(extractor.output_len(), 64);

    for pair in sample_pairs() {
        let features = extractor.extract(&pair.s1, &pair.s2).unwrap();
        assert_eq!(features.len(), 64);
        assert!(features.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn test_raw_vector_has_manifest_length() {
    let extractor = stub_extractor();
    for pair in sample_pairs() {
        let raw = extractor.extract_raw(&pair.s1, &pair.s2).unwrap();
        assert_eq!(raw.len(), FEATURE_VECTOR_LEN_V1);
    }
}

#[test]
fn test_extraction_is_deterministic() {
    let pairs = sample_pairs();
    let first = stub_extractor().extract(&pairs[1].s1, &pairs[1].s2).unwrap();
    let second = stub_extractor().extract(&pairs[1].s1, &pairs[1].s2).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_identical_sentences() {
    let extractor = stub_extractor();
    let ensemble = extractor.ensemble();
    let sentence = "the stock rose sharply on friday";
    let raw = extractor.extract_raw(sentence, sentence).unwrap();

    let ged = &raw[ensemble.manifest().range_of("HungarianGraph").unwrap()];
    for value in ged {
        assert_close(*value, 0.0);
    }

    let bleu = &raw[ensemble.manifest().range_of("Bleu").unwrap()];
    for value in bleu {
        assert_close(*value, 1.0);
    }

    let lexical = &raw[ensemble.manifest().range_of("Lexical").unwrap()];
    assert_close(lexical[0], 0.0);
    assert_close(lexical[1], 1.0);
}

#[test]
fn test_batch_matches_sequential() {
    let extractor = stub_extractor();
    let pairs: Vec<(String, String)> = sample_pairs()
        .into_iter()
        .map(|p| (p.s1, p.s2))
        .collect();

    let batch = extractor.extract_batch(&pairs);
    assert_eq!(batch.len(), pairs.len());
    for ((s1, s2), result) in pairs.iter().zip(batch) {
        assert_eq!(result.unwrap(), extractor.extract(s1, s2).unwrap());
    }
}

#[test]
fn test_corpus_file_to_features() {
    let file = write_msrp(SAMPLE_MSRP);
    let pairs = load_msrp(file.path()).unwrap();
    assert_eq!(pairs.len(), 3);
    assert_eq!(reference_sentences(&pairs).len(), 6);

    let idf = IdfTable::from_pairs(&pairs).unwrap();
    assert_eq!(idf.corpus_len(), 6);

    let ensemble = FeatureEnsemble::standard(Arc::new(idf)).unwrap();
    let extractor = FeatureExtractor::new(Arc::new(StubAnnotator::default()), ensemble)
        .with_selector(FeatureSelector::paraphrase_v1().unwrap())
        .unwrap();

    let features = extractor.extract(&pairs[0].s1, &pairs[0].s2).unwrap();
    assert_eq!(features.len(), extractor.output_len());
}

#[test]
fn test_empty_sentences_produce_zeros_not_errors() {
    let extractor = stub_extractor();
    let raw = extractor.extract_raw("", "").unwrap();
    assert_eq!(raw.len(), FEATURE_VECTOR_LEN_V1);
    assert!(raw.iter().all(|v| v.is_finite()));
}

#[test]
fn test_detector_over_corpus() {
    let extractor = stub_extractor();
    let len = extractor.output_len();
    let detector = ParaphraseDetector::new(extractor, MockClassifier::new(len)).unwrap();

    let pairs: Vec<(String, String)> = sample_pairs()
        .into_iter()
        .map(|p| (p.s1, p.s2))
        .collect();
    for prediction in detector.detect_batch(&pairs) {
        let prediction = prediction.unwrap();
        assert!(prediction.label <= 1);
        assert_eq!(prediction.probabilities.len(), 2);
    }
}
