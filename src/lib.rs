//! Sentence-pair similarity features for paraphrase classification (library
//! crate used by the batch binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`FeatureExtractor`] - sentence pair in, classifier-ready vector out
//! - [`FeatureEnsemble`], [`FeatureManifest`], [`FeatureSelector`] - generator order and mask
//! - [`ParaphraseDetector`], [`ParaphraseClassifier`], [`Prediction`] - model glue
//!
//! ## Building Blocks
//! - [`Annotator`] providers: [`StubAnnotator`], [`PrecomputedAnnotator`], [`CachingAnnotator`]
//! - [`DependencyGraph`], [`LabeledGraph`] and their traversals
//! - [`solve`] (linear sum assignment) and [`compare_graphs`] (approximate GED)
//! - [`HungarianNodeMatcher`] - thresholded node alignment
//! - [`BleuCalculator`] - generic sentence BLEU
//! - [`IdfTable`] - smoothed IDF over a reference corpus
//!
//! ## Input
//! - [`Config`], [`ConfigError`] - environment configuration
//! - [`load_msrp`], [`SentencePair`] - MSRP-format corpora
//!
//! ## Test/Mock Support
//! [`MockClassifier`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod annotation;
pub mod assignment;
pub mod bleu;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod features;
pub mod ged;
pub mod graph;
pub mod hashing;
pub mod idf;
pub mod matcher;
pub mod vector;

pub use annotation::{
    AnnotatedToken, Annotation, AnnotationError, Annotator, CachingAnnotator,
    DEFAULT_CACHE_CAPACITY, PrecomputedAnnotator, StubAnnotator, Token,
};
pub use assignment::{Assignment, AssignmentError, CostMatrix, FORBIDDEN_COST, solve};
pub use bleu::{BleuCalculator, brevity_penalty, ngrams};
#[cfg(any(test, feature = "mock"))]
pub use classifier::MockClassifier;
pub use classifier::{ClassifierError, ParaphraseClassifier, ParaphraseDetector, Prediction};
pub use config::{Config, ConfigError};
pub use constants::{
    FEATURE_MANIFEST_V1, FEATURE_SCHEMA_VERSION, FEATURE_VECTOR_LEN_V1, PARAPHRASE_MASK_V1,
};
pub use corpus::{CorpusError, SentencePair, load_msrp, parse_msrp, reference_sentences};
pub use features::{
    AnnotatedPair, FeatureEnsemble, FeatureError, FeatureExtractor, FeatureGenerator,
    FeatureManifest, FeatureSelector,
};
pub use ged::{EdgeEditDistance, EditCostModel, GraphEditDistance, compare_graphs};
pub use graph::{
    DependencyEdge, DependencyGraph, DependencyGraphBuilder, DependencyNode, GraphError,
    LabeledGraph, paths_of_length, subtrees_of_depth,
};
pub use hashing::{hash_sentence, hash_to_u64};
pub use idf::{IdfError, IdfTable};
pub use matcher::{HungarianNodeMatcher, NodeLabel, Side};
pub use vector::cosine_similarity;
