//! Sentence-pair feature generation.
//!
//! Each [`FeatureGenerator`] turns an [`AnnotatedPair`] into a fixed number of
//! values. [`FeatureEnsemble`] runs the generators in manifest order and
//! checks every arity; [`FeatureSelector`] applies the classifier's bit mask;
//! [`FeatureExtractor`] ties annotation, ensemble and selector together.
//!
//! # Generator order (manifest v1)
//!
//! | # | Generator        | Arity |
//! |---|------------------|-------|
//! | 1 | `HungarianGraph` | 8     |
//! | 2 | `HungarianNode`  | 12    |
//! | 3 | `PathSimilarity` | 20    |
//! | 4 | `Subtree`        | 20    |
//! | 5 | `RootNode`       | 1     |
//! | 6 | `SimpleEdge`     | 1     |
//! | 7 | `EdgeDependency` | 2     |
//! | 8 | `BigramKernel`   | 1     |
//! | 9 | `SubtreeIdf`     | 20    |
//! | 10| `Lexical`        | 20    |
//! | 11| `Bleu`           | 8     |
//!
//! Reordering or resizing any generator invalidates the selector mask.

pub mod edges;
pub mod ensemble;
mod error;
pub mod extractor;
pub mod hungarian;
pub mod lexical;
pub mod similarity;
pub mod structural;


pub use edges::{BigramKernelFeatures, EdgeDependencyFeatures, SimpleEdgeFeatures};
pub use ensemble::{FeatureEnsemble, FeatureManifest, FeatureSelector};
pub use error::FeatureError;
pub use extractor::FeatureExtractor;
pub use hungarian::{HungarianGraphFeatures, HungarianNodeFeatures};
pub use lexical::{BleuFeatures, LexicalFeatures};
pub use structural::{PathSimilarityFeatures, RootNodeFeatures, SubtreeFeatures, SubtreeIdfFeatures};

use crate::graph::{DependencyGraph, DependencyGraphBuilder, GraphError};

/// The two dependency graphs of a sentence pair, built once per extraction.
#[derive(Debug, Clone)]
pub struct AnnotatedPair {
    pub left: DependencyGraph,
    pub right: DependencyGraph,
}

impl AnnotatedPair {
    pub fn new(left: DependencyGraph, right: DependencyGraph) -> Self {
        Self { left, right }
    }

    /// Annotates both sentences with `builder`.
    pub fn build(builder: &DependencyGraphBuilder, s1: &str, s2: &str) -> Result<Self, GraphError> {
        Ok(Self {
            left: builder.build(s1)?,
            right: builder.build(s2)?,
        })
    }

    /// The same pair with the sides exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            left: self.right.clone(),
            right: self.left.clone(),
        }
    }
}

/// One block of the feature vector.
pub trait FeatureGenerator: Send + Sync {
    /// Manifest name.
    fn name(&self) -> &'static str;

    /// Number of values [`features`](Self::features) always returns.
    fn arity(&self) -> usize;

    fn features(&self, pair: &AnnotatedPair) -> Result<Vec<f64>, FeatureError>;
}
