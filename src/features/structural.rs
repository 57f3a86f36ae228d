//! Path, subtree and root features.

use std::sync::Arc;

use crate::constants::{SIMILARITY_THRESHOLDS, TRAVERSAL_DEPTHS};
use crate::idf::IdfTable;
use crate::vector::cosine_similarity;

use super::similarity::{path_vectors, subtree_vectors, threshold_sweep};
use super::{AnnotatedPair, FeatureError, FeatureGenerator};

const SWEEP_ARITY: usize = TRAVERSAL_DEPTHS.len() * SIMILARITY_THRESHOLDS.len();

/// Matched share of aggregated path vectors, per depth and threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSimilarityFeatures;

impl FeatureGenerator for PathSimilarityFeatures {
    fn name(&self) -> &'static str {
        "PathSimilarity"
    }

    fn arity(&self) -> usize {
        SWEEP_ARITY
    }

    fn features(&self, pair: &AnnotatedPair) -> Result<Vec<f64>, FeatureError> {
        Ok(TRAVERSAL_DEPTHS
            .iter()
            .flat_map(|&length| {
                threshold_sweep(
                    &path_vectors(&pair.left, length),
                    &path_vectors(&pair.right, length),
                )
            })
            .collect())
    }
}

/// Matched share of aggregated subtree vectors, per depth and threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubtreeFeatures;

impl FeatureGenerator for SubtreeFeatures {
    fn name(&self) -> &'static str {
        "Subtree"
    }

    fn arity(&self) -> usize {
        SWEEP_ARITY
    }

    fn features(&self, pair: &AnnotatedPair) -> Result<Vec<f64>, FeatureError> {
        Ok(TRAVERSAL_DEPTHS
            .iter()
            .flat_map(|&depth| {
                threshold_sweep(
                    &subtree_vectors(&pair.left, depth, None),
                    &subtree_vectors(&pair.right, depth, None),
                )
            })
            .collect())
    }
}

/// [`SubtreeFeatures`] with every token vector scaled by its IDF weight.
#[derive(Debug, Clone)]
pub struct SubtreeIdfFeatures {
    idf: Arc<IdfTable>,
}

impl SubtreeIdfFeatures {
    pub fn new(idf: Arc<IdfTable>) -> Self {
        Self { idf }
    }
}

impl FeatureGenerator for SubtreeIdfFeatures {
    fn name(&self) -> &'static str {
        "SubtreeIdf"
    }

    fn arity(&self) -> usize {
        SWEEP_ARITY
    }

    fn features(&self, pair: &AnnotatedPair) -> Result<Vec<f64>, FeatureError> {
        let idf = Some(self.idf.as_ref());
        Ok(TRAVERSAL_DEPTHS
            .iter()
            .flat_map(|&depth| {
                threshold_sweep(
                    &subtree_vectors(&pair.left, depth, idf),
                    &subtree_vectors(&pair.right, depth, idf),
                )
            })
            .collect())
    }
}

/// Cosine between the tokens attached to each ROOT; 0 if either lacks a vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootNodeFeatures;

impl FeatureGenerator for RootNodeFeatures {
    fn name(&self) -> &'static str {
        "RootNode"
    }

    fn arity(&self) -> usize {
        1
    }

    fn features(&self, pair: &AnnotatedPair) -> Result<Vec<f64>, FeatureError> {
        let left = pair.left.root_child().and_then(|n| n.vector());
        let right = pair.right.root_child().and_then(|n| n.vector());

        let score = match (left, right) {
            (Some(a), Some(b)) => cosine_similarity(a, b),
            _ => 0.0,
        };
        Ok(vec![score])
    }
}
