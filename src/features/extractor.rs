use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use crate::annotation::Annotator;
use crate::graph::DependencyGraphBuilder;
use crate::idf::IdfTable;

use super::{AnnotatedPair, FeatureEnsemble, FeatureError, FeatureSelector};

/// Sentence pair in, classifier-ready vector out.
///
/// Each extraction annotates both sentences once and shares the resulting
/// graphs across all generators. The extractor is `Sync`; batches run one pair
/// per rayon task.
#[derive(Debug)]
pub struct FeatureExtractor {
    builder: DependencyGraphBuilder,
    ensemble: FeatureEnsemble,
    selector: Option<FeatureSelector>,
}

impl FeatureExtractor {
    /// Extractor without a mask: [`extract`](Self::extract) returns raw vectors.
    pub fn new(annotator: Arc<dyn Annotator>, ensemble: FeatureEnsemble) -> Self {
        Self {
            builder: DependencyGraphBuilder::new(annotator),
            ensemble,
            selector: None,
        }
    }

    /// v1 generators with the v1 paraphrase mask.
    pub fn standard(annotator: Arc<dyn Annotator>, idf: Arc<IdfTable>) -> Result<Self, FeatureError> {
        Self::new(annotator, FeatureEnsemble::standard(idf)?)
            .with_selector(FeatureSelector::paraphrase_v1()?)
    }

    /// Attaches a mask; fails if it does not cover the ensemble's output exactly.
    pub fn with_selector(mut self, selector: FeatureSelector) -> Result<Self, FeatureError> {
        selector.check_len(self.ensemble.len())?;
        self.selector = Some(selector);
        Ok(self)
    }

    /// Drops the mask.
    pub fn without_selector(mut self) -> Self {
        self.selector = None;
        self
    }

    pub fn ensemble(&self) -> &FeatureEnsemble {
        &self.ensemble
    }

    pub fn selector(&self) -> Option<&FeatureSelector> {
        self.selector.as_ref()
    }

    /// Length of the vectors [`extract`](Self::extract) returns.
    pub fn output_len(&self) -> usize {
        self.selector
            .as_ref()
            .map_or(self.ensemble.len(), FeatureSelector::selected_count)
    }

    pub fn annotate_pair(&self, s1: &str, s2: &str) -> Result<AnnotatedPair, FeatureError> {
        Ok(AnnotatedPair::build(&self.builder, s1, s2)?)
    }

    /// Unmasked feature vector.
    pub fn extract_raw(&self, s1: &str, s2: &str) -> Result<Vec<f64>, FeatureError> {
        let pair = self.annotate_pair(s1, s2)?;
        self.ensemble.features(&pair)
    }

    /// Masked feature vector (raw when no mask is attached).
    pub fn extract(&self, s1: &str, s2: &str) -> Result<Vec<f64>, FeatureError> {
        let raw = self.extract_raw(s1, s2)?;
        match &self.selector {
            Some(selector) => selector.apply(&raw),
            None => Ok(raw),
        }
    }

    /// [`extract`](Self::extract) over many pairs in parallel, preserving order.
    pub fn extract_batch<S>(&self, pairs: &[(S, S)]) -> Vec<Result<Vec<f64>, FeatureError>>
    where
        S: AsRef<str> + Sync,
    {
        debug!(pairs = pairs.len(), "Extracting feature batch");
        pairs
            .par_iter()
            .map(|(s1, s2)| self.extract(s1.as_ref(), s2.as_ref()))
            .collect()
    }
}
