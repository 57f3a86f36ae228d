//! Features from the Hungarian node alignment.

use crate::constants::{DEFAULT_MATCH_THRESHOLD, SIMILARITY_THRESHOLDS};
use crate::ged::{EditCostModel, GraphEditDistance};
use crate::matcher::HungarianNodeMatcher;

use super::similarity::ratio;
use super::{AnnotatedPair, FeatureError, FeatureGenerator};

/// Graph edit distance between the converted graphs, per threshold:
/// `[normalized, raw]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HungarianGraphFeatures;

impl FeatureGenerator for HungarianGraphFeatures {
    fn name(&self) -> &'static str {
        "HungarianGraph"
    }

    fn arity(&self) -> usize {
        2 * SIMILARITY_THRESHOLDS.len()
    }

    fn features(&self, pair: &AnnotatedPair) -> Result<Vec<f64>, FeatureError> {
        let mut matcher =
            HungarianNodeMatcher::new(&pair.left, &pair.right, DEFAULT_MATCH_THRESHOLD)?;

        let mut out = Vec::with_capacity(self.arity());
        for &threshold in &SIMILARITY_THRESHOLDS {
            matcher.set_threshold(threshold);
            let (g1, g2) = matcher.get_converted_graphs();

            let ged = GraphEditDistance::new(&g1, &g2);
            let raw: f64 = ged.edit_costs()?.iter().sum();
            out.push(ratio(raw, (g1.len() + g2.len()) as f64));
            out.push(raw);
        }
        Ok(out)
    }
}

/// Converted graph sizes and matched-node share, per threshold:
/// `[|g1|, |g2|, 2 * matched / (|g1| + |g2|)]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HungarianNodeFeatures;

impl FeatureGenerator for HungarianNodeFeatures {
    fn name(&self) -> &'static str {
        "HungarianNode"
    }

    fn arity(&self) -> usize {
        3 * SIMILARITY_THRESHOLDS.len()
    }

    fn features(&self, pair: &AnnotatedPair) -> Result<Vec<f64>, FeatureError> {
        let mut matcher =
            HungarianNodeMatcher::new(&pair.left, &pair.right, DEFAULT_MATCH_THRESHOLD)?;

        let mut out = Vec::with_capacity(self.arity());
        for &threshold in &SIMILARITY_THRESHOLDS {
            matcher.set_threshold(threshold);
            let (g1, g2) = matcher.get_converted_graphs();
            let (n1, n2) = (g1.len() as f64, g2.len() as f64);

            out.push(n1);
            out.push(n2);
            out.push(ratio(2.0 * matcher.match_count() as f64, n1 + n2));
        }
        Ok(out)
    }
}
