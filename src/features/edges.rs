//! Edge-level features.
//!
//! Edge pairs are compared endpoint by endpoint in sentence order (see
//! [`DependencyEdge::ordered`]), not head to dependent. An edge "has vectors"
//! when both endpoints are real tokens with embeddings, which rules out the
//! edge leaving the ROOT.

use crate::constants::{BIGRAM_KERNEL_SAME_LABEL_WEIGHT, EDGE_NODE_SIMILARITY};
use crate::graph::{DependencyEdge, DependencyGraph};
use crate::vector::cosine_similarity;

use super::similarity::{node_similarity, ratio};
use super::{AnnotatedPair, FeatureError, FeatureGenerator};

/// Counts of vector-bearing edge pairs whose endpoints are both similar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct EdgeMatchCounts {
    similar: usize,
    same_label: usize,
}

fn endpoint_vectors<'g>(
    graph: &'g DependencyGraph,
    edge: &DependencyEdge,
) -> Option<(&'g [f32], &'g [f32])> {
    let (first, second) = edge.ordered();
    Some((graph.node(first).vector()?, graph.node(second).vector()?))
}

fn match_edges(left: &DependencyGraph, right: &DependencyGraph) -> EdgeMatchCounts {
    let mut counts = EdgeMatchCounts::default();

    for e1 in left.edges() {
        let Some((s1, t1)) = endpoint_vectors(left, e1) else {
            continue;
        };
        for e2 in right.edges() {
            let Some((s2, t2)) = endpoint_vectors(right, e2) else {
                continue;
            };
            if cosine_similarity(s1, s2) > EDGE_NODE_SIMILARITY
                && cosine_similarity(t1, t2) > EDGE_NODE_SIMILARITY
            {
                counts.similar += 1;
                if e1.dep == e2.dep {
                    counts.same_label += 1;
                }
            }
        }
    }

    counts
}

fn simple_edge_score(pair: &AnnotatedPair) -> f64 {
    let counts = match_edges(&pair.left, &pair.right);
    let total = pair.left.edges().len() * pair.right.edges().len();
    ratio(counts.similar as f64, total as f64)
}

/// Share of all edge pairs that connect similar endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleEdgeFeatures;

impl FeatureGenerator for SimpleEdgeFeatures {
    fn name(&self) -> &'static str {
        "SimpleEdge"
    }

    fn arity(&self) -> usize {
        1
    }

    fn features(&self, pair: &AnnotatedPair) -> Result<Vec<f64>, FeatureError> {
        Ok(vec![simple_edge_score(pair)])
    }
}

/// `[same-label share of similar edge pairs, SimpleEdge]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDependencyFeatures;

impl FeatureGenerator for EdgeDependencyFeatures {
    fn name(&self) -> &'static str {
        "EdgeDependency"
    }

    fn arity(&self) -> usize {
        2
    }

    fn features(&self, pair: &AnnotatedPair) -> Result<Vec<f64>, FeatureError> {
        let counts = match_edges(&pair.left, &pair.right);
        Ok(vec![
            ratio(counts.same_label as f64, counts.similar as f64),
            simple_edge_score(pair),
        ])
    }
}

/// Simple approximate bigram kernel: summed endpoint similarity over all edge
/// pairs, doubled for equal dependency labels, over the total node count.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigramKernelFeatures;

impl BigramKernelFeatures {
    fn edge_pair_similarity(
        left: &DependencyGraph,
        e1: &DependencyEdge,
        right: &DependencyGraph,
        e2: &DependencyEdge,
    ) -> f64 {
        let (a1, b1) = e1.ordered();
        let (a2, b2) = e2.ordered();
        let first = node_similarity(left.node(a1), right.node(a2));
        let second = node_similarity(left.node(b1), right.node(b2));
        let weight = if e1.dep == e2.dep {
            BIGRAM_KERNEL_SAME_LABEL_WEIGHT
        } else {
            1.0
        };
        (first + second) * weight
    }
}

impl FeatureGenerator for BigramKernelFeatures {
    fn name(&self) -> &'static str {
        "BigramKernel"
    }

    fn arity(&self) -> usize {
        1
    }

    fn features(&self, pair: &AnnotatedPair) -> Result<Vec<f64>, FeatureError> {
        let (left, right) = (&pair.left, &pair.right);
        let total: f64 = left
            .edges()
            .iter()
            .flat_map(|e1| {
                right
                    .edges()
                    .iter()
                    .map(move |e2| Self::edge_pair_similarity(left, e1, right, e2))
            })
            .sum();

        let nodes = (left.nodes().len() + right.nodes().len()) as f64;
        Ok(vec![ratio(total, nodes)])
    }
}
