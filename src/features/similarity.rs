//! Similarity helpers shared by the generators.

use crate::annotation::Token;
use crate::constants::{NGRAM_MATCH_SIMILARITY, SIMILARITY_THRESHOLDS};
use crate::graph::{DependencyGraph, DependencyNode, paths_of_length, subtrees_of_depth};
use crate::idf::IdfTable;
use crate::vector::{add_scaled, cosine_similarity};

/// Cosine of the two nodes' vectors when both have one, else 1/0 label equality.
pub fn node_similarity(a: &DependencyNode, b: &DependencyNode) -> f64 {
    match (a.vector(), b.vector()) {
        (Some(va), Some(vb)) => cosine_similarity(va, vb),
        _ => f64::from(u8::from(a.label == b.label)),
    }
}

/// Cosine of the two tokens' vectors when both have one, else 1/0 text equality.
pub fn token_similarity(a: &Token, b: &Token) -> f64 {
    match (a.vector(), b.vector()) {
        (Some(va), Some(vb)) => cosine_similarity(va, vb),
        _ => f64::from(u8::from(a.text == b.text)),
    }
}

/// Equal text, or similar enough to count as the same word.
pub fn tokens_equivalent(a: &Token, b: &Token) -> bool {
    a.text == b.text || token_similarity(a, b) >= NGRAM_MATCH_SIMILARITY
}

/// `numerator / denominator`, or 0 when the denominator is 0.
#[inline]
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Number of vectors in `left` with at least one vector in `right` of cosine
/// above `threshold`.
pub fn count_matched_vectors(left: &[Vec<f32>], right: &[Vec<f32>], threshold: f64) -> usize {
    left.iter()
        .filter(|a| right.iter().any(|b| cosine_similarity(a, b) > threshold))
        .count()
}

/// `2 * matched / (|left| + |right|)` at each of the standard thresholds.
pub fn threshold_sweep(left: &[Vec<f32>], right: &[Vec<f32>]) -> Vec<f64> {
    let total = (left.len() + right.len()) as f64;
    SIMILARITY_THRESHOLDS
        .iter()
        .map(|&t| ratio(2.0 * count_matched_vectors(left, right, t) as f64, total))
        .collect()
}

/// Summed vectors of every length-`length` path whose nodes all carry vectors.
pub fn path_vectors(graph: &DependencyGraph, length: usize) -> Vec<Vec<f32>> {
    paths_of_length(graph, 0, length)
        .iter()
        .filter_map(|path| aggregate(graph, path, |_| 1.0))
        .collect()
}

/// Summed vectors of every depth-`depth` subtree whose nodes all carry
/// vectors, each token scaled by its IDF weight when `idf` is given.
pub fn subtree_vectors(
    graph: &DependencyGraph,
    depth: usize,
    idf: Option<&IdfTable>,
) -> Vec<Vec<f32>> {
    subtrees_of_depth(graph, 0, depth)
        .iter()
        .filter_map(|subtree| {
            aggregate(graph, subtree, |token| {
                idf.map_or(1.0, |table| table.token_idf(token) as f32)
            })
        })
        .collect()
}

fn aggregate<W>(graph: &DependencyGraph, ids: &[usize], weight: W) -> Option<Vec<f32>>
where
    W: Fn(&Token) -> f32,
{
    let mut sum = Vec::new();
    for &id in ids {
        let token = graph.node(id).token.as_ref()?;
        let vector = token.vector()?;
        add_scaled(&mut sum, vector, weight(token));
    }
    (!sum.is_empty()).then_some(sum)
}
