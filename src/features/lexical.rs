//! Surface-level features: lengths, n-gram coverage, dependency coverage and BLEU.

use crate::annotation::Token;
use crate::bleu::{BleuCalculator, ngrams};
use crate::constants::{
    BLEU_MAX_ORDERS, LENGTH_RATIO_BASE, NGRAM_MATCH_SIMILARITY, PATH_NGRAM_ORDERS,
    TOKEN_NGRAM_ORDERS,
};
use crate::graph::{DependencyGraph, paths_of_length};

use super::similarity::{node_similarity, ratio, token_similarity, tokens_equivalent};
use super::{AnnotatedPair, FeatureError, FeatureGenerator};

fn tokens(graph: &DependencyGraph) -> Vec<&Token> {
    graph.tokens().collect()
}

/// `[(a - b) / a, 1 / 0.8^(a - b)]` for token counts `a` and `b`.
fn length_features(a: usize, b: usize) -> [f64; 2] {
    let diff = a as f64 - b as f64;
    [ratio(diff, a as f64), LENGTH_RATIO_BASE.powf(-diff)]
}

/// Share of `left`'s token n-grams that have an equivalent n-gram in `right`.
fn token_ngram_coverage(left: &[&Token], right: &[&Token], n: usize) -> f64 {
    let left_ngrams = ngrams(left, n);
    let right_ngrams = ngrams(right, n);

    let covered = left_ngrams
        .iter()
        .filter(|a| {
            right_ngrams
                .iter()
                .any(|b| a.iter().zip(b.iter()).all(|(x, y)| tokens_equivalent(x, y)))
        })
        .count();

    ratio(covered as f64, left_ngrams.len() as f64)
}

/// Share of `left`'s edges with a same-label edge in `right` whose endpoints
/// are both similar.
fn dependency_coverage(left: &DependencyGraph, right: &DependencyGraph) -> f64 {
    let covered = left
        .edges()
        .iter()
        .filter(|e1| {
            let (a1, b1) = e1.ordered();
            right.edges().iter().any(|e2| {
                let (a2, b2) = e2.ordered();
                e1.dep == e2.dep
                    && node_similarity(left.node(a1), right.node(a2)) > NGRAM_MATCH_SIMILARITY
                    && node_similarity(left.node(b1), right.node(b2)) > NGRAM_MATCH_SIMILARITY
            })
        })
        .count();

    ratio(covered as f64, left.edges().len() as f64)
}

/// Share of `left`'s `n`-node paths that match some path of `right`
/// node by node.
fn path_ngram_coverage(left: &DependencyGraph, right: &DependencyGraph, n: usize) -> f64 {
    let Some(length) = n.checked_sub(1) else {
        return 0.0;
    };
    let left_paths = paths_of_length(left, 0, length);
    let right_paths = paths_of_length(right, 0, length);

    let covered = left_paths
        .iter()
        .filter(|p1| {
            right_paths.iter().any(|p2| {
                p1.iter().zip(p2.iter()).all(|(&a, &b)| {
                    node_similarity(left.node(a), right.node(b)) >= NGRAM_MATCH_SIMILARITY
                })
            })
        })
        .count();

    ratio(covered as f64, left_paths.len() as f64)
}

/// Length, token n-gram, dependency and path n-gram features, each computed in
/// both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalFeatures;

impl FeatureGenerator for LexicalFeatures {
    fn name(&self) -> &'static str {
        "Lexical"
    }

    fn arity(&self) -> usize {
        4 + 2 * TOKEN_NGRAM_ORDERS.len() + 2 + 2 * PATH_NGRAM_ORDERS.len()
    }

    fn features(&self, pair: &AnnotatedPair) -> Result<Vec<f64>, FeatureError> {
        let (g1, g2) = (&pair.left, &pair.right);
        let (t1, t2) = (tokens(g1), tokens(g2));

        let mut out = Vec::with_capacity(self.arity());

        out.extend(length_features(t1.len(), t2.len()));
        out.extend(length_features(t2.len(), t1.len()));

        for &n in &TOKEN_NGRAM_ORDERS {
            out.push(token_ngram_coverage(&t1, &t2, n));
            out.push(token_ngram_coverage(&t2, &t1, n));
        }

        out.push(dependency_coverage(g1, g2));
        out.push(dependency_coverage(g2, g1));

        for &n in &PATH_NGRAM_ORDERS {
            out.push(path_ngram_coverage(g1, g2, n));
            out.push(path_ngram_coverage(g2, g1, n));
        }

        Ok(out)
    }
}

/// Token-level BLEU for orders 1..=4, each as `[BLEU(s1, s2), BLEU(s2, s1)]`
/// with the first sentence as reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct BleuFeatures;

impl FeatureGenerator for BleuFeatures {
    fn name(&self) -> &'static str {
        "Bleu"
    }

    fn arity(&self) -> usize {
        2 * BLEU_MAX_ORDERS.len()
    }

    fn features(&self, pair: &AnnotatedPair) -> Result<Vec<f64>, FeatureError> {
        let (t1, t2) = (tokens(&pair.left), tokens(&pair.right));
        let bleu: BleuCalculator<&Token, _> = BleuCalculator::new(|a: &&Token, b: &&Token| {
            token_similarity(a, b) >= NGRAM_MATCH_SIMILARITY
        });

        Ok(BLEU_MAX_ORDERS
            .iter()
            .flat_map(|&max_n| [bleu.score(&t1, &t2, max_n), bleu.score(&t2, &t1, max_n)])
            .collect())
    }
}
