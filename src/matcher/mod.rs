//! Hungarian alignment of the nodes of two dependency graphs.
//!
//! The matcher scores every node pair, solves the assignment problem once on
//! `1 - similarity`, and keeps the assigned pairs whose similarity exceeds a
//! threshold. Changing the threshold only re-filters the stored assignment.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::assignment::{Assignment, AssignmentError, CostMatrix, solve};
use crate::graph::{DependencyGraph, DependencyNode, LabeledGraph};
use crate::vector::cosine_similarity;

/// Which input graph a node came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

/// Node label of a converted graph.
///
/// Unmatched nodes are unique per side and id; a matched pair shares one
/// label in both graphs, so relabeling it costs nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeLabel {
    Unmatched { side: Side, id: usize },
    Matched { left: usize, right: usize },
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmatched { side: Side::Left, id } => write!(f, "G1_{id}"),
            Self::Unmatched { side: Side::Right, id } => write!(f, "G2_{id}"),
            Self::Matched { left, right } => write!(f, "G1_{left}_G2_{right}"),
        }
    }
}

/// Similarity used to align two nodes.
///
/// Real nodes with vectors compare by cosine. Nodes of the same kind (both
/// real, or both synthetic) otherwise compare by label equality. A real node
/// never resembles the ROOT.
pub fn alignment_similarity(a: &DependencyNode, b: &DependencyNode) -> f64 {
    match (a.vector(), b.vector()) {
        (Some(va), Some(vb)) => cosine_similarity(va, vb),
        _ if a.is_fake() == b.is_fake() => {
            if a.label == b.label {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

/// Assignment-based node matcher over two dependency graphs.
#[derive(Debug, Clone)]
pub struct HungarianNodeMatcher<'g> {
    left: &'g DependencyGraph,
    right: &'g DependencyGraph,
    similarity: CostMatrix,
    assignment: Assignment,
    threshold: f64,
    matches: BTreeMap<usize, usize>,
}

impl<'g> HungarianNodeMatcher<'g> {
    /// Scores all node pairs, solves the assignment and filters it at `threshold`.
    pub fn new(
        left: &'g DependencyGraph,
        right: &'g DependencyGraph,
        threshold: f64,
    ) -> Result<Self, AssignmentError> {
        let (n1, n2) = (left.nodes().len(), right.nodes().len());
        let similarity = CostMatrix::from_fn(n1, n2, |i, j| {
            alignment_similarity(left.node(i), right.node(j))
        });
        let assignment = solve(&similarity.complement(1.0))?;

        debug!(
            left_nodes = n1,
            right_nodes = n2,
            assigned = assignment.len(),
            "Solved node alignment"
        );

        let mut matcher = Self {
            left,
            right,
            similarity,
            assignment,
            threshold,
            matches: BTreeMap::new(),
        };
        matcher.match_nodes();
        Ok(matcher)
    }

    /// Re-filters the stored assignment at a new threshold.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
        self.match_nodes();
    }

    fn match_nodes(&mut self) {
        self.matches = self
            .assignment
            .pairs()
            .iter()
            .copied()
            .filter(|&(i, j)| self.similarity[(i, j)] > self.threshold)
            .collect();
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Matched pairs, left node id to right node id.
    pub fn matches(&self) -> &BTreeMap<usize, usize> {
        &self.matches
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Node-pair similarity matrix (rows: left nodes, columns: right nodes).
    pub fn similarity_matrix(&self) -> &CostMatrix {
        &self.similarity
    }

    /// The unfiltered optimal assignment.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Both graphs rebuilt from their edges with [`NodeLabel`]s reflecting the
    /// current match set. Nodes not touched by any edge are absent.
    pub fn get_converted_graphs(&self) -> (LabeledGraph<NodeLabel>, LabeledGraph<NodeLabel>) {
        let left_label = |id: usize| match self.matches.get(&id) {
            Some(&right) => NodeLabel::Matched { left: id, right },
            None => NodeLabel::Unmatched {
                side: Side::Left,
                id,
            },
        };

        let reverse: BTreeMap<usize, usize> =
            self.matches.iter().map(|(&l, &r)| (r, l)).collect();
        let right_label = |id: usize| match reverse.get(&id) {
            Some(&left) => NodeLabel::Matched { left, right: id },
            None => NodeLabel::Unmatched {
                side: Side::Right,
                id,
            },
        };

        let g1 = LabeledGraph::from_edges(
            self.left
                .edges()
                .iter()
                .map(|e| (left_label(e.start), left_label(e.end))),
        );
        let g2 = LabeledGraph::from_edges(
            self.right
                .edges()
                .iter()
                .map(|e| (right_label(e.start), right_label(e.end))),
        );
        (g1, g2)
    }
}
