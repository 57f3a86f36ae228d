//! Approximate graph edit distance via the assignment problem.
//!
//! An [`EditCostModel`] describes two populations of size `n` and `m` and the
//! cost of substituting, inserting or deleting each element. The combined
//! `(n + m) x (n + m)` matrix is laid out as
//!
//! ```text
//! substitute (n x m) | delete (n x n, diagonal)
//! -------------------+-------------------------
//! insert (m x m,     | zero (m x n)
//!   diagonal)        |
//! ```
//!
//! and solved with [`crate::assignment::solve`]. Off-diagonal insert/delete
//! cells hold [`FORBIDDEN_COST`], so an insertion is never traded for an
//! unrelated deletion.
//!
//! Two models are provided: [`GraphEditDistance`] over the nodes of two
//! [`LabeledGraph`]s, and [`EdgeEditDistance`] over two edge lists, which the
//! former uses to price differences between a node pair's incident edges.


use std::hash::Hash;

use crate::assignment::{AssignmentError, CostMatrix, FORBIDDEN_COST, solve};
use crate::graph::LabeledGraph;

/// Element costs for an assignment-based edit distance.
pub trait EditCostModel {
    /// Size of the left population.
    fn left_len(&self) -> usize;

    /// Size of the right population.
    fn right_len(&self) -> usize;

    /// Cost of substituting left element `i` with right element `j`.
    fn substitute_cost(&self, i: usize, j: usize) -> Result<f64, AssignmentError>;

    /// Cost of inserting right element `i` when paired with slot `j`.
    fn insert_cost(&self, i: usize, j: usize) -> f64 {
        if i == j { 1.0 } else { FORBIDDEN_COST }
    }

    /// Cost of deleting left element `i` when paired with slot `j`.
    fn delete_cost(&self, i: usize, j: usize) -> f64 {
        if i == j { 1.0 } else { FORBIDDEN_COST }
    }

    /// Builds the combined substitute / insert / delete matrix.
    fn cost_matrix(&self) -> Result<CostMatrix, AssignmentError> {
        let n = self.left_len();
        let m = self.right_len();
        let mut matrix = CostMatrix::zeros(n + m, n + m);

        for i in 0..n {
            for j in 0..m {
                matrix[(i, j)] = self.substitute_cost(i, j)?;
            }
        }
        for i in 0..m {
            for j in 0..m {
                matrix[(i + n, j)] = self.insert_cost(i, j);
            }
        }
        for i in 0..n {
            for j in 0..n {
                matrix[(j, i + m)] = self.delete_cost(i, j);
            }
        }

        Ok(matrix)
    }

    /// Costs of the optimal edit operations.
    fn edit_costs(&self) -> Result<Vec<f64>, AssignmentError> {
        let matrix = self.cost_matrix()?;
        let assignment = solve(&matrix)?;
        Ok(assignment.costs(&matrix))
    }

    /// Total edit cost.
    fn distance(&self) -> Result<f64, AssignmentError> {
        Ok(self.edit_costs()?.iter().sum())
    }

    /// Total edit cost divided by `n + m` (0 when both sides are empty), so
    /// small graphs are not favored.
    fn normalized_distance(&self) -> Result<f64, AssignmentError> {
        let size = self.left_len() + self.right_len();
        if size == 0 {
            return Ok(0.0);
        }
        Ok(self.distance()? / size as f64)
    }
}

/// Edit distance between two edge lists: substitution is free for equal edges,
/// 1 otherwise.
#[derive(Debug, Clone, Copy)]
pub struct EdgeEditDistance<'a, E> {
    left: &'a [E],
    right: &'a [E],
}

impl<'a, E: PartialEq> EdgeEditDistance<'a, E> {
    pub fn new(left: &'a [E], right: &'a [E]) -> Self {
        Self { left, right }
    }
}

impl<E: PartialEq> EditCostModel for EdgeEditDistance<'_, E> {
    fn left_len(&self) -> usize {
        self.left.len()
    }

    fn right_len(&self) -> usize {
        self.right.len()
    }

    fn substitute_cost(&self, i: usize, j: usize) -> Result<f64, AssignmentError> {
        Ok(if self.left[i] == self.right[j] { 0.0 } else { 1.0 })
    }
}

/// Node edit distance between two labeled graphs.
///
/// Substituting node `a` with node `b` costs 1 if their labels differ, plus the
/// normalized [`EdgeEditDistance`] between their incident edges (or the larger
/// edge count when either node has none).
#[derive(Debug, Clone, Copy)]
pub struct GraphEditDistance<'a, N> {
    left: &'a LabeledGraph<N>,
    right: &'a LabeledGraph<N>,
}

impl<'a, N: Clone + Eq + Hash> GraphEditDistance<'a, N> {
    pub fn new(left: &'a LabeledGraph<N>, right: &'a LabeledGraph<N>) -> Self {
        Self { left, right }
    }

    fn relabel_cost(&self, i: usize, j: usize) -> f64 {
        if self.left.label(i) == self.right.label(j) {
            0.0
        } else {
            1.0
        }
    }

    fn edge_diff(&self, i: usize, j: usize) -> Result<f64, AssignmentError> {
        let edges1 = self.left.incident_edges(i);
        let edges2 = self.right.incident_edges(j);
        if edges1.is_empty() || edges2.is_empty() {
            return Ok(edges1.len().max(edges2.len()) as f64);
        }
        EdgeEditDistance::new(&edges1, &edges2).normalized_distance()
    }
}

impl<N: Clone + Eq + Hash> EditCostModel for GraphEditDistance<'_, N> {
    fn left_len(&self) -> usize {
        self.left.len()
    }

    fn right_len(&self) -> usize {
        self.right.len()
    }

    fn substitute_cost(&self, i: usize, j: usize) -> Result<f64, AssignmentError> {
        Ok(self.relabel_cost(i, j) + self.edge_diff(i, j)?)
    }
}

/// Convenience wrapper: normalized or raw edit distance between two graphs.
pub fn compare_graphs<N: Clone + Eq + Hash>(
    left: &LabeledGraph<N>,
    right: &LabeledGraph<N>,
    normalized: bool,
) -> Result<f64, AssignmentError> {
    let ged = GraphEditDistance::new(left, right);
    if normalized {
        ged.normalized_distance()
    } else {
        ged.distance()
    }
}
