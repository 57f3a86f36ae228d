//! Graphs over sentences.
//!
//! - [`DependencyGraph`] is the annotated syntax tree of one sentence (node 0 is ROOT).
//! - [`LabeledGraph`] is a plain labeled graph used for edit-distance comparisons.
//! - [`traversal`] enumerates rooted paths and subtrees over either.
//!
//! Nodes are addressed by dense integer ids; adjacency lists keep edge
//! insertion order so traversals are deterministic.

/// Dependency graph construction.
pub mod dependency;
mod error;
/// Generic labeled graph.
pub mod labeled;
/// Path and subtree enumeration.
pub mod traversal;


pub use dependency::{DependencyEdge, DependencyGraph, DependencyGraphBuilder, DependencyNode};
pub use error::GraphError;
pub use labeled::LabeledGraph;
pub use traversal::{paths_of_length, subtrees_of_depth};

/// Read access to an undirected graph with dense node ids `0..node_count()`.
pub trait Adjacency {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Neighbors of `node` in edge insertion order.
    fn neighbors(&self, node: usize) -> &[usize];
}
