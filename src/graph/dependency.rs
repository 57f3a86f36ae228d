use std::sync::Arc;

use tracing::debug;

use super::{Adjacency, GraphError};
use crate::annotation::{Annotation, Annotator, Token};
use crate::constants::ROOT_LABEL;

/// A node of a [`DependencyGraph`]. Node 0 is the synthetic ROOT and carries no token.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyNode {
    /// Dense node id (`token index + 1` for real nodes).
    pub id: usize,
    /// Token text, or `"ROOT"` for the synthetic root.
    pub label: String,
    /// The token, `None` for the ROOT.
    pub token: Option<Token>,
}

impl DependencyNode {
    /// Returns `true` for the synthetic ROOT.
    #[inline]
    pub fn is_fake(&self) -> bool {
        self.token.is_none()
    }

    /// The node's embedding, if it has a token with a vector.
    #[inline]
    pub fn vector(&self) -> Option<&[f32]> {
        self.token.as_ref().and_then(Token::vector)
    }

    /// Returns `true` if the node has a token with a vector.
    #[inline]
    pub fn has_vector(&self) -> bool {
        self.vector().is_some()
    }
}

/// A labeled head → dependent edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    /// Head node id (0 for edges leaving the ROOT).
    pub start: usize,
    /// Dependent node id.
    pub end: usize,
    /// Dependency relation label.
    pub dep: String,
}

impl DependencyEdge {
    /// Endpoints in sentence order `(lower id, higher id)`, regardless of
    /// which one is the head.
    #[inline]
    pub fn ordered(&self) -> (usize, usize) {
        (self.start.min(self.end), self.start.max(self.end))
    }
}

/// Dependency tree of one sentence: `N + 1` nodes, `N` edges, connected.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    text: String,
    nodes: Vec<DependencyNode>,
    edges: Vec<DependencyEdge>,
    adjacency: Vec<Vec<usize>>,
}

impl DependencyGraph {
    /// Builds the graph from provider output, validating the tree shape.
    pub fn from_annotation(annotation: &Annotation) -> Result<Self, GraphError> {
        let len = annotation.len();

        let mut nodes = Vec::with_capacity(len + 1);
        nodes.push(DependencyNode {
            id: 0,
            label: ROOT_LABEL.to_string(),
            token: None,
        });

        let mut edges = Vec::with_capacity(len);
        for (i, annotated) in annotation.tokens.iter().enumerate() {
            nodes.push(DependencyNode {
                id: i + 1,
                label: annotated.token.text.clone(),
                token: Some(annotated.token.clone()),
            });

            let start = match annotated.head {
                None => 0,
                Some(head) if head < len => head + 1,
                Some(head) => {
                    return Err(GraphError::HeadOutOfRange {
                        token: i,
                        head,
                        len,
                    });
                }
            };

            edges.push(DependencyEdge {
                start,
                end: i + 1,
                dep: annotated.dep.clone(),
            });
        }

        let mut adjacency = vec![Vec::new(); len + 1];
        for edge in &edges {
            adjacency[edge.start].push(edge.end);
            adjacency[edge.end].push(edge.start);
        }

        let graph = Self {
            text: annotation.text.clone(),
            nodes,
            edges,
            adjacency,
        };
        graph.check_tree()?;
        Ok(graph)
    }

    fn check_tree(&self) -> Result<(), GraphError> {
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![0usize];
        seen[0] = true;
        let mut reached = 1;

        while let Some(node) = stack.pop() {
            for &next in &self.adjacency[node] {
                if !seen[next] {
                    seen[next] = true;
                    reached += 1;
                    stack.push(next);
                }
            }
        }

        if reached == self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::NotATree {
                unreachable: self.nodes.len() - reached,
            })
        }
    }

    /// Original sentence text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All nodes, ROOT first.
    pub fn nodes(&self) -> &[DependencyNode] {
        &self.nodes
    }

    /// Node by id.
    pub fn node(&self, id: usize) -> &DependencyNode {
        &self.nodes[id]
    }

    /// Edges in token order.
    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    /// Tokens in sentence order (excludes the ROOT).
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.nodes.iter().filter_map(|n| n.token.as_ref())
    }

    /// Number of real tokens.
    pub fn token_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// The first token attached directly to the ROOT, if any.
    pub fn root_child(&self) -> Option<&DependencyNode> {
        self.adjacency[0].first().map(|&id| &self.nodes[id])
    }
}

impl Adjacency for DependencyGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }
}

/// Annotates sentences and turns them into [`DependencyGraph`]s.
///
/// Every call re-invokes the annotator; wrap it in a
/// [`CachingAnnotator`](crate::annotation::CachingAnnotator) to memoize.
#[derive(Clone)]
pub struct DependencyGraphBuilder {
    annotator: Arc<dyn Annotator>,
}

impl std::fmt::Debug for DependencyGraphBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyGraphBuilder").finish_non_exhaustive()
    }
}

impl DependencyGraphBuilder {
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        Self { annotator }
    }

    pub fn annotator(&self) -> &Arc<dyn Annotator> {
        &self.annotator
    }

    /// Annotates `sentence` once and builds its graph.
    pub fn build(&self, sentence: &str) -> Result<DependencyGraph, GraphError> {
        let annotation = self.annotator.annotate(sentence)?;
        let graph = DependencyGraph::from_annotation(&annotation)?;

        debug!(
            tokens = graph.token_count(),
            edges = graph.edges().len(),
            "Built dependency graph"
        );

        Ok(graph)
    }
}
