use std::collections::HashMap;
use std::hash::Hash;

use super::Adjacency;

/// Undirected graph whose nodes are identified by unique labels.
///
/// Nodes appear in first-mention order of the edge list, so a graph built from
/// edges never contains isolated nodes.
#[derive(Debug, Clone)]
pub struct LabeledGraph<N> {
    labels: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl<N> Default for LabeledGraph<N> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> LabeledGraph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(a, b)` label pairs. Repeated edges are collapsed.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    /// Adds a node if absent and returns its id.
    pub fn add_node(&mut self, label: N) -> usize {
        if let Some(&id) = self.index.get(&label) {
            return id;
        }
        let id = self.labels.len();
        self.index.insert(label.clone(), id);
        self.labels.push(label);
        self.adjacency.push(Vec::new());
        id
    }

    /// Adds an undirected edge between two labels, creating the nodes as needed.
    pub fn add_edge(&mut self, a: N, b: N) {
        let ia = self.add_node(a);
        let ib = self.add_node(b);
        if self.adjacency[ia].contains(&ib) {
            return;
        }
        self.adjacency[ia].push(ib);
        if ia != ib {
            self.adjacency[ib].push(ia);
        }
    }

    /// Id of the node carrying `label`.
    pub fn id_of(&self, label: &N) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Incident edges of `node` as `(node label, neighbor label)` pairs.
    pub fn incident_edges(&self, node: usize) -> Vec<(N, N)> {
        let label = &self.labels[node];
        self.adjacency[node]
            .iter()
            .map(|&n| (label.clone(), self.labels[n].clone()))
            .collect()
    }
}

impl<N> LabeledGraph<N> {
    /// Node labels in id order.
    pub fn labels(&self) -> &[N] {
        &self.labels
    }

    /// Label of node `id`.
    pub fn label(&self, id: usize) -> &N {
        &self.labels[id]
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of (undirected) edges.
    pub fn edge_count(&self) -> usize {
        let loops = self
            .adjacency
            .iter()
            .enumerate()
            .filter(|(i, adj)| adj.contains(i))
            .count();
        let total: usize = self.adjacency.iter().map(Vec::len).sum();
        (total - loops) / 2 + loops
    }
}

impl<N> Adjacency for LabeledGraph<N> {
    fn node_count(&self) -> usize {
        self.labels.len()
    }

    fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }
}
