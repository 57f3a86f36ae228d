//! Bounded path and subtree enumeration.
//!
//! Both walks never step back over the edge they entered a node through, so on
//! a tree they only move away from `root`. Output order is deterministic (it
//! follows adjacency order) but callers should not rely on it except for
//! position-wise comparison inside a single path.

use std::collections::HashSet;

use super::Adjacency;

/// All node-id sequences of exactly `length + 1` nodes.
///
/// Every node reachable from `root` starts at most one walk; a walk that hits a
/// leaf before reaching `length + 1` nodes is dropped.
///
/// ```text
///        1
///      2   3
///    5
///      6
/// ```
///
/// With `root = 1` and `length = 2` this yields `[1, 2, 5]` and `[2, 5, 6]`.
pub fn paths_of_length<G: Adjacency + ?Sized>(
    graph: &G,
    root: usize,
    length: usize,
) -> Vec<Vec<usize>> {
    if root >= graph.node_count() {
        return Vec::new();
    }

    let target = length + 1;
    let mut paths = Vec::new();
    let mut started = HashSet::from([root]);
    // (node, parent, path so far)
    let mut stack: Vec<(usize, Option<usize>, Vec<usize>)> = vec![(root, None, Vec::new())];

    while let Some((node, parent, mut path)) = stack.pop() {
        path.push(node);
        for &next in graph.neighbors(node) {
            if Some(next) == parent {
                continue;
            }
            if path.len() < target {
                stack.push((next, Some(node), path.clone()));
            }
            if started.insert(next) {
                stack.push((next, Some(node), Vec::new()));
            }
        }
        if path.len() == target {
            paths.push(path);
        }
    }

    paths
}

/// All node-id sets of subtrees rooted at some node and extending exactly
/// `depth` edges below it.
///
/// Every node reachable from `root` is tried as a local root; a candidate is
/// kept only if at least one of its branches reaches `depth`.
pub fn subtrees_of_depth<G: Adjacency + ?Sized>(
    graph: &G,
    root: usize,
    depth: usize,
) -> Vec<Vec<usize>> {
    if root >= graph.node_count() {
        return Vec::new();
    }

    let mut subtrees = Vec::new();
    // Local roots in pre-order: (node, parent).
    let mut roots: Vec<(usize, Option<usize>)> = vec![(root, None)];

    while let Some((local_root, parent)) = roots.pop() {
        if let Some(subtree) = collect_subtree(graph, local_root, parent, depth) {
            subtrees.push(subtree);
        }

        let children: Vec<usize> = graph
            .neighbors(local_root)
            .iter()
            .copied()
            .filter(|&n| Some(n) != parent)
            .collect();
        roots.extend(children.into_iter().rev().map(|n| (n, Some(local_root))));
    }

    subtrees
}

fn collect_subtree<G: Adjacency + ?Sized>(
    graph: &G,
    local_root: usize,
    parent: Option<usize>,
    depth: usize,
) -> Option<Vec<usize>> {
    let mut members = Vec::new();
    let mut reached_depth = false;
    // (node, parent, distance from local root)
    let mut stack = vec![(local_root, parent, 0usize)];

    while let Some((node, from, distance)) = stack.pop() {
        members.push(node);
        if distance >= depth {
            reached_depth = true;
            continue;
        }
        for &next in graph.neighbors(node) {
            if Some(next) == from {
                continue;
            }
            stack.push((next, Some(node), distance + 1));
        }
    }

    reached_depth.then_some(members)
}
