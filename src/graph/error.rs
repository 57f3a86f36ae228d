use thiserror::Error;

use crate::annotation::AnnotationError;

/// Errors raised while turning a sentence into a dependency graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The annotation provider failed.
    #[error("annotation failed: {0}")]
    Annotation(#[from] AnnotationError),

    /// A token points at a head index outside the sentence.
    #[error("token {token} has head {head}, but the sentence has only {len} tokens")]
    HeadOutOfRange { token: usize, head: usize, len: usize },

    /// Head pointers do not form a tree hanging off the ROOT (cycle or self-loop).
    #[error("dependency heads do not form a tree: {unreachable} node(s) unreachable from ROOT")]
    NotATree { unreachable: usize },
}
