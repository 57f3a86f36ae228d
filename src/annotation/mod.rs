//! Linguistic annotation: tokens, embeddings and dependency heads.
//!
//! The feature engine never tokenizes or parses on its own; it asks an
//! [`Annotator`] for an [`Annotation`] and builds everything else from that.
//!
//! - [`StubAnnotator`] is a deterministic, model-free provider for tests and offline runs.
//! - [`PrecomputedAnnotator`] serves annotations produced by an external tagger.
//! - [`CachingAnnotator`] memoizes any provider.

/// Memoizing wrapper.
pub mod cache;
mod error;
/// Annotations loaded from JSON lines.
pub mod precomputed;
/// Deterministic rule-based provider.
pub mod stub;


pub use cache::{CachingAnnotator, DEFAULT_CACHE_CAPACITY};
pub use error::AnnotationError;
pub use precomputed::PrecomputedAnnotator;
pub use stub::StubAnnotator;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One token as produced by the annotation provider. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text.
    pub text: String,
    /// Embedding vector, `None` for out-of-vocabulary tokens.
    #[serde(default)]
    pub vector: Option<Vec<f32>>,
    /// Coarse part-of-speech tag.
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub is_alpha: bool,
    #[serde(default)]
    pub is_stop: bool,
    #[serde(default)]
    pub is_punct: bool,
    #[serde(default)]
    pub is_space: bool,
    #[serde(default)]
    pub like_num: bool,
}

impl Token {
    /// Creates a token with no vector and all flags cleared.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            vector: None,
            pos: String::new(),
            is_alpha: false,
            is_stop: false,
            is_punct: false,
            is_space: false,
            like_num: false,
        }
    }

    /// Builder-style setter for the embedding vector.
    pub fn with_vector(mut self, vector: Vec<f32>) -> Self {
        self.vector = Some(vector);
        self
    }

    /// Returns `true` if the token carries a non-empty embedding.
    #[inline]
    pub fn has_vector(&self) -> bool {
        self.vector.as_ref().is_some_and(|v| !v.is_empty())
    }

    /// Returns the embedding if present and non-empty.
    #[inline]
    pub fn vector(&self) -> Option<&[f32]> {
        self.vector.as_deref().filter(|v| !v.is_empty())
    }
}

/// A token plus its dependency attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    #[serde(flatten)]
    pub token: Token,
    /// Index of the syntactic head within the sentence, `None` for a ROOT token.
    #[serde(default)]
    pub head: Option<usize>,
    /// Dependency relation label.
    pub dep: String,
}

/// Provider output for one sentence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Original sentence text.
    #[serde(default)]
    pub text: String,
    /// Tokens in sentence order.
    pub tokens: Vec<AnnotatedToken>,
}

impl Annotation {
    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the sentence produced no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the plain tokens.
    pub fn iter_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().map(|t| &t.token)
    }
}

/// A linguistic annotation provider.
///
/// Implementations must be deterministic for a given sentence; the engine is
/// free to memoize their output.
pub trait Annotator: Send + Sync {
    /// Annotates one sentence.
    fn annotate(&self, text: &str) -> Result<Arc<Annotation>, AnnotationError>;
}

impl<A: Annotator + ?Sized> Annotator for Arc<A> {
    fn annotate(&self, text: &str) -> Result<Arc<Annotation>, AnnotationError> {
        (**self).annotate(text)
    }
}
