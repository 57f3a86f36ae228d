//! Memoizing annotator.
//!
//! Keys are BLAKE3 hashes of the sentence text. Dependency graphs are a pure
//! function of the annotation, so serving a cached annotation never changes
//! feature values.

use std::sync::Arc;

use moka::sync::Cache;
use tracing::debug;

use super::{Annotation, AnnotationError, Annotator};
use crate::hashing::hash_sentence;

/// Default number of cached sentence annotations.
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// Wraps an [`Annotator`] with a bounded in-memory cache.
pub struct CachingAnnotator<A> {
    inner: A,
    entries: Cache<[u8; 32], Arc<Annotation>>,
}

impl<A> std::fmt::Debug for CachingAnnotator<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingAnnotator")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

impl<A: Annotator> CachingAnnotator<A> {
    /// Wraps `inner` with the default capacity.
    pub fn new(inner: A) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    /// Wraps `inner` with a max entry capacity.
    pub fn with_capacity(inner: A, capacity: u64) -> Self {
        Self {
            inner,
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Returns the wrapped annotator.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Returns the number of cached annotations (eventually consistent).
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached annotation.
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}

impl<A: Annotator> Annotator for CachingAnnotator<A> {
    fn annotate(&self, text: &str) -> Result<Arc<Annotation>, AnnotationError> {
        let key = hash_sentence(text);
        if let Some(hit) = self.entries.get(&key) {
            debug!(text_len = text.len(), "Annotation cache hit");
            return Ok(hit);
        }

        let annotation = self.inner.annotate(text)?;
        self.entries.insert(key, Arc::clone(&annotation));
        Ok(annotation)
    }
}
