//! Annotations produced ahead of time by an external tagger.
//!
//! The file format is JSON lines, one [`Annotation`] per line:
//!
//! ```text
//! {"text": "The cat sat.", "tokens": [{"text": "The", "vector": [...], "is_stop": true, "head": 1, "dep": "det"}, ...]}
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use super::{Annotation, AnnotationError, Annotator};

/// Serves annotations from an in-memory table keyed by sentence text.
#[derive(Debug, Default)]
pub struct PrecomputedAnnotator {
    annotations: HashMap<String, Arc<Annotation>>,
}

impl PrecomputedAnnotator {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a JSON-lines annotation file. Blank lines are skipped; later
    /// records override earlier ones for the same text.
    pub fn from_path(path: &Path) -> Result<Self, AnnotationError> {
        let file = File::open(path).map_err(|source| AnnotationError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut annotator = Self::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| AnnotationError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let annotation: Annotation =
                serde_json::from_str(&line).map_err(|source| AnnotationError::Malformed {
                    path: path.to_path_buf(),
                    line: index + 1,
                    source,
                })?;
            annotator.insert(annotation);
        }

        info!(
            path = %path.display(),
            sentences = annotator.len(),
            "Loaded precomputed annotations"
        );

        Ok(annotator)
    }

    /// Adds (or replaces) the annotation for `annotation.text`.
    pub fn insert(&mut self, annotation: Annotation) {
        self.annotations
            .insert(annotation.text.clone(), Arc::new(annotation));
    }

    /// Number of annotated sentences.
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Returns `true` if no annotations are loaded.
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

impl FromIterator<Annotation> for PrecomputedAnnotator {
    fn from_iter<I: IntoIterator<Item = Annotation>>(iter: I) -> Self {
        let mut annotator = Self::new();
        for annotation in iter {
            annotator.insert(annotation);
        }
        annotator
    }
}

impl Annotator for PrecomputedAnnotator {
    fn annotate(&self, text: &str) -> Result<Arc<Annotation>, AnnotationError> {
        match self.annotations.get(text) {
            Some(annotation) => Ok(Arc::clone(annotation)),
            None => {
                debug!(text_len = text.len(), "Sentence missing from annotation table");
                Err(AnnotationError::NotFound {
                    text: text.to_string(),
                })
            }
        }
    }
}
