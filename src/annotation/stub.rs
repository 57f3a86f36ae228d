//! Deterministic annotation without a language model.
//!
//! Tokens are whitespace-separated words with leading and trailing punctuation
//! split off. Every alphabetic or numeric token gets a pseudo-random unit
//! vector seeded by its lowercase text, so equal words (in any casing) compare
//! with similarity 1 and unrelated words land near 0. The dependency structure
//! is a chain: the first token is the ROOT and every other token hangs off its
//! predecessor.

use std::sync::Arc;

use tracing::debug;

use super::{AnnotatedToken, Annotation, AnnotationError, Annotator, Token};
use crate::constants::DEFAULT_EMBEDDING_DIM;
use crate::hashing::hash_to_u64;
use crate::vector::normalize;

const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have", "he",
    "her", "his", "i", "if", "in", "into", "is", "it", "its", "may", "more", "most", "no", "not",
    "of", "on", "or", "our", "she", "so", "than", "that", "the", "their", "them", "then",
    "there", "these", "they", "this", "those", "to", "was", "we", "were", "what", "when",
    "which", "who", "will", "with", "would", "you",
];

/// Rule-based annotator with hash-seeded embeddings.
#[derive(Debug, Clone)]
pub struct StubAnnotator {
    embedding_dim: usize,
}

impl Default for StubAnnotator {
    fn default() -> Self {
        Self {
            embedding_dim: DEFAULT_EMBEDDING_DIM,
        }
    }
}

impl StubAnnotator {
    /// Creates a stub annotator producing vectors of `embedding_dim` dimensions.
    pub fn new(embedding_dim: usize) -> Result<Self, AnnotationError> {
        if embedding_dim == 0 {
            return Err(AnnotationError::InvalidConfig {
                reason: "embedding_dim must be greater than zero".to_string(),
            });
        }
        Ok(Self { embedding_dim })
    }

    /// Returns the configured embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    /// Splits a sentence into surface tokens.
    pub fn tokenize(text: &str) -> Vec<String> {
        let mut out = Vec::new();
        for chunk in text.split_whitespace() {
            let chars: Vec<char> = chunk.chars().collect();
            let start = chars
                .iter()
                .position(|c| !c.is_ascii_punctuation())
                .unwrap_or(chars.len());
            let end = chars
                .iter()
                .rposition(|c| !c.is_ascii_punctuation())
                .map_or(start, |p| p + 1);

            out.extend(chars[..start].iter().map(|c| c.to_string()));
            if start < end {
                out.push(chars[start..end].iter().collect());
            }
            out.extend(chars[end.max(start)..].iter().map(|c| c.to_string()));
        }
        out
    }

    fn make_token(&self, text: &str) -> Token {
        let lower = text.to_lowercase();
        let is_punct = !text.is_empty() && text.chars().all(|c| c.is_ascii_punctuation());
        let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
        let like_num = text.chars().any(|c| c.is_ascii_digit())
            && text.replace(',', "").parse::<f64>().is_ok();
        let is_stop = STOP_WORDS.contains(&lower.as_str());

        let pos = if is_punct {
            "PUNCT"
        } else if like_num {
            "NUM"
        } else {
            "X"
        };

        let mut token = Token {
            text: text.to_string(),
            vector: None,
            pos: pos.to_string(),
            is_alpha,
            is_stop,
            is_punct,
            is_space: false,
            like_num,
        };

        if !is_punct {
            token.vector = Some(self.stub_vector(&lower));
        }

        token
    }

    fn stub_vector(&self, key: &str) -> Vec<f32> {
        let mut state = hash_to_u64(key.as_bytes());
        let mut vector = Vec::with_capacity(self.embedding_dim);

        for _ in 0..self.embedding_dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            vector.push(value);
        }

        normalize(&mut vector);
        vector
    }

    fn dependency_label(token: &Token) -> &'static str {
        if token.is_punct {
            "punct"
        } else if token.like_num {
            "nummod"
        } else if token.is_stop {
            "det"
        } else {
            "dep"
        }
    }
}

impl Annotator for StubAnnotator {
    fn annotate(&self, text: &str) -> Result<Arc<Annotation>, AnnotationError> {
        let tokens: Vec<AnnotatedToken> = Self::tokenize(text)
            .iter()
            .enumerate()
            .map(|(i, surface)| {
                let token = self.make_token(surface);
                let (head, dep) = if i == 0 {
                    (None, "ROOT")
                } else {
                    (Some(i - 1), Self::dependency_label(&token))
                };
                AnnotatedToken {
                    token,
                    head,
                    dep: dep.to_string(),
                }
            })
            .collect();

        debug!(
            text_len = text.len(),
            token_count = tokens.len(),
            "Generated stub annotation"
        );

        Ok(Arc::new(Annotation {
            text: text.to_string(),
            tokens,
        }))
    }
}
