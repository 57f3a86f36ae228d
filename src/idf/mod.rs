//! Inverse document frequency over a reference corpus.
//!
//! Fit once at startup, then shared read-only (typically behind an `Arc`) with
//! every generator that weights token vectors.

mod error;

#[cfg(test)]
mod tests;

pub use error::IdfError;

use std::collections::{BTreeSet, HashMap, HashSet};

use regex::Regex;
use tracing::info;

use crate::annotation::Token;
use crate::corpus::{SentencePair, reference_sentences};

/// Words are runs of two or more word characters.
pub const WORD_PATTERN: &str = r"\b\w\w+\b";

/// Smoothed IDF weights: `ln((1 + n) / (1 + df)) + 1`.
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    weights: HashMap<String, f64>,
    corpus_len: usize,
}

impl IdfTable {
    /// Fits over `sentences`, deduplicated and sorted first.
    pub fn fit<I, S>(sentences: I) -> Result<Self, IdfError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let word_re = Regex::new(WORD_PATTERN)?;

        let corpus: BTreeSet<String> = sentences
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for sentence in &corpus {
            let lower = sentence.to_lowercase();
            let words: HashSet<&str> = word_re.find_iter(&lower).map(|m| m.as_str()).collect();
            for word in words {
                *document_frequency.entry(word.to_string()).or_default() += 1;
            }
        }

        let n = corpus.len() as f64;
        let weights: HashMap<String, f64> = document_frequency
            .into_iter()
            .map(|(word, df)| (word, ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0))
            .collect();

        info!(
            documents = corpus.len(),
            vocabulary = weights.len(),
            "Fitted IDF table"
        );

        Ok(Self {
            weights,
            corpus_len: corpus.len(),
        })
    }

    /// Fits over both sides of every pair.
    pub fn from_pairs(pairs: &[SentencePair]) -> Result<Self, IdfError> {
        Self::fit(reference_sentences(pairs))
    }

    /// Number of distinct reference sentences.
    #[inline]
    pub fn corpus_len(&self) -> usize {
        self.corpus_len
    }

    /// Number of known words.
    #[inline]
    pub fn vocabulary_len(&self) -> usize {
        self.weights.len()
    }

    /// Weight of `word`, looked up verbatim. The vocabulary is lowercase, so
    /// capitalized words count as unseen and get `ln(n + 1) + 1`.
    pub fn word_idf(&self, word: &str) -> f64 {
        match self.weights.get(word) {
            Some(&idf) => idf,
            None => (self.corpus_len as f64 + 1.0).ln() + 1.0,
        }
    }

    /// Weight of a token: 1 unless it is a content word.
    pub fn token_idf(&self, token: &Token) -> f64 {
        if Self::is_weighted(token) {
            self.word_idf(&token.text)
        } else {
            1.0
        }
    }

    fn is_weighted(token: &Token) -> bool {
        token.is_alpha && !(token.is_space || token.is_punct || token.is_stop || token.like_num)
    }
}
