//! MSRP-format sentence-pair corpora.
//!
//! One header line, then one pair per line as five tab-separated fields:
//! `label`, `id1`, `id2`, `s1`, `s2`, with `label` either `0` or `1`.

mod error;

#[cfg(test)]
mod tests;

pub use error::CorpusError;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

/// A labeled pair of sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    pub is_paraphrase: bool,
    pub id1: String,
    pub id2: String,
    pub s1: String,
    pub s2: String,
}

impl SentencePair {
    pub fn new(
        is_paraphrase: bool,
        id1: impl Into<String>,
        id2: impl Into<String>,
        s1: impl Into<String>,
        s2: impl Into<String>,
    ) -> Self {
        Self {
            is_paraphrase,
            id1: id1.into(),
            id2: id2.into(),
            s1: s1.into(),
            s2: s2.into(),
        }
    }

    /// Gold label as `0` or `1`.
    #[inline]
    pub fn label(&self) -> u8 {
        u8::from(self.is_paraphrase)
    }
}

/// Parses MSRP lines from `reader`. Blank lines are skipped; line numbers in
/// errors are 1-based and count the header.
pub fn parse_msrp<R: BufRead>(reader: R) -> Result<Vec<SentencePair>, CorpusError> {
    let mut pairs = Vec::new();

    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split('\t').collect();
        if fields.len() < 5 {
            return Err(CorpusError::MissingFields {
                line: line_no,
                found: fields.len(),
            });
        }

        let is_paraphrase = match fields[0].trim() {
            "0" => false,
            "1" => true,
            other => {
                return Err(CorpusError::InvalidLabel {
                    line: line_no,
                    value: other.to_string(),
                });
            }
        };

        pairs.push(SentencePair::new(
            is_paraphrase,
            fields[1],
            fields[2],
            fields[3],
            fields[4],
        ));
    }

    Ok(pairs)
}

/// Reads an MSRP file from disk.
pub fn load_msrp(path: impl AsRef<Path>) -> Result<Vec<SentencePair>, CorpusError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CorpusError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let pairs = parse_msrp(BufReader::new(file))?;

    info!(path = %path.display(), pairs = pairs.len(), "Loaded sentence pairs");
    Ok(pairs)
}

/// Deduplicated, sorted union of both sides of every pair.
pub fn reference_sentences(pairs: &[SentencePair]) -> Vec<String> {
    pairs
        .iter()
        .flat_map(|p| [p.s1.as_str(), p.s2.as_str()])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
