//! Test fixtures for integration tests.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use sentsim::annotation::{AnnotatedToken, Annotation, StubAnnotator, Token};
use sentsim::corpus::{SentencePair, parse_msrp};
use sentsim::features::FeatureExtractor;
use sentsim::idf::IdfTable;

/// Three MSRP pairs, header included.
pub const SAMPLE_MSRP: &str = "\
Quality\t#1 ID\t#2 ID\t#1 String\t#2 String
1\t702876\t702977\tAmrozi accused his brother of deliberately distorting his evidence.\tReferring to him as only the witness, Amrozi accused his brother of deliberately distorting his evidence.
0\t2108705\t2108831\tYucaipa owned Dominick's before selling the chain to Safeway in 1998 for $2.5 billion.\tYucaipa bought Dominick's in 1995 for $693 million and sold it to Safeway for $1.8 billion in 1998.
1\t1330381\t1330521\tThe stock rose $2.11, or about 11 percent, to close Friday at $21.51.\tPG&E Corp. shares jumped $1.63 or 8 percent to $21.03 on the New York Stock Exchange on Friday.
";

pub fn sample_pairs() -> Vec<SentencePair> {
    parse_msrp(SAMPLE_MSRP.as_bytes()).expect("sample corpus parses")
}

/// Standard masked extractor over the stub annotator, IDF fitted on the sample corpus.
pub fn stub_extractor() -> FeatureExtractor {
    let idf = IdfTable::from_pairs(&sample_pairs()).expect("idf fits");
    FeatureExtractor::standard(Arc::new(StubAnnotator::default()), Arc::new(idf))
        .expect("standard extractor")
}

pub fn write_msrp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write corpus");
    file
}

/// Builds an [`Annotation`] token by token.
#[derive(Default)]
pub struct AnnotationBuilder {
    text: String,
    tokens: Vec<AnnotatedToken>,
}

impl AnnotationBuilder {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            tokens: Vec::new(),
        }
    }

    /// Alphabetic token with a vector; `head` is a token index, `None` for ROOT.
    pub fn word(mut self, text: &str, vector: Vec<f32>, head: Option<usize>, dep: &str) -> Self {
        let mut token = Token::new(text).with_vector(vector);
        token.is_alpha = true;
        self.tokens.push(AnnotatedToken {
            token,
            head,
            dep: dep.to_string(),
        });
        self
    }

    pub fn build(self) -> Annotation {
        Annotation {
            text: self.text,
            tokens: self.tokens,
        }
    }
}

/// Writes annotations as JSON lines into `dir` and returns the file path.
pub fn write_annotations(dir: &tempfile::TempDir, annotations: &[Annotation]) -> PathBuf {
    let path = dir.path().join("annotations.jsonl");
    let mut file = std::fs::File::create(&path).expect("create annotations");
    for annotation in annotations {
        serde_json::to_writer(&mut file, annotation).expect("serialize annotation");
        file.write_all(b"\n").expect("write newline");
    }
    path
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "got {actual}, expected {expected}"
    );
}
