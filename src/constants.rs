//! Cross-cutting, shared constants.
//!
//! # Feature Schema Invariants
//!
//! The thresholds, depths and orders below determine how many entries every
//! generator contributes. The selector mask ([`PARAPHRASE_MASK_V1`]) is tied to
//! exactly this layout and to the classifier trained on it. If you change any
//! of these values:
//!
//! 1. Update the arities in [`FEATURE_MANIFEST_V1`]
//! 2. Re-derive the mask together with the classifier
//! 3. Bump the manifest version

/// Similarity thresholds swept by the graph-matching generators.
pub const SIMILARITY_THRESHOLDS: [f64; 4] = [0.80, 0.85, 0.90, 0.95];

/// Path lengths / subtree depths swept by the traversal generators.
pub const TRAVERSAL_DEPTHS: [usize; 5] = [0, 1, 2, 3, 4];

/// Initial threshold of a freshly built node matcher (reset per sweep step).
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.9;

/// Minimum similarity for two tokens (or nodes) to count as the same n-gram element.
pub const NGRAM_MATCH_SIMILARITY: f64 = 0.9;

/// Endpoint similarity required by the simple edge matchers.
pub const EDGE_NODE_SIMILARITY: f64 = 0.8;

/// Multiplier applied by the bigram kernel when dependency labels agree.
pub const BIGRAM_KERNEL_SAME_LABEL_WEIGHT: f64 = 2.0;

/// Base of the exponential length-difference feature.
pub const LENGTH_RATIO_BASE: f64 = 0.8;

/// Token n-gram orders compared by the lexical generator.
pub const TOKEN_NGRAM_ORDERS: [usize; 3] = [1, 2, 3];

/// Path n-gram orders compared by the lexical generator.
pub const PATH_NGRAM_ORDERS: [usize; 4] = [1, 2, 3, 4];

/// BLEU maximum orders emitted by the BLEU generator.
pub const BLEU_MAX_ORDERS: [usize; 4] = [1, 2, 3, 4];

/// BLEU precisions below this value short-circuit the score to zero.
pub const BLEU_PRECISION_FLOOR: f64 = 0.001;

/// Label of the synthetic root node.
pub const ROOT_LABEL: &str = "ROOT";

/// Default stub embedding dimension.
pub const DEFAULT_EMBEDDING_DIM: usize = 96;

/// Version tag of the feature layout below.
pub const FEATURE_SCHEMA_VERSION: u32 = 1;

/// Ordered `(generator name, arity)` pairs of the v1 feature layout.
pub const FEATURE_MANIFEST_V1: [(&str, usize); 11] = [
    ("HungarianGraph", 8),
    ("HungarianNode", 12),
    ("PathSimilarity", 20),
    ("Subtree", 20),
    ("RootNode", 1),
    ("SimpleEdge", 1),
    ("EdgeDependency", 2),
    ("BigramKernel", 1),
    ("SubtreeIdf", 20),
    ("Lexical", 20),
    ("Bleu", 8),
];

/// Total length of the unmasked v1 feature vector.
pub const FEATURE_VECTOR_LEN_V1: usize = 113;

/// Selector mask for the v1 layout, one character per feature (`1` = keep).
pub const PARAPHRASE_MASK_V1: &str = "01100000011110110111110010000111110111111111010101100010100110011101110100001011111011011001000011101000111110010";
