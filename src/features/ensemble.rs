//! Manifest-checked generator ensemble and the classifier's feature mask.

use std::ops::Range;
use std::sync::Arc;

use bitvec::prelude::*;
use tracing::{debug, info};

use crate::constants::{FEATURE_MANIFEST_V1, FEATURE_SCHEMA_VERSION, PARAPHRASE_MASK_V1};
use crate::idf::IdfTable;

use super::{
    AnnotatedPair, BigramKernelFeatures, BleuFeatures, EdgeDependencyFeatures, FeatureError,
    FeatureGenerator, HungarianGraphFeatures, HungarianNodeFeatures, LexicalFeatures,
    PathSimilarityFeatures, RootNodeFeatures, SimpleEdgeFeatures, SubtreeFeatures,
    SubtreeIdfFeatures,
};

/// Ordered `(generator name, arity)` list defining the feature vector layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureManifest {
    version: u32,
    entries: Vec<(&'static str, usize)>,
}

impl FeatureManifest {
    pub fn new(version: u32, entries: Vec<(&'static str, usize)>) -> Self {
        Self { version, entries }
    }

    /// The layout the v1 paraphrase classifier was trained on.
    pub fn v1() -> Self {
        Self::new(FEATURE_SCHEMA_VERSION, FEATURE_MANIFEST_V1.to_vec())
    }

    #[inline]
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn entries(&self) -> &[(&'static str, usize)] {
        &self.entries
    }

    /// Length of the full (unmasked) feature vector.
    pub fn total_len(&self) -> usize {
        self.entries.iter().map(|&(_, arity)| arity).sum()
    }

    /// Index range occupied by generator `name`.
    pub fn range_of(&self, name: &str) -> Option<Range<usize>> {
        let mut offset = 0;
        for &(entry, arity) in &self.entries {
            if entry == name {
                return Some(offset..offset + arity);
            }
            offset += arity;
        }
        None
    }
}

/// Runs generators in manifest order and concatenates their output.
pub struct FeatureEnsemble {
    manifest: FeatureManifest,
    generators: Vec<Box<dyn FeatureGenerator>>,
}

impl std::fmt::Debug for FeatureEnsemble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureEnsemble")
            .field("version", &self.manifest.version)
            .field(
                "generators",
                &self.generators.iter().map(|g| g.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl FeatureEnsemble {
    /// Checks `generators` against `manifest` name by name and arity by arity.
    pub fn new(
        manifest: FeatureManifest,
        generators: Vec<Box<dyn FeatureGenerator>>,
    ) -> Result<Self, FeatureError> {
        let describe = |entry: Option<(&str, usize)>| match entry {
            Some((name, arity)) => format!("{name}({arity})"),
            None => "nothing".to_string(),
        };

        let positions = manifest.entries.len().max(generators.len());
        for position in 0..positions {
            let expected = manifest.entries.get(position).copied();
            let found = generators.get(position).map(|g| (g.name(), g.arity()));
            if expected != found {
                return Err(FeatureError::ManifestMismatch {
                    position,
                    expected: describe(expected),
                    found: describe(found),
                });
            }
        }

        info!(
            version = manifest.version,
            generators = generators.len(),
            features = manifest.total_len(),
            "Feature ensemble ready"
        );

        Ok(Self {
            manifest,
            generators,
        })
    }

    /// The v1 generator set.
    pub fn standard(idf: Arc<IdfTable>) -> Result<Self, FeatureError> {
        let generators: Vec<Box<dyn FeatureGenerator>> = vec![
            Box::new(HungarianGraphFeatures),
            Box::new(HungarianNodeFeatures),
            Box::new(PathSimilarityFeatures),
            Box::new(SubtreeFeatures),
            Box::new(RootNodeFeatures),
            Box::new(SimpleEdgeFeatures),
            Box::new(EdgeDependencyFeatures),
            Box::new(BigramKernelFeatures),
            Box::new(SubtreeIdfFeatures::new(idf)),
            Box::new(LexicalFeatures),
            Box::new(BleuFeatures),
        ];
        Self::new(FeatureManifest::v1(), generators)
    }

    pub fn manifest(&self) -> &FeatureManifest {
        &self.manifest
    }

    /// Length of the vector [`features`](Self::features) returns.
    #[inline]
    pub fn len(&self) -> usize {
        self.manifest.total_len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full feature vector for one pair.
    pub fn features(&self, pair: &AnnotatedPair) -> Result<Vec<f64>, FeatureError> {
        let mut out = Vec::with_capacity(self.len());

        for generator in &self.generators {
            let values = generator.features(pair)?;
            if values.len() != generator.arity() {
                return Err(FeatureError::ArityMismatch {
                    generator: generator.name(),
                    expected: generator.arity(),
                    actual: values.len(),
                });
            }
            out.extend(values);
        }

        debug!(
            left_tokens = pair.left.token_count(),
            right_tokens = pair.right.token_count(),
            features = out.len(),
            "Computed feature vector"
        );

        Ok(out)
    }
}

/// Bit mask selecting the features a trained classifier consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSelector {
    mask: BitVec<u8, Lsb0>,
}

impl FeatureSelector {
    /// Parses a string of `'0'` and `'1'` characters.
    pub fn from_bits(bits: &str) -> Result<Self, FeatureError> {
        let mut mask = BitVec::<u8, Lsb0>::with_capacity(bits.len());
        for (position, c) in bits.chars().enumerate() {
            match c {
                '0' => mask.push(false),
                '1' => mask.push(true),
                found => return Err(FeatureError::InvalidMask { position, found }),
            }
        }
        Ok(Self { mask })
    }

    pub fn from_bools<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        Self {
            mask: bits.into_iter().collect(),
        }
    }

    /// Mask of the v1 paraphrase classifier.
    pub fn paraphrase_v1() -> Result<Self, FeatureError> {
        Self::from_bits(PARAPHRASE_MASK_V1)
    }

    /// Number of features the mask covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.mask.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Number of features kept.
    pub fn selected_count(&self) -> usize {
        self.mask.count_ones()
    }

    /// Fails unless the mask covers exactly `feature_len` features.
    pub fn check_len(&self, feature_len: usize) -> Result<(), FeatureError> {
        if self.mask.len() != feature_len {
            return Err(FeatureError::MaskLength {
                mask_len: self.mask.len(),
                feature_len,
            });
        }
        Ok(())
    }

    /// Keeps the selected features, in order.
    pub fn apply(&self, features: &[f64]) -> Result<Vec<f64>, FeatureError> {
        self.check_len(features.len())?;
        Ok(self.mask.iter_ones().map(|i| features[i]).collect())
    }
}
