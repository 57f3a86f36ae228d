//! Environment-backed configuration.
//!
//! Everything but the input pairs has a default. Override with `SENTSIM_*`
//! environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::{Path, PathBuf};

use crate::annotation::DEFAULT_CACHE_CAPACITY;
use crate::constants::DEFAULT_EMBEDDING_DIM;

/// Batch extraction configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SENTSIM_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// MSRP-format sentence pairs to featurize.
    pub pairs_path: Option<PathBuf>,

    /// MSRP-format IDF reference corpus. Falls back to the input pairs.
    pub corpus_path: Option<PathBuf>,

    /// JSON-lines precomputed annotations. The stub annotator is used when unset.
    pub annotations_path: Option<PathBuf>,

    /// JSON-lines output file. Stdout when unset.
    pub output_path: Option<PathBuf>,

    /// Stub annotator vector dimension. Default: `96`.
    pub embedding_dim: usize,

    /// Max entries in the annotation cache. Default: `10_000`.
    pub cache_capacity: u64,

    /// Batch worker threads; `0` means one per core. Default: `0`.
    pub workers: usize,

    /// Emit masked vectors instead of raw ones. Default: `true`.
    pub apply_mask: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pairs_path: None,
            corpus_path: None,
            annotations_path: None,
            output_path: None,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            workers: 0,
            apply_mask: true,
        }
    }
}

impl Config {
    const ENV_PAIRS_PATH: &'static str = "SENTSIM_PAIRS_PATH";
    const ENV_CORPUS_PATH: &'static str = "SENTSIM_CORPUS_PATH";
    const ENV_ANNOTATIONS_PATH: &'static str = "SENTSIM_ANNOTATIONS_PATH";
    const ENV_OUTPUT_PATH: &'static str = "SENTSIM_OUTPUT_PATH";
    const ENV_EMBEDDING_DIM: &'static str = "SENTSIM_EMBEDDING_DIM";
    const ENV_CACHE_CAPACITY: &'static str = "SENTSIM_CACHE_CAPACITY";
    const ENV_WORKERS: &'static str = "SENTSIM_WORKERS";
    const ENV_APPLY_MASK: &'static str = "SENTSIM_APPLY_MASK";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let pairs_path = Self::parse_optional_path_from_env(Self::ENV_PAIRS_PATH);
        let corpus_path = Self::parse_optional_path_from_env(Self::ENV_CORPUS_PATH);
        let annotations_path = Self::parse_optional_path_from_env(Self::ENV_ANNOTATIONS_PATH);
        let output_path = Self::parse_optional_path_from_env(Self::ENV_OUTPUT_PATH);
        let embedding_dim =
            Self::parse_usize_from_env(Self::ENV_EMBEDDING_DIM, defaults.embedding_dim)?;
        let cache_capacity =
            Self::parse_u64_from_env(Self::ENV_CACHE_CAPACITY, defaults.cache_capacity)?;
        let workers = Self::parse_usize_from_env(Self::ENV_WORKERS, defaults.workers)?;
        let apply_mask = Self::parse_bool_from_env(Self::ENV_APPLY_MASK, defaults.apply_mask)?;

        Ok(Self {
            pairs_path,
            corpus_path,
            annotations_path,
            output_path,
            embedding_dim,
            cache_capacity,
            workers,
            apply_mask,
        })
    }

    /// Validates paths and basic invariants (does not create anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.embedding_dim == 0 {
            return Err(ConfigError::InvalidEmbeddingDim {
                value: self.embedding_dim,
            });
        }

        for path in [&self.pairs_path, &self.corpus_path, &self.annotations_path]
            .into_iter()
            .flatten()
        {
            Self::check_file(path)?;
        }

        if let Some(parent) = self.output_path.as_deref().and_then(Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(ConfigError::NotADirectory {
                    path: parent.to_path_buf(),
                });
            }
        }

        Ok(())
    }

    /// The input pairs path, which the batch binary cannot run without.
    pub fn require_pairs_path(&self) -> Result<&Path, ConfigError> {
        self.pairs_path
            .as_deref()
            .ok_or(ConfigError::MissingEnvVar {
                name: Self::ENV_PAIRS_PATH,
            })
    }

    /// IDF corpus path, defaulting to the input pairs.
    pub fn idf_corpus_path(&self) -> Option<&Path> {
        self.corpus_path.as_deref().or(self.pairs_path.as_deref())
    }

    fn check_file(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            return Err(ConfigError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(ConfigError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::NumberParseError {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_u64_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::NumberParseError {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        let Ok(value) = env::var(var_name) else {
            return Ok(default);
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidBool {
                name: var_name,
                value,
            }),
        }
    }
}
