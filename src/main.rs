//! Batch feature extraction over an MSRP-format pair file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;

use anyhow::Context;
use mimalloc::MiMalloc;
use serde::Serialize;

use sentsim::annotation::{Annotator, CachingAnnotator, PrecomputedAnnotator, StubAnnotator};
use sentsim::config::Config;
use sentsim::corpus::load_msrp;
use sentsim::features::{FeatureEnsemble, FeatureExtractor, FeatureSelector};
use sentsim::idf::IdfTable;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Serialize)]
struct FeatureRecord<'a> {
    index: usize,
    label: u8,
    id1: &'a str,
    id2: &'a str,
    features: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let pairs_path = config.require_pairs_path()?;

    tracing::info!(
        pairs = %pairs_path.display(),
        idf_corpus = ?config.idf_corpus_path(),
        apply_mask = config.apply_mask,
        workers = config.workers,
        "sentsim starting"
    );

    let pairs = load_msrp(pairs_path)?;

    let idf = match config.idf_corpus_path() {
        Some(path) if path != pairs_path => IdfTable::from_pairs(&load_msrp(path)?)?,
        _ => IdfTable::from_pairs(&pairs)?,
    };

    let annotator: Arc<dyn Annotator> = if let Some(path) = &config.annotations_path {
        Arc::new(CachingAnnotator::with_capacity(
            PrecomputedAnnotator::from_path(path)?,
            config.cache_capacity,
        ))
    } else {
        tracing::warn!(
            embedding_dim = config.embedding_dim,
            "No SENTSIM_ANNOTATIONS_PATH configured, running stub annotator"
        );
        Arc::new(CachingAnnotator::with_capacity(
            StubAnnotator::new(config.embedding_dim)?,
            config.cache_capacity,
        ))
    };

    let ensemble = FeatureEnsemble::standard(Arc::new(idf))?;
    let extractor = if config.apply_mask {
        FeatureExtractor::new(annotator, ensemble).with_selector(FeatureSelector::paraphrase_v1()?)?
    } else {
        FeatureExtractor::new(annotator, ensemble)
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()
        .context("failed to build worker pool")?;

    let sentences: Vec<(&str, &str)> = pairs
        .iter()
        .map(|pair| (pair.s1.as_str(), pair.s2.as_str()))
        .collect();
    let results = pool.install(|| extractor.extract_batch(&sentences));

    let mut out: Box<dyn Write> = match &config.output_path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut written = 0usize;
    for (index, (pair, result)) in pairs.iter().zip(results).enumerate() {
        let features = match result {
            Ok(features) => features,
            Err(e) => {
                tracing::warn!(index, id1 = %pair.id1, id2 = %pair.id2, error = %e, "Skipping pair");
                continue;
            }
        };

        let record = FeatureRecord {
            index,
            label: pair.label(),
            id1: &pair.id1,
            id2: &pair.id2,
            features,
        };
        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
        written += 1;
    }
    out.flush()?;

    tracing::info!(
        written,
        skipped = pairs.len() - written,
        dims = extractor.output_len(),
        "sentsim complete"
    );
    Ok(())
}
