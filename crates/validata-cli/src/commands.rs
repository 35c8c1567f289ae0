//! Command implementations: wiring ingestion, engine, store, and synth.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use validata_engine::validate_table;
use validata_ingest::read_table;
use validata_store::Store;
use validata_synth::{DemoSpec, generate_demo_csv};

use crate::types::ValidationOutcome;

/// Resolve the store root: explicit flag, then `VALIDATA_STORE`, then a
/// `.validata` directory next to the invocation.
pub fn resolve_store_root(flag: Option<&Path>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Some(env) = std::env::var_os("VALIDATA_STORE") {
        return PathBuf::from(env);
    }
    PathBuf::from(".validata")
}

/// Validate a CSV file and persist both the dataset and the record.
pub fn run_validate(store_root: &Path, file: &Path) -> Result<ValidationOutcome> {
    let span = info_span!("validate", file = %file.display());
    let _guard = span.enter();
    let start = Instant::now();

    let bytes =
        std::fs::read(file).with_context(|| format!("read dataset: {}", file.display()))?;
    let table = read_table(&bytes).context("parse csv")?;
    let record = validate_table(&table).context("validate table")?;

    let store = Store::open(store_root).context("open store")?;
    let filename = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("dataset.csv");
    let meta = store
        .add_dataset(filename, &bytes, table.dims())
        .context("store dataset")?;
    let stored = store
        .append_validation(meta.dataset_id, &record)
        .context("record validation")?;
    info!(
        dataset_id = meta.dataset_id,
        score = record.score,
        total_issues = record.total_issues,
        duration_ms = start.elapsed().as_millis() as u64,
        "validation stored"
    );
    Ok(ValidationOutcome { meta, stored })
}

/// Re-run validation for a stored dataset and append to its history.
pub fn run_revalidate(store_root: &Path, dataset_id: u64) -> Result<ValidationOutcome> {
    let span = info_span!("revalidate", dataset_id);
    let _guard = span.enter();

    let store = Store::open(store_root).context("open store")?;
    let meta = store.dataset(dataset_id).context("load dataset")?;
    let bytes = store.raw_bytes(dataset_id).context("load dataset bytes")?;
    let table = read_table(&bytes).context("parse stored csv")?;
    let record = validate_table(&table).context("validate table")?;
    let stored = store
        .append_validation(dataset_id, &record)
        .context("record validation")?;
    info!(dataset_id, score = record.score, "revalidation stored");
    Ok(ValidationOutcome { meta, stored })
}

/// The latest record for a dataset, with its metadata.
pub fn run_show(store_root: &Path, dataset_id: u64) -> Result<ValidationOutcome> {
    let store = Store::open(store_root).context("open store")?;
    let meta = store.dataset(dataset_id).context("load dataset")?;
    let stored = store
        .latest_validation(dataset_id)
        .context("load history")?
        .ok_or_else(|| anyhow!("no validation history for dataset {dataset_id}"))?;
    Ok(ValidationOutcome { meta, stored })
}

/// Validation history, joined with dataset metadata, oldest first per
/// dataset.
pub fn run_history(store_root: &Path, dataset: Option<u64>) -> Result<Vec<ValidationOutcome>> {
    let store = Store::open(store_root).context("open store")?;
    let metas = match dataset {
        Some(dataset_id) => vec![store.dataset(dataset_id).context("load dataset")?],
        None => store.list_datasets().context("list datasets")?,
    };
    let mut entries = Vec::new();
    for meta in metas {
        for stored in store.history(meta.dataset_id).context("load history")? {
            entries.push(ValidationOutcome {
                meta: meta.clone(),
                stored,
            });
        }
    }
    Ok(entries)
}

/// All stored dataset metadata.
pub fn run_datasets(store_root: &Path) -> Result<Vec<validata_model::DatasetMeta>> {
    let store = Store::open(store_root).context("open store")?;
    store.list_datasets().context("list datasets")
}

/// Write a synthetic demo CSV.
pub fn run_demo(rows: usize, seed: u64, out: &Path) -> Result<()> {
    let spec = DemoSpec { rows, seed };
    let bytes = generate_demo_csv(&spec).context("generate demo csv")?;
    std::fs::write(out, bytes).with_context(|| format!("write demo csv: {}", out.display()))?;
    info!(rows, seed, out = %out.display(), "demo dataset written");
    Ok(())
}
