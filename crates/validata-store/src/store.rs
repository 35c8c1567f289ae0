use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use validata_model::{DatasetMeta, StoredValidation, TableDims, ValidationRecord};

use crate::error::{Result, StoreError};

const INDEX_FILE: &str = "index.json";
const DATASETS_DIR: &str = "datasets";
const DATA_FILE: &str = "data.csv";
const META_FILE: &str = "meta.json";
const VALIDATIONS_FILE: &str = "validations.jsonl";

/// Directory-rooted dataset and validation store.
///
/// Layout:
///
/// ```text
/// <root>/
///   index.json                       id counters + dataset id list
///   datasets/<id>/data.csv           raw bytes, written once
///   datasets/<id>/meta.json          dataset metadata
///   datasets/<id>/validations.jsonl  one appended record per line
/// ```
///
/// Validation records are append-only: a new run adds a line and never
/// rewrites earlier ones, so concurrent validations of the same dataset
/// only ever grow its history. "Latest" is the last line of the file.
#[derive(Debug)]
pub struct Store {
    root: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Index {
    next_dataset_id: u64,
    next_validation_id: u64,
    datasets: Vec<u64>,
}

impl Store {
    /// Open (creating if necessary) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        create_dir_all(&root.join(DATASETS_DIR))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Register a dataset: assign the next id, persist the raw bytes and
    /// metadata, and return the metadata.
    pub fn add_dataset(&self, filename: &str, bytes: &[u8], dims: TableDims) -> Result<DatasetMeta> {
        let mut index = self.read_index()?;
        let dataset_id = index.next_dataset_id.max(1);
        let dir = self.dataset_dir(dataset_id);
        create_dir_all(&dir)?;

        let data_path = dir.join(DATA_FILE);
        fs::write(&data_path, bytes).map_err(|source| StoreError::Io {
            operation: "write dataset bytes",
            path: data_path,
            source,
        })?;

        let meta = DatasetMeta {
            dataset_id,
            filename: filename.to_string(),
            byte_len: bytes.len() as u64,
            sha256: hex::encode(Sha256::digest(bytes)),
            total_rows: dims.total_rows,
            total_columns: dims.total_columns,
            uploaded_at: chrono::Utc::now(),
        };
        self.write_json(&dir.join(META_FILE), &meta)?;

        index.next_dataset_id = dataset_id + 1;
        index.datasets.push(dataset_id);
        self.write_json(&self.root.join(INDEX_FILE), &index)?;
        debug!(dataset_id, filename, "dataset stored");
        Ok(meta)
    }

    /// Metadata for one dataset.
    pub fn dataset(&self, dataset_id: u64) -> Result<DatasetMeta> {
        let path = self.dataset_dir(dataset_id).join(META_FILE);
        if !path.exists() {
            return Err(StoreError::UnknownDataset(dataset_id));
        }
        self.read_json(&path)
    }

    /// The raw bytes a dataset was uploaded with, for re-ingestion.
    pub fn raw_bytes(&self, dataset_id: u64) -> Result<Vec<u8>> {
        let path = self.dataset_dir(dataset_id).join(DATA_FILE);
        if !path.exists() {
            return Err(StoreError::UnknownDataset(dataset_id));
        }
        fs::read(&path).map_err(|source| StoreError::Io {
            operation: "read dataset bytes",
            path,
            source,
        })
    }

    /// All dataset metadata, in id order.
    pub fn list_datasets(&self) -> Result<Vec<DatasetMeta>> {
        let index = self.read_index()?;
        index
            .datasets
            .iter()
            .map(|dataset_id| self.dataset(*dataset_id))
            .collect()
    }

    /// Append a validation record to a dataset's history.
    ///
    /// Never rewrites prior records; the append is the only write.
    pub fn append_validation(
        &self,
        dataset_id: u64,
        record: &ValidationRecord,
    ) -> Result<StoredValidation> {
        if !self.dataset_dir(dataset_id).join(META_FILE).exists() {
            return Err(StoreError::UnknownDataset(dataset_id));
        }
        let mut index = self.read_index()?;
        let validation_id = index.next_validation_id.max(1);
        index.next_validation_id = validation_id + 1;
        self.write_json(&self.root.join(INDEX_FILE), &index)?;

        let stored = StoredValidation {
            validation_id,
            dataset_id,
            record: record.clone(),
        };
        let path = self.validations_path(dataset_id);
        let line = serde_json::to_string(&stored).map_err(|source| StoreError::Corrupt {
            path: path.clone(),
            source,
        })?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| StoreError::Io {
                operation: "open validation history",
                path: path.clone(),
                source,
            })?;
        writeln!(file, "{line}").map_err(|source| StoreError::Io {
            operation: "append validation record",
            path,
            source,
        })?;
        debug!(dataset_id, validation_id, score = record.score, "validation appended");
        Ok(stored)
    }

    /// A dataset's validation history, oldest first.
    pub fn history(&self, dataset_id: u64) -> Result<Vec<StoredValidation>> {
        if !self.dataset_dir(dataset_id).join(META_FILE).exists() {
            return Err(StoreError::UnknownDataset(dataset_id));
        }
        let path = self.validations_path(dataset_id);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let file = fs::File::open(&path).map_err(|source| StoreError::Io {
            operation: "read validation history",
            path: path.clone(),
            source,
        })?;
        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| StoreError::Io {
                operation: "read validation history",
                path: path.clone(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let stored = serde_json::from_str(&line).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?;
            records.push(stored);
        }
        Ok(records)
    }

    /// The most recently appended record for a dataset, if any.
    pub fn latest_validation(&self, dataset_id: u64) -> Result<Option<StoredValidation>> {
        Ok(self.history(dataset_id)?.pop())
    }

    fn dataset_dir(&self, dataset_id: u64) -> PathBuf {
        self.root.join(DATASETS_DIR).join(dataset_id.to_string())
    }

    fn validations_path(&self, dataset_id: u64) -> PathBuf {
        self.dataset_dir(dataset_id).join(VALIDATIONS_FILE)
    }

    fn read_index(&self) -> Result<Index> {
        let path = self.root.join(INDEX_FILE);
        if !path.exists() {
            return Ok(Index {
                next_dataset_id: 1,
                next_validation_id: 1,
                datasets: Vec::new(),
            });
        }
        self.read_json(&path)
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let bytes = fs::read(path).map_err(|source| StoreError::Io {
            operation: "read store file",
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize to a temp file, then rename over the target so readers
    /// never observe a half-written file.
    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;
        let temp = path.with_extension("json.tmp");
        fs::write(&temp, format!("{json}\n")).map_err(|source| StoreError::Io {
            operation: "write store file",
            path: temp.clone(),
            source,
        })?;
        fs::rename(&temp, path).map_err(|source| StoreError::Io {
            operation: "replace store file",
            path: path.to_path_buf(),
            source,
        })
    }
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| StoreError::Io {
        operation: "create store directory",
        path: path.to_path_buf(),
        source,
    })
}
