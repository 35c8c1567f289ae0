use std::path::Path;

use csv::ReaderBuilder;
use thiserror::Error;
use tracing::debug;

use validata_model::{ModelError, Table};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read csv: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Shape(#[from] ModelError),
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parse raw CSV bytes into a [`Table`].
///
/// The first record is the header; every data record must match its width.
/// Cells are trimmed and BOM-stripped, fully-empty rows are skipped, and
/// ragged rows or duplicate headers fail before any check can run.
pub fn read_table(bytes: &[u8]) -> Result<Table, IngestError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| ragged_or_csv(error, headers.len()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push(row);
    }
    debug!(
        columns = headers.len(),
        rows = rows.len(),
        "parsed csv table"
    );
    Ok(Table::new(headers, rows)?)
}

/// Read a CSV file from disk into a [`Table`].
pub fn read_table_from_path(path: &Path) -> Result<Table, IngestError> {
    let bytes = std::fs::read(path)?;
    read_table(&bytes)
}

fn ragged_or_csv(error: csv::Error, expected: usize) -> IngestError {
    if let csv::ErrorKind::UnequalLengths { pos, len, .. } = error.kind() {
        return IngestError::RaggedRow {
            line: pos.as_ref().map(csv::Position::line).unwrap_or(0),
            expected,
            found: *len as usize,
        };
    }
    IngestError::Csv(error)
}
