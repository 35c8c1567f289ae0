//! The Validata validation engine.
//!
//! A pure, stateless transform from a parsed [`Table`] to a
//! [`ValidationRecord`]: infer per-column kinds, run the six defect checks,
//! reduce the counts to a 0–100 quality score, and stamp the result. The
//! engine never touches storage; callers own persistence.

mod checks;
mod infer;
mod score;
mod stats;

pub use checks::{
    count_duplicate_rows, count_invalid_patterns, count_missing_values, count_out_of_range,
    count_outliers, count_type_errors, run_checks,
};
pub use infer::{infer_kind, infer_kinds};
pub use score::quality_score;

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};

use validata_model::{Table, ValidationRecord};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("empty table: score is undefined for zero rows or zero columns")]
    EmptyTable,
}

/// Validate a table and assemble the resulting record.
///
/// Fails on an empty table (zero rows or zero columns). Per-cell coercion
/// failures never fail the run; they accumulate into the counts.
pub fn validate_table(table: &Table) -> Result<ValidationRecord, EngineError> {
    if table.cell_count() == 0 {
        return Err(EngineError::EmptyTable);
    }
    let start = Instant::now();
    let kinds = infer::infer_kinds(table);
    let issues = checks::run_checks(table, &kinds);
    debug!(
        missing_values = issues.missing_values,
        duplicate_rows = issues.duplicate_rows,
        type_errors = issues.type_errors,
        out_of_range = issues.out_of_range,
        invalid_patterns = issues.invalid_patterns,
        outliers = issues.outliers,
        "checks complete"
    );
    let details = table.dims();
    let total_issues = issues.total();
    let score = score::quality_score(total_issues, details.total_cells)?;
    info!(
        score,
        total_issues,
        total_cells = details.total_cells,
        duration_ms = start.elapsed().as_millis() as u64,
        "validation complete"
    );
    Ok(ValidationRecord {
        score,
        total_issues,
        issues,
        details,
        created_at: chrono::Utc::now(),
    })
}
