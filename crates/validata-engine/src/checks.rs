//! The six defect checks.
//!
//! Each check is a pure function of the table (plus the per-column kinds
//! where stated) returning a defect count. Checks are independent and
//! commutative; running order never changes a count. A cell failing one
//! check is never an error; the failure is the signal being counted.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use validata_model::{ColumnKind, IssueCounts, Table, is_missing};

use crate::infer::parse_number;
use crate::stats::{mean_and_sample_std, quantile};

/// IQR multiplier for the out-of-range fences.
const IQR_FENCE_MULTIPLIER: f64 = 3.0;

/// Z-score magnitude above which a value counts as an outlier.
const ZSCORE_LIMIT: f64 = 3.0;

/// Shape of a well-formed e-mail address: local part, `@`, domain, dot,
/// alphabetic top-level label of at least two characters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("invalid e-mail regex")
});

/// Run every check against the table.
pub fn run_checks(table: &Table, kinds: &[ColumnKind]) -> IssueCounts {
    IssueCounts {
        missing_values: count_missing_values(table),
        duplicate_rows: count_duplicate_rows(table),
        type_errors: count_type_errors(table, kinds),
        out_of_range: count_out_of_range(table, kinds),
        invalid_patterns: count_invalid_patterns(table),
        outliers: count_outliers(table, kinds),
    }
}

/// Count empty cells across all columns, one per occurrence.
pub fn count_missing_values(table: &Table) -> u64 {
    table
        .rows()
        .iter()
        .flatten()
        .filter(|cell| is_missing(cell))
        .count() as u64
}

/// Count rows whose full cell tuple repeats an earlier row.
///
/// The first occurrence is never counted, only its repeats.
pub fn count_duplicate_rows(table: &Table) -> u64 {
    let mut seen: BTreeSet<&[String]> = BTreeSet::new();
    let mut duplicates = 0u64;
    for row in table.rows() {
        if !seen.insert(row.as_slice()) {
            duplicates += 1;
        }
    }
    duplicates
}

/// Count non-empty cells in numeric columns that fail numeric coercion.
///
/// Empty cells are excluded; they are already counted as missing values.
/// Categorical columns contribute nothing.
pub fn count_type_errors(table: &Table, kinds: &[ColumnKind]) -> u64 {
    let mut invalid = 0u64;
    for (index, kind) in kinds.iter().enumerate() {
        if !kind.is_numeric() {
            continue;
        }
        for value in table.column_values(index) {
            if is_missing(value) {
                continue;
            }
            if parse_number(value).is_none() {
                invalid += 1;
            }
        }
    }
    invalid
}

/// Count numeric cells strictly outside the IQR fences of their column.
///
/// Fences are `Q1 - 3*IQR` and `Q3 + 3*IQR` with quartiles estimated by
/// linear interpolation over the column's numeric values. Columns with
/// fewer than two numeric values contribute nothing (quantiles undefined).
pub fn count_out_of_range(table: &Table, kinds: &[ColumnKind]) -> u64 {
    let mut flagged = 0u64;
    for (index, kind) in kinds.iter().enumerate() {
        if !kind.is_numeric() {
            continue;
        }
        let values = numeric_column(table, index);
        if values.len() < 2 {
            continue;
        }
        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        let q1 = quantile(&sorted, 0.25);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let lower = q1 - IQR_FENCE_MULTIPLIER * iqr;
        let upper = q3 + IQR_FENCE_MULTIPLIER * iqr;
        flagged += values
            .iter()
            .filter(|value| **value < lower || **value > upper)
            .count() as u64;
    }
    flagged
}

/// Count cells in e-mail-named columns that do not look like an address.
///
/// Applies to columns whose name contains `email` or `mail`
/// (case-insensitive); empty cells count as non-matching here, independent
/// of the missing-values check. Other columns contribute nothing.
pub fn count_invalid_patterns(table: &Table) -> u64 {
    let mut invalid = 0u64;
    for (index, name) in table.columns().iter().enumerate() {
        if !is_email_column(name) {
            continue;
        }
        invalid += table
            .column_values(index)
            .filter(|value| !EMAIL_REGEX.is_match(value))
            .count() as u64;
    }
    invalid
}

/// Count numeric cells more than three standard deviations from their
/// column mean.
///
/// Columns with zero or undefined sample standard deviation (fewer than
/// two values, or all identical) contribute nothing.
pub fn count_outliers(table: &Table, kinds: &[ColumnKind]) -> u64 {
    let mut flagged = 0u64;
    for (index, kind) in kinds.iter().enumerate() {
        if !kind.is_numeric() {
            continue;
        }
        let values = numeric_column(table, index);
        if values.len() < 2 {
            continue;
        }
        let (mean, std) = mean_and_sample_std(&values);
        if std <= 0.0 || std.is_nan() {
            continue;
        }
        flagged += values
            .iter()
            .filter(|value| ((**value - mean) / std).abs() > ZSCORE_LIMIT)
            .count() as u64;
    }
    flagged
}

/// Numeric values of one column, in row order; empty and non-coercible
/// cells are skipped.
fn numeric_column(table: &Table, index: usize) -> Vec<f64> {
    table
        .column_values(index)
        .filter(|value| !is_missing(value))
        .filter_map(parse_number)
        .collect()
}

fn is_email_column(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("email") || lower.contains("mail")
}
