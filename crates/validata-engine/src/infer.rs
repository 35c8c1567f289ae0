//! Column type inference.
//!
//! A column is treated as numeric when a strict majority of its non-empty
//! cells coerce to a number; everything else is categorical. The outcome
//! gates which checks apply to the column.

use validata_model::{ColumnKind, Table, is_missing};

/// Share of non-empty cells that must coerce to a number for a column to
/// classify as numeric. Strictly-greater comparison, so an exact half stays
/// categorical.
pub(crate) const NUMERIC_RATIO_THRESHOLD: f64 = 0.5;

/// Permissive numeric coercion: integers, floats, scientific notation,
/// leading sign.
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Classify every column of the table, in column order.
pub fn infer_kinds(table: &Table) -> Vec<ColumnKind> {
    (0..table.column_count())
        .map(|index| infer_kind(table.column_values(index)))
        .collect()
}

/// Classify a single column from its cells.
pub fn infer_kind<'a>(values: impl Iterator<Item = &'a str>) -> ColumnKind {
    infer_kind_with_threshold(values, NUMERIC_RATIO_THRESHOLD)
}

pub(crate) fn infer_kind_with_threshold<'a>(
    values: impl Iterator<Item = &'a str>,
    threshold: f64,
) -> ColumnKind {
    let mut non_empty = 0usize;
    let mut numeric = 0usize;
    for value in values {
        if is_missing(value) {
            continue;
        }
        non_empty += 1;
        if parse_number(value).is_some() {
            numeric += 1;
        }
    }
    // No numeric evidence at all: an entirely-empty column is categorical.
    if non_empty == 0 {
        return ColumnKind::Categorical;
    }
    if numeric as f64 > threshold * non_empty as f64 {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}
