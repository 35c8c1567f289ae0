use std::collections::BTreeSet;

use crate::error::ModelError;
use crate::record::TableDims;

/// A parsed tabular dataset: ordered header plus row-major cell storage.
///
/// Cells are normalized strings; the empty string is the missing-value
/// representation. Shape is fixed at construction and the table is never
/// mutated afterwards; each validation run owns exactly one `Table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from a header and data rows.
    ///
    /// Column names must be unique and every row must have exactly one cell
    /// per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, ModelError> {
        let mut seen = BTreeSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(ModelError::DuplicateColumn(name.clone()));
            }
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(ModelError::ShapeMismatch {
                    row: index,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// Iterate the cells of one column in row order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        assert!(index < self.columns.len(), "column index out of bounds");
        self.rows.iter().map(move |row| row[index].as_str())
    }

    pub fn dims(&self) -> TableDims {
        TableDims {
            total_cells: self.cell_count() as u64,
            total_rows: self.row_count() as u64,
            total_columns: self.column_count() as u64,
        }
    }
}

/// Classification attached to each column by type inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Numeric)
    }
}

/// True when a cell holds no value (empty or whitespace-only).
pub fn is_missing(value: &str) -> bool {
    value.trim().is_empty()
}
