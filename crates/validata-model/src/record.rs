use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity attached to a defect category in rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    High,
    Medium,
    Low,
}

/// The six defect categories counted by the check suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    MissingValues,
    DuplicateRows,
    TypeErrors,
    OutOfRange,
    InvalidPatterns,
    Outliers,
}

impl IssueKind {
    pub const ALL: [IssueKind; 6] = [
        IssueKind::MissingValues,
        IssueKind::DuplicateRows,
        IssueKind::TypeErrors,
        IssueKind::OutOfRange,
        IssueKind::InvalidPatterns,
        IssueKind::Outliers,
    ];

    /// JSON field name of this category in the record's `issues` object.
    pub fn key(self) -> &'static str {
        match self {
            Self::MissingValues => "missing_values",
            Self::DuplicateRows => "duplicate_rows",
            Self::TypeErrors => "type_errors",
            Self::OutOfRange => "out_of_range",
            Self::InvalidPatterns => "invalid_patterns",
            Self::Outliers => "outliers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MissingValues => "Missing Values",
            Self::DuplicateRows => "Duplicate Rows",
            Self::TypeErrors => "Type Errors",
            Self::OutOfRange => "Out of Range",
            Self::InvalidPatterns => "Invalid Patterns",
            Self::Outliers => "Outliers",
        }
    }

    pub fn severity(self) -> IssueSeverity {
        match self {
            Self::MissingValues | Self::TypeErrors => IssueSeverity::High,
            Self::DuplicateRows | Self::OutOfRange => IssueSeverity::Medium,
            Self::InvalidPatterns | Self::Outliers => IssueSeverity::Low,
        }
    }
}

/// Defect counts, one field per check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCounts {
    pub missing_values: u64,
    pub duplicate_rows: u64,
    pub type_errors: u64,
    pub out_of_range: u64,
    pub invalid_patterns: u64,
    pub outliers: u64,
}

impl IssueCounts {
    pub fn total(&self) -> u64 {
        self.missing_values
            + self.duplicate_rows
            + self.type_errors
            + self.out_of_range
            + self.invalid_patterns
            + self.outliers
    }

    pub fn get(&self, kind: IssueKind) -> u64 {
        match kind {
            IssueKind::MissingValues => self.missing_values,
            IssueKind::DuplicateRows => self.duplicate_rows,
            IssueKind::TypeErrors => self.type_errors,
            IssueKind::OutOfRange => self.out_of_range,
            IssueKind::InvalidPatterns => self.invalid_patterns,
            IssueKind::Outliers => self.outliers,
        }
    }
}

/// Table dimensions embedded in every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDims {
    pub total_cells: u64,
    pub total_rows: u64,
    pub total_columns: u64,
}

/// Immutable snapshot of one validation run.
///
/// Serializes to the report shape consumed downstream: `score`,
/// `total_issues`, the six-count `issues` object, table `details`, and an
/// ISO-8601 `created_at` timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRecord {
    pub score: u8,
    pub total_issues: u64,
    pub issues: IssueCounts,
    pub details: TableDims,
    pub created_at: DateTime<Utc>,
}

/// A validation record as persisted: engine output plus store identity.
///
/// Many may exist per dataset; they are ordered by creation time and the
/// latest is the most recently appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredValidation {
    pub validation_id: u64,
    pub dataset_id: u64,
    #[serde(flatten)]
    pub record: ValidationRecord,
}

/// Metadata for one uploaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMeta {
    pub dataset_id: u64,
    pub filename: String,
    pub byte_len: u64,
    pub sha256: String,
    pub total_rows: u64,
    pub total_columns: u64,
    pub uploaded_at: DateTime<Utc>,
}
