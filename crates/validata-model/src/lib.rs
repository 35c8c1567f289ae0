pub mod error;
pub mod record;
pub mod table;

pub use error::{ModelError, Result};
pub use record::{
    DatasetMeta, IssueCounts, IssueKind, IssueSeverity, StoredValidation, TableDims,
    ValidationRecord,
};
pub use table::{ColumnKind, Table, is_missing};
