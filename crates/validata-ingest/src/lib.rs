pub mod csv_table;

pub use csv_table::{IngestError, read_table, read_table_from_path};
