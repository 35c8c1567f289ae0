//! Unit tests for CSV table parsing.

use std::io::Write;

use validata_ingest::{IngestError, read_table, read_table_from_path};

#[test]
fn parses_header_and_rows() {
    let table = read_table(b"a,b\n1,x\n2,y\n").expect("parse");
    assert_eq!(table.columns(), ["a", "b"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0], vec!["1".to_string(), "x".to_string()]);
}

#[test]
fn trims_cells_and_strips_bom() {
    let table = read_table("\u{feff}a , b\n 1 ,  x \n".as_bytes()).expect("parse");
    assert_eq!(table.columns(), ["a", "b"]);
    assert_eq!(table.rows()[0], vec!["1".to_string(), "x".to_string()]);
}

#[test]
fn collapses_internal_header_whitespace() {
    let table = read_table(b"first  name,age\nada,36\n").expect("parse");
    assert_eq!(table.columns(), ["first name", "age"]);
}

#[test]
fn skips_fully_empty_rows() {
    let table = read_table(b"a,b\n1,x\n,\n2,y\n").expect("parse");
    assert_eq!(table.row_count(), 2);
}

#[test]
fn keeps_partially_empty_rows() {
    let table = read_table(b"a,b\n1,\n").expect("parse");
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows()[0], vec!["1".to_string(), String::new()]);
}

#[test]
fn ragged_row_is_an_error() {
    let error = read_table(b"a,b\n1,x\n2\n").expect_err("ragged row");
    match error {
        IngestError::RaggedRow {
            expected, found, ..
        } => {
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("expected ragged-row error, got {other:?}"),
    }
}

#[test]
fn duplicate_header_is_an_error() {
    let error = read_table(b"a,a\n1,2\n").expect_err("duplicate header");
    assert!(matches!(error, IngestError::Shape(_)));
}

#[test]
fn header_only_input_yields_zero_rows() {
    let table = read_table(b"a,b\n").expect("parse");
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.row_count(), 0);
}

#[test]
fn empty_input_yields_zero_columns() {
    let table = read_table(b"").expect("parse");
    assert_eq!(table.column_count(), 0);
    assert_eq!(table.row_count(), 0);
}

#[test]
fn quoted_fields_keep_embedded_commas() {
    let table = read_table(b"name,notes\nada,\"one, two\"\n").expect("parse");
    assert_eq!(table.rows()[0][1], "one, two");
}

#[test]
fn reads_from_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"a,b\n1,x\n").expect("write");
    let table = read_table_from_path(file.path()).expect("parse");
    assert_eq!(table.row_count(), 1);
}
