//! Store behavior tests against a temporary directory.

use chrono::TimeZone;

use validata_model::{IssueCounts, TableDims, ValidationRecord};
use validata_store::{Store, StoreError};

fn dims() -> TableDims {
    TableDims {
        total_cells: 4,
        total_rows: 2,
        total_columns: 2,
    }
}

fn record(score: u8) -> ValidationRecord {
    ValidationRecord {
        score,
        total_issues: 0,
        issues: IssueCounts::default(),
        details: dims(),
        created_at: chrono::Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, u32::from(score) % 60)
            .unwrap(),
    }
}

#[test]
fn dataset_ids_are_assigned_sequentially() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Store::open(dir.path()).expect("open");
    let first = store.add_dataset("a.csv", b"a,b\n1,2\n", dims()).expect("add");
    let second = store.add_dataset("b.csv", b"a,b\n3,4\n", dims()).expect("add");
    assert_eq!(first.dataset_id, 1);
    assert_eq!(second.dataset_id, 2);
    let listed = store.list_datasets().expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].filename, "a.csv");
}

#[test]
fn raw_bytes_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Store::open(dir.path()).expect("open");
    let bytes = b"a,b\n1,2\n";
    let meta = store.add_dataset("a.csv", bytes, dims()).expect("add");
    assert_eq!(store.raw_bytes(meta.dataset_id).expect("read"), bytes);
    assert_eq!(meta.byte_len, bytes.len() as u64);
    assert_eq!(meta.sha256.len(), 64);
}

#[test]
fn history_appends_and_orders_by_insertion() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Store::open(dir.path()).expect("open");
    let meta = store.add_dataset("a.csv", b"a\n1\n", dims()).expect("add");

    assert!(store.latest_validation(meta.dataset_id).expect("latest").is_none());

    let first = store
        .append_validation(meta.dataset_id, &record(90))
        .expect("append");
    let second = store
        .append_validation(meta.dataset_id, &record(75))
        .expect("append");
    assert!(second.validation_id > first.validation_id);

    let history = store.history(meta.dataset_id).expect("history");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].record.score, 90);
    assert_eq!(history[1].record.score, 75);

    let latest = store
        .latest_validation(meta.dataset_id)
        .expect("latest")
        .expect("record exists");
    assert_eq!(latest.record.score, 75);
}

#[test]
fn appending_never_rewrites_earlier_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Store::open(dir.path()).expect("open");
    let meta = store.add_dataset("a.csv", b"a\n1\n", dims()).expect("add");
    store
        .append_validation(meta.dataset_id, &record(90))
        .expect("append");
    let before = std::fs::read_to_string(
        dir.path()
            .join("datasets")
            .join(meta.dataset_id.to_string())
            .join("validations.jsonl"),
    )
    .expect("read history file");
    store
        .append_validation(meta.dataset_id, &record(75))
        .expect("append");
    let after = std::fs::read_to_string(
        dir.path()
            .join("datasets")
            .join(meta.dataset_id.to_string())
            .join("validations.jsonl"),
    )
    .expect("read history file");
    assert!(after.starts_with(&before));
}

#[test]
fn unknown_dataset_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Store::open(dir.path()).expect("open");
    assert!(matches!(
        store.dataset(42),
        Err(StoreError::UnknownDataset(42))
    ));
    assert!(matches!(
        store.raw_bytes(42),
        Err(StoreError::UnknownDataset(42))
    ));
    assert!(matches!(
        store.append_validation(42, &record(50)),
        Err(StoreError::UnknownDataset(42))
    ));
    assert!(matches!(
        store.history(42),
        Err(StoreError::UnknownDataset(42))
    ));
}

#[test]
fn store_reopens_with_counters_intact() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let store = Store::open(dir.path()).expect("open");
        store.add_dataset("a.csv", b"a\n1\n", dims()).expect("add");
    }
    let store = Store::open(dir.path()).expect("reopen");
    let meta = store.add_dataset("b.csv", b"a\n2\n", dims()).expect("add");
    assert_eq!(meta.dataset_id, 2);
}
