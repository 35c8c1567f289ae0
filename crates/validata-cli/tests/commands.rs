//! End-to-end command tests against a temporary store.

use std::path::{Path, PathBuf};

use validata_cli::commands::{
    resolve_store_root, run_datasets, run_demo, run_history, run_revalidate, run_show,
    run_validate,
};

fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write csv");
    path
}

#[test]
fn validate_persists_dataset_and_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = dir.path().join("store");
    let file = write_csv(dir.path(), "people.csv", "name,age\nada,36\ngrace,\n");

    let outcome = run_validate(&store, &file).expect("validate");
    assert_eq!(outcome.meta.dataset_id, 1);
    assert_eq!(outcome.meta.filename, "people.csv");
    assert_eq!(outcome.stored.record.issues.missing_values, 1);
    assert_eq!(outcome.stored.record.details.total_rows, 2);

    let datasets = run_datasets(&store).expect("datasets");
    assert_eq!(datasets.len(), 1);
}

#[test]
fn revalidate_appends_to_history() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = dir.path().join("store");
    let file = write_csv(dir.path(), "people.csv", "name,age\nada,36\n");

    let first = run_validate(&store, &file).expect("validate");
    let second = run_revalidate(&store, first.meta.dataset_id).expect("revalidate");
    assert!(second.stored.validation_id > first.stored.validation_id);
    // The computation is deterministic, so the re-run scores the same.
    assert_eq!(second.stored.record.score, first.stored.record.score);

    let history = run_history(&store, Some(first.meta.dataset_id)).expect("history");
    assert_eq!(history.len(), 2);

    let latest = run_show(&store, first.meta.dataset_id).expect("show");
    assert_eq!(
        latest.stored.validation_id,
        second.stored.validation_id
    );
}

#[test]
fn history_spans_all_datasets_by_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = dir.path().join("store");
    let first = write_csv(dir.path(), "a.csv", "x\n1\n");
    let second = write_csv(dir.path(), "b.csv", "y\nz\n");

    run_validate(&store, &first).expect("validate");
    run_validate(&store, &second).expect("validate");

    let history = run_history(&store, None).expect("history");
    assert_eq!(history.len(), 2);
}

#[test]
fn empty_csv_is_rejected_before_storage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = dir.path().join("store");
    let file = write_csv(dir.path(), "empty.csv", "a,b\n");

    assert!(run_validate(&store, &file).is_err());
    // Nothing was stored for the failed run.
    let datasets = run_datasets(&store).expect("datasets");
    assert!(datasets.is_empty());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = dir.path().join("store");
    assert!(run_validate(&store, &dir.path().join("nope.csv")).is_err());
}

#[test]
fn demo_output_validates_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = dir.path().join("store");
    let out = dir.path().join("demo.csv");

    run_demo(30, 11, &out).expect("demo");
    let outcome = run_validate(&store, &out).expect("validate");
    assert!(outcome.stored.record.total_issues > 0);
    assert!(outcome.stored.record.score < 100);
}

#[test]
fn store_flag_wins_over_defaults() {
    let explicit = PathBuf::from("/tmp/elsewhere");
    assert_eq!(resolve_store_root(Some(&explicit)), explicit);
}
