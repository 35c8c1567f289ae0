//! Property tests for the engine invariants.

use proptest::prelude::*;

use validata_engine::{count_duplicate_rows, infer_kinds, run_checks, validate_table};
use validata_model::Table;

/// Cell pool mixing blanks, numbers, text, and e-mail-shaped values so
/// every check has a chance to fire.
fn cell() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "", " ", "1", "2.5", "-3", "1e3", "100000", "x", "abc", "a@b.com", "not-an-email",
    ])
    .prop_map(str::to_string)
}

fn rows(columns: usize) -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(cell(), columns), 1..12)
}

fn headers(columns: usize) -> Vec<String> {
    (0..columns)
        .map(|index| {
            if index == 0 {
                "contact_email".to_string()
            } else {
                format!("col_{index}")
            }
        })
        .collect()
}

fn table_strategy() -> impl Strategy<Value = Table> {
    (1usize..5).prop_flat_map(|columns| {
        rows(columns).prop_map(move |rows| {
            Table::new(headers(columns), rows).expect("generated shape is valid")
        })
    })
}

fn rows_and_permutation() -> impl Strategy<Value = (usize, Vec<Vec<String>>, Vec<Vec<String>>)> {
    (1usize..4).prop_flat_map(|columns| {
        rows(columns).prop_flat_map(move |original| {
            let kept = original.clone();
            Just(original)
                .prop_shuffle()
                .prop_map(move |shuffled| (columns, kept.clone(), shuffled))
        })
    })
}

proptest! {
    #[test]
    fn score_is_bounded_and_totals_agree(table in table_strategy()) {
        let record = validate_table(&table).expect("table is never empty");
        prop_assert!(record.score <= 100);
        prop_assert_eq!(record.total_issues, record.issues.total());
        prop_assert_eq!(
            record.details.total_cells,
            record.details.total_rows * record.details.total_columns
        );
    }

    #[test]
    fn checks_are_idempotent(table in table_strategy()) {
        let kinds = infer_kinds(&table);
        let first = run_checks(&table, &kinds);
        let second = run_checks(&table, &kinds);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn duplicate_total_is_invariant_under_row_permutation(
        (columns, original, shuffled) in rows_and_permutation()
    ) {
        let first = Table::new(headers(columns), original).expect("build table");
        let second = Table::new(headers(columns), shuffled).expect("build table");
        // Which row counts as "first" moves with the permutation, but the
        // number of repeat occurrences only depends on the row multiset.
        prop_assert_eq!(count_duplicate_rows(&first), count_duplicate_rows(&second));
    }

    #[test]
    fn order_insensitive_counts_survive_row_permutation(
        (columns, original, shuffled) in rows_and_permutation()
    ) {
        let first = Table::new(headers(columns), original).expect("build table");
        let second = Table::new(headers(columns), shuffled).expect("build table");
        let first_counts = run_checks(&first, &infer_kinds(&first));
        let second_counts = run_checks(&second, &infer_kinds(&second));
        prop_assert_eq!(first_counts, second_counts);
    }
}
