//! Human-readable rendering of validation results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use validata_model::{DatasetMeta, IssueKind, IssueSeverity};

use crate::types::ValidationOutcome;

pub fn print_validation(outcome: &ValidationOutcome) {
    let record = &outcome.stored.record;
    println!(
        "Dataset: {} (id {})",
        outcome.meta.filename, outcome.meta.dataset_id
    );
    println!(
        "Rows: {}  Columns: {}  Cells: {}",
        record.details.total_rows, record.details.total_columns, record.details.total_cells
    );
    println!(
        "Quality score: {} ({})",
        record.score,
        score_status(record.score)
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Issue Type"),
        header_cell("Count"),
        header_cell("Severity"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for kind in IssueKind::ALL {
        let count = record.issues.get(kind);
        table.add_row(vec![
            Cell::new(kind.label()),
            count_cell(count, severity_color(kind.severity())),
            severity_cell(kind.severity()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(record.total_issues).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    let hints = remediation_hints(outcome);
    if !hints.is_empty() {
        println!("Recommendations:");
        for hint in hints {
            println!("- {hint}");
        }
    }
}

pub fn print_history(entries: &[ValidationOutcome]) {
    if entries.is_empty() {
        println!("No validation history yet");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Filename"),
        header_cell("Rows"),
        header_cell("Score"),
        header_cell("Issues"),
        header_cell("Created"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for entry in entries {
        let record = &entry.stored.record;
        table.add_row(vec![
            Cell::new(entry.meta.dataset_id),
            Cell::new(&entry.meta.filename),
            Cell::new(record.details.total_rows),
            score_cell(record.score),
            count_cell(record.total_issues, Color::Yellow),
            Cell::new(record.created_at.format("%Y-%m-%d %H:%M:%S")),
        ]);
    }
    println!("{table}");

    let total_rows: u64 = entries
        .iter()
        .map(|entry| entry.stored.record.details.total_rows)
        .sum();
    let average_score: f64 = entries
        .iter()
        .map(|entry| f64::from(entry.stored.record.score))
        .sum::<f64>()
        / entries.len() as f64;
    println!(
        "Validations: {}  Average score: {}  Rows validated: {}",
        entries.len(),
        average_score.round(),
        total_rows
    );
}

pub fn print_datasets(datasets: &[DatasetMeta]) {
    if datasets.is_empty() {
        println!("No datasets stored yet");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Filename"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Bytes"),
        header_cell("Digest"),
        header_cell("Uploaded"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for meta in datasets {
        table.add_row(vec![
            Cell::new(meta.dataset_id),
            Cell::new(&meta.filename),
            Cell::new(meta.total_rows),
            Cell::new(meta.total_columns),
            Cell::new(meta.byte_len),
            dim_cell(short_digest(&meta.sha256)),
            Cell::new(meta.uploaded_at.format("%Y-%m-%d %H:%M:%S")),
        ]);
    }
    println!("{table}");
}

/// Remediation hints keyed off the counts, mirroring the written report.
fn remediation_hints(outcome: &ValidationOutcome) -> Vec<String> {
    let record = &outcome.stored.record;
    let issues = &record.issues;
    let mut hints = Vec::new();
    if issues.missing_values > 0 {
        hints.push(format!(
            "Address {} missing values before production use",
            issues.missing_values
        ));
    }
    if issues.type_errors > 0 {
        hints.push(format!(
            "Fix {} type errors to ensure data consistency",
            issues.type_errors
        ));
    }
    if issues.duplicate_rows > 0 {
        hints.push(format!(
            "Remove {} duplicate rows to improve accuracy",
            issues.duplicate_rows
        ));
    }
    if record.score >= 90 {
        hints.push("Data quality is excellent and ready for production use".to_string());
    }
    hints
}

fn score_status(score: u8) -> &'static str {
    if score >= 90 {
        "Excellent Quality"
    } else if score >= 70 {
        "Good Quality"
    } else {
        "Needs Improvement"
    }
}

fn score_cell(score: u8) -> Cell {
    let color = if score >= 90 {
        Color::Green
    } else if score >= 70 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(score).fg(color).add_attribute(Attribute::Bold)
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::High => Cell::new("HIGH").fg(Color::Red),
        IssueSeverity::Medium => Cell::new("MEDIUM").fg(Color::Yellow),
        IssueSeverity::Low => Cell::new("LOW").fg(Color::Yellow),
    }
}

fn severity_color(severity: IssueSeverity) -> Color {
    match severity {
        IssueSeverity::High => Color::Red,
        IssueSeverity::Medium | IssueSeverity::Low => Color::Yellow,
    }
}

fn count_cell<T: Into<u64>>(count: T, color: Color) -> Cell {
    let value = count.into();
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn short_digest(digest: &str) -> String {
    digest.chars().take(12).collect()
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
