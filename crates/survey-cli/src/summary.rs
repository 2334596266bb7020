//! Merge summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::ReconcileReport;

pub fn print_report(report: &ReconcileReport) {
    let outcome = &report.outcome;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Result"), header_cell("Rows")]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new("New rows").fg(Color::Green),
        Cell::new(outcome.new_rows),
    ]);
    table.add_row(vec![
        Cell::new("Updated rows (blanks filled)").fg(Color::Cyan),
        Cell::new(outcome.updated_rows),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate IDs, different content").fg(Color::Yellow),
        Cell::new(outcome.duplicate_ids_with_diff_content),
    ]);
    table.add_row(vec![
        Cell::new("Exact duplicates skipped"),
        Cell::new(outcome.skipped_duplicates),
    ]);
    table.add_row(vec![
        Cell::new("Processed").add_attribute(Attribute::Bold),
        Cell::new(outcome.processed_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    println!(
        "Table: {} rows before, {} after.",
        report.master_rows, report.merged_rows
    );
    if report.written {
        println!("Merged table written to {}.", report.output.display());
    } else if report.outcome.has_changes() {
        println!("Dry run: merged table not written.");
    } else {
        println!("No changes; stored table left untouched.");
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
