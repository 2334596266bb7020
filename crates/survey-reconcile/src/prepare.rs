//! Pre-merge table cleanup.

use survey_model::{Table, columns};

/// Cell values that spreadsheet round-trips leave behind for "no value".
const NULL_TOKENS: [&str; 4] = ["nan", "None", "NaN", "null"];

/// Clone `table` with cells cleaned for comparison: null placeholder tokens
/// become empty, every cell is trimmed except coordinate columns (their
/// format must survive untouched), and all validation columns exist on the
/// column order so both sides expose the same comparison surface.
pub fn prepare_table(table: &Table) -> Table {
    let mut prepared = table.clone();
    for column in columns::VALIDATION_COLUMNS {
        prepared.ensure_column(column);
    }
    let column_names = prepared.columns.clone();
    for row in &mut prepared.rows {
        for column in &column_names {
            if !row.contains(column) {
                row.set(column, "");
                continue;
            }
            let value = row.value(column).to_string();
            if NULL_TOKENS.contains(&value.as_str()) {
                row.set(column, "");
            } else if !columns::is_coordinate_column(column) {
                let trimmed = value.trim();
                if trimmed != value {
                    row.set(column, trimmed.to_string());
                }
            }
        }
    }
    prepared
}
