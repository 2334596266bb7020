//! CSV reading and writing aligned to the inspection column vocabulary.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use survey_model::{Record, Table, columns};
use survey_normalize::{canonicalize_date, preserve_coordinate};

use crate::error::{IngestError, Result};

/// Clean a raw header cell: strip BOM/zero-width/no-break-space artifacts,
/// collapse inner whitespace, upper-case.
fn normalize_header(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|ch| !matches!(ch, '\u{feff}' | '\u{200b}' | '\u{a0}'))
        .collect();
    let mut normalized = String::new();
    for part in cleaned.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(part);
    }
    normalized.to_uppercase()
}

/// Cells keep their content verbatim apart from a stray BOM; trimming
/// happens later and never for coordinates.
fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a raw table: first non-blank row is the header,
/// blank rows are dropped, values stay strings.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let headers: Vec<String> = raw_rows.remove(0).iter().map(|h| normalize_header(h)).collect();
    let mut table = Table::new(headers.clone().into_iter().filter(|h| !h.is_empty()).collect());
    for row in raw_rows {
        let mut record = Record::new();
        for (index, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            record.set(header, row.get(index).cloned().unwrap_or_default());
        }
        table.push_row(record);
    }
    tracing::debug!(path = %path.display(), rows = table.len(), "CSV table read");
    Ok(table)
}

/// Project a raw table onto the fixed vocabulary: known columns keep their
/// values, missing ones become empty, unknown ones are dropped, and
/// coordinate cells go through the pass-through cleaner.
pub fn align_to_vocabulary(table: &Table) -> Table {
    let unknown = table
        .columns
        .iter()
        .filter(|name| !columns::VALID_COLUMNS.contains(&name.as_str()))
        .count();
    if unknown > 0 {
        tracing::warn!(count = unknown, "unknown columns dropped during alignment");
    }
    let mut aligned = Table::with_columns(columns::VALID_COLUMNS);
    for row in &table.rows {
        let mut record = Record::new();
        for column in columns::VALID_COLUMNS {
            if columns::is_coordinate_column(column) {
                record.set(column, preserve_coordinate(row.value(column)));
            } else {
                record.set(column, row.value(column));
            }
        }
        aligned.push_row(record);
    }
    aligned
}

/// Standardize every date column in place to `YYYY-MM-DD`.
pub fn canonicalize_date_columns(table: &mut Table) {
    for row in &mut table.rows {
        for column in columns::DATE_COLUMNS {
            if row.contains(column) {
                let canonical = canonicalize_date(row.value(column));
                row.set(column, canonical);
            }
        }
    }
}

/// Read a CSV export as a vocabulary-aligned table with standardized dates.
///
/// The identity column must exist in the file's header; everything else is
/// optional and filled with empty strings.
pub fn read_inspection_table(path: &Path) -> Result<Table> {
    let raw = read_csv_table(path)?;
    if !raw.has_column(columns::IDENTITY_COLUMN) {
        return Err(IngestError::MissingColumn {
            column: columns::IDENTITY_COLUMN.to_string(),
            path: path.to_path_buf(),
        });
    }
    let mut table = align_to_vocabulary(&raw);
    canonicalize_date_columns(&mut table);
    Ok(table)
}

/// Require at least one non-empty identifier value, the minimum for a
/// batch to be reconcilable at all.
pub fn ensure_identity_present(table: &Table, path: &Path) -> Result<()> {
    let has_identity = table
        .rows
        .iter()
        .any(|row| !row.value(columns::IDENTITY_COLUMN).trim().is_empty());
    if has_identity {
        Ok(())
    } else {
        Err(IngestError::EmptyIdentity {
            column: columns::IDENTITY_COLUMN.to_string(),
            path: path.to_path_buf(),
        })
    }
}

/// Write a table as CSV, full overwrite, columns in table order.
pub fn write_csv_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|error| IngestError::CsvWrite {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
    writer
        .write_record(&table.columns)
        .map_err(|error| IngestError::CsvWrite {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
    for row in &table.rows {
        let cells: Vec<&str> = table.columns.iter().map(|column| row.value(column)).collect();
        writer
            .write_record(&cells)
            .map_err(|error| IngestError::CsvWrite {
                path: path.to_path_buf(),
                message: error.to_string(),
            })?;
    }
    writer.flush().map_err(|error| IngestError::CsvWrite {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    tracing::info!(path = %path.display(), rows = table.len(), "table written");
    Ok(())
}
