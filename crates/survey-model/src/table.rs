use std::collections::BTreeMap;

use crate::columns::ROW_NUMBER_COLUMN;

/// A single inspection record: column name to string value.
///
/// The empty string represents "no value"; there is no null. Column order
/// lives on the owning [`Table`], so cell storage can stay sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    cells: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let cells = pairs
            .into_iter()
            .map(|(column, value)| (column.into(), value.into()))
            .collect();
        Self { cells }
    }

    /// Value of `column`, or the empty string when the column is absent.
    pub fn value(&self, column: &str) -> &str {
        self.cells.get(column).map_or("", String::as_str)
    }

    /// Whether the record carries a cell for `column` (possibly empty).
    pub fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        self.cells.insert(column.to_string(), value.into());
    }

    pub fn remove(&mut self, column: &str) {
        self.cells.remove(column);
    }

    /// Column names present on this record.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}

/// An ordered sequence of records with an explicit column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Table with the given column names and no rows.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(columns.into_iter().map(Into::into).collect())
    }

    pub fn push_row(&mut self, row: Record) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }

    /// Adds `column` to the column order when absent. Existing rows report
    /// the empty string for it until a value is set.
    pub fn ensure_column(&mut self, column: &str) {
        if !self.has_column(column) {
            self.columns.push(column.to_string());
        }
    }

    /// Strips any prior row-number column and reinserts a dense `1..N`
    /// sequence as the first column. Purely cosmetic.
    pub fn renumber(&mut self) {
        self.columns.retain(|name| name != ROW_NUMBER_COLUMN);
        self.columns.insert(0, ROW_NUMBER_COLUMN.to_string());
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.set(ROW_NUMBER_COLUMN, (index + 1).to_string());
        }
    }
}
