//! Error types for inspection data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing inspection CSV files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to parse CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row or no data at all.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// A required column is missing from the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Every row is missing an identifier value.
    #[error("no identifier values in {path}: all '{column}' cells are empty")]
    EmptyIdentity { column: String, path: PathBuf },

    /// Failed to write CSV output.
    #[error("failed to write CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
