//! Command implementations.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use survey_ingest::{
    IngestError, apply_targeted_normalization, ensure_identity_present, read_inspection_table,
    write_csv_table,
};
use survey_model::{MergeOutcome, Table, columns};
use survey_normalize::TextNormalizer;
use survey_reconcile::ReconcileEngine;

use crate::cli::{NormalizeArgs, ReconcileArgs};

/// Everything the summary printer needs after a reconcile run.
pub struct ReconcileReport {
    pub outcome: MergeOutcome,
    pub master_rows: usize,
    pub merged_rows: usize,
    pub output: PathBuf,
    pub written: bool,
}

pub fn run_reconcile(args: &ReconcileArgs) -> Result<ReconcileReport> {
    let master = match read_inspection_table(&args.master) {
        Ok(table) => table,
        Err(IngestError::FileNotFound { .. }) => {
            tracing::warn!(path = %args.master.display(), "master table missing, starting empty");
            Table::with_columns(columns::VALID_COLUMNS)
        }
        Err(error) => return Err(error).context("read master table"),
    };

    let upload = read_inspection_table(&args.upload).context("read upload batch")?;
    ensure_identity_present(&upload, &args.upload).context("validate upload batch")?;

    let engine = ReconcileEngine::default();
    let (outcome, merged) = engine.reconcile(&upload, &master);

    let output = args.output.clone().unwrap_or_else(|| args.master.clone());
    // A pass with no new or updated rows leaves the stored table intact;
    // only an explicitly redirected output is worth writing regardless.
    let should_write = !args.dry_run && (outcome.has_changes() || args.output.is_some());
    if should_write {
        write_csv_table(&output, &merged).context("write merged table")?;
    }

    if let Some(path) = &args.outcome_json {
        let json = serde_json::to_string_pretty(&outcome).context("serialize outcome")?;
        fs::write(path, json).with_context(|| format!("write outcome to {}", path.display()))?;
    }

    Ok(ReconcileReport {
        outcome,
        master_rows: master.len(),
        merged_rows: merged.len(),
        output,
        written: should_write,
    })
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<usize> {
    let mut table = read_inspection_table(&args.input).context("read input table")?;
    let rewritten = apply_targeted_normalization(&mut table, &TextNormalizer::default());
    let output = args.output.clone().unwrap_or_else(|| args.input.clone());
    write_csv_table(&output, &table).context("write normalized table")?;
    Ok(rewritten)
}

pub fn run_columns() {
    println!("Column vocabulary ({} columns):", columns::VALID_COLUMNS.len());
    for column in columns::VALID_COLUMNS {
        let marker = if columns::is_validation_column(column) {
            "validation"
        } else if columns::is_coordinate_column(column) {
            "coordinate (preserved)"
        } else if column == columns::ROW_NUMBER_COLUMN {
            "row number (cosmetic)"
        } else {
            "carried"
        };
        println!("  {column:<30} {marker}");
    }
}
