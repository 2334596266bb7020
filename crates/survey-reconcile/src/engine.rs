//! The four-case merge over a stored table.
//!
//! Every incoming record lands in exactly one bucket:
//!
//! 1. unknown identifier: appended as a new row
//! 2. known identifier with a blank-completable stored row: patched in place
//! 3. known identifier, genuinely different content: appended as an allowed
//!    duplicate-identifier variant
//! 4. identical to a stored row under normalization: skipped
//!
//! Accepted rows are never deleted and non-empty cells are never
//! overwritten; a pass can only append rows or complete blanks.

use std::collections::BTreeSet;

use survey_model::{MergeOutcome, Table, columns};
use survey_normalize::TextNormalizer;

use crate::equality::rows_equal;
use crate::fill_forward::{compute_patch, has_fillable};
use crate::prepare::prepare_table;

/// Merges incoming batches against a stored table.
///
/// Pure and synchronous: both inputs are taken as snapshots and a fresh
/// table value is returned. Callers sharing one table across writers must
/// serialize passes; the once-per-pass patch guard does not extend across
/// calls.
#[derive(Debug, Clone, Default)]
pub struct ReconcileEngine {
    normalizer: TextNormalizer,
}

impl ReconcileEngine {
    pub fn new(normalizer: TextNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Reconcile `batch` against `stored`, returning the pass statistics
    /// and the merged table.
    ///
    /// Match candidates come from the stored snapshot only: rows appended
    /// during the pass are invisible to later batch records, and equality
    /// always compares against pre-pass cell values even for rows already
    /// patched. Each stored row accepts at most one patch per pass; a
    /// second incoming record that would patch the same row differently
    /// falls through and is appended instead of silently losing intent.
    pub fn reconcile(&self, batch: &Table, stored: &Table) -> (MergeOutcome, Table) {
        let batch = prepare_table(batch);
        let snapshot = prepare_table(stored);
        let mut result = snapshot.clone();
        let mut outcome = MergeOutcome::default();
        let mut patched: BTreeSet<usize> = BTreeSet::new();

        for (row_number, incoming) in batch.rows.iter().enumerate() {
            outcome.processed_rows += 1;
            let identity = incoming.value(columns::IDENTITY_COLUMN).trim().to_string();
            if identity.is_empty() {
                tracing::warn!(row = row_number + 1, "empty identity key, row dropped");
                continue;
            }

            let candidates: Vec<usize> = snapshot
                .rows
                .iter()
                .enumerate()
                .filter(|(_, row)| row.value(columns::IDENTITY_COLUMN) == identity)
                .map(|(index, _)| index)
                .collect();

            if candidates.is_empty() {
                result.push_row(incoming.clone());
                outcome.new_rows += 1;
                tracing::debug!(row = row_number + 1, id = %identity, "new row appended");
                continue;
            }

            let mut decisive = false;
            for index in candidates {
                let stored_row = &snapshot.rows[index];
                if rows_equal(&self.normalizer, incoming, stored_row) {
                    outcome.skipped_duplicates += 1;
                    decisive = true;
                    tracing::debug!(row = row_number + 1, id = %identity, "exact duplicate skipped");
                    break;
                }
                if has_fillable(stored_row, incoming) && !patched.contains(&index) {
                    let patch = compute_patch(stored_row, incoming);
                    let filled = patch.len();
                    let target = &mut result.rows[index];
                    for (column, value) in patch {
                        target.set(&column, value);
                    }
                    patched.insert(index);
                    outcome.updated_rows += 1;
                    decisive = true;
                    tracing::debug!(
                        row = row_number + 1,
                        id = %identity,
                        columns = filled,
                        "blank columns filled"
                    );
                    break;
                }
            }

            if !decisive {
                result.push_row(incoming.clone());
                outcome.duplicate_ids_with_diff_content += 1;
                outcome.new_rows += 1;
                tracing::debug!(
                    row = row_number + 1,
                    id = %identity,
                    "divergent content, appended as duplicate identifier"
                );
            }
        }

        result.renumber();
        tracing::info!(
            processed = outcome.processed_rows,
            new = outcome.new_rows,
            updated = outcome.updated_rows,
            skipped = outcome.skipped_duplicates,
            duplicate_ids = outcome.duplicate_ids_with_diff_content,
            "reconciliation pass complete"
        );
        (outcome, result)
    }
}
