/// Statistics for one reconciliation pass.
///
/// Created fresh per call and returned to the caller; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MergeOutcome {
    /// Rows appended to the table, including duplicate-identifier variants.
    pub new_rows: usize,
    /// Stored rows that had blank fields completed in place.
    pub updated_rows: usize,
    /// Incoming rows identical to a stored row after normalization.
    pub skipped_duplicates: usize,
    /// Appended rows sharing an identifier with stored rows but carrying
    /// genuinely different content. Also counted in `new_rows`.
    pub duplicate_ids_with_diff_content: usize,
    /// Every incoming row seen, including defensively dropped ones.
    pub processed_rows: usize,
}

impl MergeOutcome {
    /// Whether the pass changed the table at all. Callers skip the
    /// persistence rewrite when this is false.
    pub fn has_changes(&self) -> bool {
        self.new_rows > 0 || self.updated_rows > 0
    }
}
