//! Column-name dispatch to the matching normalizer.
//!
//! A prioritized rule list, evaluated top-down on substrings of the
//! column name; the first rule that matches wins and everything else falls
//! through to the generic normalizer. Order is load-bearing: `STATUS ASET`
//! contains `ASET` and therefore hits the equipment rule before the
//! asset-status rule, which is the precedence existing data was merged
//! under.

use crate::text::TextNormalizer;

/// Which normalizer applies to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Location,
    Inspector,
    Equipment,
    StatusExecution,
    AssetStatus,
    Generic,
}

const RULES: [(&[&str], FieldKind); 5] = [
    (&["LOKASI", "ALAMAT"], FieldKind::Location),
    (&["INSPEKTUR", "PETUGAS"], FieldKind::Inspector),
    (&["EQUIPMENT", "ASET", "PERALATAN"], FieldKind::Equipment),
    (
        &["STATUS EKSEKUSI", "STATUS PEKERJAAN"],
        FieldKind::StatusExecution,
    ),
    (&["STATUS ASET", "KONDISI"], FieldKind::AssetStatus),
];

/// Select the normalizer kind for a column name.
pub fn classify(column: &str) -> FieldKind {
    let upper = column.to_uppercase();
    for (keywords, kind) in RULES {
        if keywords.iter().any(|keyword| upper.contains(keyword)) {
            return kind;
        }
    }
    FieldKind::Generic
}

impl TextNormalizer {
    /// Normalize `value` with the normalizer selected for `column`.
    pub fn normalize_column(&self, column: &str, value: &str) -> String {
        match classify(column) {
            FieldKind::Location => self.location(value),
            FieldKind::Inspector => self.inspector(value),
            FieldKind::Equipment => self.equipment(value),
            FieldKind::StatusExecution => self.status_execution(value),
            FieldKind::AssetStatus => self.asset_status(value),
            FieldKind::Generic => self.normalize(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_apply_top_down() {
        assert_eq!(classify("PENUNJUK LOKASI"), FieldKind::Location);
        assert_eq!(classify("NAMA PETUGAS"), FieldKind::Inspector);
        assert_eq!(classify("EQUIPMENT"), FieldKind::Equipment);
        assert_eq!(classify("STATUS EKSEKUSI"), FieldKind::StatusExecution);
        assert_eq!(classify("KONDISI"), FieldKind::AssetStatus);
        assert_eq!(classify("KETERANGAN"), FieldKind::Generic);
    }

    #[test]
    fn aset_keyword_outranks_status_aset() {
        // Pinned precedence: the equipment rule sees ASET first.
        assert_eq!(classify("STATUS ASET"), FieldKind::Equipment);
    }
}
