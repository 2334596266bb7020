//! Targeted in-place normalization of drift-prone columns.
//!
//! Applied when refreshing a read view of the master table. Limited to the
//! fields where typos and abbreviations create false duplicates; all other
//! columns keep their original surface form.

use survey_model::Table;
use survey_normalize::{FieldKind, TextNormalizer};

const TARGETED: [(&str, FieldKind); 7] = [
    ("STATUS EKSEKUSI", FieldKind::StatusExecution),
    ("STATUS ASET", FieldKind::AssetStatus),
    ("KONDISI ASET", FieldKind::AssetStatus),
    ("EQUIPMENT", FieldKind::Equipment),
    ("JENIS EQUIPMENT", FieldKind::Equipment),
    ("NAMA ASET", FieldKind::Equipment),
    ("JENIS TEMUAN", FieldKind::Generic),
];

/// Normalize the targeted columns of `table` in place. Returns how many
/// columns were present and rewritten.
pub fn apply_targeted_normalization(table: &mut Table, normalizer: &TextNormalizer) -> usize {
    let mut rewritten = 0;
    for (column, kind) in TARGETED {
        if !table.has_column(column) {
            continue;
        }
        rewritten += 1;
        tracing::debug!(column, "normalizing column");
        for row in &mut table.rows {
            if !row.contains(column) {
                continue;
            }
            let value = match kind {
                FieldKind::StatusExecution => normalizer.status_execution(row.value(column)),
                FieldKind::AssetStatus => normalizer.asset_status(row.value(column)),
                FieldKind::Equipment => normalizer.equipment(row.value(column)),
                _ => normalizer.normalize(row.value(column)),
            };
            row.set(column, value);
        }
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::Record;

    #[test]
    fn only_targeted_columns_are_rewritten() {
        let mut table = Table::with_columns(["ID SURVEY", "STATUS EKSEKUSI", "KETERANGAN"]);
        table.push_row(Record::from_pairs([
            ("ID SURVEY", "S001"),
            ("STATUS EKSEKUSI", "slsai"),
            ("KETERANGAN", "tdk"),
        ]));
        let rewritten = apply_targeted_normalization(&mut table, &TextNormalizer::default());
        assert_eq!(rewritten, 1);
        let row = &table.rows[0];
        assert_eq!(row.value("STATUS EKSEKUSI"), "SELESAI");
        // KETERANGAN is not targeted; the surface form survives.
        assert_eq!(row.value("KETERANGAN"), "tdk");
    }
}
