//! Record equality under normalization.

use survey_model::{Record, columns};
use survey_normalize::TextNormalizer;

/// Whether two records are identical across every validation column they
/// share, comparing canonicalized values.
///
/// Only columns present on both records are compared; when none are, the
/// records are not equal. Failing closed here means malformed input grows
/// the table instead of silently merging into the wrong row.
pub fn rows_equal(normalizer: &TextNormalizer, a: &Record, b: &Record) -> bool {
    let mut compared = false;
    for column in columns::VALIDATION_COLUMNS {
        if !a.contains(column) || !b.contains(column) {
            continue;
        }
        compared = true;
        let left = normalizer.normalize_column(column, a.value(column));
        let right = normalizer.normalize_column(column, b.value(column));
        if left != right {
            return false;
        }
    }
    compared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        Record::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn surface_variants_compare_equal() {
        let n = TextNormalizer::default();
        let stored = record(&[("ID SURVEY", "S003"), ("STATUS EKSEKUSI", "SLSAI")]);
        let incoming = record(&[("ID SURVEY", "S003"), ("STATUS EKSEKUSI", "SELESAI")]);
        assert!(rows_equal(&n, &incoming, &stored));
    }

    #[test]
    fn first_differing_column_decides() {
        let n = TextNormalizer::default();
        let stored = record(&[("ID SURVEY", "S004"), ("EQUIPMENT", "TRAFO")]);
        let incoming = record(&[("ID SURVEY", "S004"), ("EQUIPMENT", "TIANG")]);
        assert!(!rows_equal(&n, &incoming, &stored));
    }

    #[test]
    fn no_shared_columns_is_not_equal() {
        let n = TextNormalizer::default();
        let stored = record(&[("ID SURVEY", "S005")]);
        let incoming = record(&[("EQUIPMENT", "TRAFO")]);
        assert!(!rows_equal(&n, &incoming, &stored));
    }

    #[test]
    fn coordinate_columns_never_participate() {
        let n = TextNormalizer::default();
        let stored = record(&[("ID SURVEY", "S006"), ("KOORDINAT X", "10.485.903")]);
        let incoming = record(&[("ID SURVEY", "S006"), ("KOORDINAT X", "105.123")]);
        assert!(rows_equal(&n, &incoming, &stored));
    }
}
