//! Blank-field completion from an incoming record.
//!
//! Fill-forward is about presence, not canonical equality: a stored field
//! is fillable when its raw trimmed value is empty and the incoming raw
//! trimmed value is not. Normalization plays no part here.

use std::collections::BTreeMap;

use survey_model::{Record, columns};

/// Whether `incoming` can complete at least one blank validation column of
/// `stored`.
pub fn has_fillable(stored: &Record, incoming: &Record) -> bool {
    columns::VALIDATION_COLUMNS
        .iter()
        .any(|column| is_fillable(stored, incoming, column))
}

/// The patch completing every blank validation column of `stored` from
/// `incoming`. Applying it never overwrites a non-empty stored value.
pub fn compute_patch(stored: &Record, incoming: &Record) -> BTreeMap<String, String> {
    let mut patch = BTreeMap::new();
    for column in columns::VALIDATION_COLUMNS {
        if is_fillable(stored, incoming, column) {
            patch.insert(
                column.to_string(),
                incoming.value(column).trim().to_string(),
            );
        }
    }
    patch
}

fn is_fillable(stored: &Record, incoming: &Record, column: &str) -> bool {
    stored.contains(column)
        && incoming.contains(column)
        && stored.value(column).trim().is_empty()
        && !incoming.value(column).trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        Record::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn blank_stored_fields_are_fillable() {
        let stored = record(&[("ID SURVEY", "S002"), ("EQUIPMENT", ""), ("TINDAKAN", "  ")]);
        let incoming = record(&[
            ("ID SURVEY", "S002"),
            ("EQUIPMENT", " TRAFO "),
            ("TINDAKAN", "GANTI"),
        ]);
        assert!(has_fillable(&stored, &incoming));
        let patch = compute_patch(&stored, &incoming);
        assert_eq!(patch.get("EQUIPMENT").map(String::as_str), Some("TRAFO"));
        assert_eq!(patch.get("TINDAKAN").map(String::as_str), Some("GANTI"));
        assert!(!patch.contains_key("ID SURVEY"));
    }

    #[test]
    fn non_empty_stored_fields_are_untouchable() {
        let stored = record(&[("ID SURVEY", "S002"), ("EQUIPMENT", "TIANG")]);
        let incoming = record(&[("ID SURVEY", "S002"), ("EQUIPMENT", "TRAFO")]);
        assert!(!has_fillable(&stored, &incoming));
        assert!(compute_patch(&stored, &incoming).is_empty());
    }

    #[test]
    fn comparison_is_raw_not_normalized() {
        // A whitespace-only incoming value fills nothing.
        let stored = record(&[("ID SURVEY", "S002"), ("EQUIPMENT", "")]);
        let incoming = record(&[("ID SURVEY", "S002"), ("EQUIPMENT", "   ")]);
        assert!(!has_fillable(&stored, &incoming));
    }

    #[test]
    fn columns_outside_the_validation_set_never_fill() {
        let stored = record(&[("ID SURVEY", "S002"), ("FOTO SURVEY", "")]);
        let incoming = record(&[("ID SURVEY", "S002"), ("FOTO SURVEY", "img.jpg")]);
        assert!(!has_fillable(&stored, &incoming));
    }
}
