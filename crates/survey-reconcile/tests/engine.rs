//! Merge scenarios for the reconciliation engine.

use survey_model::{Record, Table};
use survey_reconcile::ReconcileEngine;

fn table(rows: &[&[(&str, &str)]]) -> Table {
    let mut table = Table::with_columns(["ID SURVEY", "EQUIPMENT", "STATUS EKSEKUSI", "TINDAKAN"]);
    for pairs in rows {
        table.push_row(Record::from_pairs(pairs.iter().copied()));
    }
    table
}

#[test]
fn unknown_identifier_appends_a_new_row() {
    let engine = ReconcileEngine::default();
    let stored = table(&[&[("ID SURVEY", "S000"), ("EQUIPMENT", "TIANG")]]);
    let batch = table(&[&[("ID SURVEY", "S001"), ("EQUIPMENT", "TRAFO")]]);

    let (outcome, merged) = engine.reconcile(&batch, &stored);

    assert_eq!(outcome.new_rows, 1);
    assert_eq!(outcome.duplicate_ids_with_diff_content, 0);
    assert_eq!(outcome.processed_rows, 1);
    assert_eq!(merged.len(), stored.len() + 1);
    assert_eq!(merged.rows[1].value("ID SURVEY"), "S001");
}

#[test]
fn blank_columns_fill_without_overwriting() {
    let engine = ReconcileEngine::default();
    let stored = table(&[&[
        ("ID SURVEY", "S002"),
        ("EQUIPMENT", ""),
        ("STATUS EKSEKUSI", "SELESAI"),
    ]]);
    let batch = table(&[&[
        ("ID SURVEY", "S002"),
        ("EQUIPMENT", "TRAFO"),
        ("STATUS EKSEKUSI", "SELESAI"),
    ]]);

    let (outcome, merged) = engine.reconcile(&batch, &stored);

    assert_eq!(outcome.updated_rows, 1);
    assert_eq!(outcome.new_rows, 0);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged.rows[0].value("EQUIPMENT"), "TRAFO");
    assert_eq!(merged.rows[0].value("STATUS EKSEKUSI"), "SELESAI");
}

#[test]
fn surface_variant_duplicates_are_skipped() {
    let engine = ReconcileEngine::default();
    let stored = table(&[&[("ID SURVEY", "S003"), ("STATUS EKSEKUSI", "SLSAI")]]);
    let batch = table(&[&[("ID SURVEY", "S003"), ("STATUS EKSEKUSI", "SELESAI")]]);

    let (outcome, merged) = engine.reconcile(&batch, &stored);

    assert_eq!(outcome.skipped_duplicates, 1);
    assert_eq!(outcome.new_rows, 0);
    assert_eq!(outcome.updated_rows, 0);
    assert_eq!(merged.len(), 1);
    // The stored surface form is untouched.
    assert_eq!(merged.rows[0].value("STATUS EKSEKUSI"), "SLSAI");
}

#[test]
fn divergent_content_appends_and_keeps_the_original() {
    let engine = ReconcileEngine::default();
    let stored = table(&[&[("ID SURVEY", "S004"), ("EQUIPMENT", "TRAFO")]]);
    let batch = table(&[&[("ID SURVEY", "S004"), ("EQUIPMENT", "TIANG")]]);

    let (outcome, merged) = engine.reconcile(&batch, &stored);

    assert_eq!(outcome.new_rows, 1);
    assert_eq!(outcome.duplicate_ids_with_diff_content, 1);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged.rows[0].value("EQUIPMENT"), "TRAFO");
    assert_eq!(merged.rows[1].value("EQUIPMENT"), "TIANG");
}

#[test]
fn empty_identity_rows_are_dropped_defensively() {
    let engine = ReconcileEngine::default();
    let stored = table(&[]);
    let batch = table(&[
        &[("ID SURVEY", "   "), ("EQUIPMENT", "TRAFO")],
        &[("ID SURVEY", "S005"), ("EQUIPMENT", "TRAFO")],
    ]);

    let (outcome, merged) = engine.reconcile(&batch, &stored);

    assert_eq!(outcome.processed_rows, 2);
    assert_eq!(outcome.new_rows, 1);
    assert_eq!(merged.len(), 1);
}

#[test]
fn empty_batch_only_renumbers() {
    let engine = ReconcileEngine::default();
    let stored = table(&[
        &[("ID SURVEY", "S006"), ("EQUIPMENT", "TRAFO")],
        &[("ID SURVEY", "S007"), ("EQUIPMENT", "TIANG")],
    ]);
    let batch = table(&[]);

    let (outcome, merged) = engine.reconcile(&batch, &stored);

    assert_eq!(outcome, survey_model::MergeOutcome::default());
    assert_eq!(merged.len(), 2);
    assert_eq!(merged.rows[0].value("NO"), "1");
    assert_eq!(merged.rows[1].value("NO"), "2");
    assert_eq!(merged.rows[0].value("EQUIPMENT"), "TRAFO");
    assert_eq!(merged.rows[1].value("EQUIPMENT"), "TIANG");
}

#[test]
fn repeating_the_same_batch_is_idempotent() {
    let engine = ReconcileEngine::default();
    let stored = table(&[&[
        ("ID SURVEY", "S008"),
        ("EQUIPMENT", ""),
        ("STATUS EKSEKUSI", "SELESAI"),
    ]]);
    let batch = table(&[
        &[("ID SURVEY", "S009"), ("EQUIPMENT", "TRAFO")],
        &[
            ("ID SURVEY", "S008"),
            ("EQUIPMENT", "TIANG"),
            ("STATUS EKSEKUSI", "SELESAI"),
        ],
    ]);

    let (first, merged) = engine.reconcile(&batch, &stored);
    assert_eq!(first.new_rows, 1);
    assert_eq!(first.updated_rows, 1);

    let (second, remerged) = engine.reconcile(&batch, &merged);
    assert_eq!(second.new_rows, 0);
    assert_eq!(second.updated_rows, 0);
    assert_eq!(second.skipped_duplicates, 2);
    assert_eq!(remerged.len(), merged.len());
}

#[test]
fn row_count_never_decreases() {
    let engine = ReconcileEngine::default();
    let stored = table(&[
        &[("ID SURVEY", "S010"), ("EQUIPMENT", "TRAFO")],
        &[("ID SURVEY", "S011"), ("EQUIPMENT", "TIANG")],
    ]);
    let batch = table(&[
        &[("ID SURVEY", "S010"), ("EQUIPMENT", "TRAFO")],
        &[("ID SURVEY", "S010"), ("EQUIPMENT", "KABEL")],
        &[("ID SURVEY", ""), ("EQUIPMENT", "PANEL")],
        &[("ID SURVEY", "S012"), ("EQUIPMENT", "PANEL")],
    ]);

    let (_, merged) = engine.reconcile(&batch, &stored);
    assert!(merged.len() >= stored.len());
}

#[test]
fn a_stored_row_is_patched_at_most_once_per_pass() {
    let engine = ReconcileEngine::default();
    let stored = table(&[&[
        ("ID SURVEY", "S013"),
        ("EQUIPMENT", ""),
        ("TINDAKAN", ""),
    ]]);
    // Two incoming records that would each patch the same stored row with
    // conflicting intent.
    let batch = table(&[
        &[
            ("ID SURVEY", "S013"),
            ("EQUIPMENT", "TRAFO"),
            ("TINDAKAN", "PERBAIKAN"),
        ],
        &[
            ("ID SURVEY", "S013"),
            ("EQUIPMENT", "TIANG"),
            ("TINDAKAN", "PENGGANTIAN"),
        ],
    ]);

    let (outcome, merged) = engine.reconcile(&batch, &stored);

    assert_eq!(outcome.updated_rows, 1);
    assert_eq!(outcome.duplicate_ids_with_diff_content, 1);
    assert_eq!(merged.len(), 2);
    // The first patch sticks; the conflicting record became its own row.
    assert_eq!(merged.rows[0].value("EQUIPMENT"), "TRAFO");
    assert_eq!(merged.rows[1].value("EQUIPMENT"), "TIANG");
}

#[test]
fn later_candidates_are_scanned_until_a_decisive_outcome() {
    let engine = ReconcileEngine::default();
    // Two stored rows share the identifier; only the second is identical.
    let stored = table(&[
        &[("ID SURVEY", "S014"), ("EQUIPMENT", "TIANG")],
        &[("ID SURVEY", "S014"), ("EQUIPMENT", "TRAFO")],
    ]);
    let batch = table(&[&[("ID SURVEY", "S014"), ("EQUIPMENT", "TRAVO")]]);

    let (outcome, merged) = engine.reconcile(&batch, &stored);

    assert_eq!(outcome.skipped_duplicates, 1);
    assert_eq!(merged.len(), 2);
}

#[test]
fn renumbering_is_dense_after_every_pass() {
    let engine = ReconcileEngine::default();
    let mut stored = table(&[&[("ID SURVEY", "S015")]]);
    stored.ensure_column("NO");
    stored.rows[0].set("NO", "41");
    let batch = table(&[&[("ID SURVEY", "S016")]]);

    let (_, merged) = engine.reconcile(&batch, &stored);

    assert_eq!(merged.columns[0], "NO");
    let numbers: Vec<&str> = merged.rows.iter().map(|row| row.value("NO")).collect();
    assert_eq!(numbers, vec!["1", "2"]);
}
