//! Reconciliation of incoming inspection batches against the stored table.
//!
//! - **equality**: record identity under normalization, restricted to the
//!   validation column set
//! - **fill_forward**: blank-field completion on raw trimmed values
//! - **prepare**: pre-merge cell cleanup shared by both inputs
//! - **engine**: the four-case merge and its per-pass statistics

pub mod engine;
pub mod equality;
pub mod fill_forward;
pub mod prepare;

pub use engine::ReconcileEngine;
pub use equality::rows_equal;
pub use fill_forward::{compute_patch, has_fillable};
pub use prepare::prepare_table;
