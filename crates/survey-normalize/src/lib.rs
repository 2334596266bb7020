//! Canonicalization layer for field-inspection records.
//!
//! Manual data entry produces typos, abbreviations, mixed date formats,
//! and free-form coordinates; this crate folds those surface variations
//! into canonical forms so duplicate detection can compare meaning instead
//! of spelling:
//!
//! - **dictionary**: ordered canonical-term dictionary, injected as
//!   configuration
//! - **text**: base normalizer plus status/equipment/location/inspector
//!   specializations
//! - **classifier**: column-name dispatch to the right normalizer
//! - **date**: heterogeneous date strings to `YYYY-MM-DD`
//! - **coordinate**: pass-through that only detects the empty case

pub mod classifier;
pub mod coordinate;
pub mod date;
pub mod dictionary;
pub mod text;

pub use classifier::{FieldKind, classify};
pub use coordinate::preserve_coordinate;
pub use date::canonicalize_date;
pub use dictionary::{DictionaryEntry, NormalizationDictionary};
pub use text::{COMPLETE_LABEL, INCOMPLETE_LABEL, TextNormalizer};
