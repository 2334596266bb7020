//! Dictionary-driven canonicalization of free-form inspection text.

use crate::dictionary::{LEADING_ABBREVIATIONS, LOCATION_CANONICALS, NormalizationDictionary};

/// Canonical label for work that is not finished.
pub const INCOMPLETE_LABEL: &str = "BELUM SELESAI";
/// Canonical label for finished work.
pub const COMPLETE_LABEL: &str = "SELESAI";

const INCOMPLETE_KEYWORDS: [&str; 7] = [
    "BELUM", "PENDING", "PROSES", "PROGRESS", "ONGOING", "BLM", "BLUM",
];
const COMPLETE_KEYWORDS: [&str; 6] = [
    "SELESAI", "DONE", "FINISH", "COMPLETE", "SUDAH", "FINISHED",
];

const POOR_KEYWORDS: [&str; 5] = ["BURUK", "RUSAK", "JELEK", "BAD", "POOR"];
const DEFICIENT_KEYWORDS: [&str; 1] = ["KURANG"];
// A bare OK or YA stays as-is; too ambiguous to call the asset good.
const GOOD_KEYWORDS: [&str; 4] = ["BAIK", "BAGUS", "AMAN", "NORMAL"];

/// Equipment synonym table applied on top of the base dictionary, as plain
/// substring replacements in order.
const EQUIPMENT_SYNONYMS: [(&str, &[&str]); 8] = [
    ("RECLOSER", &["RC", "RECLOSER OTOMATIS", "AUTO RECLOSER"]),
    ("SECTIONALIZER", &["SC", "SECTION SWITCH"]),
    ("LBS", &["LOAD BREAK SWITCH", "SWITCH PEMISAH"]),
    ("ARRESTER", &["ARESTER", "PENANGKAL PETIR"]),
    ("KAPASITOR", &["CAPASITOR", "CAPACITOR", "CAP BANK"]),
    ("ISOLATOR", &["SWITCH ISOLASI", "PEMISAH"]),
    ("BUSHING", &["BUSHING TRAFO", "ISOLATOR BUSHING"]),
    ("GROUNDING", &["PEMBUMIAN", "EARTHING", "TANAH"]),
];

/// Region and city abbreviations expanded before street prefixes.
const REGIONAL_SYNONYMS: [(&str, &[&str]); 9] = [
    ("BANDAR LAMPUNG", &["BDL", "BANDAR LAMPUNG", "B.LAMPUNG"]),
    ("LAMPUNG TENGAH", &["LAMTENG"]),
    ("LAMPUNG SELATAN", &["LAMSEL"]),
    ("LAMPUNG UTARA", &["LAMUT"]),
    ("LAMPUNG TIMUR", &["LAMTIM", "LTIM"]),
    ("LAMPUNG BARAT", &["LAMBAR"]),
    ("PESAWARAN", &["PSW", "PESAWRAN"]),
    ("TULANG BAWANG", &["TUBABA"]),
    ("TANGGAMUS", &["TGS", "TANGGAMS"]),
];

/// Street/village prefixes expanded at the start of a location value.
/// Dotted forms come before bare ones so the longest prefix wins.
const LOCATION_PREFIXES: [(&str, &str); 21] = [
    ("JL. ", "JALAN "),
    ("JL.", "JALAN"),
    ("JL ", "JALAN "),
    ("KP. ", "KAMPUNG "),
    ("KP.", "KAMPUNG"),
    ("KP ", "KAMPUNG "),
    ("DS. ", "DESA "),
    ("DS.", "DESA"),
    ("DS ", "DESA "),
    ("KEL. ", "KELURAHAN "),
    ("KEL.", "KELURAHAN"),
    ("KEL ", "KELURAHAN "),
    ("KEC. ", "KECAMATAN "),
    ("KEC.", "KECAMATAN"),
    ("KEC ", "KECAMATAN "),
    ("DSN. ", "DUSUN "),
    ("DSN.", "DUSUN"),
    ("DSN ", "DUSUN "),
    ("GG. ", "GANG "),
    ("GG.", "GANG"),
    ("GG ", "GANG "),
];

/// Honorific prefixes on inspector names, standardized to the long form.
const HONORIFICS: [(&str, &[&str]); 4] = [
    ("BAPAK", &["BAPAK", "PAK", "BP", "BP.", "MR", "MR."]),
    ("IBU", &["IBU", "BU", "MRS", "MRS.", "MS", "MS."]),
    ("SAUDARA", &["SAUDARA", "SDR", "SDR.", "BROTHER"]),
    ("SAUDARI", &["SAUDARI", "SDRI", "SDRI.", "SISTER"]),
];

/// Academic and professional suffix tokens removed from inspector names.
const ACADEMIC_SUFFIXES: [&str; 12] = [
    "IR.", "IR", "S.T.", "ST.", "ST", "S.KOM.", "S.KOM", ",S.T", ",ST", ",S.KOM", "MT", "M.T.",
];

/// Rule-based canonicalizer over an injected [`NormalizationDictionary`].
///
/// All methods are pure; equality of two raw values is decided by comparing
/// their canonicalized forms.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    dictionary: NormalizationDictionary,
}

impl TextNormalizer {
    pub fn new(dictionary: NormalizationDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &NormalizationDictionary {
        &self.dictionary
    }

    /// Base canonicalization: clean, expand a leading location abbreviation,
    /// then an exact dictionary pass followed by a single left-to-right
    /// partial pass.
    ///
    /// The partial pass walks entries in dictionary order; per entry, the
    /// first variant found as a substring ends that entry's scan, and the
    /// replacement happens only for whole-word occurrences. One sweep, no
    /// fixed-point iteration: rewriting a later entry's variant into an
    /// earlier entry's territory must not re-trigger matching.
    pub fn normalize(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return String::new();
        }
        let mut text = clean(raw);
        text = expand_leading(&text, &LEADING_ABBREVIATIONS);

        for entry in self.dictionary.entries() {
            if text == entry.canonical || entry.variants.iter().any(|variant| *variant == text) {
                return entry.canonical.clone();
            }
        }

        for entry in self.dictionary.entries() {
            if LOCATION_CANONICALS.contains(&entry.canonical.as_str()) {
                continue;
            }
            for variant in &entry.variants {
                if text.contains(variant.as_str()) {
                    if let Some(replaced) = replace_whole_word(&text, variant, &entry.canonical) {
                        text = replaced;
                    }
                    break;
                }
            }
        }
        text
    }

    /// Execution-status canonicalization biased toward "not finished":
    /// ambiguous text that mentions both states flags the work as pending
    /// rather than silently marking it done.
    pub fn status_execution(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return String::new();
        }
        let normalized = self.normalize(raw);
        for keyword in INCOMPLETE_KEYWORDS {
            if normalized.contains(keyword) {
                return INCOMPLETE_LABEL.to_string();
            }
        }
        for keyword in COMPLETE_KEYWORDS {
            if normalized.contains(keyword) {
                return COMPLETE_LABEL.to_string();
            }
        }
        normalized
    }

    /// Asset-condition canonicalization: poor beats deficient beats good.
    pub fn asset_status(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return String::new();
        }
        let normalized = self.normalize(raw);
        if POOR_KEYWORDS.iter().any(|word| normalized.contains(word)) {
            return "BURUK".to_string();
        }
        if DEFICIENT_KEYWORDS
            .iter()
            .any(|word| normalized.contains(word))
        {
            return "KURANG".to_string();
        }
        if GOOD_KEYWORDS.iter().any(|word| normalized.contains(word)) {
            return "BAIK".to_string();
        }
        normalized
    }

    /// Equipment-name canonicalization with a second, equipment-specific
    /// synonym table.
    pub fn equipment(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return String::new();
        }
        let mut normalized = self.normalize(raw);
        for (canonical, variants) in EQUIPMENT_SYNONYMS {
            for variant in variants {
                if normalized.contains(variant) {
                    normalized = normalized.replace(variant, canonical);
                }
            }
        }
        normalized
    }

    /// Location-name canonicalization: regional synonyms first, then one
    /// leading street/village prefix expansion.
    pub fn location(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return String::new();
        }
        let mut normalized = self.normalize(raw);
        for (canonical, variants) in REGIONAL_SYNONYMS {
            for variant in variants {
                if normalized.contains(variant) {
                    normalized = normalized.replace(variant, canonical);
                }
            }
        }
        for (prefix, expansion) in LOCATION_PREFIXES {
            if let Some(rest) = normalized.strip_prefix(prefix) {
                normalized = format!("{expansion}{rest}");
                break;
            }
        }
        normalized
    }

    /// Inspector-name canonicalization: one leading honorific expanded,
    /// academic suffix tokens stripped, whitespace collapsed.
    pub fn inspector(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return String::new();
        }
        let mut normalized = self.normalize(raw);
        'honorific: for (canonical, variants) in HONORIFICS {
            for variant in variants {
                let prefixed = format!("{variant} ");
                if let Some(rest) = normalized.strip_prefix(&prefixed) {
                    normalized = format!("{canonical} {rest}");
                    break 'honorific;
                }
            }
        }
        for suffix in ACADEMIC_SUFFIXES {
            if let Some(stripped) = replace_whole_word(&normalized, suffix, "") {
                normalized = stripped;
            }
        }
        collapse_whitespace(&normalized)
    }
}

/// Upper-case, replace characters outside alphanumerics, underscore,
/// whitespace, period, and hyphen with a space, collapse whitespace runs.
fn clean(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    let mut cleaned = String::with_capacity(upper.len());
    for ch in upper.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == '.' || ch == '-' || ch.is_whitespace() {
            cleaned.push(ch);
        } else {
            cleaned.push(' ');
        }
    }
    collapse_whitespace(&cleaned)
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for part in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// Expand the first matching abbreviation at the start of the string, once.
fn expand_leading(text: &str, pairs: &[(&str, &str)]) -> String {
    for (abbrev, full) in pairs {
        if let Some(rest) = text.strip_prefix(abbrev) {
            return format!("{full}{rest}");
        }
    }
    text.to_string()
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Replace every whole-word occurrence of `needle`, where a word boundary
/// means the adjacent character (if any) is not alphanumeric or underscore.
/// Returns `None` when nothing was replaced.
fn replace_whole_word(text: &str, needle: &str, replacement: &str) -> Option<String> {
    if needle.is_empty() {
        return None;
    }
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;
    let mut replaced = false;
    while let Some(offset) = text[cursor..].find(needle) {
        let start = cursor + offset;
        let end = start + needle.len();
        let bounded_before = text[..start].chars().next_back().is_none_or(|ch| !is_word_char(ch));
        let bounded_after = text[end..].chars().next().is_none_or(|ch| !is_word_char(ch));
        if bounded_before && bounded_after {
            out.push_str(&text[cursor..start]);
            out.push_str(replacement);
            replaced = true;
            cursor = end;
        } else {
            let step = text[start..].chars().next().map_or(1, char::len_utf8);
            out.push_str(&text[cursor..start + step]);
            cursor = start + step;
        }
    }
    if replaced {
        out.push_str(&text[cursor..]);
        Some(out)
    } else {
        None
    }
}
