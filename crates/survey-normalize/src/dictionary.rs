//! Term dictionary for canonicalizing free-form inspection text.
//!
//! Entries are an ordered list, not a map: partial matching walks them in
//! order and the first entry whose variant appears in the text wins that
//! entry's replacement. Reordering entries changes duplicate-detection
//! outcomes for existing data, so the default order is pinned by tests.

/// One canonical term and the surface variants that collapse into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub canonical: String,
    pub variants: Vec<String>,
}

impl DictionaryEntry {
    pub fn new(canonical: &str, variants: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            variants: variants.iter().map(|v| (*v).to_string()).collect(),
        }
    }
}

/// Immutable, ordered normalization dictionary.
///
/// Injected into [`crate::TextNormalizer`] at construction so tests can run
/// against reduced dictionaries.
#[derive(Debug, Clone)]
pub struct NormalizationDictionary {
    entries: Vec<DictionaryEntry>,
}

impl NormalizationDictionary {
    pub fn new(entries: Vec<DictionaryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }
}

impl Default for NormalizationDictionary {
    fn default() -> Self {
        let entries = DEFAULT_ENTRIES
            .iter()
            .map(|(canonical, variants)| DictionaryEntry::new(canonical, variants))
            .collect();
        Self::new(entries)
    }
}

/// Canonical terms whose variants are leading-prefix abbreviations already
/// expanded before dictionary lookup; the partial pass skips them so `JL`
/// inside a street name is not rewritten twice.
pub const LOCATION_CANONICALS: [&str; 6] = [
    "JALAN",
    "KAMPUNG",
    "DESA",
    "KELURAHAN",
    "KECAMATAN",
    "DUSUN",
];

/// Leading location abbreviations expanded once, only at the start of the
/// string, before any dictionary pass. Dotted-with-space forms come first so
/// the longest prefix wins.
pub const LEADING_ABBREVIATIONS: [(&str, &str); 12] = [
    ("JL. ", "JALAN "),
    ("JL.", "JALAN"),
    ("KP. ", "KAMPUNG "),
    ("KP.", "KAMPUNG"),
    ("DS. ", "DESA "),
    ("DS.", "DESA"),
    ("KEL. ", "KELURAHAN "),
    ("KEL.", "KELURAHAN"),
    ("KEC. ", "KECAMATAN "),
    ("KEC.", "KECAMATAN"),
    ("DSN. ", "DUSUN "),
    ("DSN.", "DUSUN"),
];

const DEFAULT_ENTRIES: [(&str, &[&str]); 41] = [
    // Negation and affirmation
    (
        "TIDAK",
        &[
            "TDK", "TIAK", "TIDKA", "TIDAK", "TDK.", "TIDK", "TDAK", "ENGGAK", "ENGGA", "GA",
            "NGGAK", "NDAK",
        ],
    ),
    (
        "YA",
        &["YES", "IYA", "IYAH", "Y", "OK", "OKE", "BETUL", "BENAR"],
    ),
    // Condition status
    ("BAIK", &["BAEK", "BAK", "BAGUS", "OK", "AMAN"]),
    (
        "BURUK",
        &["BRUK", "BURU", "JELEK", "RUSAK", "RUSAKK", "RUSK", "BAD", "POOR"],
    ),
    (
        "KURANG",
        &["KRNG", "KURNG", "KRG", "KURANG BAIK", "KURANG BAGUS", "MINUS"],
    ),
    // Execution status
    (
        "SELESAI",
        &[
            "SLSAI",
            "SELESAI",
            "SELESAAI",
            "SLSE",
            "DONE",
            "FINISH",
            "SUDAH",
            "SUDAH SELESAI",
            "COMPLETE",
            "OK",
            "FINISHED",
        ],
    ),
    (
        "BELUM SELESAI",
        &[
            "BLM SELESAI",
            "BELUM",
            "BLM",
            "BLUM",
            "PENDING",
            "PROSES",
            "ON PROGRESS",
            "PROGRESS",
            "ONGOING",
            "TIDAK SELESAI",
            "TDK SELESAI",
        ],
    ),
    // Asset status
    ("NORMAL", &["NORML", "BIASA", "STANDAR", "REGULAR"]),
    ("RUSAK", &["RUSK", "RUSAKK", "BRUK", "DAMAGE", "BROKEN"]),
    // Equipment
    (
        "TRAFO",
        &[
            "TRAVO",
            "TRANSFORMATOR",
            "TRANSFORMER",
            "TRAFO DISTRIBUSI",
            "TRFO",
        ],
    ),
    ("TIANG", &["TNG", "TIANG LISTRIK", "POLE", "TG"]),
    ("KABEL", &["KBL", "CABLE", "KBEL"]),
    (
        "KWH METER",
        &["KWH", "KWHMETER", "KWHM", "METER LISTRIK", "METERAN"],
    ),
    ("PANEL", &["PNL", "PANELL"]),
    ("SWITCH", &["SAKLAR", "SAKELAR", "SW"]),
    // Common finding kinds
    ("POHON", &["PHN", "TREES", "KAYU"]),
    ("PAGAR", &["PGR", "FENCE"]),
    ("BANGUNAN", &["BGNN", "GEDUNG", "RUMAH", "BUILDING"]),
    ("JALAN", &["JL", "JL.", "JALAN RAYA", "ROAD"]),
    // Location words
    ("KAMPUNG", &["KP", "KP.", "KAMPONG"]),
    ("DESA", &["DS", "DS.", "VILLAGE"]),
    ("KELURAHAN", &["KEL", "KEL."]),
    ("KECAMATAN", &["KEC", "KEC."]),
    ("DUSUN", &["DSN", "DSN."]),
    // Grid abbreviations
    ("JARINGAN TEGANGAN MENENGAH", &["JTM", "JTM 20KV", "20KV"]),
    ("JARINGAN TEGANGAN RENDAH", &["JTR", "JTR 380V", "380V"]),
    ("SALURAN UDARA TEGANGAN MENENGAH", &["SUTM"]),
    ("SALURAN UDARA TEGANGAN RENDAH", &["SUTR"]),
    ("GARDU DISTRIBUSI", &["GD", "GARDU"]),
    ("RECLOSER", &["RC", "RECLOSER OTOMATIS"]),
    ("SECTIONALIZER", &["SC", "SECTION"]),
    // Service-area variants
    (
        "TANJUNG KARANG",
        &["TANJUNGKARANG", "TJG KARANG", "TJK", "TANKAR"],
    ),
    ("KOTABUMI", &["KOTA BUMI", "KTB", "KOTABUMI"]),
    ("PRINGSEWU", &["PRINGSEU", "PSW", "PRINGS"]),
    ("METRO", &["MTR", "METRO CITY"]),
    // Availability
    ("ADA", &["ADA", "TERSEDIA", "AVAILABLE", "EXIST", "DITEMUKAN"]),
    (
        "TIDAK ADA",
        &[
            "TDK ADA",
            "TIDAK ADA",
            "KOSONG",
            "EMPTY",
            "NULL",
            "NONE",
            "TIDAK DITEMUKAN",
        ],
    ),
    // Maintenance programs
    (
        "PEMELIHARAAN",
        &["PEMELIHRAAN", "MAINTENANCE", "MAINT", "PERAWATAN"],
    ),
    ("PERBAIKAN", &["REPAIR", "FIXING", "PERBAIKN"]),
    ("PENGGANTIAN", &["REPLACEMENT", "GANTI", "TUKAR"]),
    // Unknown-coordinate placeholders
    (
        "TIDAK DIKETAHUI",
        &["TDK DIKETAHUI", "UNKNOWN", "NOT FOUND", "NULL", "KOSONG"],
    ),
];
