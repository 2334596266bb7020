//! Fixed column vocabulary for field-inspection records.
//!
//! All column names are upper-case and come from the master spreadsheet
//! template. The vocabulary is closed: ingestion drops unknown columns and
//! fills missing ones with the empty string.

/// Cosmetic row-number column, regenerated as a dense 1..N sequence after
/// every reconciliation pass. Carries no identity meaning.
pub const ROW_NUMBER_COLUMN: &str = "NO";

/// Survey identifier column. Scopes reconciliation; values are not unique.
pub const IDENTITY_COLUMN: &str = "ID SURVEY";

/// Complete column vocabulary in template order.
pub const VALID_COLUMNS: [&str; 37] = [
    "NO",
    "ID SURVEY",
    "ROLE",
    "NAMA INSPEKTOR",
    "UP3",
    "ID ULP",
    "ULP",
    "NAMA PENYULANG",
    "ID JTM",
    "ID ASET",
    "NAMA ASET",
    "JENIS INSPEKSI",
    "FASILITAS",
    "EQUIPMENT",
    "JENIS TEMUAN",
    "KONDISI",
    "KETERANGAN",
    "JENIS ASET",
    "PENUNJUK LOC",
    "STATUS ASET",
    "TANGGAL SURVEY",
    "TANGGAL WO",
    "KOORDINAT X",
    "KOORDINAT Y",
    "TANGGAL HAR",
    "NAMA_INSPEKTOR HAR",
    "TINDAKAN",
    "DETIL KETERANGAN TEMUAN HAR",
    "STATUS HAR",
    "KETERANGAN HAR",
    "KODE TO",
    "KODE TO HAR",
    "PROGRAM HAR",
    "FOTO SURVEY",
    "FOTO HAR",
    "STATUS EKSEKUSI",
    "KOORDINAT TEMUAN",
];

/// Columns used for duplicate detection and fill-forward decisions.
///
/// Excludes the row number, the two photo columns, and the coordinate
/// columns; those are carried in row content but never compared.
pub const VALIDATION_COLUMNS: [&str; 31] = [
    "ID SURVEY",
    "ROLE",
    "NAMA INSPEKTOR",
    "UP3",
    "ID ULP",
    "ULP",
    "NAMA PENYULANG",
    "ID JTM",
    "ID ASET",
    "NAMA ASET",
    "JENIS INSPEKSI",
    "FASILITAS",
    "EQUIPMENT",
    "JENIS TEMUAN",
    "KONDISI",
    "KETERANGAN",
    "JENIS ASET",
    "PENUNJUK LOC",
    "STATUS ASET",
    "TANGGAL SURVEY",
    "TANGGAL WO",
    "TANGGAL HAR",
    "NAMA_INSPEKTOR HAR",
    "TINDAKAN",
    "DETIL KETERANGAN TEMUAN HAR",
    "STATUS HAR",
    "KETERANGAN HAR",
    "KODE TO",
    "KODE TO HAR",
    "PROGRAM HAR",
    "STATUS EKSEKUSI",
];

/// Date columns standardized to `YYYY-MM-DD` on ingestion.
pub const DATE_COLUMNS: [&str; 3] = ["TANGGAL SURVEY", "TANGGAL WO", "TANGGAL HAR"];

/// Coordinate columns. Values pass through byte-for-byte; surveyors use
/// mixed geographic/UTM/local conventions whose separators must survive.
pub const COORDINATE_COLUMNS: [&str; 3] = ["KOORDINAT X", "KOORDINAT Y", "KOORDINAT TEMUAN"];

/// Returns true when `name` is one of the coordinate columns.
pub fn is_coordinate_column(name: &str) -> bool {
    COORDINATE_COLUMNS.contains(&name)
}

/// Returns true when `name` participates in equality and fill-forward.
pub fn is_validation_column(name: &str) -> bool {
    VALIDATION_COLUMNS.contains(&name)
}

/// Returns true when `name` is a date column.
pub fn is_date_column(name: &str) -> bool {
    DATE_COLUMNS.contains(&name)
}
