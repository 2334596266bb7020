//! Heterogeneous date parsing to a single `YYYY-MM-DD` form.
//!
//! Survey exports mix day-first, month-first, and year-first writing,
//! two-digit years, ISO timestamps, and raw spreadsheet serial numbers.
//! Everything funnels into one calendar-date string; anything unparseable
//! becomes the empty string, never an error.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

const OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Tokens that mean "no date" in manually entered cells.
const PLACEHOLDERS: [&str; 5] = ["nan", "none", "null", "-", "n/a"];

/// Timestamp formats tried for values that look like ISO with a time part.
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Plain date formats, tried in order: day-first, month-first, year-first,
/// two-digit years, space-separated day-month-year, compact digits.
const DATE_FORMATS: [&str; 19] = [
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%m.%d.%Y",
    "%Y/%m/%d",
    "%Y-%m-%d",
    "%Y.%m.%d",
    "%d/%m/%y",
    "%d-%m-%y",
    "%d.%m.%y",
    "%m/%d/%y",
    "%m-%d-%y",
    "%m.%d.%y",
    "%d %m %Y",
    "%d %m %y",
    "%Y%m%d",
    "%d%m%Y",
];

/// Canonicalize a raw date string to `YYYY-MM-DD`, or the empty string when
/// no interpretation fits. Logs a warning on unparseable non-empty input so
/// operators can spot bad columns.
pub fn canonicalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_lowercase();
    if PLACEHOLDERS.contains(&lower.as_str()) {
        return String::new();
    }

    // Already in the standard shape: validate and keep unchanged. An
    // invalid calendar date in standard shape is dropped, not reparsed.
    if has_standard_shape(trimmed) {
        if NaiveDate::parse_from_str(trimmed, OUTPUT_FORMAT).is_ok() {
            return trimmed.to_string();
        }
        tracing::warn!(value = trimmed, "invalid calendar date, leaving empty");
        return String::new();
    }

    // Spreadsheet serial day count. Epoch 1899-12-30 reproduces the
    // historical leap-year convention the existing data was entered under.
    if let Some(date) = parse_serial(trimmed) {
        return date.format(OUTPUT_FORMAT).to_string();
    }

    if trimmed.contains('T') || trimmed.len() > 10 {
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
                return datetime.date().format(OUTPUT_FORMAT).to_string();
            }
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return adjust_century(date).format(OUTPUT_FORMAT).to_string();
        }
    }

    if let Some(date) = parse_day_first_loose(trimmed) {
        return date.format(OUTPUT_FORMAT).to_string();
    }

    tracing::warn!(value = trimmed, "could not parse date, leaving empty");
    String::new()
}

/// `\d{4}-\d{2}-\d{2}` without pulling in a regex engine.
fn has_standard_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[7] == b'-'
        && bytes[8..10].iter().all(u8::is_ascii_digit)
}

/// Serial day counts: digits once separators are removed, numeric value in
/// [1, 100000], offset from the 1899-12-30 epoch. Fractional days truncate.
fn parse_serial(value: &str) -> Option<NaiveDate> {
    let digits_only = value
        .chars()
        .filter(|ch| *ch != '.' && *ch != '-')
        .collect::<String>();
    if digits_only.is_empty() || !digits_only.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let serial: f64 = value.parse().ok()?;
    if !(1.0..=100_000.0).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_days(Days::new(serial as u64))
}

/// Two-digit-year windowing: years below 50 belong to the 2000s, 50-99 to
/// the 1900s. Years that already parsed as four digits are left alone.
fn adjust_century(date: NaiveDate) -> NaiveDate {
    let year = date.year();
    let adjusted = if year < 50 {
        year + 2000
    } else if year < 100 {
        year + 1900
    } else {
        return date;
    };
    date.with_year(adjusted).unwrap_or(date)
}

/// Last-resort permissive parse: three numeric fields split on common
/// separators, read day-first (year-first when the first field has four
/// digits), falling back to month-first when day-first is impossible.
fn parse_day_first_loose(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value
        .split(|ch: char| ch == '/' || ch == '-' || ch == '.' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 3 {
        return None;
    }
    let numbers: Vec<u32> = parts
        .iter()
        .map(|part| part.parse::<u32>().ok())
        .collect::<Option<Vec<u32>>>()?;

    let (year, first, second) = if parts[0].len() == 4 {
        (numbers[0] as i32, numbers[1], numbers[2])
    } else {
        (window_year(numbers[2]), numbers[0], numbers[1])
    };
    NaiveDate::from_ymd_opt(year, second, first)
        .or_else(|| NaiveDate::from_ymd_opt(year, first, second))
}

fn window_year(value: u32) -> i32 {
    let value = value as i32;
    if value < 50 {
        value + 2000
    } else if value < 100 {
        value + 1900
    } else {
        value
    }
}
