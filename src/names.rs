// src/names.rs
//! Name normalizer: one raw spreadsheet row → one [`PersonQuery`].
//!
//! Pure and infallible. Anything that does not parse becomes an empty field.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::core::sanitize::{is_blank_cell, normalize_ws};

/// Generational suffixes recognised in source names.
pub const SUFFIXES: &[&str] = &["Jr.", "Sr.", "I", "II", "III"];

/// Output/portal format for dates of birth.
pub const DOB_FORMAT: &str = "%m/%d/%Y";

const DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%m/%d/%y",
    "%Y-%m-%d",
    "%m-%d-%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M %p",
];

/// One person to look up. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonQuery {
    /// Trimmed source name, as written in the spreadsheet.
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
}

impl PersonQuery {
    pub fn new(full_name: Option<&str>, date_of_birth: Option<NaiveDate>) -> Self {
        let full = full_name
            .filter(|s| !is_blank_cell(s))
            .map(normalize_ws)
            .unwrap_or_default();
        let (first_name, last_name) = split_full_name(&full);
        Self { full_name: full, first_name, last_name, date_of_birth }
    }

    /// MM/DD/YYYY, or empty when unknown.
    pub fn dob_text(&self) -> String {
        format_dob(self.date_of_birth)
    }

    /// "Last, First" for log lines.
    pub fn display_name(&self) -> String {
        match (self.last_name.is_empty(), self.first_name.is_empty()) {
            (true, true) => s!("<blank>"),
            (false, true) => self.last_name.clone(),
            (true, false) => self.first_name.clone(),
            (false, false) => format!("{}, {}", self.last_name, self.first_name),
        }
    }
}

fn is_suffix(tok: &str) -> bool {
    SUFFIXES.contains(&tok)
}

fn is_initial(tok: &str) -> bool {
    tok.trim_end_matches('.').chars().count() == 1
}

/// Split a full name into `(first, last)`.
///
/// - two tokens: the second is the last name
/// - three tokens with a one-letter middle: the third is the last name
/// - a suffix (last or second-to-last token) is dropped; the last name is then
///   up to two tokens right before it, never the first name
/// - otherwise: the last three tokens (compound surnames)
pub fn split_full_name(full: &str) -> (String, String) {
    let toks: Vec<&str> = full.split_whitespace().collect();
    let n = toks.len();
    if n == 0 {
        return (s!(), s!());
    }
    let first = s!(toks[0]);

    let last = if n == 2 {
        s!(toks[1])
    } else if n == 3 && is_initial(toks[1]) && !is_suffix(toks[2]) {
        s!(toks[2])
    } else if n > 3 && is_suffix(toks[n - 2]) {
        last_before_suffix(&toks[..n - 2])
    } else if n == 3 && is_suffix(toks[1]) {
        s!(toks[2])
    } else if n >= 3 && is_suffix(toks[n - 1]) {
        last_before_suffix(&toks[..n - 1])
    } else {
        toks[n.saturating_sub(3)..].join(" ")
    };

    (first, last)
}

fn last_before_suffix(rest: &[&str]) -> String {
    let n = rest.len();
    if n == 2 || (n == 3 && is_initial(rest[1])) {
        return s!(rest[n - 1]);
    }
    rest[n.saturating_sub(2).max(1)..].join(" ")
}

/// Parse a date-of-birth cell. Unparseable or blank input yields `None`.
pub fn parse_dob(raw: &str) -> Option<NaiveDate> {
    let t = normalize_ws(raw);
    if is_blank_cell(&t) {
        return None;
    }
    parse_date_text(&t)
}

/// Liberal calendar-date parse shared by DOB cells and court-date headers.
pub fn parse_date_text(t: &str) -> Option<NaiveDate> {
    let t = t.trim();
    // %Y happily reads "90" as year 90; four-digit years only, %y covers the rest.
    let plausible = |d: &NaiveDate| d.year() >= 1000;
    DATE_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(t, fmt).ok())
        .find(plausible)
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .filter_map(|fmt| NaiveDateTime::parse_from_str(t, fmt).ok())
                .map(|dt| dt.date())
                .find(plausible)
        })
}

pub fn format_dob(d: Option<NaiveDate>) -> String {
    d.map(|d| d.format(DOB_FORMAT).to_string()).unwrap_or_default()
}
