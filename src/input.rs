// src/input.rs
//! Spreadsheet ingestion: xlsx/xls/ods via `calamine`, csv/tsv via `crate::csv`.
//!
//! Column names vary by source export; the first header matching any known
//! alias wins. Rows identical across every column are dropped (first kept).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use calamine::{open_workbook_auto, Data, DataType, Reader};
use chrono::NaiveDate;

use crate::csv::{parse_rows, sep_for_extension};
use crate::error::{Result, ScrapeError};
use crate::file::extension_of;
use crate::names::{parse_dob, PersonQuery};

pub const NAME_COLUMNS: &[&str] = &["Name", "People::Name Full", "Full Name"];
pub const DOB_COLUMNS: &[&str] = &["D.O.B", "D.O.B.", "People::D.O.B.", "DOB", "Date of Birth"];

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Date(NaiveDate),
}

impl Cell {
    /// Stable text form, used as the duplicate-row key.
    pub fn key(&self) -> String {
        match self {
            Cell::Empty => s!(),
            Cell::Text(t) => t.trim().to_string(),
            Cell::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    fn as_dob(&self) -> Option<NaiveDate> {
        match self {
            Cell::Empty => None,
            Cell::Text(t) => parse_dob(t),
            Cell::Date(d) => Some(*d),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn from_text_rows(mut rows: Vec<Vec<String>>) -> Self {
        if rows.is_empty() {
            return Sheet::default();
        }
        let headers = rows.remove(0).into_iter().map(|h| h.trim().to_string()).collect();
        let rows = rows
            .into_iter()
            .map(|r| {
                r.into_iter()
                    .map(|c| if c.trim().is_empty() { Cell::Empty } else { Cell::Text(c) })
                    .collect()
            })
            .collect();
        Sheet { headers, rows }
    }

    pub fn column(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|alias| {
            self.headers.iter().position(|h| h.eq_ignore_ascii_case(alias))
        })
    }

    /// Drop rows identical across all columns, keeping the first occurrence.
    pub fn dedup(&mut self) -> usize {
        let before = self.rows.len();
        let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(before);
        self.rows.retain(|r| seen.insert(r.iter().map(Cell::key).collect()));
        before - self.rows.len()
    }
}

/// Read the first worksheet (or the delimited file) at `path`.
pub fn read_sheet(path: &Path) -> Result<Sheet> {
    let ext = extension_of(path);

    match ext.as_str() {
        "csv" | "tsv" | "tab" | "txt" => {
            let text = fs::read_to_string(path)
                .map_err(|e| ScrapeError::Input(format!("{}: {e}", path.display())))?;
            Ok(Sheet::from_text_rows(parse_rows(&text, sep_for_extension(&ext))))
        }
        _ => read_workbook(path),
    }
}

fn read_workbook(path: &Path) -> Result<Sheet> {
    let mut wb = open_workbook_auto(path)
        .map_err(|e| ScrapeError::Input(format!("{}: {e}", path.display())))?;
    let range = wb
        .worksheet_range_at(0)
        .ok_or_else(|| ScrapeError::Input(format!("{}: workbook has no sheets", path.display())))?
        .map_err(|e| ScrapeError::Input(format!("{}: {e}", path.display())))?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(h) => h.iter().map(|c| c.to_string().trim().to_string()).collect(),
        None => return Ok(Sheet::default()),
    };
    let rows = rows.map(|r| r.iter().map(cell_from).collect()).collect();
    Ok(Sheet { headers, rows })
}

fn cell_from(d: &Data) -> Cell {
    match d {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) | Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DateTime(_) => d.as_date().map(Cell::Date).unwrap_or(Cell::Empty),
        other => Cell::Text(other.to_string()),
    }
}

/// Sheet → normalized queries, in sheet order, duplicates removed.
pub fn people_from_sheet(mut sheet: Sheet) -> Result<Vec<PersonQuery>> {
    let name_ix = sheet.column(NAME_COLUMNS).ok_or_else(|| {
        ScrapeError::Input(format!(
            "no name column (expected one of {:?}, found {:?})",
            NAME_COLUMNS, sheet.headers
        ))
    })?;
    let dob_ix = sheet.column(DOB_COLUMNS);
    if dob_ix.is_none() {
        logf!("Input: no date-of-birth column; searching by name only");
    }

    let dropped = sheet.dedup();
    if dropped > 0 {
        logf!("Input: dropped {dropped} duplicate row(s)");
    }

    let people = sheet
        .rows
        .iter()
        .map(|row| {
            let name = row.get(name_ix).and_then(Cell::as_text);
            let dob = dob_ix.and_then(|i| row.get(i)).and_then(Cell::as_dob);
            PersonQuery::new(name, dob)
        })
        .collect();
    Ok(people)
}

pub fn load_people(path: &Path) -> Result<Vec<PersonQuery>> {
    let sheet = read_sheet(path)?;
    logd!("Input: {} header(s), {} row(s) from {}", sheet.headers.len(), sheet.rows.len(), path.display());
    people_from_sheet(sheet)
}
