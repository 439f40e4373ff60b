// src/report.rs
//! Report Writer: the two run partitions as delimited files.
//!
//! Column order is fixed; downstream consumers read these files positionally.

use std::path::PathBuf;

use crate::config::consts::CASE_JOIN;
use crate::config::options::ExportOptions;
use crate::error::Result;
use crate::extract::CaseRecord;
use crate::file::write_table;
use crate::names::{format_dob, PersonQuery};

pub const FILED_HEADERS: [&str; 4] = ["Name", "D.O.B", "Case Number", "Court Dates"];
pub const UNFILED_HEADERS: [&str; 2] = ["Name", "D.O.B"];

/// A person with at least one resolvable court date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiledEntry {
    pub person: PersonQuery,
    pub cases: Vec<CaseRecord>,
}

/// Output of one run, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partitions {
    pub filed: Vec<FiledEntry>,
    pub unfiled: Vec<PersonQuery>,
}

impl Partitions {
    pub fn len(&self) -> usize {
        self.filed.len() + self.unfiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn filed_rows(&self) -> Vec<Vec<String>> {
        self.filed.iter().map(filed_row).collect()
    }

    pub fn unfiled_rows(&self) -> Vec<Vec<String>> {
        self.unfiled.iter().map(|p| vec![p.full_name.clone(), p.dob_text()]).collect()
    }
}

/// Name, D.O.B, case numbers, court dates. Multiple cases share one row;
/// the n-th date slot belongs to the n-th case and is empty when undated.
fn filed_row(e: &FiledEntry) -> Vec<String> {
    let numbers = e
        .cases
        .iter()
        .map(|c| c.case_number.as_str())
        .collect::<Vec<_>>()
        .join(CASE_JOIN);
    let dates = e
        .cases
        .iter()
        .map(|c| format_dob(c.latest_court_date))
        .collect::<Vec<_>>()
        .join(CASE_JOIN);
    vec![e.person.full_name.clone(), e.person.dob_text(), numbers, dates]
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|h| s!(*h)).collect()
}

/// Write both partition files; returns `[filed, unfiled]` paths.
pub fn write_reports(parts: &Partitions, export: &ExportOptions) -> Result<Vec<PathBuf>> {
    let sep = export.format.delim();
    let (fh, uh) = (headers(&FILED_HEADERS), headers(&UNFILED_HEADERS));

    let filed = write_table(
        &export.filed_path(),
        export.include_headers.then_some(fh.as_slice()),
        &parts.filed_rows(),
        sep,
    )?;
    let unfiled = write_table(
        &export.unfiled_path(),
        export.include_headers.then_some(uh.as_slice()),
        &parts.unfiled_rows(),
        sep,
    )?;

    logf!(
        "Report: {} filed -> {}, {} unfiled -> {}",
        parts.filed.len(),
        filed.display(),
        parts.unfiled.len(),
        unfiled.display()
    );
    Ok(vec![filed, unfiled])
}
