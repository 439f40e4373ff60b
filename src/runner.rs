// src/runner.rs
//! Batch Orchestrator and the top-level `run`.

use std::path::PathBuf;

use crate::browser::{ChromeDriver, PageDriver};
use crate::config::options::RunOptions;
use crate::error::{Result, ScrapeError};
use crate::extract::{self, CaseRecord};
use crate::input::load_people;
use crate::names::PersonQuery;
use crate::portal::{open_search_form, CountyConfig};
use crate::progress::Progress;
use crate::report::{write_reports, FiledEntry, Partitions};
use crate::retry::{retry, RetryPolicy};
use crate::session::{Resolution, SearchSession, SearchState};

/// What one query produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    NoMatch,
    /// Neither terminal marker appeared in time. Partitioned like `NoMatch`.
    TimedOut,
    Filed(Vec<CaseRecord>),
    Error(String),
}

impl SearchOutcome {
    /// Cases to record, or `None` when the person belongs in "no case filed".
    /// A filed outcome without a single resolvable court date counts as unfiled.
    pub fn into_filed(self) -> Option<Vec<CaseRecord>> {
        match self {
            SearchOutcome::Filed(cases) if cases.iter().any(|c| c.latest_court_date.is_some()) => {
                Some(cases)
            }
            _ => None,
        }
    }
}

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub partitions: Partitions,
    pub files_written: Vec<PathBuf>,
}

/// One full attempt: open the form, submit, classify, drill down.
fn search_once(
    driver: &mut dyn PageDriver,
    cfg: &CountyConfig,
    query: &PersonQuery,
    opts: &RunOptions,
) -> Result<SearchOutcome> {
    open_search_form(driver, cfg, &opts.timeouts, &opts.retries)?;

    let state = SearchSession::new(driver, opts.timeouts).run(query)?;
    let resolution = match state {
        SearchState::Resolved(r) => r,
        _ => return Ok(SearchOutcome::TimedOut),
    };

    // Markup decides; the race only says which marker showed up first.
    let html = driver.page_source()?;
    match extract::classify(&html).unwrap_or(resolution) {
        Resolution::NoMatch => Ok(SearchOutcome::NoMatch),
        Resolution::Filed => Ok(SearchOutcome::Filed(extract::collect_cases(driver, &opts.timeouts)?)),
    }
}

/// Search one person. A stale reference restarts the whole query (bounded by
/// `retries.search_attempts`); any other fault becomes [`SearchOutcome::Error`].
pub fn search_person(
    driver: &mut dyn PageDriver,
    cfg: &CountyConfig,
    query: &PersonQuery,
    opts: &RunOptions,
) -> Result<SearchOutcome> {
    let policy = RetryPolicy::new(opts.retries.search_attempts, opts.retries.backoff);
    let res = retry(&policy, ScrapeError::is_stale, |attempt| {
        if attempt > 1 {
            logf!("Runner: retrying {} after stale reference (attempt {attempt})", query.display_name());
        }
        search_once(driver, cfg, query, opts)
    });

    match res {
        Ok(outcome) => Ok(outcome),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => Ok(SearchOutcome::Error(e.to_string())),
    }
}

/// Serially search every query against one driver session.
/// Per-query faults are logged and partitioned as unfiled; a lost session
/// aborts with what has been gathered so far discarded.
pub fn run_batch(
    driver: &mut dyn PageDriver,
    cfg: &CountyConfig,
    queries: &[PersonQuery],
    opts: &RunOptions,
    progress: &mut dyn Progress,
) -> Result<Partitions> {
    let total = queries.len();
    let mut parts = Partitions::default();
    progress.begin(total);

    for (i, query) in queries.iter().enumerate() {
        let who = query.display_name();
        let outcome = search_person(driver, cfg, query, opts)?;

        match &outcome {
            SearchOutcome::NoMatch => progress.log(&format!("{who} has no case file")),
            SearchOutcome::TimedOut => {
                logf!("Runner: {who} ({}) timed out waiting for results", cfg.county);
                progress.log(&format!("{who} has no case file (timed out)"));
            }
            SearchOutcome::Filed(cases) => {
                let n = extract::court_dates(cases).len();
                progress.log(&format!("{who} has {} filed case(s), {n} with a court date", cases.len()));
            }
            SearchOutcome::Error(reason) => {
                loge!("Runner: {who} ({}) failed: {reason}", cfg.county);
                progress.log(&format!("Error searching {who} in {}: {reason}", cfg.county));
            }
        }

        match outcome.into_filed() {
            Some(cases) => parts.filed.push(FiledEntry { person: query.clone(), cases }),
            None => parts.unfiled.push(query.clone()),
        }
        progress.item_done(i + 1, total);
    }

    logf!("Runner: {} filed, {} unfiled of {total}", parts.filed.len(), parts.unfiled.len());
    Ok(parts)
}

/// Everything after the browser exists: load, search, write.
pub fn run_with_driver(
    driver: &mut dyn PageDriver,
    opts: &RunOptions,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let cfg = opts.county.config();
    let queries = load_people(&opts.input)?;
    let result = run_queries(driver, cfg, &queries, opts, progress);
    progress.finish();
    result
}

fn run_queries(
    driver: &mut dyn PageDriver,
    cfg: &CountyConfig,
    queries: &[PersonQuery],
    opts: &RunOptions,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let partitions = run_batch(driver, cfg, queries, opts, progress)?;
    let files_written = write_reports(&partitions, &opts.export)?;
    for f in &files_written {
        progress.log(&format!("Wrote {}", f.display()));
    }
    Ok(RunSummary { partitions, files_written })
}

/// Top-level runner. Input and browser failures abort before any query runs.
pub fn run(opts: &RunOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    logf!("Run: county={} input={}", opts.county, opts.input.display());
    let cfg = opts.county.config();
    let queries = load_people(&opts.input)?;
    progress.log(&format!("Loaded {} name(s) from {}", queries.len(), opts.input.display()));

    let mut driver = ChromeDriver::launch(&opts.browser)?;
    let result = run_queries(&mut driver, cfg, &queries, opts, progress);

    if let Err(e) = driver.close() {
        loge!("Run: closing browser failed: {e}");
    }
    progress.finish();
    result
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn filed_without_dates_is_unfiled() {
        let undated = SearchOutcome::Filed(vec![CaseRecord { case_number: s!("X"), latest_court_date: None }]);
        assert_eq!(undated.into_filed(), None);
        assert_eq!(SearchOutcome::Filed(vec![]).into_filed(), None);
    }

    #[test]
    fn filed_with_any_date_is_kept() {
        let cases = vec![
            CaseRecord { case_number: s!("A"), latest_court_date: None },
            CaseRecord { case_number: s!("B"), latest_court_date: NaiveDate::from_ymd_opt(2021, 3, 4) },
        ];
        assert_eq!(SearchOutcome::Filed(cases.clone()).into_filed(), Some(cases));
    }

    #[test]
    fn non_filed_outcomes_are_unfiled() {
        assert_eq!(SearchOutcome::NoMatch.into_filed(), None);
        assert_eq!(SearchOutcome::TimedOut.into_filed(), None);
        assert_eq!(SearchOutcome::Error(s!("boom")).into_filed(), None);
    }
}
