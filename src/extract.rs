// src/extract.rs
//! Result Extractor.
//!
//! The parsing half is pure (markup in, values out) so it can be tested and
//! benchmarked without a browser. [`collect_cases`] is the drill-down
//! protocol that walks each filed case's detail page through a driver.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};

use crate::browser::{wait, Locator, PageDriver};
use crate::config::options::Timeouts;
use crate::core::sanitize::join_text;
use crate::error::Result;
use crate::names::parse_date_text;
use crate::session::{filed_locator, Resolution, FILED_TEXT, NO_MATCH_TEXT};

/// Fragment every case-detail link target carries.
pub const CASE_DETAIL_TARGET: &str = "CaseDetail.aspx";

static SPAN: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span").expect("invalid selector: span"));
static DIV: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div").expect("invalid selector: div"));
static CASE_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!(r#"a[href*="{CASE_DETAIL_TARGET}"]"#))
        .expect("invalid selector: case link")
});
static DATE_HEADER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"th.ssTableHeaderLabel[valign="top"]"#)
        .expect("invalid selector: date header")
});

/// One filed case as recorded in the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseRecord {
    pub case_number: String,
    pub latest_court_date: Option<NaiveDate>,
}

/// A case-detail hyperlink found on a results page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseLink {
    /// Link text.
    pub case_number: String,
    /// Raw `href` attribute, used to find the same anchor again.
    pub href: String,
}

fn text_of(el: ElementRef) -> String {
    join_text(el.text())
}

/// Classify a results page. `None` when neither terminal marker is present.
pub fn classify(html: &str) -> Option<Resolution> {
    let doc = Html::parse_document(html);
    let no_match = doc.select(&SPAN).any(|s| text_of(s).contains(NO_MATCH_TEXT));
    if no_match {
        return Some(Resolution::NoMatch);
    }
    if filed_status_cells(&doc).next().is_some() {
        return Some(Resolution::Filed);
    }
    None
}

/// Status cells that read exactly "Filed".
fn filed_status_cells(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.select(&DIV).filter(|d| text_of(*d) == FILED_TEXT)
}

fn enclosing_row(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == "tr")
}

/// Case-detail links from every row whose status reads "Filed", in page
/// order. A link shared by several rows is reported once.
pub fn filed_case_links(html: &str) -> Vec<CaseLink> {
    let doc = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for cell in filed_status_cells(&doc) {
        let Some(row) = enclosing_row(cell) else { continue };
        for a in row.select(&CASE_LINK) {
            let Some(href) = a.value().attr("href") else { continue };
            if !seen.insert(s!(href)) {
                continue;
            }
            out.push(CaseLink { case_number: text_of(a), href: s!(href) });
        }
    }
    out
}

/// Chronologically latest date among the date-bearing header cells of a
/// case-detail page. Cells that do not parse are skipped.
pub fn latest_court_date(html: &str) -> Option<NaiveDate> {
    let doc = Html::parse_document(html);
    doc.select(&DATE_HEADER)
        .filter_map(|th| parse_date_text(&text_of(th)))
        .max()
}

/// Visit every filed case on the current results page and read its latest
/// court date. Returns to the results page after each case and waits for it
/// to be located again; a stale reference there propagates to the caller.
pub fn collect_cases(driver: &mut dyn PageDriver, timeouts: &Timeouts) -> Result<Vec<CaseRecord>> {
    let results = driver.page_source()?;
    let links = filed_case_links(&results);
    logd!("Extract: {} filed case link(s)", links.len());

    let mut cases = Vec::with_capacity(links.len());
    for link in links {
        let anchor = Locator::href(&link.href);
        wait::wait_for(driver, &anchor, timeouts.element_wait, timeouts.poll_interval)?;
        driver.follow(&anchor)?;

        let detail = driver.page_source()?;
        let latest = latest_court_date(&detail);
        logd!("Extract: case {} latest court date {:?}", link.case_number, latest);

        driver.back()?;
        wait::wait_for(driver, &filed_locator(), timeouts.element_wait, timeouts.poll_interval)?;

        cases.push(CaseRecord { case_number: link.case_number, latest_court_date: latest });
    }
    Ok(cases)
}

/// Dates present across `cases`, in case order.
pub fn court_dates(cases: &[CaseRecord]) -> Vec<NaiveDate> {
    cases.iter().filter_map(|c| c.latest_court_date).collect()
}
