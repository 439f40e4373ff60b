// tests/common/mod.rs
//
// Scripted portal for driving the search pipeline without a browser.
// Locators are resolved against the current page's markup with `scraper`.
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use scraper::{ElementRef, Html, Selector};

use case_scrape::browser::{Locator, PageDriver};
use case_scrape::config::options::{RetryOptions, RunOptions, Timeouts};
use case_scrape::error::{Result, ScrapeError};
use case_scrape::portal::County;

pub const SEARCH_FORM: &str = "Search.aspx?ID=100";
pub const PENDING: &str = "Results.aspx?pending";

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("case_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Options with waits short enough for tests and no retry pauses.
pub fn fast_opts(county: County) -> RunOptions {
    RunOptions {
        county,
        timeouts: Timeouts {
            result_wait: Duration::from_millis(40),
            element_wait: Duration::from_millis(40),
            poll_interval: Duration::from_millis(2),
        },
        retries: RetryOptions { nav_attempts: 5, search_attempts: 2, backoff: Duration::ZERO },
        ..RunOptions::default()
    }
}

pub fn home_page() -> String {
    r#"<html><body>
        <a href="Search.aspx?ID=200">Civil, Family &amp; Probate Case Records</a>
        <a href="Search.aspx?ID=100">Criminal Case Records</a>
    </body></html>"#
        .to_string()
}

pub fn search_form_page() -> String {
    r#"<html><body><form>
        <select id="SearchBy">
            <option value="0">Case</option>
            <option value="1">Defendant</option>
            <option value="2">Attorney</option>
        </select>
        <input id="LastName" type="text"/>
        <input id="FirstName" type="text"/>
        <input id="DateOfBirth" type="text"/>
        <input id="SearchSubmit" type="submit" value="Search"/>
    </form></body></html>"#
        .to_string()
}

pub fn no_match_page() -> String {
    r#"<html><body>
        <span class="ssMessage">No cases matched your search criteria.</span>
    </body></html>"#
        .to_string()
}

/// Results page with one row per `(case number, detail href, status)`.
pub fn results_page(rows: &[(&str, &str, &str)]) -> String {
    let mut html = String::from(
        "<html><body><table>\n<tr><th>Case Number</th><th>Filed/Location</th><th>Status</th></tr>\n",
    );
    for (number, href, status) in rows {
        html.push_str(&format!(
            "<tr><td><a href=\"{href}\">{number}</a></td><td><div>Criminal District Court</div></td><td><div>{status}</div></td></tr>\n"
        ));
    }
    html.push_str("</table></body></html>");
    html
}

/// Case-detail page with one date-bearing header cell per entry.
pub fn detail_page(dates: &[&str]) -> String {
    let mut html = String::from("<html><body><table>\n");
    for d in dates {
        html.push_str(&format!(
            "<tr><th class=\"ssTableHeaderLabel\" valign=\"top\">{d}</th><td>Hearing</td></tr>\n"
        ));
    }
    html.push_str("<tr><th class=\"ssTableHeaderLabel\">Judicial Officer</th></tr>\n");
    html.push_str("</table></body></html>");
    html
}

#[derive(Default)]
pub struct FakePortal {
    pages: HashMap<String, String>,
    /// LastName value → results page url
    results_for: HashMap<String, String>,
    current: Option<String>,
    history: Vec<String>,
    pub form: HashMap<String, String>,

    /// Stale faults still to inject, one per `back()`.
    pub stale_after_back: u32,
    stale_armed: bool,

    /// Navigations still to fail with a load timeout.
    pub nav_timeouts: u32,
    pub navigations: u32,
    pub reloads: u32,

    pub submits: Vec<(String, String, String)>,
    pub stale_injected: u32,
}

impl FakePortal {
    /// A portal for `county` with its landing page and search form wired up.
    pub fn new(county: County) -> Self {
        let mut p = Self::default();
        p.page(county.config().search_url, home_page());
        p.page(SEARCH_FORM, search_form_page());
        p.page(PENDING, s("<html><body><p>Please wait</p></body></html>"));
        p
    }

    pub fn page(&mut self, url: &str, html: String) -> &mut Self {
        self.pages.insert(s(url), html);
        self
    }

    /// Searching for `last_name` lands on `html`.
    pub fn results(&mut self, last_name: &str, html: String) -> &mut Self {
        let url = format!("Results.aspx?last={last_name}");
        self.pages.insert(url.clone(), html);
        self.results_for.insert(s(last_name), url);
        self
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn html(&self) -> Result<Html> {
        let url = self
            .current
            .as_ref()
            .ok_or_else(|| ScrapeError::Browser(s("no page loaded")))?;
        let text = self
            .pages
            .get(url)
            .ok_or_else(|| ScrapeError::Browser(format!("no such page: {url}")))?;
        Ok(Html::parse_document(text))
    }

    fn go(&mut self, url: &str) -> Result<()> {
        if !self.pages.contains_key(url) {
            return Err(ScrapeError::Browser(format!("404: {url}")));
        }
        if let Some(cur) = self.current.take() {
            self.history.push(cur);
        }
        self.current = Some(s(url));
        // a fresh document has empty fields
        self.form.clear();
        Ok(())
    }

    fn find_href(&self, loc: &Locator) -> Result<Option<String>> {
        let doc = self.html()?;
        Ok(first_match(&doc, loc).and_then(|el| el.value().attr("href").map(s)))
    }

    fn require(&self, loc: &Locator) -> Result<()> {
        let doc = self.html()?;
        match first_match(&doc, loc) {
            Some(_) => Ok(()),
            None => Err(ScrapeError::not_found(loc, Duration::ZERO)),
        }
    }
}

fn s(v: &str) -> String {
    v.to_string()
}

fn own_text(el: &ElementRef) -> String {
    el.children().filter_map(|c| c.value().as_text()).map(|t| t.to_string()).collect()
}

fn first_match<'a>(doc: &'a Html, loc: &Locator) -> Option<ElementRef<'a>> {
    let all = |css: &str| Selector::parse(css).unwrap();
    match loc {
        Locator::Id(id) => doc.select(&all(&format!("[id=\"{id}\"]"))).next(),
        Locator::LinkText(t) => doc.select(&all("a")).find(|a| {
            a.text().collect::<String>().split_whitespace().collect::<Vec<_>>().join(" ") == *t
        }),
        Locator::Href(h) => doc.select(&all("a")).find(|a| a.value().attr("href") == Some(h.as_str())),
        Locator::TextContains { tag, text } => {
            doc.select(&all(tag.as_str())).find(|el| own_text(el).contains(text.as_str()))
        }
    }
}

impl PageDriver for FakePortal {
    fn navigate(&mut self, url: &str) -> Result<()> {
        self.navigations += 1;
        if self.nav_timeouts > 0 {
            self.nav_timeouts -= 1;
            return Err(ScrapeError::NavigationTimeout(s(url)));
        }
        self.go(url)
    }

    fn reload(&mut self) -> Result<()> {
        self.reloads += 1;
        Ok(())
    }

    fn back(&mut self) -> Result<()> {
        let prev = self
            .history
            .pop()
            .ok_or_else(|| ScrapeError::Browser(s("no history")))?;
        self.current = Some(prev);
        if self.stale_after_back > 0 {
            self.stale_after_back -= 1;
            self.stale_armed = true;
        }
        Ok(())
    }

    fn is_present(&mut self, loc: &Locator) -> Result<bool> {
        if self.stale_armed {
            self.stale_armed = false;
            self.stale_injected += 1;
            return Err(ScrapeError::StaleReference(format!("{loc}")));
        }
        let doc = self.html()?;
        Ok(first_match(&doc, loc).is_some())
    }

    fn click(&mut self, loc: &Locator) -> Result<()> {
        self.require(loc)?;
        if *loc == Locator::id("SearchSubmit") {
            let get = |k: &str| self.form.get(k).cloned().unwrap_or_default();
            let (last, first, dob) = (get("LastName"), get("FirstName"), get("DateOfBirth"));
            let target = self.results_for.get(&last).cloned().unwrap_or_else(|| s(PENDING));
            self.submits.push((last, first, dob));
            return self.go(&target);
        }
        Ok(())
    }

    fn follow(&mut self, loc: &Locator) -> Result<()> {
        self.require(loc)?;
        match self.find_href(loc)? {
            Some(href) => self.go(&href),
            None => Ok(()),
        }
    }

    fn fill(&mut self, loc: &Locator, text: &str) -> Result<()> {
        self.require(loc)?;
        if let Locator::Id(id) = loc {
            self.form.insert(id.clone(), s(text));
        }
        Ok(())
    }

    fn select_by_text(&mut self, loc: &Locator, text: &str) -> Result<()> {
        self.require(loc)?;
        let doc = self.html()?;
        let select = first_match(&doc, loc).ok_or_else(|| ScrapeError::not_found(loc, Duration::ZERO))?;
        let opt = Selector::parse("option").unwrap();
        let found = select.select(&opt).any(|o| o.text().collect::<String>().trim() == text);
        if !found {
            return Err(ScrapeError::not_found(format!("{loc} option {text}"), Duration::ZERO));
        }
        if let Locator::Id(id) = loc {
            self.form.insert(id.clone(), s(text));
        }
        Ok(())
    }

    fn page_source(&mut self) -> Result<String> {
        let url = self
            .current
            .as_ref()
            .ok_or_else(|| ScrapeError::Browser(s("no page loaded")))?;
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Browser(format!("no such page: {url}")))
    }
}
