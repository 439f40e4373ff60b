// src/portal.rs
//! Portal adapter: static per-county configuration plus the one uniform
//! navigation sequence that brings a portal to its criminal search form.
//!
//! Adding a county is a new [`CountyConfig`] row, not new control flow.

use std::fmt;
use std::str::FromStr;

use crate::browser::{wait, Locator, PageDriver};
use crate::config::options::{RetryOptions, Timeouts};
use crate::error::{Result, ScrapeError};
use crate::retry::{retry, RetryPolicy};

pub const CRIMINAL_RECORDS_LINK: &str = "Criminal Case Records";
pub const SEARCH_BY_ID: &str = "SearchBy";
pub const SEARCH_BY_DEFENDANT: &str = "Defendant";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum County {
    Guadalupe,
    Comal,
    Hays,
    Williamson,
}

impl County {
    pub const ALL: [County; 4] = [County::Guadalupe, County::Comal, County::Hays, County::Williamson];

    pub fn name(&self) -> &'static str {
        match self {
            County::Guadalupe => "Guadalupe",
            County::Comal => "Comal",
            County::Hays => "Hays",
            County::Williamson => "Williamson",
        }
    }

    pub fn config(&self) -> &'static CountyConfig {
        // COUNTIES is indexed in declaration order
        &COUNTIES[*self as usize]
    }
}

impl fmt::Display for County {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for County {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        County::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| ScrapeError::Configuration(s!(t)))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct CountyConfig {
    pub county: County,
    pub search_url: &'static str,
    pub uses_search_by_dropdown: bool,
    pub requires_link_click: bool,
}

pub static COUNTIES: [CountyConfig; 4] = [
    CountyConfig {
        county: County::Guadalupe,
        search_url: "https://portal-txguadalupe.tylertech.cloud/PublicAccess/default.aspx",
        uses_search_by_dropdown: true,
        requires_link_click: true,
    },
    CountyConfig {
        county: County::Comal,
        search_url: "http://public.co.comal.tx.us/default.aspx",
        uses_search_by_dropdown: false,
        requires_link_click: true,
    },
    CountyConfig {
        county: County::Hays,
        search_url: "https://public.co.hays.tx.us/default.aspx",
        uses_search_by_dropdown: false,
        requires_link_click: true,
    },
    CountyConfig {
        county: County::Williamson,
        search_url: "https://judicialrecords.wilco.org/PublicAccess/default.aspx",
        uses_search_by_dropdown: false,
        requires_link_click: true,
    },
];

/// Drive `driver` from nothing to a ready search form for `cfg`.
pub fn open_search_form(
    driver: &mut dyn PageDriver,
    cfg: &CountyConfig,
    timeouts: &Timeouts,
    retries: &RetryOptions,
) -> Result<()> {
    let policy = RetryPolicy::new(retries.nav_attempts, retries.backoff);

    let link = Locator::link_text(CRIMINAL_RECORDS_LINK);
    let mut landed = false;
    retry(&policy, ScrapeError::is_timeout, |attempt| {
        if landed {
            logd!("Portal[{}]: reloading before attempt {attempt}", cfg.county);
            driver.reload()?;
        } else {
            driver.navigate(cfg.search_url)?;
            landed = true;
        }
        if cfg.requires_link_click {
            wait::wait_for(driver, &link, timeouts.element_wait, timeouts.poll_interval)?;
            driver.follow(&link)?;
        }
        Ok(())
    })?;

    if cfg.uses_search_by_dropdown {
        let select = Locator::id(SEARCH_BY_ID);
        retry(&policy, ScrapeError::is_timeout, |_| {
            wait::wait_for(driver, &select, timeouts.element_wait, timeouts.poll_interval)?;
            driver.select_by_text(&select, SEARCH_BY_DEFENDANT)
        })?;
    }

    logd!("Portal[{}]: search form ready", cfg.county);
    Ok(())
}
