// src/session.rs
//! Search Session Driver: one query through the portal's search form.
//!
//! `Idle → FormSubmitted → AwaitingResult → Resolved(NoMatch | Filed) | TimedOut`
//!
//! The form must already be open (see [`crate::portal::open_search_form`]).

use std::fmt;

use crate::browser::{wait, Locator, PageDriver};
use crate::config::options::Timeouts;
use crate::error::Result;
use crate::names::PersonQuery;

pub const LAST_NAME_ID: &str = "LastName";
pub const FIRST_NAME_ID: &str = "FirstName";
pub const DOB_ID: &str = "DateOfBirth";
pub const SUBMIT_ID: &str = "SearchSubmit";

pub const FILED_TEXT: &str = "Filed";
pub const NO_MATCH_TEXT: &str = "No cases matched your search criteria.";

/// Terminal page condition reached by a submitted search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    NoMatch,
    Filed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    FormSubmitted,
    AwaitingResult,
    Resolved(Resolution),
    TimedOut,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchState::Resolved(_) | SearchState::TimedOut)
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchState::Idle => f.write_str("Idle"),
            SearchState::FormSubmitted => f.write_str("FormSubmitted"),
            SearchState::AwaitingResult => f.write_str("AwaitingResult"),
            SearchState::Resolved(r) => write!(f, "Resolved({r:?})"),
            SearchState::TimedOut => f.write_str("TimedOut"),
        }
    }
}

/// Locator marking a "Filed" status anywhere on the results page.
pub fn filed_locator() -> Locator {
    Locator::text_contains("div", FILED_TEXT)
}

pub fn no_match_locator() -> Locator {
    Locator::text_contains("span", NO_MATCH_TEXT)
}

/// Both terminal conditions, raced by [`wait::wait_for_any`].
pub fn terminal_targets() -> [(Locator, Resolution); 2] {
    [
        (filed_locator(), Resolution::Filed),
        (no_match_locator(), Resolution::NoMatch),
    ]
}

pub struct SearchSession<'a> {
    driver: &'a mut dyn PageDriver,
    timeouts: Timeouts,
    state: SearchState,
}

impl<'a> SearchSession<'a> {
    pub fn new(driver: &'a mut dyn PageDriver, timeouts: Timeouts) -> Self {
        Self { driver, timeouts, state: SearchState::Idle }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    fn transition(&mut self, next: SearchState) {
        logd!("Session: {} -> {}", self.state, next);
        self.state = next;
    }

    /// Drive the machine to a terminal state. Driver faults propagate with
    /// the session left in the state where they happened.
    pub fn run(&mut self, query: &PersonQuery) -> Result<SearchState> {
        while !self.state.is_terminal() {
            let next = self.step(query)?;
            self.transition(next);
        }
        Ok(self.state)
    }

    fn step(&mut self, query: &PersonQuery) -> Result<SearchState> {
        match self.state {
            SearchState::Idle => {
                self.submit(query)?;
                Ok(SearchState::FormSubmitted)
            }
            SearchState::FormSubmitted => Ok(SearchState::AwaitingResult),
            SearchState::AwaitingResult => {
                let t = &self.timeouts;
                let hit = wait::wait_for_any(
                    &mut *self.driver,
                    &terminal_targets(),
                    t.result_wait,
                    t.poll_interval,
                )?;
                Ok(match hit {
                    Some(r) => SearchState::Resolved(r),
                    None => SearchState::TimedOut,
                })
            }
            done => Ok(done),
        }
    }

    fn submit(&mut self, query: &PersonQuery) -> Result<()> {
        let t = self.timeouts;
        let last = Locator::id(LAST_NAME_ID);
        wait::wait_for(&mut *self.driver, &last, t.element_wait, t.poll_interval)?;

        self.driver.fill(&last, &query.last_name)?;
        self.driver.fill(&Locator::id(FIRST_NAME_ID), &query.first_name)?;

        let dob = query.dob_text();
        if !dob.is_empty() {
            self.driver.fill(&Locator::id(DOB_ID), &dob)?;
        }

        self.driver.click(&Locator::id(SUBMIT_ID))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filed_wins_ties() {
        let targets = terminal_targets();
        assert_eq!(targets[0].1, Resolution::Filed);
        assert_eq!(targets[1].1, Resolution::NoMatch);
    }

    #[test]
    fn terminal_states() {
        assert!(!SearchState::Idle.is_terminal());
        assert!(!SearchState::AwaitingResult.is_terminal());
        assert!(SearchState::TimedOut.is_terminal());
        assert!(SearchState::Resolved(Resolution::NoMatch).is_terminal());
        assert_eq!(SearchState::Resolved(Resolution::Filed).to_string(), "Resolved(Filed)");
    }
}
