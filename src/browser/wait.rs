// src/browser/wait.rs
//! Bounded, blocking DOM waits. No cancellation other than the bound.

use std::thread;
use std::time::{Duration, Instant};

use super::{Locator, PageDriver};
use crate::error::{Result, ScrapeError};

/// Poll until one of `targets` is present and return its tag, or `Ok(None)`
/// once `timeout` expires. Within one poll, earlier targets win ties.
/// Driver errors (e.g. a stale reference) end the wait immediately.
pub fn wait_for_any<T: Clone>(
    driver: &mut dyn PageDriver,
    targets: &[(Locator, T)],
    timeout: Duration,
    poll: Duration,
) -> Result<Option<T>> {
    let deadline = Instant::now() + timeout;
    loop {
        for (loc, tag) in targets {
            if driver.is_present(loc)? {
                logd!("Wait: found {loc}");
                return Ok(Some(tag.clone()));
            }
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(poll.min(deadline - now));
    }
}

/// Single-locator wait; expiry is [`ScrapeError::ElementNotFound`].
pub fn wait_for(
    driver: &mut dyn PageDriver,
    loc: &Locator,
    timeout: Duration,
    poll: Duration,
) -> Result<()> {
    match wait_for_any(driver, &[(loc.clone(), ())], timeout, poll)? {
        Some(()) => Ok(()),
        None => Err(ScrapeError::not_found(loc, timeout)),
    }
}
