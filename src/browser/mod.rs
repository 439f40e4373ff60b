// src/browser/mod.rs
//! Browser automation boundary.
//!
//! Everything above this module talks to a [`PageDriver`]: one navigable page,
//! addressed by [`Locator`]s that are re-resolved on every call. No element
//! handle ever outlives a call, so navigation cannot leave one dangling; a
//! driver reports [`ScrapeError::StaleReference`](crate::error::ScrapeError)
//! only when the DOM changes underneath a single operation.

pub mod chrome;
pub mod locator;
pub mod wait;

pub use chrome::ChromeDriver;
pub use locator::Locator;

use crate::error::Result;

/// A single controllable page. All calls block until the browser answers.
pub trait PageDriver {
    /// Load `url` and wait for the navigation to settle.
    fn navigate(&mut self, url: &str) -> Result<()>;

    fn reload(&mut self) -> Result<()>;

    /// History back, waiting for the previous document.
    fn back(&mut self) -> Result<()>;

    /// Non-blocking presence check. Absence is `Ok(false)`, not an error.
    fn is_present(&mut self, loc: &Locator) -> Result<bool>;

    /// Click without waiting for any navigation it may cause.
    fn click(&mut self, loc: &Locator) -> Result<()>;

    /// Click and wait for the resulting navigation.
    fn follow(&mut self, loc: &Locator) -> Result<()>;

    /// Clear the field, then type `text` into it.
    fn fill(&mut self, loc: &Locator, text: &str) -> Result<()>;

    /// Choose the `<option>` whose visible text is `text`.
    fn select_by_text(&mut self, loc: &Locator, text: &str) -> Result<()>;

    /// Current document markup.
    fn page_source(&mut self) -> Result<String>;

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
