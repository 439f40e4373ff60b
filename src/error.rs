// src/error.rs
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Unsupported county selection. Fatal before any query runs.
    #[error("configuration: unsupported county '{0}'")]
    Configuration(String),

    /// Expected DOM element absent within the bound.
    #[error("element not found within {timeout:?}: {locator}")]
    ElementNotFound { locator: String, timeout: Duration },

    /// Page load did not complete in time.
    #[error("navigation timed out: {0}")]
    NavigationTimeout(String),

    /// DOM reference invalidated by navigation.
    #[error("stale element reference: {0}")]
    StaleReference(String),

    /// Browser could not be launched, or the session died.
    #[error("browser session: {0}")]
    Session(String),

    #[error("browser: {0}")]
    Browser(String),

    #[error("input: {0}")]
    Input(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub fn not_found(locator: impl ToString, timeout: Duration) -> Self {
        ScrapeError::ElementNotFound { locator: locator.to_string(), timeout }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, ScrapeError::StaleReference(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ScrapeError::ElementNotFound { .. } | ScrapeError::NavigationTimeout(_))
    }

    /// Conditions that abort the whole run rather than a single query.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ScrapeError::Configuration(_) | ScrapeError::Session(_))
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
