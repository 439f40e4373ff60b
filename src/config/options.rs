// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::portal::County;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub county: County,
    pub export: ExportOptions,
    pub browser: BrowserOptions,
    pub timeouts: Timeouts,
    pub retries: RetryOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            county: County::Guadalupe,
            export: ExportOptions::default(),
            browser: BrowserOptions::default(),
            timeouts: Timeouts::default(),
            retries: RetryOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn filed_path(&self) -> PathBuf {
        self.path_for(FILED_FILE)
    }

    pub fn unfiled_path(&self) -> PathBuf {
        self.path_for(UNFILED_FILE)
    }

    fn path_for(&self, stem: &str) -> PathBuf {
        self.out_dir.join(join!(stem, ".", self.format.ext()))
    }

    /// Parse GUI/CLI text into the output directory.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            Path::new(s).to_path_buf()
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserOptions {
    pub headless: bool,
    /// Explicit Chrome/Chromium executable; autodetected when `None`.
    pub executable: Option<PathBuf>,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            headless: true,
            executable: std::env::var_os(CHROME_ENV).map(PathBuf::from),
        }
    }
}

/// Bounds for every blocking DOM wait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timeouts {
    /// Race between the "Filed" and "no cases matched" locators.
    pub result_wait: Duration,
    /// Any single element (links, form fields, dropdown).
    pub element_wait: Duration,
    pub poll_interval: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            result_wait: Duration::from_secs(RESULT_WAIT_SECS),
            element_wait: Duration::from_secs(ELEMENT_WAIT_SECS),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryOptions {
    pub nav_attempts: u32,
    pub search_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            nav_attempts: NAV_ATTEMPTS,
            search_attempts: SEARCH_ATTEMPTS,
            backoff: Duration::from_millis(RETRY_BACKOFF_MS),
        }
    }
}
