// src/config/consts.rs

// Local store (debug log)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const FILED_FILE: &str = "filed_cases";
pub const UNFILED_FILE: &str = "no_case_filed";
pub const CASE_JOIN: &str = "; ";

// Waits (seconds / millis)
pub const RESULT_WAIT_SECS: u64 = 10;
pub const ELEMENT_WAIT_SECS: u64 = 10;
pub const POLL_INTERVAL_MS: u64 = 250;

// Retries
pub const NAV_ATTEMPTS: u32 = 5;
pub const SEARCH_ATTEMPTS: u32 = 2; // one retry after a stale reference
pub const RETRY_BACKOFF_MS: u64 = 500;

// Environment
pub const CHROME_ENV: &str = "CASE_SCRAPE_CHROME";
