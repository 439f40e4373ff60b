// src/retry.rs
use std::thread;
use std::time::Duration;

/// Bounded retry: at most `max_attempts` calls, fixed pause between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self { max_attempts: max_attempts.max(1), backoff }
    }

    pub fn once() -> Self {
        Self::new(1, Duration::ZERO)
    }
}

/// Run `op` (1-based attempt number) until it succeeds, fails with an error
/// `retryable` rejects, or attempts run out. The last error is returned.
pub fn retry<T, E, F, P>(policy: &RetryPolicy, retryable: P, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Result<T, E>,
    P: Fn(&E) -> bool,
{
    let mut attempt = 1;
    loop {
        match op(attempt) {
            Ok(v) => return Ok(v),
            Err(e) if attempt < policy.max_attempts && retryable(&e) => {
                attempt += 1;
                if !policy.backoff.is_zero() {
                    thread::sleep(policy.backoff);
                }
            }
            Err(e) => return Err(e),
        }
    }
}
