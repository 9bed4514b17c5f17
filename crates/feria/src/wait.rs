//! Explicit readiness waits: polling with a timeout.
//!
//! Navigation actions do not trust a click to have landed; they poll the
//! destination page's readiness probe through [`wait_for`] and surface
//! [`FeriaError::Timeout`](crate::FeriaError::Timeout) when it never
//! reports ready.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::result::{FeriaError, FeriaResult};

/// Default timeout for readiness waits (30 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 30_000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Options for readiness waits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_WAIT_TIMEOUT_MS
}

const fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitOptions {
    /// Create options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Timeout as a [`Duration`]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Polling interval as a [`Duration`]
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Poll `probe` until it reports ready or the timeout expires.
///
/// `Ok(false)` means "not yet" and schedules another poll; an `Err` from
/// the probe is a real failure and propagates immediately.
///
/// # Errors
///
/// Fails with [`FeriaError::Timeout`] when the probe never reports ready
/// within the configured window.
pub fn wait_for<F>(mut probe: F, options: &WaitOptions) -> FeriaResult<()>
where
    F: FnMut() -> FeriaResult<bool>,
{
    let start = Instant::now();
    loop {
        if probe()? {
            return Ok(());
        }
        if start.elapsed() >= options.timeout() {
            return Err(FeriaError::Timeout {
                ms: options.timeout_ms,
            });
        }
        std::thread::sleep(options.poll_interval());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod wait_options_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let options = WaitOptions::default();
            assert_eq!(options.timeout_ms, DEFAULT_WAIT_TIMEOUT_MS);
            assert_eq!(options.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        }

        #[test]
        fn test_builder_chain() {
            let options = WaitOptions::new().with_timeout(500).with_poll_interval(10);
            assert_eq!(options.timeout(), Duration::from_millis(500));
            assert_eq!(options.poll_interval(), Duration::from_millis(10));
        }
    }

    mod wait_for_tests {
        use super::*;

        #[test]
        fn test_ready_immediately() {
            let options = WaitOptions::new().with_timeout(100);
            assert!(wait_for(|| Ok(true), &options).is_ok());
        }

        #[test]
        fn test_ready_after_a_few_polls() {
            let options = WaitOptions::new().with_timeout(1_000).with_poll_interval(1);
            let mut polls = 0;
            let result = wait_for(
                || {
                    polls += 1;
                    Ok(polls >= 3)
                },
                &options,
            );
            assert!(result.is_ok());
            assert_eq!(polls, 3);
        }

        #[test]
        fn test_timeout_surfaces() {
            let options = WaitOptions::new().with_timeout(30).with_poll_interval(5);
            match wait_for(|| Ok(false), &options) {
                Err(FeriaError::Timeout { ms }) => assert_eq!(ms, 30),
                other => panic!("expected Timeout, got {other:?}"),
            }
        }

        #[test]
        fn test_probe_error_propagates() {
            let options = WaitOptions::new().with_timeout(1_000);
            let result = wait_for(
                || {
                    Err(FeriaError::Session {
                        message: "connection dropped".to_string(),
                    })
                },
                &options,
            );
            assert!(matches!(result, Err(FeriaError::Session { .. })));
        }
    }
}
