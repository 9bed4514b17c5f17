//! Result and error types for the page-object layer.

use thiserror::Error;

/// Result type for page-object operations
pub type FeriaResult<T> = Result<T, FeriaError>;

/// Errors surfaced by page objects and the session layer.
///
/// Failures are never recovered here: page objects are test-assertion
/// code, and a failure must fail the calling test.
#[derive(Debug, Error)]
pub enum FeriaError {
    /// A required locator matched no elements
    #[error("no element matched {selector}")]
    ElementNotFound {
        /// Locator that matched nothing, in `strategy:selector` form
        selector: String,
    },

    /// A name-keyed locator lookup found no entry
    #[error("no locator registered under '{name}'")]
    LocatorLookup {
        /// Canonical key that was looked up
        name: String,
    },

    /// Element text did not match the expected format
    #[error("could not parse element text: {message}")]
    Parse {
        /// What was expected and what was read
        message: String,
    },

    /// Session navigation failed
    #[error("navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed to load
        url: String,
        /// Error message from the session
        message: String,
    },

    /// A readiness wait expired
    #[error("wait timed out after {ms}ms")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
    },

    /// Any other failure reported by the session implementation
    #[error("session error: {message}")]
    Session {
        /// Error message from the session
        message: String,
    },

    /// Configuration deserialization failed
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
