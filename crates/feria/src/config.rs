//! Site configuration consumed when constructing page objects.

use serde::{Deserialize, Serialize};

use crate::result::FeriaResult;
use crate::wait::WaitOptions;

/// Configuration a harness hands to page objects: where the marketplace
/// lives and how long navigation readiness checks may poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL the home page loads in "open" mode
    pub base_url: String,
    /// Wait options applied by navigation readiness checks
    #[serde(default)]
    pub default_wait: WaitOptions,
}

impl SiteConfig {
    /// Create a configuration for the marketplace at `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_wait: WaitOptions::default(),
        }
    }

    /// Override the default wait options
    #[must_use]
    pub fn with_default_wait(mut self, wait: WaitOptions) -> Self {
        self.default_wait = wait;
        self
    }

    /// Load a configuration from a JSON document
    pub fn from_json_str(raw: &str) -> FeriaResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Absolute URL for a path under the marketplace root
    #[must_use]
    pub fn page_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
