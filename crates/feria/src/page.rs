//! Page plumbing shared by every concrete page: the readiness contract
//! and document-scoped query shorthand.

use crate::locator::Locator;
use crate::result::{FeriaError, FeriaResult};
use crate::session::SessionHandle;
use crate::wait::{wait_for, WaitOptions};

/// Pattern a session URL is matched against to decide whether a page is
/// current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPattern {
    /// Exact URL match
    Exact(String),
    /// Prefix match
    Prefix(String),
    /// Contains substring
    Contains(String),
    /// Regex match
    Regex(String),
    /// Match any URL
    Any,
}

impl UrlPattern {
    /// Check whether a URL matches this pattern
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        match self {
            Self::Exact(pattern) => url == pattern,
            Self::Prefix(pattern) => url.starts_with(pattern),
            Self::Contains(pattern) => url.contains(pattern),
            Self::Regex(pattern) => regex::Regex::new(pattern)
                .map(|re| re.is_match(url))
                .unwrap_or(false),
            Self::Any => true,
        }
    }
}

/// Behavior shared by every page object.
///
/// A page is current when the session URL matches its [`UrlPattern`] and
/// its readiness marker is present in the document. Navigation actions use
/// [`Page::wait_until_loaded`] before handing the destination page to the
/// caller; the contract is explicit rather than "return and hope".
pub trait Page {
    /// Shared session handle this page is bound to
    fn session(&self) -> &SessionHandle;

    /// Pattern the session URL matches once this page is current
    fn url_pattern(&self) -> UrlPattern;

    /// Element whose presence signals the page is rendered
    fn ready_marker(&self) -> Locator;

    /// Short name used in log events
    fn page_name(&self) -> &'static str;

    /// Probe readiness once: URL matches and the marker is present.
    ///
    /// An absent marker is "not yet", not a failure; any other session
    /// error propagates.
    fn is_loaded(&self) -> FeriaResult<bool> {
        let url = self.session().current_url()?;
        if !self.url_pattern().matches(&url) {
            return Ok(false);
        }
        match self.session().find_element(&self.ready_marker()) {
            Ok(_) => Ok(true),
            Err(FeriaError::ElementNotFound { .. }) => Ok(false),
            Err(other) => Err(other),
        }
    }

    /// Block until the page reports loaded.
    ///
    /// # Errors
    ///
    /// Fails with [`FeriaError::Timeout`] when the page never becomes
    /// ready within `options`.
    fn wait_until_loaded(&self, options: &WaitOptions) -> FeriaResult<()> {
        tracing::debug!(page = self.page_name(), "waiting for page to load");
        wait_for(|| self.is_loaded(), options)
    }

    /// Text of the first document-scope match for `locator`
    fn text_of(&self, locator: &Locator) -> FeriaResult<String> {
        self.session().find_element(locator)?.text()
    }

    /// Number of document-scope matches for `locator` at call time
    fn count_of(&self, locator: &Locator) -> FeriaResult<usize> {
        Ok(self.session().find_elements(locator)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockElement, MockSession};
    use std::rc::Rc;

    mod url_pattern_tests {
        use super::*;

        #[test]
        fn test_exact() {
            let pattern = UrlPattern::Exact("https://market.example.com/".into());
            assert!(pattern.matches("https://market.example.com/"));
            assert!(!pattern.matches("https://market.example.com/themes"));
        }

        #[test]
        fn test_prefix_and_contains() {
            assert!(UrlPattern::Prefix("https://market".into()).matches("https://market.example.com"));
            assert!(UrlPattern::Contains("/addon/".into())
                .matches("https://market.example.com/addon/4567/"));
            assert!(!UrlPattern::Contains("/addon/".into())
                .matches("https://market.example.com/themes"));
        }

        #[test]
        fn test_regex() {
            let pattern = UrlPattern::Regex(r"/user/\d+/?$".into());
            assert!(pattern.matches("https://market.example.com/user/31337/"));
            assert!(!pattern.matches("https://market.example.com/user/profile"));
        }

        #[test]
        fn test_invalid_regex_never_matches() {
            assert!(!UrlPattern::Regex("(".into()).matches("anything"));
        }

        #[test]
        fn test_any() {
            assert!(UrlPattern::Any.matches(""));
        }
    }

    mod page_trait_tests {
        use super::*;

        #[derive(Debug)]
        struct ProbePage {
            session: SessionHandle,
        }

        impl Page for ProbePage {
            fn session(&self) -> &SessionHandle {
                &self.session
            }

            fn url_pattern(&self) -> UrlPattern {
                UrlPattern::Contains("/probe".into())
            }

            fn ready_marker(&self) -> Locator {
                Locator::id("probe-root")
            }

            fn page_name(&self) -> &'static str {
                "probe"
            }
        }

        #[test]
        fn test_loaded_when_url_and_marker_agree() {
            let session = Rc::new(MockSession::new());
            session.set_url("https://market.example.com/probe");
            session.install_one(&Locator::id("probe-root"), MockElement::new("root"));

            let page = ProbePage {
                session: MockSession::handle(&session),
            };
            assert!(page.is_loaded().unwrap());
            assert!(page
                .wait_until_loaded(&WaitOptions::new().with_timeout(100))
                .is_ok());
        }

        #[test]
        fn test_not_loaded_when_url_differs() {
            let session = Rc::new(MockSession::new());
            session.set_url("https://market.example.com/elsewhere");
            session.install_one(&Locator::id("probe-root"), MockElement::new("root"));

            let page = ProbePage {
                session: MockSession::handle(&session),
            };
            assert!(!page.is_loaded().unwrap());
        }

        #[test]
        fn test_missing_marker_times_out() {
            let session = Rc::new(MockSession::new());
            session.set_url("https://market.example.com/probe");

            let page = ProbePage {
                session: MockSession::handle(&session),
            };
            let result =
                page.wait_until_loaded(&WaitOptions::new().with_timeout(30).with_poll_interval(5));
            assert!(matches!(result, Err(FeriaError::Timeout { .. })));
        }

        #[test]
        fn test_query_shorthand() {
            let session = Rc::new(MockSession::new());
            let heading = Locator::css("#probe h2");
            session.install(
                &heading,
                vec![
                    MockElement::new("h2-a").with_text("Most Popular"),
                    MockElement::new("h2-b").with_text("Ignored"),
                ],
            );

            let page = ProbePage {
                session: MockSession::handle(&session),
            };
            assert_eq!(page.text_of(&heading).unwrap(), "Most Popular");
            assert_eq!(page.count_of(&heading).unwrap(), 2);
        }
    }
}
