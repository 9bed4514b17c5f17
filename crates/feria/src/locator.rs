//! Locators: scoped query descriptors for finding DOM elements.
//!
//! A [`Locator`] pairs a lookup [`Strategy`] with a selector string. Page
//! objects define their locators as fixed data; the name-resolved lookups
//! (explore links, named header links) go through an explicit [`LocatorMap`]
//! built at page construction instead of any runtime reflection.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::result::{FeriaError, FeriaResult};

/// Element lookup strategy, mirroring the WebDriver `By` families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// CSS selector (e.g. `ol.toplist li`)
    Css,
    /// Element id attribute
    Id,
    /// Tag name (e.g. `span`)
    Tag,
    /// XPath expression
    XPath,
}

impl Strategy {
    /// Short name used in log events and error messages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Id => "id",
            Self::Tag => "tag",
            Self::XPath => "xpath",
        }
    }
}

/// A scoped query descriptor: strategy plus selector string.
///
/// Locators are immutable data. Resolving one against the document or a
/// region root happens in the session layer; nothing is cached here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    strategy: Strategy,
    selector: String,
}

impl Locator {
    /// Create a locator from a strategy and selector
    #[must_use]
    pub fn new(strategy: Strategy, selector: impl Into<String>) -> Self {
        Self {
            strategy,
            selector: selector.into(),
        }
    }

    /// CSS selector locator
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::new(Strategy::Css, selector)
    }

    /// Id attribute locator
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::new(Strategy::Id, id)
    }

    /// Tag name locator
    #[must_use]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::new(Strategy::Tag, tag)
    }

    /// XPath locator
    #[must_use]
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::new(Strategy::XPath, expression)
    }

    /// The lookup strategy
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The selector string
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.strategy.as_str(), self.selector)
    }
}

/// Normalize a free-form link name to its canonical map key form:
/// trimmed, lowercased, spaces replaced with underscores.
///
/// `"Top Rated"` becomes `"top_rated"`.
#[must_use]
pub fn canonical_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Explicit name-keyed locator table, built once at page construction.
///
/// This is the lookup target for accessors that take a free-form name
/// (`click_to_explore("Top Rated")`); a miss surfaces as
/// [`FeriaError::LocatorLookup`] instead of a reflection failure.
#[derive(Debug, Clone, Default)]
pub struct LocatorMap {
    entries: HashMap<String, Locator>,
}

impl LocatorMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder-style
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, locator: Locator) -> Self {
        self.insert(name, locator);
        self
    }

    /// Add an entry
    pub fn insert(&mut self, name: impl Into<String>, locator: Locator) {
        let _ = self.entries.insert(name.into(), locator);
    }

    /// Look up an entry by its exact canonical key
    pub fn get(&self, name: &str) -> FeriaResult<&Locator> {
        self.entries.get(name).ok_or_else(|| {
            tracing::debug!(name, "locator map miss");
            FeriaError::LocatorLookup {
                name: name.to_string(),
            }
        })
    }

    /// Look up an entry by a free-form name, normalized via [`canonical_name`]
    pub fn resolve(&self, name: &str) -> FeriaResult<&Locator> {
        self.get(&canonical_name(name))
    }

    /// Registered canonical keys, in no particular order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of registered entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod locator_tests {
        use super::*;

        #[test]
        fn test_css_locator() {
            let locator = Locator::css("ol.toplist li");
            assert_eq!(locator.strategy(), Strategy::Css);
            assert_eq!(locator.selector(), "ol.toplist li");
        }

        #[test]
        fn test_id_locator() {
            let locator = Locator::id("other-apps");
            assert_eq!(locator.strategy(), Strategy::Id);
            assert_eq!(locator.selector(), "other-apps");
        }

        #[test]
        fn test_display_form() {
            assert_eq!(Locator::tag("span").to_string(), "tag:span");
            assert_eq!(Locator::css("#side-nav a").to_string(), "css:#side-nav a");
            assert_eq!(
                Locator::xpath("//ol[@class='toplist']/li").to_string(),
                "xpath://ol[@class='toplist']/li"
            );
        }

        #[test]
        fn test_locators_are_comparable() {
            assert_eq!(Locator::css("a"), Locator::css("a"));
            assert_ne!(Locator::css("a"), Locator::tag("a"));
        }
    }

    mod canonical_name_tests {
        use super::*;

        #[test]
        fn test_lowercases_and_joins() {
            assert_eq!(canonical_name("Top Rated"), "top_rated");
            assert_eq!(canonical_name("Featured"), "featured");
        }

        #[test]
        fn test_trims_surrounding_whitespace() {
            assert_eq!(canonical_name("  Other Applications "), "other_applications");
        }
    }

    mod locator_map_tests {
        use super::*;

        fn sample_map() -> LocatorMap {
            LocatorMap::new()
                .with("explore_top_rated_link", Locator::css("#side-nav .s-rating a"))
                .with("extensions_menu_link", Locator::css("#extensions > a"))
        }

        #[test]
        fn test_get_exact_key() {
            let map = sample_map();
            let locator = map.get("extensions_menu_link").unwrap();
            assert_eq!(locator.selector(), "#extensions > a");
        }

        #[test]
        fn test_resolve_normalizes_free_form_name() {
            let map = sample_map();
            let by_name = map.resolve("Explore Top Rated Link").unwrap();
            let literal = map.get("explore_top_rated_link").unwrap();
            assert_eq!(by_name, literal);
        }

        #[test]
        fn test_missing_key_is_lookup_error() {
            let map = sample_map();
            match map.get("explore_newest_link") {
                Err(FeriaError::LocatorLookup { name }) => {
                    assert_eq!(name, "explore_newest_link");
                }
                other => panic!("expected LocatorLookup, got {other:?}"),
            }
        }

        #[test]
        fn test_len_and_names() {
            let map = sample_map();
            assert_eq!(map.len(), 2);
            assert!(!map.is_empty());
            assert!(map.names().contains(&"extensions_menu_link"));
        }
    }
}
