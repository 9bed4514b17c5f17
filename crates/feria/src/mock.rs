//! In-memory session and element doubles for testing page objects.
//!
//! [`MockSession`] is a queryable fake DOM: tests install [`MockElement`]
//! trees under the locators a page object will resolve, then assert on the
//! recorded interaction history (`navigate:`, `hover:`, `click:` entries).
//! Flyout children stay hidden until their parent has been hovered, which
//! lets tests verify that accessors sequence the reveal themselves.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::locator::Locator;
use crate::result::{FeriaError, FeriaResult};
use crate::session::{Element, ElementRef, Session, SessionHandle};

/// State shared between a session and every element installed in it.
#[derive(Debug, Default)]
struct SharedState {
    history: RefCell<Vec<String>>,
    url: RefCell<String>,
}

impl SharedState {
    fn record(&self, entry: String) {
        self.history.borrow_mut().push(entry);
    }
}

#[derive(Debug, Default)]
struct MockElementInner {
    label: String,
    text: RefCell<String>,
    attributes: RefCell<HashMap<String, String>>,
    children: RefCell<HashMap<String, Vec<MockElement>>>,
    flyout: RefCell<HashMap<String, Vec<MockElement>>>,
    navigates_to: RefCell<Option<String>>,
    hovered: Cell<bool>,
    clicks: Cell<u32>,
    state: RefCell<Option<Rc<SharedState>>>,
}

/// A fake DOM element.
///
/// Cloning is cheap and clones share the underlying node, so a handle kept
/// by the test observes clicks made through the page object under test.
#[derive(Debug, Clone, Default)]
pub struct MockElement {
    inner: Rc<MockElementInner>,
}

impl MockElement {
    /// Create an element with a label used in history entries
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(MockElementInner {
                label: label.into(),
                ..MockElementInner::default()
            }),
        }
    }

    /// Set the element's visible text
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        *self.inner.text.borrow_mut() = text.into();
        self
    }

    /// Set an attribute value
    #[must_use]
    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self
            .inner
            .attributes
            .borrow_mut()
            .insert(name.into(), value.into());
        self
    }

    /// Add a child reachable through a scoped find for `locator`
    #[must_use]
    pub fn with_child(self, locator: &Locator, child: Self) -> Self {
        self.inner
            .children
            .borrow_mut()
            .entry(locator.to_string())
            .or_default()
            .push(child);
        self
    }

    /// Add a child that only becomes findable after this element is hovered
    #[must_use]
    pub fn with_flyout_child(self, locator: &Locator, child: Self) -> Self {
        self.inner
            .flyout
            .borrow_mut()
            .entry(locator.to_string())
            .or_default()
            .push(child);
        self
    }

    /// Make a click on this element load `url` in the owning session
    #[must_use]
    pub fn with_navigation(self, url: impl Into<String>) -> Self {
        *self.inner.navigates_to.borrow_mut() = Some(url.into());
        self
    }

    /// Number of clicks this element has received
    #[must_use]
    pub fn click_count(&self) -> u32 {
        self.inner.clicks.get()
    }

    /// Whether the pointer has been moved onto this element
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.inner.hovered.get()
    }

    /// The label this element records history entries under
    #[must_use]
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    fn record(&self, action: &str) {
        if let Some(state) = self.inner.state.borrow().as_ref() {
            state.record(format!("{action}:{}", self.inner.label));
        }
    }

    /// Attach the owning session's shared state to this subtree.
    fn attach(&self, state: &Rc<SharedState>) {
        *self.inner.state.borrow_mut() = Some(Rc::clone(state));
        for children in self.inner.children.borrow().values() {
            for child in children {
                child.attach(state);
            }
        }
        for children in self.inner.flyout.borrow().values() {
            for child in children {
                child.attach(state);
            }
        }
    }

    /// Matches for `locator` in this subtree: regular children first, then
    /// flyout children once the element has been hovered.
    fn matches(&self, locator: &Locator) -> Vec<Self> {
        let key = locator.to_string();
        let mut found = self
            .inner
            .children
            .borrow()
            .get(&key)
            .cloned()
            .unwrap_or_default();
        if self.inner.hovered.get() {
            if let Some(revealed) = self.inner.flyout.borrow().get(&key) {
                found.extend(revealed.iter().cloned());
            }
        }
        found
    }
}

impl Element for MockElement {
    fn text(&self) -> FeriaResult<String> {
        Ok(self.inner.text.borrow().clone())
    }

    fn attribute(&self, name: &str) -> FeriaResult<Option<String>> {
        Ok(self.inner.attributes.borrow().get(name).cloned())
    }

    fn click(&self) -> FeriaResult<()> {
        self.inner.clicks.set(self.inner.clicks.get() + 1);
        self.record("click");
        if let Some(url) = self.inner.navigates_to.borrow().as_ref() {
            if let Some(state) = self.inner.state.borrow().as_ref() {
                *state.url.borrow_mut() = url.clone();
            }
        }
        Ok(())
    }

    fn hover(&self) -> FeriaResult<()> {
        self.inner.hovered.set(true);
        self.record("hover");
        Ok(())
    }

    fn find_element(&self, locator: &Locator) -> FeriaResult<ElementRef> {
        self.matches(locator)
            .into_iter()
            .next()
            .map(|element| Rc::new(element) as ElementRef)
            .ok_or_else(|| FeriaError::ElementNotFound {
                selector: locator.to_string(),
            })
    }

    fn find_elements(&self, locator: &Locator) -> FeriaResult<Vec<ElementRef>> {
        Ok(self
            .matches(locator)
            .into_iter()
            .map(|element| Rc::new(element) as ElementRef)
            .collect())
    }
}

/// A fake browser session backed by installed element trees.
#[derive(Debug, Default)]
pub struct MockSession {
    roots: RefCell<HashMap<String, Vec<MockElement>>>,
    visible: RefCell<HashSet<String>>,
    state: Rc<SharedState>,
}

impl MockSession {
    /// Create an empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install elements as the document-scope matches for `locator`,
    /// in document order
    pub fn install(&self, locator: &Locator, elements: Vec<MockElement>) {
        for element in &elements {
            element.attach(&self.state);
        }
        let _ = self
            .roots
            .borrow_mut()
            .insert(locator.to_string(), elements);
    }

    /// Install a single element as the match for `locator`
    pub fn install_one(&self, locator: &Locator, element: MockElement) {
        self.install(locator, vec![element]);
    }

    /// Mark `locator` as matching a visible element
    pub fn set_visible(&self, locator: &Locator) {
        let _ = self.visible.borrow_mut().insert(locator.to_string());
    }

    /// Set the URL the session reports without recording a navigation
    pub fn set_url(&self, url: impl Into<String>) {
        *self.state.url.borrow_mut() = url.into();
    }

    /// Recorded interaction history, oldest first
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.state.history.borrow().clone()
    }

    /// Whether any history entry starts with `prefix`
    #[must_use]
    pub fn was_called(&self, prefix: &str) -> bool {
        self.state
            .history
            .borrow()
            .iter()
            .any(|entry| entry.starts_with(prefix))
    }

    /// Number of history entries starting with `prefix`
    #[must_use]
    pub fn call_count(&self, prefix: &str) -> usize {
        self.state
            .history
            .borrow()
            .iter()
            .filter(|entry| entry.starts_with(prefix))
            .count()
    }

    /// Type-erased handle for constructing page objects, leaving the
    /// caller a typed handle for installs and history assertions
    #[must_use]
    pub fn handle(session: &Rc<Self>) -> SessionHandle {
        Rc::clone(session) as SessionHandle
    }
}

impl Session for MockSession {
    fn find_element(&self, locator: &Locator) -> FeriaResult<ElementRef> {
        self.roots
            .borrow()
            .get(&locator.to_string())
            .and_then(|elements| elements.first().cloned())
            .map(|element| Rc::new(element) as ElementRef)
            .ok_or_else(|| FeriaError::ElementNotFound {
                selector: locator.to_string(),
            })
    }

    fn find_elements(&self, locator: &Locator) -> FeriaResult<Vec<ElementRef>> {
        Ok(self
            .roots
            .borrow()
            .get(&locator.to_string())
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(|element| Rc::new(element) as ElementRef)
            .collect())
    }

    fn navigate(&self, url: &str) -> FeriaResult<()> {
        self.state.record(format!("navigate:{url}"));
        *self.state.url.borrow_mut() = url.to_string();
        Ok(())
    }

    fn current_url(&self) -> FeriaResult<String> {
        Ok(self.state.url.borrow().clone())
    }

    fn is_element_visible(&self, locator: &Locator) -> FeriaResult<bool> {
        Ok(self.visible.borrow().contains(&locator.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_locator() -> Locator {
        Locator::css("ol.toplist li")
    }

    mod element_tests {
        use super::*;

        #[test]
        fn test_text_and_attribute() {
            let element = MockElement::new("link")
                .with_text("Featured")
                .with_attribute("title", "See featured add-ons");
            assert_eq!(element.text().unwrap(), "Featured");
            assert_eq!(
                element.attribute("title").unwrap().as_deref(),
                Some("See featured add-ons")
            );
            assert!(element.attribute("href").unwrap().is_none());
        }

        #[test]
        fn test_scoped_find_misses_outside_subtree() {
            let child = MockElement::new("name").with_text("Tools");
            let root = MockElement::new("item").with_child(&Locator::tag("span"), child);

            assert!(root.find_element(&Locator::tag("span")).is_ok());
            match root.find_element(&Locator::tag("small")) {
                Err(FeriaError::ElementNotFound { selector }) => {
                    assert_eq!(selector, "tag:small");
                }
                other => panic!("expected ElementNotFound, got {other:?}"),
            }
        }

        #[test]
        fn test_flyout_child_hidden_until_hover() {
            let summary_locator = Locator::css(".addon-summary");
            let root = MockElement::new("extension")
                .with_flyout_child(&summary_locator, MockElement::new("summary"));

            assert!(root.find_element(&summary_locator).is_err());
            root.hover().unwrap();
            assert!(root.find_element(&summary_locator).is_ok());
        }

        #[test]
        fn test_clicks_are_counted_through_clones() {
            let element = MockElement::new("button");
            let seen_by_test = element.clone();
            element.click().unwrap();
            element.click().unwrap();
            assert_eq!(seen_by_test.click_count(), 2);
        }
    }

    mod session_tests {
        use super::*;

        #[test]
        fn test_find_elements_preserves_install_order() {
            let session = MockSession::new();
            session.install(
                &list_locator(),
                vec![
                    MockElement::new("first").with_text("1"),
                    MockElement::new("second").with_text("2"),
                    MockElement::new("third").with_text("3"),
                ],
            );

            let found = session.find_elements(&list_locator()).unwrap();
            let texts: Vec<String> = found.iter().map(|e| e.text().unwrap()).collect();
            assert_eq!(texts, vec!["1", "2", "3"]);
        }

        #[test]
        fn test_find_element_takes_first_match() {
            let session = MockSession::new();
            session.install(
                &list_locator(),
                vec![
                    MockElement::new("first").with_text("winner"),
                    MockElement::new("second").with_text("loser"),
                ],
            );

            let found = session.find_element(&list_locator()).unwrap();
            assert_eq!(found.text().unwrap(), "winner");
        }

        #[test]
        fn test_missing_locator_is_not_found() {
            let session = MockSession::new();
            assert!(session.find_element(&list_locator()).is_err());
            assert!(session.find_elements(&list_locator()).unwrap().is_empty());
        }

        #[test]
        fn test_navigation_is_recorded() {
            let session = MockSession::new();
            session.navigate("https://market.example.com/").unwrap();
            assert_eq!(
                session.current_url().unwrap(),
                "https://market.example.com/"
            );
            assert!(session.was_called("navigate:https://market.example.com/"));
        }

        #[test]
        fn test_click_navigation_updates_session_url() {
            let session = MockSession::new();
            let link_locator = Locator::css(".summary > a > h3");
            session.install_one(
                &link_locator,
                MockElement::new("first-addon").with_navigation("https://market.example.com/addon/1"),
            );

            let link = session.find_element(&link_locator).unwrap();
            link.click().unwrap();
            assert_eq!(
                session.current_url().unwrap(),
                "https://market.example.com/addon/1"
            );
        }

        #[test]
        fn test_history_preserves_interaction_order() {
            let session = MockSession::new();
            let root_locator = Locator::id("upandcoming");
            session.install_one(&root_locator, MockElement::new("island"));

            let island = session.find_element(&root_locator).unwrap();
            island.hover().unwrap();
            island.click().unwrap();

            assert_eq!(session.history(), vec!["hover:island", "click:island"]);
            assert_eq!(session.call_count("click:"), 1);
        }

        #[test]
        fn test_visibility_flags() {
            let session = MockSession::new();
            let promo = Locator::css("section#promos");
            assert!(!session.is_element_visible(&promo).unwrap());
            session.set_visible(&promo);
            assert!(session.is_element_visible(&promo).unwrap());
        }
    }
}
