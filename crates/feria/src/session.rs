//! Abstract browser session interface consumed by page objects.
//!
//! Page objects never own the browser: they hold a shared [`SessionHandle`]
//! to an externally managed session and talk to the live document through
//! the [`Session`] and [`Element`] traits. The whole layer is synchronous
//! and single-threaded; handles are `Rc`, not `Arc`, and nothing here is
//! safe to share across threads.

use std::fmt;
use std::rc::Rc;

use crate::locator::Locator;
use crate::result::FeriaResult;

/// Shared handle to a live DOM element.
///
/// Elements are referenced, never owned; a handle goes stale when the page
/// reloads or the node is removed, and this layer does not guard against
/// that.
pub type ElementRef = Rc<dyn Element>;

/// Shared handle to the externally owned browser session.
pub type SessionHandle = Rc<dyn Session>;

/// A live DOM node handle.
///
/// Scoped `find_*` calls resolve relative to this element's subtree only,
/// which is what gives region objects their scoping guarantee.
pub trait Element: fmt::Debug {
    /// Visible text content of the element
    fn text(&self) -> FeriaResult<String>;

    /// Value of the named attribute, `None` when absent
    fn attribute(&self, name: &str) -> FeriaResult<Option<String>>;

    /// Click the element
    fn click(&self) -> FeriaResult<()>;

    /// Move the pointer onto the element without clicking
    fn hover(&self) -> FeriaResult<()>;

    /// First match for `locator` inside this element's subtree
    ///
    /// # Errors
    ///
    /// Fails with [`crate::FeriaError::ElementNotFound`] when nothing matches.
    fn find_element(&self, locator: &Locator) -> FeriaResult<ElementRef>;

    /// All matches inside this element's subtree, in document order
    /// (possibly empty)
    fn find_elements(&self, locator: &Locator) -> FeriaResult<Vec<ElementRef>>;
}

/// A composed pointer gesture, atomic from the caller's perspective.
///
/// Mirrors WebDriver action chains: move the pointer onto a target, then
/// optionally click it. Flyout panels that only render under a hovering
/// pointer are reached this way.
#[derive(Debug, Clone)]
pub enum Gesture {
    /// Move the pointer onto the target and stop there
    Hover {
        /// Element the pointer moves onto
        target: ElementRef,
    },
    /// Move the pointer onto the target, then click it
    HoverAndClick {
        /// Element the pointer moves onto and clicks
        target: ElementRef,
    },
}

impl Gesture {
    /// Hover-only gesture
    #[must_use]
    pub fn hover(target: ElementRef) -> Self {
        Self::Hover { target }
    }

    /// Hover-then-click gesture
    #[must_use]
    pub fn hover_and_click(target: ElementRef) -> Self {
        Self::HoverAndClick { target }
    }

    /// The gesture's target element
    #[must_use]
    pub fn target(&self) -> &ElementRef {
        match self {
            Self::Hover { target } | Self::HoverAndClick { target } => target,
        }
    }
}

/// Opaque handle to a running browser, shared by all page objects.
///
/// Implementations wrap whatever driver the harness uses. Every method
/// blocks the calling thread until the browser responds; timeout policy
/// beyond the explicit wait contract is the implementation's business.
pub trait Session: fmt::Debug {
    /// First match for `locator` in the whole document
    ///
    /// # Errors
    ///
    /// Fails with [`crate::FeriaError::ElementNotFound`] when nothing matches.
    fn find_element(&self, locator: &Locator) -> FeriaResult<ElementRef>;

    /// All matches in the whole document, in document order (possibly empty)
    fn find_elements(&self, locator: &Locator) -> FeriaResult<Vec<ElementRef>>;

    /// Load the given URL
    fn navigate(&self, url: &str) -> FeriaResult<()>;

    /// URL the session is currently on
    fn current_url(&self) -> FeriaResult<String>;

    /// Whether `locator` matches a currently visible element
    fn is_element_visible(&self, locator: &Locator) -> FeriaResult<bool>;

    /// Perform a composed pointer gesture.
    ///
    /// The default implementation sequences the element-level primitives;
    /// drivers with a native action-chain facility should override it.
    fn perform(&self, gesture: &Gesture) -> FeriaResult<()> {
        match gesture {
            Gesture::Hover { target } => target.hover(),
            Gesture::HoverAndClick { target } => {
                target.hover()?;
                target.click()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockElement;

    #[test]
    fn test_gesture_target_accessor() {
        let element: ElementRef = Rc::new(MockElement::new("logo"));
        let hover = Gesture::hover(Rc::clone(&element));
        let click = Gesture::hover_and_click(element);
        assert!(format!("{:?}", hover.target()).contains("logo"));
        assert!(matches!(click, Gesture::HoverAndClick { .. }));
    }
}
