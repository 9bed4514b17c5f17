//! Region objects: page objects scoped to one root element.
//!
//! A region shares the page-object vocabulary but resolves every locator
//! against its root element only, never the whole document. Regions are
//! handed out by a parent page's collection accessors, one per matched
//! element, in document order. Their validity is tied to the root element:
//! when the document mutates underneath them they go stale, and nothing
//! here guards against that.

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::locator::Locator;
use crate::page::Page;
use crate::result::FeriaResult;
use crate::session::{ElementRef, Gesture, SessionHandle};
use crate::text::leading_count;

use super::destinations::{CategoryPage, UserProfilePage};

/// One entry of the sidebar category list.
#[derive(Debug, Clone)]
pub struct CategoryItem {
    session: SessionHandle,
    config: SiteConfig,
    root: ElementRef,
}

impl CategoryItem {
    pub(crate) fn new(session: SessionHandle, config: SiteConfig, root: ElementRef) -> Self {
        Self {
            session,
            config,
            root,
        }
    }

    /// Category name shown in the sidebar entry
    pub fn name(&self) -> FeriaResult<String> {
        self.root.text()
    }

    /// Click the category link and land on its listing page
    pub fn click_link(&self) -> FeriaResult<CategoryPage> {
        let link = self.root.find_element(&Locator::css("a"))?;
        tracing::debug!("opening category listing");
        link.click()?;
        let page = CategoryPage::attach(Rc::clone(&self.session));
        page.wait_until_loaded(&self.config.default_wait)?;
        Ok(page)
    }
}

/// One entry of the most-popular list.
#[derive(Debug, Clone)]
pub struct MostPopularItem {
    root: ElementRef,
}

impl MostPopularItem {
    pub(crate) fn new(root: ElementRef) -> Self {
        Self { root }
    }

    /// Add-on name from the entry's span
    pub fn name(&self) -> FeriaResult<String> {
        self.root.find_element(&Locator::tag("span"))?.text()
    }

    /// User count parsed from the `"1,234 users"` annotation
    ///
    /// # Errors
    ///
    /// Fails with [`crate::FeriaError::Parse`] when the annotation does not
    /// start with a number.
    pub fn users_number(&self) -> FeriaResult<u64> {
        let annotation = self.root.find_element(&Locator::css("small"))?.text()?;
        leading_count(&annotation)
    }
}

/// One tile of the featured-extensions rail.
///
/// The summary and byline live in a flyout panel that only renders while
/// the pointer hovers the tile, so the reading accessors perform the hover
/// themselves; callers never sequence it.
#[derive(Debug, Clone)]
pub struct FeaturedExtensionItem {
    session: SessionHandle,
    config: SiteConfig,
    root: ElementRef,
}

impl FeaturedExtensionItem {
    const AUTHOR: &'static str = "div.addon > div.more > div.byline > a";
    const SUMMARY: &'static str = "div.addon > div.more > .addon-summary";

    pub(crate) fn new(session: SessionHandle, config: SiteConfig, root: ElementRef) -> Self {
        Self {
            session,
            config,
            root,
        }
    }

    /// Add-on summary from the flyout panel
    pub fn summary(&self) -> FeriaResult<String> {
        self.reveal_flyout()?;
        self.root.find_element(&Locator::css(Self::SUMMARY))?.text()
    }

    /// All author names from the flyout byline, in document order
    pub fn author_names(&self) -> FeriaResult<Vec<String>> {
        self.reveal_flyout()?;
        self.root
            .find_elements(&Locator::css(Self::AUTHOR))?
            .iter()
            .map(|author| author.text())
            .collect()
    }

    /// Hover onto the first author link, click it, and land on the
    /// author's profile page
    pub fn click_first_author(&self) -> FeriaResult<UserProfilePage> {
        self.reveal_flyout()?;
        let author = self.root.find_element(&Locator::css(Self::AUTHOR))?;
        tracing::debug!("opening author profile");
        self.session
            .perform(&Gesture::hover_and_click(author))?;
        let page = UserProfilePage::attach(Rc::clone(&self.session));
        page.wait_until_loaded(&self.config.default_wait)?;
        Ok(page)
    }

    fn reveal_flyout(&self) -> FeriaResult<()> {
        self.session
            .perform(&Gesture::hover(Rc::clone(&self.root)))
    }
}

/// The up-and-coming island on the home page.
#[derive(Debug, Clone)]
pub struct UpAndComingIsland {
    root: ElementRef,
}

impl UpAndComingIsland {
    pub(crate) fn new(root: ElementRef) -> Self {
        Self { root }
    }

    /// Island heading text
    pub fn heading(&self) -> FeriaResult<String> {
        self.root.find_element(&Locator::tag("h2"))?.text()
    }

    /// Number of add-ons listed in the island
    pub fn addon_count(&self) -> FeriaResult<usize> {
        Ok(self.root.find_elements(&Locator::tag("li"))?.len())
    }
}
