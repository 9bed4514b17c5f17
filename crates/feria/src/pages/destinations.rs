//! Destination pages reached by home-page navigation actions.
//!
//! These are deliberately thin: a URL pattern, a readiness marker, and a
//! representative accessor each. Navigation methods construct them through
//! their `attach` factories and wait on the readiness contract before
//! returning them, so a test holding one knows the browser got there.

use crate::locator::Locator;
use crate::page::{Page, UrlPattern};
use crate::result::FeriaResult;
use crate::session::SessionHandle;

/// Add-on details page, reached by clicking an add-on link.
#[derive(Debug, Clone)]
pub struct DetailsPage {
    session: SessionHandle,
}

impl DetailsPage {
    /// Bind to a details page the session is already on
    #[must_use]
    pub fn attach(session: SessionHandle) -> Self {
        Self { session }
    }

    /// Add-on name from the page heading
    pub fn addon_name(&self) -> FeriaResult<String> {
        self.text_of(&Locator::css("#addon h1.addon"))
    }
}

impl Page for DetailsPage {
    fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn url_pattern(&self) -> UrlPattern {
        UrlPattern::Contains("/addon/".to_string())
    }

    fn ready_marker(&self) -> Locator {
        Locator::id("addon")
    }

    fn page_name(&self) -> &'static str {
        "details"
    }
}

/// Themes listing, reached from the featured-themes see-all link.
#[derive(Debug, Clone)]
pub struct ThemesPage {
    session: SessionHandle,
}

impl ThemesPage {
    /// Bind to a themes page the session is already on
    #[must_use]
    pub fn attach(session: SessionHandle) -> Self {
        Self { session }
    }

    /// Listing heading
    pub fn heading(&self) -> FeriaResult<String> {
        self.text_of(&Locator::css("#themes > h2"))
    }
}

impl Page for ThemesPage {
    fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn url_pattern(&self) -> UrlPattern {
        UrlPattern::Contains("/themes".to_string())
    }

    fn ready_marker(&self) -> Locator {
        Locator::id("themes")
    }

    fn page_name(&self) -> &'static str {
        "themes"
    }
}

/// Collections listing, reached from the featured-collections see-all link.
#[derive(Debug, Clone)]
pub struct CollectionsPage {
    session: SessionHandle,
}

impl CollectionsPage {
    /// Bind to a collections page the session is already on
    #[must_use]
    pub fn attach(session: SessionHandle) -> Self {
        Self { session }
    }

    /// Listing heading
    pub fn heading(&self) -> FeriaResult<String> {
        self.text_of(&Locator::css("#collections > h2"))
    }
}

impl Page for CollectionsPage {
    fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn url_pattern(&self) -> UrlPattern {
        UrlPattern::Contains("/collections".to_string())
    }

    fn ready_marker(&self) -> Locator {
        Locator::id("collections")
    }

    fn page_name(&self) -> &'static str {
        "collections"
    }
}

/// Extensions listing, reached from the explore side-navigation links.
#[derive(Debug, Clone)]
pub struct ExtensionsHomePage {
    session: SessionHandle,
}

impl ExtensionsHomePage {
    /// Bind to an extensions listing the session is already on
    #[must_use]
    pub fn attach(session: SessionHandle) -> Self {
        Self { session }
    }

    /// Listing title
    pub fn title(&self) -> FeriaResult<String> {
        self.text_of(&Locator::css("#extensions-home h1"))
    }
}

impl Page for ExtensionsHomePage {
    fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn url_pattern(&self) -> UrlPattern {
        UrlPattern::Contains("/extensions".to_string())
    }

    fn ready_marker(&self) -> Locator {
        Locator::id("extensions-home")
    }

    fn page_name(&self) -> &'static str {
        "extensions-home"
    }
}

/// Single-category listing, reached by clicking a sidebar category.
#[derive(Debug, Clone)]
pub struct CategoryPage {
    session: SessionHandle,
}

impl CategoryPage {
    /// Bind to a category listing the session is already on
    #[must_use]
    pub fn attach(session: SessionHandle) -> Self {
        Self { session }
    }

    /// Category title
    pub fn title(&self) -> FeriaResult<String> {
        self.text_of(&Locator::css(".category-listing h1"))
    }
}

impl Page for CategoryPage {
    fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn url_pattern(&self) -> UrlPattern {
        UrlPattern::Contains("/category/".to_string())
    }

    fn ready_marker(&self) -> Locator {
        Locator::css(".category-listing")
    }

    fn page_name(&self) -> &'static str {
        "category"
    }
}

/// User profile page, reached by clicking an add-on author.
#[derive(Debug, Clone)]
pub struct UserProfilePage {
    session: SessionHandle,
}

impl UserProfilePage {
    /// Bind to a profile page the session is already on
    #[must_use]
    pub fn attach(session: SessionHandle) -> Self {
        Self { session }
    }

    /// Display name from the profile header
    pub fn username(&self) -> FeriaResult<String> {
        self.text_of(&Locator::css("#profile h1.username"))
    }
}

impl Page for UserProfilePage {
    fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn url_pattern(&self) -> UrlPattern {
        // Profile routes are /user/<numeric id>/
        UrlPattern::Regex(r"/user/\d+/?".to_string())
    }

    fn ready_marker(&self) -> Locator {
        Locator::id("profile")
    }

    fn page_name(&self) -> &'static str {
        "user-profile"
    }
}
