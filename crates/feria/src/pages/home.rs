//! The marketplace home page object.
//!
//! Wraps the storefront landing page: the most-popular list, the featured
//! extensions/themes/collections rails, the explore side navigation, and
//! the sidebar category list. Accessors resolve their locators fresh on
//! every call; nothing observed from the document is cached.

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::locator::{canonical_name, Locator, LocatorMap};
use crate::page::{Page, UrlPattern};
use crate::result::FeriaResult;
use crate::session::{ElementRef, Gesture, SessionHandle};
use crate::text::strip_embedded;

use super::destinations::{CollectionsPage, DetailsPage, ExtensionsHomePage, ThemesPage};
use super::regions::{CategoryItem, FeaturedExtensionItem, MostPopularItem, UpAndComingIsland};

// Fixed home page structure.
const LOGO_LINK: &str = "h1.site-title > a";
const FIRST_ADDON: &str = ".summary > a > h3";
const PROMO_BOX: &str = "section#promos";
const SIDE_NAV: &str = "#side-nav";
const UP_AND_COMING: &str = "upandcoming";

// Most-popular list.
const MOST_POPULAR_ITEMS: &str = "ol.toplist li";
const MOST_POPULAR_HEADING: &str = "#homepage > .secondary h2";

// Explore side navigation.
const EXPLORE_HEADER: &str = "#side-nav > h2:nth-child(1)";

// Featured rails.
const FEATURED_THEMES_TITLE: &str = "#featured-themes h2";
const FEATURED_THEMES_SEE_ALL: &str = "#featured-themes h2 a";
const FEATURED_THEMES_ITEMS: &str = "#featured-themes li";
const FEATURED_COLLECTIONS_TITLE: &str = "#featured-collections h2";
const FEATURED_COLLECTIONS_ITEMS: &str = "#featured-collections section:nth-child(1) li";
const FEATURED_EXTENSIONS_TITLE: &str = "#featured-extensions > h2";
const FEATURED_EXTENSIONS_SEE_ALL: &str = "#featured-extensions > h2 > a";
const FEATURED_EXTENSIONS_ITEMS: &str = "#featured-extensions section:nth-child(1) > li";

// Category sidebar.
const CATEGORY_ITEMS: &str = "ul#side-categories li";

/// Name-keyed links resolved by the free-form accessors.
fn link_locators() -> LocatorMap {
    LocatorMap::new()
        .with(
            "explore_featured_link",
            Locator::css("#side-nav .s-featured a"),
        )
        .with(
            "explore_popular_link",
            Locator::css("#side-nav .s-users a"),
        )
        .with(
            "explore_top_rated_link",
            Locator::css("#side-nav .s-rating a"),
        )
        .with("other_applications_link", Locator::id("other-apps"))
        .with("extensions_menu_link", Locator::css("#extensions > a"))
}

/// The marketplace home page.
///
/// Holds the shared session handle, the site configuration it was created
/// with, and the explicit locator map behind the name-resolved lookups.
#[derive(Debug, Clone)]
pub struct Home {
    session: SessionHandle,
    config: SiteConfig,
    links: LocatorMap,
}

impl Home {
    /// Navigate the session to the configured base URL, then bind once the
    /// page reports loaded
    pub fn open(session: SessionHandle, config: SiteConfig) -> FeriaResult<Self> {
        tracing::debug!(url = %config.base_url, "opening marketplace home");
        session.navigate(&config.base_url)?;
        let home = Self::attach(session, config);
        home.wait_until_loaded(&home.config.default_wait)?;
        Ok(home)
    }

    /// Bind to a home page the session is already on, without navigating
    #[must_use]
    pub fn attach(session: SessionHandle, config: SiteConfig) -> Self {
        Self {
            session,
            config,
            links: link_locators(),
        }
    }

    // ------------------------------------------------------------------
    // Text and count accessors
    // ------------------------------------------------------------------

    /// Heading above the most-popular list
    pub fn most_popular_heading(&self) -> FeriaResult<String> {
        self.text_of(&Locator::css(MOST_POPULAR_HEADING))
    }

    /// Number of entries in the most-popular list at call time
    pub fn most_popular_count(&self) -> FeriaResult<usize> {
        self.count_of(&Locator::css(MOST_POPULAR_ITEMS))
    }

    /// Featured-themes rail title
    pub fn featured_themes_title(&self) -> FeriaResult<String> {
        self.text_of(&Locator::css(FEATURED_THEMES_TITLE))
    }

    /// Number of tiles in the featured-themes rail
    pub fn featured_themes_count(&self) -> FeriaResult<usize> {
        self.count_of(&Locator::css(FEATURED_THEMES_ITEMS))
    }

    /// Featured-collections rail title
    pub fn featured_collections_title(&self) -> FeriaResult<String> {
        self.text_of(&Locator::css(FEATURED_COLLECTIONS_TITLE))
    }

    /// Number of tiles in the featured-collections rail
    pub fn featured_collections_count(&self) -> FeriaResult<usize> {
        self.count_of(&Locator::css(FEATURED_COLLECTIONS_ITEMS))
    }

    /// Text of the featured-extensions see-all link
    pub fn featured_extensions_see_all(&self) -> FeriaResult<String> {
        self.text_of(&Locator::css(FEATURED_EXTENSIONS_SEE_ALL))
    }

    /// Featured-extensions rail title, with the see-all link's own text
    /// stripped out of the combined heading
    pub fn featured_extensions_title(&self) -> FeriaResult<String> {
        let combined = self.text_of(&Locator::css(FEATURED_EXTENSIONS_TITLE))?;
        let see_all = self.featured_extensions_see_all()?;
        Ok(strip_embedded(&combined, &see_all))
    }

    /// Number of tiles in the featured-extensions rail
    pub fn featured_extensions_count(&self) -> FeriaResult<usize> {
        self.count_of(&Locator::css(FEATURED_EXTENSIONS_ITEMS))
    }

    /// Header above the explore side navigation
    pub fn explore_side_nav_header(&self) -> FeriaResult<String> {
        self.text_of(&Locator::css(EXPLORE_HEADER))
    }

    /// Text of the explore "Featured" link
    pub fn explore_featured_link_text(&self) -> FeriaResult<String> {
        self.text_of(self.links.get("explore_featured_link")?)
    }

    /// Text of the explore "Popular" link
    pub fn explore_popular_link_text(&self) -> FeriaResult<String> {
        self.text_of(self.links.get("explore_popular_link")?)
    }

    /// Text of the explore "Top Rated" link
    pub fn explore_top_rated_link_text(&self) -> FeriaResult<String> {
        self.text_of(self.links.get("explore_top_rated_link")?)
    }

    /// Whether the promo box is currently visible
    pub fn promo_box_present(&self) -> FeriaResult<bool> {
        self.session.is_element_visible(&Locator::css(PROMO_BOX))
    }

    /// Title attribute of a named header link, resolved by name
    /// normalization against the locator map ("other applications" looks
    /// up the other-applications link)
    ///
    /// # Errors
    ///
    /// Fails with [`crate::FeriaError::LocatorLookup`] for unknown names.
    pub fn link_title(&self, name: &str) -> FeriaResult<Option<String>> {
        let key = format!("{}_link", canonical_name(name));
        let locator = self.links.get(&key)?;
        self.session.find_element(locator)?.attribute("title")
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Move the pointer onto the marketplace logo without clicking
    pub fn hover_over_title(&self) -> FeriaResult<()> {
        let logo = self.session.find_element(&Locator::css(LOGO_LINK))?;
        self.session.perform(&Gesture::hover(logo))
    }

    /// Click the first add-on on the page and land on its details page
    pub fn click_on_first_addon(&self) -> FeriaResult<DetailsPage> {
        let addon = self.session.find_element(&Locator::css(FIRST_ADDON))?;
        tracing::debug!("opening first add-on");
        addon.click()?;
        self.land(DetailsPage::attach(Rc::clone(&self.session)))
    }

    /// Click one of the explore side-navigation links by free-form name
    /// ("Featured", "Popular", "Top Rated") and land on the extensions
    /// listing
    ///
    /// # Errors
    ///
    /// Fails with [`crate::FeriaError::LocatorLookup`] when the name does
    /// not resolve to a known explore link.
    pub fn click_to_explore(&self, target: &str) -> FeriaResult<ExtensionsHomePage> {
        let key = format!("explore_{}_link", canonical_name(target));
        let locator = self.links.get(&key)?;
        let link = self.session.find_element(locator)?;
        tracing::debug!(link = %key, "exploring extensions listing");
        link.click()?;
        self.land(ExtensionsHomePage::attach(Rc::clone(&self.session)))
    }

    /// Click the featured-themes see-all link and land on the themes
    /// listing
    pub fn click_featured_themes_see_all(&self) -> FeriaResult<ThemesPage> {
        let link = self
            .session
            .find_element(&Locator::css(FEATURED_THEMES_SEE_ALL))?;
        tracing::debug!("opening themes listing");
        link.click()?;
        self.land(ThemesPage::attach(Rc::clone(&self.session)))
    }

    /// Click the featured-collections see-all link (nested inside the rail
    /// heading) and land on the collections listing
    pub fn click_featured_collections_see_all(&self) -> FeriaResult<CollectionsPage> {
        let heading = self
            .session
            .find_element(&Locator::css(FEATURED_COLLECTIONS_TITLE))?;
        let link = heading.find_element(&Locator::css("a"))?;
        tracing::debug!("opening collections listing");
        link.click()?;
        self.land(CollectionsPage::attach(Rc::clone(&self.session)))
    }

    // ------------------------------------------------------------------
    // Collection accessors
    // ------------------------------------------------------------------

    /// Sidebar categories, one region per list entry, in document order.
    /// Recomputed fresh on every call.
    pub fn categories(&self) -> FeriaResult<Vec<CategoryItem>> {
        let elements = self.session.find_elements(&Locator::css(CATEGORY_ITEMS))?;
        Ok(elements
            .into_iter()
            .map(|root| CategoryItem::new(Rc::clone(&self.session), self.config.clone(), root))
            .collect())
    }

    /// Wrap an element the caller already located as a category region
    #[must_use]
    pub fn category_from(&self, element: ElementRef) -> CategoryItem {
        CategoryItem::new(Rc::clone(&self.session), self.config.clone(), element)
    }

    /// Most-popular entries, one region per list item, in document order
    pub fn most_popular_items(&self) -> FeriaResult<Vec<MostPopularItem>> {
        let elements = self
            .session
            .find_elements(&Locator::css(MOST_POPULAR_ITEMS))?;
        Ok(elements.into_iter().map(MostPopularItem::new).collect())
    }

    /// Featured-extension tiles, one region per tile, in document order
    pub fn featured_extensions(&self) -> FeriaResult<Vec<FeaturedExtensionItem>> {
        let elements = self
            .session
            .find_elements(&Locator::css(FEATURED_EXTENSIONS_ITEMS))?;
        Ok(elements
            .into_iter()
            .map(|root| {
                FeaturedExtensionItem::new(Rc::clone(&self.session), self.config.clone(), root)
            })
            .collect())
    }

    /// The up-and-coming island region
    pub fn up_and_coming_island(&self) -> FeriaResult<UpAndComingIsland> {
        let root = self.session.find_element(&Locator::id(UP_AND_COMING))?;
        Ok(UpAndComingIsland::new(root))
    }

    fn land<P: Page>(&self, page: P) -> FeriaResult<P> {
        page.wait_until_loaded(&self.config.default_wait)?;
        Ok(page)
    }
}

impl Page for Home {
    fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn url_pattern(&self) -> UrlPattern {
        UrlPattern::Prefix(self.config.base_url.clone())
    }

    fn ready_marker(&self) -> Locator {
        Locator::css(SIDE_NAV)
    }

    fn page_name(&self) -> &'static str {
        "home"
    }
}
