//! Feria Pages: page-object layer for browser UI testing of the Feria
//! add-ons marketplace.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌───────────────────┐    ┌───────────────────┐
//! │ Test Harness │───►│ Page / Region     │───►│ Session trait     │
//! │ (external)   │    │ objects           │    │ (harness driver   │
//! │              │    │ (this crate)      │    │  or MockSession)  │
//! └──────────────┘    └───────────────────┘    └───────────────────┘
//! ```
//!
//! Page objects hold a shared [`Session`] handle and translate named,
//! semantically meaningful queries into locator resolutions against the
//! live document; region objects do the same scoped to one root element.
//! Navigation actions land on typed destination pages behind an explicit
//! readiness wait. Every failure surfaces immediately as a [`FeriaError`]:
//! this is test-assertion code, and a failure here should fail the test.

#![warn(missing_docs)]

mod config;
mod locator;
mod page;
mod result;
mod session;
mod text;
mod wait;

/// Concrete page and region objects for the marketplace UI
pub mod pages;

/// In-memory session doubles for testing page objects
pub mod mock;

pub use config::SiteConfig;
pub use locator::{canonical_name, Locator, LocatorMap, Strategy};
pub use page::{Page, UrlPattern};
pub use pages::destinations::{
    CategoryPage, CollectionsPage, DetailsPage, ExtensionsHomePage, ThemesPage, UserProfilePage,
};
pub use pages::home::Home;
pub use pages::regions::{
    CategoryItem, FeaturedExtensionItem, MostPopularItem, UpAndComingIsland,
};
pub use result::{FeriaError, FeriaResult};
pub use session::{Element, ElementRef, Gesture, Session, SessionHandle};
pub use text::{leading_count, strip_embedded};
pub use wait::{wait_for, WaitOptions, DEFAULT_POLL_INTERVAL_MS, DEFAULT_WAIT_TIMEOUT_MS};
