//! Example: touring the home page against the in-memory mock session.
//!
//! Run with: `cargo run --example home_tour`

use std::rc::Rc;

use feria_pages::mock::{MockElement, MockSession};
use feria_pages::{FeriaResult, Home, Locator, Page, SiteConfig};

fn main() -> FeriaResult<()> {
    let session = Rc::new(MockSession::new());

    // A minimal home page: readiness marker, most-popular list, one
    // featured-extension tile with a hover-revealed summary.
    session.install_one(&Locator::css("#side-nav"), MockElement::new("side-nav"));
    session.install_one(
        &Locator::css("#homepage > .secondary h2"),
        MockElement::new("heading").with_text("Most Popular Add-ons"),
    );
    session.install(
        &Locator::css("ol.toplist li"),
        vec![
            MockElement::new("item-1")
                .with_child(
                    &Locator::tag("span"),
                    MockElement::new("span-1").with_text("Ad Blocker"),
                )
                .with_child(
                    &Locator::css("small"),
                    MockElement::new("small-1").with_text("1,234,567 users"),
                ),
            MockElement::new("item-2")
                .with_child(
                    &Locator::tag("span"),
                    MockElement::new("span-2").with_text("Dark Mode"),
                )
                .with_child(
                    &Locator::css("small"),
                    MockElement::new("small-2").with_text("987 users"),
                ),
        ],
    );
    session.install_one(
        &Locator::css("#featured-extensions section:nth-child(1) > li"),
        MockElement::new("tile").with_flyout_child(
            &Locator::css("div.addon > div.more > .addon-summary"),
            MockElement::new("summary").with_text("Blocks trackers everywhere."),
        ),
    );

    let home = Home::open(MockSession::handle(&session), SiteConfig::new("https://market.example.com"))?;
    println!("home loaded: {}", home.is_loaded()?);
    println!("heading:     {}", home.most_popular_heading()?);

    for item in home.most_popular_items()? {
        println!("  {:>9} users  {}", item.users_number()?, item.name()?);
    }

    for tile in home.featured_extensions()? {
        println!("featured:    {}", tile.summary()?);
    }

    println!("\ninteraction history:");
    for entry in session.history() {
        println!("  {entry}");
    }

    Ok(())
}
