//! Page-load entry flow: route check, fetch, then render/style/wire.

use carousel_source::ProductSource;
use carousel_store::{CarouselStorage, KeyValueStore};
use carousel_widget::{
    is_home_route, mount, Element, InteractionController, Page, RandomSource, Selector,
    WidgetSettings,
};

/// Outcome of one page load.
#[derive(Debug)]
pub(crate) enum PageLoad {
    /// The path is not the home route; nothing was fetched.
    WrongPage,
    /// No products from the feed or the cache; the page is untouched.
    NoProducts,
    /// The carousel was mounted and events are wired.
    Mounted(InteractionController),
}

/// Runs the carousel script against `page` once.
pub(crate) async fn load_carousel<S, R>(
    page: &mut Page,
    source: &ProductSource,
    storage: &mut CarouselStorage<S>,
    settings: &WidgetSettings,
    random: &mut R,
) -> PageLoad
where
    S: KeyValueStore,
    R: RandomSource + ?Sized,
{
    if !is_home_route(page.path()) {
        tracing::warn!(path = %page.path(), "wrong page; carousel not loaded");
        return PageLoad::WrongPage;
    }
    tracing::info!(path = %page.path(), "home page detected");

    let products = source.fetch_products(storage).await;
    match mount(page, &products, storage, settings, random) {
        Some(controller) => PageLoad::Mounted(controller),
        None => {
            tracing::info!("no products available; carousel skipped");
            PageLoad::NoProducts
        }
    }
}

/// A bare storefront page with the anchor element between a header and a
/// footer.
pub(crate) fn host_page(path: &str, viewport_width: u32, anchor_selector: &str) -> Page {
    let mut page = Page::new(path, viewport_width);
    page.head_mut()
        .append_child(Element::new("meta").with_attr("charset", "utf-8"));
    page.head_mut()
        .append_child(Element::new("title").with_text("e-bebek"));

    let mut main = Element::new("main").with_child(Element::new("header").with_class("site-header"));
    match Selector::parse(anchor_selector) {
        Ok(anchor) => main.append_child(anchor.to_element()),
        Err(e) => tracing::warn!(error = %e, "host page built without an anchor element"),
    }
    main.append_child(Element::new("footer").with_class("site-footer"));
    page.body_mut().append_child(main);
    page
}

#[cfg(test)]
#[path = "page_load_test.rs"]
mod tests;
