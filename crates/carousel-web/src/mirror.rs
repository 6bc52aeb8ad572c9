//! Shadow-page helpers shared by the browser host and its tests.

use carousel_widget::{Element, InteractionController, Page, Selector, STYLESHEET_ID};

/// Inline style the controller last applied to a scroll button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
    pub opacity: String,
    pub pointer_events: String,
}

/// Everything the live document must reflect after an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub prev: Option<ButtonStyle>,
    pub next: Option<ButtonStyle>,
    /// `(product id, heart filled)` per card, in page order.
    pub favorites: Vec<(i64, bool)>,
    /// Strip offset in px; `None` when scrolling is not wired.
    pub scroll_left: Option<u32>,
}

/// Shadow of the live page: an empty body holding an element for the
/// anchor when the live document has one.
#[must_use]
pub fn shadow_page(path: &str, viewport_width: u32, anchor: Option<&Selector>) -> Page {
    let mut page = Page::new(path, viewport_width);
    if let Some(anchor) = anchor {
        page.body_mut().append_child(anchor.to_element());
    }
    page
}

/// HTML of the inserted carousel, or `None` when it was not inserted.
#[must_use]
pub fn widget_markup(page: &Page) -> Option<String> {
    page.query_selector(&Selector::classes(&["carousel-main-wrapper"]))
        .map(Element::to_html)
}

/// HTML of the injected `<style>` element.
#[must_use]
pub fn stylesheet_markup(page: &Page) -> Option<String> {
    page.get_element_by_id(STYLESHEET_ID).map(Element::to_html)
}

#[must_use]
pub fn view_state(page: &Page, controller: &InteractionController) -> ViewState {
    let button = |which: &str| {
        let el = page.query_selector(&Selector::classes(&["carousel-button", which]))?;
        Some(ButtonStyle {
            opacity: el.style("opacity")?.to_owned(),
            pointer_events: el.style("pointer-events")?.to_owned(),
        })
    };
    let heart = Selector::classes(&["favorite-button"]);
    let favorites = page
        .query_selector_all(&Selector::classes(&["product-card"]))
        .into_iter()
        .filter_map(|card| {
            let id = card.data("product-id")?.parse().ok()?;
            let filled = card
                .query_selector(&heart)
                .is_some_and(|b| b.has_class("filled"));
            Some((id, filled))
        })
        .collect();

    ViewState {
        prev: button("prev"),
        next: button("next"),
        favorites,
        scroll_left: controller.scroll_left(),
    }
}

#[cfg(test)]
#[path = "mirror_test.rs"]
mod tests;
