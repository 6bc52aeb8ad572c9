//! Assembles the carousel and inserts it into the host page.

use carousel_core::{AppConfig, Favorites, Product};

use crate::card::render_card;
use crate::dom::{Page, Selector};
use crate::materialize::{card_element, widget_element};
use crate::random::RandomSource;

/// Host-page placement and copy for the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSettings {
    pub title: String,
    /// Selector of the element the widget is inserted after.
    pub anchor_selector: String,
}

impl WidgetSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            title: config.title.clone(),
            anchor_selector: config.anchor_selector.clone(),
        }
    }
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// True for `/` and any path containing `index.html`: the only pages the
/// carousel loads on.
#[must_use]
pub fn is_home_route(path: &str) -> bool {
    path == "/" || path.contains("index.html")
}

/// Renders one card per product and inserts the carousel right after the
/// anchor element. Returns `false` (leaving the page untouched) when there
/// are no products or the anchor is missing.
pub fn build_widget<R: RandomSource + ?Sized>(
    page: &mut Page,
    products: &[Product],
    favorites: &Favorites,
    settings: &WidgetSettings,
    random: &mut R,
) -> bool {
    if products.is_empty() {
        return false;
    }
    let anchor = match Selector::parse(&settings.anchor_selector) {
        Ok(anchor) => anchor,
        Err(e) => {
            tracing::warn!(error = %e, "anchor selector is not usable; widget not inserted");
            return false;
        }
    };

    let cards = products
        .iter()
        .map(|product| card_element(&render_card(product, favorites, random)))
        .collect();
    let widget = widget_element(&settings.title, cards);

    if page.insert_after(&anchor, widget).is_err() {
        tracing::debug!(anchor = %settings.anchor_selector, "anchor element not found; widget not inserted");
        return false;
    }
    tracing::info!(cards = products.len(), "carousel inserted");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_route_detection() {
        assert!(is_home_route("/"));
        assert!(is_home_route("/index.html"));
        assert!(is_home_route("/tr/index.html?ref=mail"));
        assert!(!is_home_route("/kategori/bebek-bezi"));
        assert!(!is_home_route(""));
    }
}
