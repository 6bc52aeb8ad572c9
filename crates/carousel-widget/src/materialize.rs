//! Turns view-models into page elements.

use crate::card::{Badge, CardView, PriceView};
use crate::dom::Element;

/// Heart outline shared by every favorite button.
const HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";

/// Builds the `.product-card` element for one card view.
#[must_use]
pub fn card_element(view: &CardView) -> Element {
    let mut favorite = Element::new("button").with_class("favorite-button").with_child(
        Element::new("svg")
            .with_attr("viewBox", "0 0 24 24")
            .with_child(Element::new("path").with_attr("d", HEART_PATH)),
    );
    if view.favorite {
        favorite.add_class("filled");
    }

    let badges = Element::new("div")
        .with_class("badge-group")
        .with_children(view.badges.iter().map(|b| badge_element(*b)));

    let details = Element::new("div")
        .with_class("product-details")
        .with_child(
            Element::new("p")
                .with_class("product-title")
                .with_child(
                    Element::new("span")
                        .with_class("product-brand")
                        .with_text(&view.brand),
                )
                .with_text(&format!(" - {}", view.name)),
        )
        .with_child(
            Element::new("div")
                .with_class("product-rating")
                .with_child(Element::new("div").with_class("stars").with_text(view.stars))
                .with_child(
                    Element::new("span")
                        .with_class("review-count")
                        .with_text(&format!("({})", view.review_count)),
                ),
        )
        .with_child(price_element(&view.price))
        .with_child(promotion_element(view.promotion))
        .with_child(
            Element::new("button")
                .with_class("add-to-cart-button")
                .with_text(view.cta_label),
        );

    Element::new("div")
        .with_class("product-card")
        .with_attr("data-product-id", &view.product_id.to_string())
        .with_child(
            Element::new("div")
                .with_class("product-badges")
                .with_child(badges)
                .with_child(favorite),
        )
        .with_child(
            Element::new("img")
                .with_class("product-image")
                .with_attr("src", &view.image_url)
                .with_attr("alt", &view.name),
        )
        .with_child(details)
}

fn badge_element(badge: Badge) -> Element {
    Element::new("img")
        .with_class("badge")
        .with_attr("src", badge.image_url())
        .with_attr("alt", badge.alt())
}

fn price_element(price: &PriceView) -> Element {
    let mut discount_area = Element::new("div").with_class("discount-area");
    if let (Some(original), Some(label)) = (&price.original, price.discount_label()) {
        discount_area.append_child(
            Element::new("span")
                .with_class("original-price")
                .with_text(original),
        );
        discount_area.append_child(
            Element::new("span")
                .with_class("discount-percent")
                .with_text(&label),
        );
    }

    Element::new("div")
        .with_class("price-section")
        .with_child(discount_area)
        .with_child(
            Element::new("div")
                .with_class("current-price")
                .with_class(price.current_price_class())
                .with_text(&price.current),
        )
}

fn promotion_element(promotion: Option<&str>) -> Element {
    let area = Element::new("div").with_class("promotion-area");
    match promotion {
        Some(text) => area.with_child(
            Element::new("p")
                .with_class("product-promotion")
                .with_text(text),
        ),
        None => area,
    }
}

/// Builds the carousel shell around already-materialized cards.
#[must_use]
pub fn widget_element(title: &str, cards: Vec<Element>) -> Element {
    Element::new("div")
        .with_class("carousel-main-wrapper")
        .with_child(
            Element::new("button")
                .with_class("carousel-button prev")
                .with_attr("aria-label", "Önceki")
                .with_text("\u{2039}"),
        )
        .with_child(
            Element::new("div")
                .with_class("banner-container")
                .with_child(Element::new("h2").with_class("banner-title").with_text(title))
                .with_child(
                    Element::new("div").with_class("carousel-container").with_child(
                        Element::new("div")
                            .with_class("carousel-scrollable")
                            .with_children(cards),
                    ),
                ),
        )
        .with_child(
            Element::new("button")
                .with_class("carousel-button next")
                .with_attr("aria-label", "Sonraki")
                .with_text("\u{203a}"),
        )
}
