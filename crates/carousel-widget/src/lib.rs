//! Product carousel rendering and interaction.
//!
//! [`mount`] runs the render pipeline for an already-fetched product list:
//! build the widget after the anchor, inject the stylesheet once, and wire
//! the [`InteractionController`].

pub mod card;
pub mod carousel;
pub mod controller;
pub mod dom;
pub mod layout;
pub mod materialize;
pub mod random;
pub mod styles;

use carousel_core::Product;
use carousel_store::{CarouselStorage, KeyValueStore};

pub use card::{render_card, Badge, CardView, PriceView};
pub use carousel::{build_widget, is_home_route, WidgetSettings};
pub use controller::{ButtonStates, ClickTarget, InteractionController, OpenUrl, UiEvent};
pub use dom::{Element, Page, Selector};
pub use layout::Breakpoint;
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use styles::{inject_styles, stylesheet, STYLESHEET_ID};

/// Renders, styles, and wires the carousel for `products`.
///
/// An empty list skips all three steps and returns `None`. A missing anchor
/// only skips insertion: the stylesheet is still injected and the
/// controller is wired against whatever carousel markup the page has.
pub fn mount<S, R>(
    page: &mut Page,
    products: &[Product],
    storage: &CarouselStorage<S>,
    settings: &WidgetSettings,
    random: &mut R,
) -> Option<InteractionController>
where
    S: KeyValueStore,
    R: RandomSource + ?Sized,
{
    if products.is_empty() {
        return None;
    }
    let favorites = storage.favorites();
    build_widget(page, products, &favorites, settings, random);
    inject_styles(page);
    Some(InteractionController::wire(page, products))
}
