//! Event wiring for a mounted carousel.
//!
//! The host delivers [`UiEvent`]s one at a time through
//! [`InteractionController::dispatch`]; the controller mutates the page
//! (button dimming, favorite fill) and persists favorites, and hands any
//! navigation back to the host as an [`OpenUrl`].

use carousel_core::products::find_product;
use carousel_core::Product;
use carousel_store::{CarouselStorage, KeyValueStore};

use crate::dom::{Element, Page, Selector};
use crate::layout::Breakpoint;

/// Opacity of a usable scroll button.
const ENABLED_OPACITY: &str = "1";
/// Opacity of a scroll button at its boundary.
const DISABLED_OPACITY: &str = "0.3";

/// What the user interacted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    PrevButton,
    NextButton,
    /// The heart on the card for this product id.
    FavoriteButton(i64),
    /// Anywhere else on the card for this product id, including the
    /// add-to-cart button, which has no handler of its own.
    Card(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Click(ClickTarget),
    /// The strip was scrolled (by touch, wheel, or keyboard) to `left` px.
    Scroll { left: u32 },
    /// The viewport changed width.
    Resize { width: u32 },
}

/// Navigation requested by a card click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenUrl {
    pub url: String,
    /// Browsing context name; cards always open in `_blank`.
    pub target: &'static str,
}

/// Enabled state of the two scroll buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Strip scroll offset and the number of cards it holds.
#[derive(Debug)]
struct ScrollWiring {
    left: u32,
    card_count: usize,
}

#[derive(Debug)]
pub struct InteractionController {
    products: Vec<Product>,
    /// Card ids present in the page when events were wired.
    card_ids: Vec<i64>,
    /// `None` when the strip or either button was missing at wiring time.
    scroll: Option<ScrollWiring>,
    prev: Selector,
    next: Selector,
    card: Selector,
    favorite: Selector,
}

impl InteractionController {
    /// Wires events against the widget currently in `page` and applies the
    /// initial button state.
    ///
    /// Scroll behaviour is wired only if the strip and both buttons exist;
    /// card handlers are wired for every `.product-card` found.
    pub fn wire(page: &mut Page, products: &[Product]) -> Self {
        let strip = Selector::classes(&["carousel-scrollable"]);
        let prev = Selector::classes(&["carousel-button", "prev"]);
        let next = Selector::classes(&["carousel-button", "next"]);
        let card = Selector::classes(&["product-card"]);
        let favorite = Selector::classes(&["favorite-button"]);

        let card_ids: Vec<i64> = page
            .query_selector_all(&card)
            .into_iter()
            .filter_map(|c| c.data("product-id")?.parse().ok())
            .collect();

        let scroll = match (
            page.query_selector(&strip),
            page.query_selector(&prev),
            page.query_selector(&next),
        ) {
            (Some(strip_el), Some(_), Some(_)) => Some(ScrollWiring {
                left: 0,
                card_count: strip_el.query_selector_all(&card).len(),
            }),
            _ => None,
        };

        let controller = Self {
            products: products.to_vec(),
            card_ids,
            scroll,
            prev,
            next,
            card,
            favorite,
        };
        controller.update_buttons(page);
        controller
    }

    /// Current strip scroll offset, if scrolling is wired.
    #[must_use]
    pub fn scroll_left(&self) -> Option<u32> {
        self.scroll.as_ref().map(|s| s.left)
    }

    /// True if a card for `id` was on the page when events were wired.
    #[must_use]
    pub fn has_card(&self, id: i64) -> bool {
        self.card_ids.contains(&id)
    }

    /// Handles one event. Returns the navigation a card click requests.
    pub fn dispatch<S: KeyValueStore>(
        &mut self,
        page: &mut Page,
        storage: &mut CarouselStorage<S>,
        event: UiEvent,
    ) -> Option<OpenUrl> {
        match event {
            UiEvent::Click(ClickTarget::PrevButton) => {
                self.scroll_by(page, false);
                None
            }
            UiEvent::Click(ClickTarget::NextButton) => {
                self.scroll_by(page, true);
                None
            }
            UiEvent::Click(ClickTarget::FavoriteButton(id)) => {
                // Handled here; the click does not reach the card.
                self.toggle_favorite(page, storage, id);
                None
            }
            UiEvent::Click(ClickTarget::Card(id)) => self.open_card(id),
            UiEvent::Scroll { left } => {
                if let Some(scroll) = self.scroll.as_mut() {
                    scroll.left = left;
                }
                self.clamp_scroll(page);
                self.update_buttons(page);
                None
            }
            UiEvent::Resize { width } => {
                page.set_viewport_width(width);
                self.clamp_scroll(page);
                self.update_buttons(page);
                None
            }
        }
    }

    /// Button state for the current offset and viewport, or `None` when
    /// scrolling is not wired.
    #[must_use]
    pub fn button_states(&self, page: &Page) -> Option<ButtonStates> {
        let scroll = self.scroll.as_ref()?;
        let breakpoint = Breakpoint::for_viewport(page.viewport_width());
        let (visible, total) = geometry(breakpoint, scroll.card_count);
        Some(ButtonStates {
            prev_enabled: scroll.left > 0,
            next_enabled: scroll.left + visible < total,
        })
    }

    fn scroll_by(&mut self, page: &mut Page, forward: bool) {
        let button = if forward { &self.next } else { &self.prev };
        let clickable = page
            .query_selector(button)
            .is_some_and(|b| b.style("pointer-events") != Some("none"));
        if !clickable {
            return;
        }
        let step = Breakpoint::for_viewport(page.viewport_width()).scroll_step();
        if let Some(scroll) = self.scroll.as_mut() {
            scroll.left = if forward {
                scroll.left.saturating_add(step)
            } else {
                scroll.left.saturating_sub(step)
            };
        }
        self.clamp_scroll(page);
        self.update_buttons(page);
    }

    fn clamp_scroll(&mut self, page: &Page) {
        let breakpoint = Breakpoint::for_viewport(page.viewport_width());
        if let Some(scroll) = self.scroll.as_mut() {
            let (visible, total) = geometry(breakpoint, scroll.card_count);
            scroll.left = scroll.left.min(total.saturating_sub(visible));
        }
    }

    fn update_buttons(&self, page: &mut Page) {
        let Some(states) = self.button_states(page) else {
            return;
        };
        if let Some(prev) = page.query_selector_mut(&self.prev) {
            apply_button_state(prev, states.prev_enabled);
        }
        if let Some(next) = page.query_selector_mut(&self.next) {
            apply_button_state(next, states.next_enabled);
        }
        tracing::trace!(
            prev = states.prev_enabled,
            next = states.next_enabled,
            "scroll buttons updated"
        );
    }

    /// Toggles the favorite state of the card for `id`, persists the set,
    /// and flips the heart's `filled` class.
    ///
    /// Returns the new state, or `None` when no card for `id` was wired (the
    /// click is ignored and storage is untouched). A failed save is logged;
    /// the page still reflects the toggle.
    pub fn toggle_favorite<S: KeyValueStore>(
        &self,
        page: &mut Page,
        storage: &mut CarouselStorage<S>,
        id: i64,
    ) -> Option<bool> {
        if !self.has_card(id) {
            return None;
        }
        let button = self.favorite_button_mut(page, id)?;

        let mut favorites = storage.favorites();
        let filled = favorites.toggle(id);
        if filled {
            button.add_class("filled");
        } else {
            button.remove_class("filled");
        }
        if let Err(e) = storage.save_favorites(&favorites) {
            tracing::warn!(product_id = id, error = %e, "could not persist favorites");
        }
        Some(filled)
    }

    fn favorite_button_mut<'p>(&self, page: &'p mut Page, id: i64) -> Option<&'p mut Element> {
        let wanted = id.to_string();
        let card = &self.card;
        page.body_mut()
            .find_mut(&|el: &Element| {
                el.matches(card) && el.data("product-id") == Some(wanted.as_str())
            })?
            .query_selector_mut(&self.favorite)
    }

    fn open_card(&self, id: i64) -> Option<OpenUrl> {
        if !self.has_card(id) {
            return None;
        }
        let url = find_product(&self.products, id)?.detail_url()?;
        tracing::info!(product_id = id, url, "opening product page");
        Some(OpenUrl {
            url: url.to_owned(),
            target: "_blank",
        })
    }
}

/// `(visible width, scrollable width)` of the strip in px.
fn geometry(breakpoint: Breakpoint, cards: usize) -> (u32, u32) {
    let visible = breakpoint.strip_width();
    let total = breakpoint.content_width(cards).max(visible);
    (visible, total)
}

fn apply_button_state(button: &mut Element, enabled: bool) {
    if enabled {
        button.set_style("opacity", ENABLED_OPACITY);
        button.set_style("pointer-events", "auto");
    } else {
        button.set_style("opacity", DISABLED_OPACITY);
        button.set_style("pointer-events", "none");
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
