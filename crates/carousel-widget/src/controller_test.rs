use carousel_store::MemoryStore;

use super::*;
use crate::carousel::WidgetSettings;
use crate::random::ScriptedRandom;
use crate::{mount, STYLESHEET_ID};

fn products(count: i64) -> Vec<Product> {
    let records: Vec<serde_json::Value> = (1..=count)
        .map(|id| {
            let url = if id == 2 {
                serde_json::Value::Null
            } else {
                serde_json::Value::from(format!("https://example.com/p/{id}"))
            };
            serde_json::json!({
                "id": id,
                "name": format!("Ürün {id}"),
                "brand": "Prima",
                "img": format!("https://example.com/{id}.jpg"),
                "url": url,
                "price": 100,
                "original_price": 150
            })
        })
        .collect();
    serde_json::from_value(serde_json::Value::Array(records)).unwrap()
}

fn host_page(width: u32) -> Page {
    let mut page = Page::new("/", width);
    page.body_mut()
        .append_child(Element::new("eb-hero-banner-carousel"));
    page
}

fn storage() -> CarouselStorage<MemoryStore> {
    CarouselStorage::new(MemoryStore::default(), "productList", "favorites")
}

fn mounted(count: i64, width: u32) -> (Page, InteractionController, CarouselStorage<MemoryStore>) {
    let mut page = host_page(width);
    let storage = storage();
    let controller = mount(
        &mut page,
        &products(count),
        &storage,
        &WidgetSettings::default(),
        &mut ScriptedRandom::new(vec![0.9]),
    )
    .expect("non-empty product list mounts");
    (page, controller, storage)
}

fn button(page: &Page, which: &str) -> Element {
    page.query_selector(&Selector::classes(&["carousel-button", which]))
        .cloned()
        .expect("button exists")
}

fn favorite_filled(page: &Page, id: i64) -> bool {
    page.query_selector_all(&Selector::classes(&["product-card"]))
        .into_iter()
        .find(|c| c.data("product-id") == Some(id.to_string().as_str()))
        .and_then(|c| c.query_selector(&Selector::classes(&["favorite-button"])))
        .is_some_and(|b| b.has_class("filled"))
}

// ---------------------------------------------------------------------------
// Scroll buttons
// ---------------------------------------------------------------------------

#[test]
fn initial_state_disables_prev_only() {
    let (page, controller, _) = mounted(10, 1280);
    assert_eq!(
        controller.button_states(&page),
        Some(ButtonStates {
            prev_enabled: false,
            next_enabled: true
        })
    );
    let prev = button(&page, "prev");
    assert_eq!(prev.style("opacity"), Some("0.3"));
    assert_eq!(prev.style("pointer-events"), Some("none"));
    let next = button(&page, "next");
    assert_eq!(next.style("opacity"), Some("1"));
    assert_eq!(next.style("pointer-events"), Some("auto"));
}

#[test]
fn next_click_scrolls_one_card_and_enables_prev() {
    let (mut page, mut controller, mut storage) = mounted(10, 1280);
    let nav = controller.dispatch(&mut page, &mut storage, UiEvent::Click(ClickTarget::NextButton));
    assert!(nav.is_none());
    assert_eq!(controller.scroll_left(), Some(232));
    assert_eq!(button(&page, "prev").style("opacity"), Some("1"));

    controller.dispatch(&mut page, &mut storage, UiEvent::Click(ClickTarget::PrevButton));
    assert_eq!(controller.scroll_left(), Some(0));
    assert_eq!(button(&page, "prev").style("pointer-events"), Some("none"));
}

#[test]
fn disabled_prev_ignores_clicks() {
    let (mut page, mut controller, mut storage) = mounted(10, 1280);
    controller.dispatch(&mut page, &mut storage, UiEvent::Click(ClickTarget::PrevButton));
    assert_eq!(controller.scroll_left(), Some(0));
}

#[test]
fn next_disables_at_right_boundary() {
    let (mut page, mut controller, mut storage) = mounted(10, 1280);
    // 10 cards: 2308px of content in a 1148px strip.
    for _ in 0..5 {
        controller.dispatch(&mut page, &mut storage, UiEvent::Click(ClickTarget::NextButton));
    }
    assert_eq!(controller.scroll_left(), Some(1160));
    assert_eq!(
        controller.button_states(&page),
        Some(ButtonStates {
            prev_enabled: true,
            next_enabled: false
        })
    );

    controller.dispatch(&mut page, &mut storage, UiEvent::Click(ClickTarget::NextButton));
    assert_eq!(controller.scroll_left(), Some(1160));
}

#[test]
fn scroll_event_clamps_and_recomputes() {
    let (mut page, mut controller, mut storage) = mounted(10, 1280);
    controller.dispatch(&mut page, &mut storage, UiEvent::Scroll { left: 50_000 });
    assert_eq!(controller.scroll_left(), Some(1160));
    assert_eq!(button(&page, "next").style("pointer-events"), Some("none"));

    controller.dispatch(&mut page, &mut storage, UiEvent::Scroll { left: 10 });
    assert_eq!(button(&page, "prev").style("opacity"), Some("1"));
    assert_eq!(button(&page, "next").style("opacity"), Some("1"));
}

#[test]
fn scroll_step_follows_viewport_width() {
    for (width, step) in [(1280, 232), (1200, 210), (768, 188), (480, 166)] {
        let (mut page, mut controller, mut storage) = mounted(10, width);
        controller.dispatch(&mut page, &mut storage, UiEvent::Click(ClickTarget::NextButton));
        assert_eq!(controller.scroll_left(), Some(step), "viewport {width}px");
    }
}

#[test]
fn resize_recomputes_button_state() {
    let (mut page, mut controller, mut storage) = mounted(5, 1280);
    // Five cards fit exactly in the wide strip.
    assert_eq!(button(&page, "next").style("pointer-events"), Some("none"));

    controller.dispatch(&mut page, &mut storage, UiEvent::Resize { width: 700 });
    assert_eq!(page.viewport_width(), 700);
    assert_eq!(button(&page, "next").style("pointer-events"), Some("auto"));
}

#[test]
fn few_cards_disable_both_buttons() {
    let (page, controller, _) = mounted(2, 1280);
    assert_eq!(
        controller.button_states(&page),
        Some(ButtonStates {
            prev_enabled: false,
            next_enabled: false
        })
    );
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

#[test]
fn favorite_click_toggles_and_persists_without_navigating() {
    let (mut page, mut controller, mut storage) = mounted(3, 1280);
    let nav = controller.dispatch(
        &mut page,
        &mut storage,
        UiEvent::Click(ClickTarget::FavoriteButton(3)),
    );
    assert!(nav.is_none(), "favorite click must not reach the card");
    assert!(favorite_filled(&page, 3));
    assert_eq!(storage.favorites().ids(), &[3]);

    controller.dispatch(
        &mut page,
        &mut storage,
        UiEvent::Click(ClickTarget::FavoriteButton(3)),
    );
    assert!(!favorite_filled(&page, 3));
    assert!(storage.favorites().is_empty());
}

#[test]
fn stored_favorites_render_filled() {
    let mut page = host_page(1280);
    let mut storage = storage();
    storage
        .save_favorites(&carousel_core::Favorites::new(vec![2]))
        .unwrap();
    let mut controller = mount(
        &mut page,
        &products(3),
        &storage,
        &WidgetSettings::default(),
        &mut ScriptedRandom::new(vec![0.9]),
    )
    .unwrap();
    assert!(favorite_filled(&page, 2));
    assert!(!favorite_filled(&page, 1));

    controller.dispatch(
        &mut page,
        &mut storage,
        UiEvent::Click(ClickTarget::FavoriteButton(2)),
    );
    assert!(!favorite_filled(&page, 2));
    assert!(storage.favorites().is_empty());
}

#[test]
fn favorite_click_on_unknown_card_is_ignored() {
    let (mut page, mut controller, mut storage) = mounted(3, 1280);
    controller.dispatch(
        &mut page,
        &mut storage,
        UiEvent::Click(ClickTarget::FavoriteButton(99)),
    );
    assert!(storage.favorites().is_empty());
}

#[test]
fn toggle_favorite_reports_whether_it_applied() {
    let (mut page, controller, mut storage) = mounted(2, 1280);

    assert_eq!(controller.toggle_favorite(&mut page, &mut storage, 99), None);
    assert!(storage.store().get_item("favorites").unwrap().is_none());

    assert_eq!(controller.toggle_favorite(&mut page, &mut storage, 1), Some(true));
    assert_eq!(controller.toggle_favorite(&mut page, &mut storage, 1), Some(false));
    assert!(!favorite_filled(&page, 1));
}

// ---------------------------------------------------------------------------
// Click-through
// ---------------------------------------------------------------------------

#[test]
fn card_click_opens_product_in_new_tab() {
    let (mut page, mut controller, mut storage) = mounted(3, 1280);
    let nav = controller.dispatch(&mut page, &mut storage, UiEvent::Click(ClickTarget::Card(1)));
    assert_eq!(
        nav,
        Some(OpenUrl {
            url: "https://example.com/p/1".to_owned(),
            target: "_blank"
        })
    );
}

#[test]
fn card_click_without_url_or_match_is_noop() {
    let (mut page, mut controller, mut storage) = mounted(3, 1280);
    assert!(controller
        .dispatch(&mut page, &mut storage, UiEvent::Click(ClickTarget::Card(2)))
        .is_none());
    assert!(controller
        .dispatch(&mut page, &mut storage, UiEvent::Click(ClickTarget::Card(42)))
        .is_none());
}

// ---------------------------------------------------------------------------
// Mounting
// ---------------------------------------------------------------------------

#[test]
fn empty_product_list_mounts_nothing() {
    let mut page = host_page(1280);
    let before = page.clone();
    let controller = mount(
        &mut page,
        &[],
        &storage(),
        &WidgetSettings::default(),
        &mut ScriptedRandom::new(vec![]),
    );
    assert!(controller.is_none());
    assert_eq!(page, before);
    assert!(page.get_element_by_id(STYLESHEET_ID).is_none());
}

#[test]
fn missing_anchor_skips_insertion_but_still_styles() {
    let mut page = Page::new("/", 1280);
    let mut storage = storage();
    let mut controller = mount(
        &mut page,
        &products(3),
        &storage,
        &WidgetSettings::default(),
        &mut ScriptedRandom::new(vec![0.9]),
    )
    .unwrap();
    assert!(page
        .query_selector(&Selector::classes(&["carousel-main-wrapper"]))
        .is_none());
    assert!(page.get_element_by_id(STYLESHEET_ID).is_some());
    assert!(controller.scroll_left().is_none());
    assert!(controller
        .dispatch(&mut page, &mut storage, UiEvent::Click(ClickTarget::Card(1)))
        .is_none());
}

#[test]
fn widget_is_inserted_directly_after_anchor() {
    let (page, _, _) = mounted(3, 1280);
    let tags: Vec<&str> = page.body().children().map(Element::tag).collect();
    assert_eq!(tags, vec!["eb-hero-banner-carousel", "div"]);
    let wrapper = page.body().children().nth(1).unwrap();
    assert!(wrapper.has_class("carousel-main-wrapper"));
    assert_eq!(
        wrapper
            .query_selector_all(&Selector::classes(&["product-card"]))
            .len(),
        3
    );
}
