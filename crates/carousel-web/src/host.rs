//! Live-document host: mounts on page load and relays DOM events.

use std::cell::RefCell;
use std::rc::Rc;

use carousel_core::AppConfig;
use carousel_source::{ProductClient, ProductSource};
use carousel_store::{CarouselStorage, WebStorage};
use carousel_widget::{
    is_home_route, mount, ClickTarget, InteractionController, Page, Selector, ThreadRandom,
    UiEvent, WidgetSettings, STYLESHEET_ID,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::mirror::{shadow_page, stylesheet_markup, view_state, widget_markup, ButtonStyle};

struct Host {
    window: Window,
    document: Document,
    page: Page,
    controller: InteractionController,
    storage: CarouselStorage<WebStorage>,
}

type SharedHost = Rc<RefCell<Host>>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    spawn_local(async {
        if let Err(e) = run().await {
            web_sys::console::error_1(&e);
        }
    });
}

async fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let path = window.location().pathname()?;
    if !is_home_route(&path) {
        tracing::warn!(path = %path, "wrong page; carousel not loaded");
        return Ok(());
    }

    let config = AppConfig::default();
    let settings = WidgetSettings::from_config(&config);
    let store = WebStorage::local().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut storage = CarouselStorage::from_config(store, &config);
    let client =
        ProductClient::from_config(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let products = ProductSource::new(client)
        .fetch_products(&mut storage)
        .await;

    let live_anchor = document.query_selector(&settings.anchor_selector)?;
    let anchor = Selector::parse(&settings.anchor_selector).ok();
    let mut page = shadow_page(
        &path,
        viewport_width(&window),
        anchor.as_ref().filter(|_| live_anchor.is_some()),
    );
    let Some(controller) = mount(&mut page, &products, &storage, &settings, &mut ThreadRandom)
    else {
        return Ok(());
    };

    if let (Some(anchor), Some(html)) = (live_anchor, widget_markup(&page)) {
        anchor.insert_adjacent_html("afterend", &html)?;
    }
    if document.get_element_by_id(STYLESHEET_ID).is_none() {
        if let (Some(head), Some(html)) = (document.head(), stylesheet_markup(&page)) {
            head.insert_adjacent_html("beforeend", &html)?;
        }
    }

    let host = Rc::new(RefCell::new(Host {
        window,
        document,
        page,
        controller,
        storage,
    }));
    apply_view(&host.borrow(), false)?;
    wire_listeners(&host)?;
    tracing::info!(cards = products.len(), "carousel mounted in live document");
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn viewport_width(window: &Window) -> u32 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map_or(0, |w| w.max(0.0) as u32)
}

/// Forwards one event to the controller and copies the result to the DOM.
fn dispatch(host: &SharedHost, event: UiEvent) {
    let Ok(mut guard) = host.try_borrow_mut() else {
        return;
    };
    let host = &mut *guard;
    let navigation = host
        .controller
        .dispatch(&mut host.page, &mut host.storage, event);

    let scrolled_by_button = matches!(
        event,
        UiEvent::Click(ClickTarget::PrevButton | ClickTarget::NextButton)
    );
    if let Err(e) = apply_view(host, scrolled_by_button) {
        tracing::warn!(error = ?e, "could not update carousel view");
    }
    if let Some(open) = navigation {
        if let Err(e) = host.window.open_with_url_and_target(&open.url, open.target) {
            tracing::warn!(url = %open.url, error = ?e, "could not open product page");
        }
    }
}

fn apply_view(host: &Host, scroll_strip: bool) -> Result<(), JsValue> {
    let state = view_state(&host.page, &host.controller);
    let document = &host.document;

    for (selector, style) in [
        (".carousel-button.prev", &state.prev),
        (".carousel-button.next", &state.next),
    ] {
        if let (Some(button), Some(style)) = (query_html(document, selector)?, style) {
            apply_button_style(&button, style)?;
        }
    }

    for (id, filled) in &state.favorites {
        let selector = format!(".product-card[data-product-id=\"{id}\"] .favorite-button");
        if let Some(heart) = document.query_selector(&selector)? {
            heart.class_list().toggle_with_force("filled", *filled)?;
        }
    }

    if scroll_strip {
        if let (Some(strip), Some(left)) = (
            document.query_selector(".carousel-scrollable")?,
            state.scroll_left,
        ) {
            let options = web_sys::ScrollToOptions::new();
            options.set_left(f64::from(left));
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            strip.scroll_to_with_scroll_to_options(&options);
        }
    }
    Ok(())
}

fn apply_button_style(button: &HtmlElement, style: &ButtonStyle) -> Result<(), JsValue> {
    let inline = button.style();
    inline.set_property("opacity", &style.opacity)?;
    inline.set_property("pointer-events", &style.pointer_events)
}

fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

fn wire_listeners(host: &SharedHost) -> Result<(), JsValue> {
    let (window, document) = {
        let h = host.borrow();
        (h.window.clone(), h.document.clone())
    };

    if let Some(prev) = document.query_selector(".carousel-button.prev")? {
        listen(&prev, "click", host, |_| Some(UiEvent::Click(ClickTarget::PrevButton)))?;
    }
    if let Some(next) = document.query_selector(".carousel-button.next")? {
        listen(&next, "click", host, |_| Some(UiEvent::Click(ClickTarget::NextButton)))?;
    }
    if let Some(strip) = document.query_selector(".carousel-scrollable")? {
        let source = strip.clone();
        listen(&strip, "scroll", host, move |_| {
            let left = u32::try_from(source.scroll_left().max(0)).unwrap_or(0);
            Some(UiEvent::Scroll { left })
        })?;
    }

    let cards = document.query_selector_all(".product-card")?;
    for index in 0..cards.length() {
        let Some(card) = cards
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(id) = card
            .get_attribute("data-product-id")
            .and_then(|raw| raw.parse::<i64>().ok())
        else {
            continue;
        };
        if let Some(heart) = card.query_selector(".favorite-button")? {
            listen(&heart, "click", host, move |event| {
                event.stop_propagation();
                Some(UiEvent::Click(ClickTarget::FavoriteButton(id)))
            })?;
        }
        listen(&card, "click", host, move |_| {
            Some(UiEvent::Click(ClickTarget::Card(id)))
        })?;
    }

    let resize_window = window.clone();
    listen(&window, "resize", host, move |_| {
        Some(UiEvent::Resize {
            width: viewport_width(&resize_window),
        })
    })?;
    Ok(())
}

/// Registers a listener that maps DOM events to [`UiEvent`]s for the
/// lifetime of the page.
fn listen<F>(
    target: &web_sys::EventTarget,
    kind: &str,
    host: &SharedHost,
    to_event: F,
) -> Result<(), JsValue>
where
    F: Fn(&Event) -> Option<UiEvent> + 'static,
{
    let host = Rc::clone(host);
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(ui_event) = to_event(&event) {
            dispatch(&host, ui_event);
        }
    });
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
