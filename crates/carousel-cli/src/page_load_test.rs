use carousel_source::ProductClient;
use carousel_store::MemoryStore;
use carousel_widget::{ClickTarget, ScriptedRandom, UiEvent, STYLESHEET_ID};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

const ANCHOR: &str = "eb-hero-banner-carousel";

async fn feed_server(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

fn source_for(server: &MockServer) -> ProductSource {
    let client = ProductClient::new(&format!("{}/products.json", server.uri()), 5, "test")
        .expect("test client");
    ProductSource::new(client)
}

fn storage_with(items: &[(&str, &str)]) -> CarouselStorage<MemoryStore> {
    CarouselStorage::new(
        MemoryStore::with_items(items.iter().copied()),
        "productList",
        "favorites",
    )
}

fn two_products() -> serde_json::Value {
    json!([
        {"id": 1, "brand": "Prima", "name": "Bez", "img": "https://example.com/1.jpg",
         "url": "https://example.com/p/1", "price": 100, "original_price": 150},
        {"id": 2, "brand": "Chicco", "name": "Emzik", "img": "https://example.com/2.jpg",
         "url": "https://example.com/p/2", "price": 100, "original_price": null}
    ])
}

#[test]
fn host_page_contains_anchor() {
    let page = host_page("/", 1280, ANCHOR);
    assert!(page
        .query_selector(&Selector::parse(ANCHOR).unwrap())
        .is_some());
}

#[tokio::test]
async fn wrong_page_does_not_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_products()))
        .expect(0)
        .mount(&server)
        .await;

    let mut page = host_page("/sepet", 1280, ANCHOR);
    let before = page.clone();
    let outcome = load_carousel(
        &mut page,
        &source_for(&server),
        &mut storage_with(&[]),
        &WidgetSettings::default(),
        &mut ScriptedRandom::new(vec![]),
    )
    .await;

    assert!(matches!(outcome, PageLoad::WrongPage));
    assert_eq!(page, before);
}

#[tokio::test]
async fn empty_feed_skips_widget_and_styles() {
    let server = feed_server(200, json!([])).await;
    let mut page = host_page("/", 1280, ANCHOR);
    let before = page.clone();

    let outcome = load_carousel(
        &mut page,
        &source_for(&server),
        &mut storage_with(&[]),
        &WidgetSettings::default(),
        &mut ScriptedRandom::new(vec![]),
    )
    .await;

    assert!(matches!(outcome, PageLoad::NoProducts));
    assert_eq!(page, before);
    assert!(page.get_element_by_id(STYLESHEET_ID).is_none());
}

#[tokio::test]
async fn fresh_feed_mounts_carousel() {
    let server = feed_server(200, two_products()).await;
    let mut page = host_page("/", 1280, ANCHOR);
    let mut storage = storage_with(&[]);

    let outcome = load_carousel(
        &mut page,
        &source_for(&server),
        &mut storage,
        &WidgetSettings::default(),
        &mut ScriptedRandom::new(vec![0.9]),
    )
    .await;

    let mut controller = match outcome {
        PageLoad::Mounted(controller) => controller,
        other => panic!("expected Mounted, got: {other:?}"),
    };
    let cards = page.query_selector_all(&Selector::parse(".product-card").unwrap());
    assert_eq!(cards.len(), 2);
    assert_eq!(
        cards[0]
            .query_selector(&Selector::parse(".discount-percent").unwrap())
            .unwrap()
            .text_content(),
        "%33"
    );
    assert!(cards[1]
        .query_selector(&Selector::parse(".current-price.no-discount").unwrap())
        .is_some());
    assert!(page.get_element_by_id(STYLESHEET_ID).is_some());

    let nav = controller.dispatch(&mut page, &mut storage, UiEvent::Click(ClickTarget::Card(2)));
    assert_eq!(nav.map(|n| n.url).as_deref(), Some("https://example.com/p/2"));
}

#[tokio::test]
async fn failed_feed_renders_from_cache() {
    let server = feed_server(500, json!({"error": "down"})).await;
    let cached = two_products().to_string();
    let mut page = host_page("/index.html", 1280, ANCHOR);
    let mut storage = storage_with(&[("productList", cached.as_str())]);

    let outcome = load_carousel(
        &mut page,
        &source_for(&server),
        &mut storage,
        &WidgetSettings::default(),
        &mut ScriptedRandom::new(vec![0.9]),
    )
    .await;

    assert!(matches!(outcome, PageLoad::Mounted(_)));
    assert_eq!(
        page.query_selector_all(&Selector::parse(".product-card").unwrap())
            .len(),
        2
    );
}

#[tokio::test]
async fn failed_feed_without_cache_leaves_page_untouched() {
    let server = feed_server(404, json!(null)).await;
    let mut page = host_page("/", 1280, ANCHOR);
    let before = page.clone();

    let outcome = load_carousel(
        &mut page,
        &source_for(&server),
        &mut storage_with(&[]),
        &WidgetSettings::default(),
        &mut ScriptedRandom::new(vec![]),
    )
    .await;

    assert!(matches!(outcome, PageLoad::NoProducts));
    assert_eq!(page, before);
}
