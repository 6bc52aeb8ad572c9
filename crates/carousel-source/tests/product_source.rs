//! Integration tests for `ProductSource::fetch_products`.
//!
//! Uses `wiremock` for the feed endpoint and an in-memory store for local
//! storage, covering fresh fetches, cache fallback, and the empty result.

use carousel_source::{ProductClient, ProductSource};
use carousel_store::{CarouselStorage, KeyValueStore, MemoryStore};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CACHE_KEY: &str = "productList";
const FAVORITES_KEY: &str = "favorites";

fn source_for(server: &MockServer) -> ProductSource {
    let url = format!("{}/products.json", server.uri());
    let client = ProductClient::new(&url, 5, "carousel-test/0.1")
        .expect("failed to build test ProductClient");
    ProductSource::new(client)
}

fn empty_storage() -> CarouselStorage<MemoryStore> {
    CarouselStorage::new(MemoryStore::default(), CACHE_KEY, FAVORITES_KEY)
}

fn cached_storage(body: &str) -> CarouselStorage<MemoryStore> {
    CarouselStorage::new(
        MemoryStore::with_items([(CACHE_KEY, body)]),
        CACHE_KEY,
        FAVORITES_KEY,
    )
}

fn feed_json() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "brand": "Prima",
            "name": "Islak Mendil",
            "url": "https://www.e-bebek.com/prima-islak-mendil",
            "img": "https://example.com/1.jpg",
            "price": 100,
            "original_price": 150
        },
        {
            "id": 2,
            "brand": "Chicco",
            "name": "Biberon",
            "url": "https://www.e-bebek.com/chicco-biberon",
            "img": "https://example.com/2.jpg",
            "price": 100,
            "original_price": null
        }
    ])
}

// ---------------------------------------------------------------------------
// Fresh fetch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_returns_and_caches_fresh_products() {
    let server = MockServer::start().await;
    let body = feed_json().to_string();
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let mut storage = cached_storage(r#"[{"id":99,"name":"Stale","price":1}]"#);
    let products = source_for(&server).fetch_products(&mut storage).await;

    let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(
        storage.store().get_item(CACHE_KEY).unwrap().as_deref(),
        Some(body.as_str()),
        "cache should hold the fetched body verbatim"
    );
}

#[tokio::test]
async fn fetch_returns_empty_list_from_empty_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let mut storage = empty_storage();
    let products = source_for(&server).fetch_products(&mut storage).await;

    assert!(products.is_empty());
    assert_eq!(
        storage.store().get_item(CACHE_KEY).unwrap().as_deref(),
        Some("[]")
    );
}

// ---------------------------------------------------------------------------
// Fallback to cache
// ---------------------------------------------------------------------------

#[tokio::test]
async fn server_error_falls_back_to_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let cached = feed_json().to_string();
    let mut storage = cached_storage(&cached);
    let products = source_for(&server).fetch_products(&mut storage).await;

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Islak Mendil");
    assert_eq!(
        storage.store().get_item(CACHE_KEY).unwrap().as_deref(),
        Some(cached.as_str()),
        "a failed fetch must not touch the cache"
    );
}

#[tokio::test]
async fn malformed_body_falls_back_to_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let mut storage = cached_storage(r#"[{"id":7,"name":"Cached","price":5}]"#);
    let products = source_for(&server).fetch_products(&mut storage).await;

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 7);
}

#[tokio::test]
async fn unreachable_host_falls_back_to_cache() {
    let server = MockServer::start().await;
    let source = source_for(&server);
    drop(server);

    let mut storage = cached_storage(r#"[{"id":3,"name":"Offline","price":5}]"#);
    let products = source.fetch_products(&mut storage).await;

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Offline");
}

#[tokio::test]
async fn malformed_feed_url_falls_back_to_cache() {
    let client = ProductClient::new("not-a-url", 5, "carousel-test/0.1")
        .expect("a malformed URL must not fail client construction");
    let source = ProductSource::new(client);

    let mut storage = cached_storage(&feed_json().to_string());
    let products = source.fetch_products(&mut storage).await;

    assert_eq!(products.len(), 2);
    assert_eq!(products[1].brand, "Chicco");
}

// ---------------------------------------------------------------------------
// Nothing available
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failure_without_cache_returns_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut storage = empty_storage();
    let products = source_for(&server).fetch_products(&mut storage).await;

    assert!(products.is_empty());
    assert!(storage.store().get_item(CACHE_KEY).unwrap().is_none());
}

#[tokio::test]
async fn failure_with_corrupt_cache_returns_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut storage = cached_storage("{broken");
    let products = source_for(&server).fetch_products(&mut storage).await;

    assert!(products.is_empty());
}
