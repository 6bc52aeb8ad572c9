use std::path::PathBuf;

/// Default product feed: a static JSON array of promotional products.
pub const DEFAULT_API_URL: &str = "https://gist.githubusercontent.com/sevindi/8bcbde9f02c1d4abe112809c974e1f49/raw/9bf93b58df623a9b16f1db721cd0a7a539296cf0/products.json";

pub const DEFAULT_CACHE_KEY: &str = "productList";
pub const DEFAULT_FAVORITES_KEY: &str = "favorites";
pub const DEFAULT_ANCHOR_SELECTOR: &str = "eb-hero-banner-carousel";
pub const DEFAULT_TITLE: &str = "Sizin için Seçtiklerimiz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Remote endpoint returning the product JSON array.
    pub api_url: String,
    /// Storage key holding the last successful product-list body.
    pub cache_key: String,
    /// Storage key holding the JSON array of favorited product ids.
    pub favorites_key: String,
    /// Selector of the host element the widget is inserted after.
    pub anchor_selector: String,
    pub title: String,
    /// File backing the local key-value store when hosted by the CLI.
    pub storage_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cache_key: DEFAULT_CACHE_KEY.to_string(),
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            anchor_selector: DEFAULT_ANCHOR_SELECTOR.to_string(),
            title: DEFAULT_TITLE.to_string(),
            storage_path: PathBuf::from("./.carousel/local_storage.json"),
            request_timeout_secs: 30,
            user_agent: "promo-carousel/0.1".to_string(),
            log_level: "info".to_string(),
        }
    }
}
