//! Fetch-with-fallback: network first, then the local cache, then nothing.

use carousel_core::Product;
use carousel_store::{CarouselStorage, KeyValueStore};

use crate::client::ProductClient;

/// Resolves the product list for one page load.
pub struct ProductSource {
    client: ProductClient,
}

impl ProductSource {
    #[must_use]
    pub fn new(client: ProductClient) -> Self {
        Self { client }
    }

    /// Returns the freshest product list available.
    ///
    /// On a successful fetch the body is written verbatim to the cache before
    /// returning. On any fetch failure the error is logged and the cached
    /// list is returned instead, or an empty list when no usable cache
    /// exists. Callers treat an empty list as "show nothing".
    pub async fn fetch_products<S: KeyValueStore>(
        &self,
        storage: &mut CarouselStorage<S>,
    ) -> Vec<Product> {
        match self.client.fetch().await {
            Ok(feed) => {
                if let Err(e) = storage.cache_products(&feed.body) {
                    tracing::warn!(error = %e, "could not update product cache");
                }
                tracing::debug!(
                    url = %self.client.api_url(),
                    count = feed.products.len(),
                    "fetched product feed"
                );
                feed.products
            }
            Err(e) => {
                tracing::error!(url = %self.client.api_url(), error = %e, "product feed request failed");
                let cached = storage.cached_products().unwrap_or_default();
                tracing::info!(count = cached.len(), "using cached product list");
                cached
            }
        }
    }
}
