//! HTTP client for the remote product feed.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use carousel_core::{AppConfig, Product};
use reqwest::Client;

use crate::error::SourceError;

/// A successfully fetched feed: the parsed products plus the body they were
/// parsed from, kept so the cache can store it verbatim.
#[derive(Debug)]
pub struct FetchedFeed {
    pub products: Vec<Product>,
    pub body: String,
}

/// HTTP client for the product feed endpoint.
///
/// One GET per call; no retries. Non-2xx statuses and non-array bodies are
/// reported as typed errors for the caller to fall back on.
pub struct ProductClient {
    client: Client,
    api_url: String,
}

impl ProductClient {
    /// Creates a `ProductClient` with the given request timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed. `api_url` is not checked here: a malformed URL
    /// surfaces from [`ProductClient::fetch`] like any other failed request.
    pub fn new(api_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SourceError> {
        // In the browser, fetch() owns timeouts and the User-Agent.
        #[cfg(target_arch = "wasm32")]
        let builder = {
            let _ = (timeout_secs, user_agent);
            Client::builder()
        };
        #[cfg(not(target_arch = "wasm32"))]
        let builder = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        let client = builder.build()?;
        Ok(Self {
            client,
            api_url: api_url.to_owned(),
        })
    }

    /// Builds a client from the feed settings in `config`.
    ///
    /// # Errors
    ///
    /// See [`ProductClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SourceError> {
        Self::new(
            &config.api_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetches and parses the product array.
    ///
    /// # Errors
    ///
    /// - [`SourceError::InvalidUrl`] — the configured feed URL does not parse.
    /// - [`SourceError::Http`] — network or TLS failure.
    /// - [`SourceError::UnexpectedStatus`] — any non-2xx status.
    /// - [`SourceError::Deserialize`] — body is not a JSON product array.
    pub async fn fetch(&self) -> Result<FetchedFeed, SourceError> {
        let url = reqwest::Url::parse(&self.api_url).map_err(|e| SourceError::InvalidUrl {
            url: self.api_url.clone(),
            reason: e.to_string(),
        })?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.api_url.clone(),
            });
        }

        let body = response.text().await?;
        let products = parse_products(&body, &self.api_url)?;
        Ok(FetchedFeed { products, body })
    }
}

/// Parses a feed body into products.
///
/// # Errors
///
/// Returns [`SourceError::Deserialize`] if `body` is not a JSON array of
/// product records.
pub fn parse_products(body: &str, url: &str) -> Result<Vec<Product>, SourceError> {
    serde_json::from_str::<Vec<Product>>(body).map_err(|e| SourceError::Deserialize {
        context: format!("product feed from {url}"),
        source: e,
    })
}
