//! Integration tests for the LUMINA storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lumina-integration-tests
//! ```
//!
//! Each test starts its own storefront on an ephemeral port, backed by an
//! in-memory store, and drives it over HTTP with `reqwest`. No external
//! services are needed.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::sync::Arc;

use lumina_core::LineItem;
use lumina_storefront::config::StorefrontConfig;
use lumina_storefront::routes;
use lumina_storefront::state::AppState;
use lumina_storefront::store::{BasketStore, DurableStore, MemoryStore};
use reqwest::{Client, Response};

/// A storefront running in the background of a test.
pub struct TestServer {
    addr: SocketAddr,
    client: Client,
    store: MemoryStore,
    basket_key: String,
}

impl TestServer {
    /// Start a storefront over an empty in-memory store.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start() -> Self {
        Self::start_with(MemoryStore::new()).await
    }

    /// Start a storefront over `store`, which may already hold a basket.
    ///
    /// # Panics
    ///
    /// Panics if the configuration or the listener cannot be set up.
    pub async fn start_with(store: MemoryStore) -> Self {
        let mut config = StorefrontConfig::from_lookup(|_| None)
            .expect("Failed to build test configuration");
        config.hero_interval = None;
        let basket_key = config.basket_key.clone();

        let state = AppState::new(config, Arc::new(store.clone()));
        let app = routes::router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            client: Client::new(),
            store,
            basket_key,
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// GET `path`.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// POST `path` with no body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn post(&self, path: &str) -> Response {
        self.client
            .post(self.url(path))
            .send()
            .await
            .expect("POST request failed")
    }

    /// POST `path` with a urlencoded form body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// The basket as currently persisted.
    #[must_use]
    pub fn stored_basket(&self) -> Vec<LineItem> {
        BasketStore::new(Arc::new(self.store.clone()), self.basket_key.clone()).load()
    }

    /// The raw persisted document, if any.
    #[must_use]
    pub fn stored_document(&self) -> Option<String> {
        self.store.get(&self.basket_key).ok().flatten()
    }
}

/// Read a response body, panicking on transport errors.
///
/// # Panics
///
/// Panics if the body cannot be read.
pub async fn body(response: Response) -> String {
    response.text().await.expect("Failed to read response body")
}
