//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::config::StorefrontConfig;
use crate::page::{Command, Page, PageKind};
use crate::product::ImageCatalog;
use crate::store::{BasketStore, DurableStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It owns the single page
/// context: every request locks it, applies one command and renders before
/// releasing, so commands never interleave.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    basket_store: BasketStore,
    catalog: ImageCatalog,
    page: Mutex<Page>,
}

impl AppState {
    /// Create a new application state with the home page loaded.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `store` - Durable store the basket document lives in
    #[must_use]
    pub fn new(config: StorefrontConfig, store: Arc<dyn DurableStore>) -> Self {
        let basket_store = BasketStore::new(store, config.basket_key.clone());
        let catalog = ImageCatalog::default();
        let page = Page::load(PageKind::Home, basket_store.clone(), &catalog);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                basket_store,
                catalog,
                page: Mutex::new(page),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the basket document adapter.
    #[must_use]
    pub fn basket_store(&self) -> &BasketStore {
        &self.inner.basket_store
    }

    /// Lock the current page.
    pub async fn page(&self) -> MutexGuard<'_, Page> {
        self.inner.page.lock().await
    }

    /// Load `kind` as a fresh page, replacing the current one.
    pub async fn navigate(&self, kind: PageKind) -> MutexGuard<'_, Page> {
        let mut page = self.inner.page.lock().await;
        *page = Page::load(kind, self.inner.basket_store.clone(), &self.inner.catalog);
        page
    }

    /// Start the hero carousel timer, if enabled.
    ///
    /// Each tick is dispatched like any other command.
    pub fn start_hero_rotation(&self) {
        let Some(period) = self.inner.config.hero_interval else {
            tracing::info!("Hero rotation disabled");
            return;
        };

        let state = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                state.page().await.dispatch(Command::RotateHero);
            }
        });
    }
}
