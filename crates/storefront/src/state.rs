//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::config::StorefrontConfig;
use crate::content::{ContentError, ContentStore};
use crate::shopify::BuyButton;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the catalog store, the content store,
/// the hosted-widget handle, and the configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogStore,
    content: ContentStore,
    buy_button: BuyButton,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Content pages are loaded eagerly; catalog collections load lazily on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the content directory exists but cannot be read.
    pub fn new(config: StorefrontConfig) -> Result<Self, ContentError> {
        let catalog = CatalogStore::new(config.data_dir.clone(), config.catalog_ttl);
        let content = ContentStore::load(&config.content_dir)?;
        let buy_button = BuyButton::new(&config.shopify);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                content,
                buy_button,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Get a reference to the content store.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Get a reference to the hosted commerce widget handle.
    #[must_use]
    pub fn buy_button(&self) -> &BuyButton {
        &self.inner.buy_button
    }
}
