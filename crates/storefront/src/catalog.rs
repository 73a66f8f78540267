//! Catalog data source.
//!
//! Collections are plain JSON arrays in the data directory, read with
//! `tokio::fs` and cached per collection in a moka async cache. When the
//! TTL expires the next read reloads the file and replaces the collection
//! wholesale. A missing or malformed file degrades to an empty collection
//! with a warning - no page ever fails because the catalog is unavailable.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::de::DeserializeOwned;

use nautic_core::types::news;
use nautic_core::{CatalogItem, NewsArticle, Rental};

/// Catalog collection files.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Collection {
    Products,
    SpareParts,
    Rentals,
    News,
}

impl Collection {
    /// File name inside the data directory.
    const fn file_name(self) -> &'static str {
        match self {
            Self::Products => "products.json",
            Self::SpareParts => "ricambi.json",
            Self::Rentals => "noleggio.json",
            Self::News => "news.json",
        }
    }
}

/// Cached parsed collection.
#[derive(Clone)]
enum CacheValue {
    Items(Arc<Vec<CatalogItem>>),
    Rentals(Arc<Vec<Rental>>),
    News(Arc<Vec<NewsArticle>>),
}

/// Category keywords that mark a product as an accessory rather than a boat.
///
/// The sale and accessory pages both draw from `products.json`; the split
/// is by category label.
const ACCESSORY_KEYWORDS: &[&str] = &["accessori", "ancore", "cime", "elettronica", "sicurezza"];

/// Loader for the JSON catalog collections.
///
/// Cheaply cloneable; all clones share the same cache.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<CatalogStoreInner>,
}

struct CatalogStoreInner {
    data_dir: PathBuf,
    cache: Cache<Collection, CacheValue>,
}

impl CatalogStore {
    /// Create a store reading from `data_dir`, caching each collection for `ttl`.
    #[must_use]
    pub fn new(data_dir: PathBuf, ttl: Duration) -> Self {
        let cache = Cache::builder().max_capacity(8).time_to_live(ttl).build();
        Self {
            inner: Arc::new(CatalogStoreInner { data_dir, cache }),
        }
    }

    /// All products from `products.json`.
    pub async fn products(&self) -> Arc<Vec<CatalogItem>> {
        match self.get(Collection::Products).await {
            CacheValue::Items(items) => items,
            _ => Arc::new(Vec::new()),
        }
    }

    /// All spare parts from `ricambi.json`.
    pub async fn spare_parts(&self) -> Arc<Vec<CatalogItem>> {
        match self.get(Collection::SpareParts).await {
            CacheValue::Items(items) => items,
            _ => Arc::new(Vec::new()),
        }
    }

    /// Rental units from `noleggio.json` (usually absent, so usually empty).
    pub async fn rentals(&self) -> Arc<Vec<Rental>> {
        match self.get(Collection::Rentals).await {
            CacheValue::Rentals(rentals) => rentals,
            _ => Arc::new(Vec::new()),
        }
    }

    /// News articles from `news.json`, newest first.
    pub async fn news(&self) -> Arc<Vec<NewsArticle>> {
        match self.get(Collection::News).await {
            CacheValue::News(articles) => articles,
            _ => Arc::new(Vec::new()),
        }
    }

    /// Products offered for sale: everything that is not a spare part or an
    /// accessory by category. Items without a category are catalog noise and
    /// are not listed for sale.
    pub async fn sale_products(&self) -> Vec<CatalogItem> {
        self.products()
            .await
            .iter()
            .filter(|item| {
                let category = item.category.to_lowercase();
                !category.is_empty()
                    && !category.contains("ricambi")
                    && !is_accessory_category(&category)
            })
            .cloned()
            .collect()
    }

    /// Products whose category marks them as accessories.
    pub async fn accessories(&self) -> Vec<CatalogItem> {
        self.products()
            .await
            .iter()
            .filter(|item| is_accessory_category(&item.category))
            .cloned()
            .collect()
    }

    /// Look up a purchasable item by id across products and spare parts.
    pub async fn find_product(&self, id: &str) -> Option<CatalogItem> {
        if let Some(item) = self.products().await.iter().find(|i| i.id == id) {
            return Some(item.clone());
        }
        self.spare_parts()
            .await
            .iter()
            .find(|i| i.id == id)
            .cloned()
    }

    /// Look up a news article by id.
    pub async fn find_article(&self, id: &str) -> Option<NewsArticle> {
        self.news().await.iter().find(|a| a.id == id).cloned()
    }

    /// Read through the cache, loading and parsing on miss.
    async fn get(&self, collection: Collection) -> CacheValue {
        let data_dir = self.inner.data_dir.clone();
        self.inner
            .cache
            .get_with(collection, async move {
                load_collection(&data_dir, collection).await
            })
            .await
    }
}

/// Whether a raw category label belongs to the accessory pages.
fn is_accessory_category(category: &str) -> bool {
    let category = category.to_lowercase();
    ACCESSORY_KEYWORDS.iter().any(|kw| category.contains(kw))
}

/// Load and parse one collection from disk.
async fn load_collection(data_dir: &Path, collection: Collection) -> CacheValue {
    let path = data_dir.join(collection.file_name());
    match collection {
        Collection::Products | Collection::SpareParts => {
            CacheValue::Items(Arc::new(read_json_array(&path).await))
        }
        Collection::Rentals => CacheValue::Rentals(Arc::new(read_json_array(&path).await)),
        Collection::News => {
            let mut articles: Vec<NewsArticle> = read_json_array(&path).await;
            news::sort_newest_first(&mut articles);
            CacheValue::News(Arc::new(articles))
        }
    }
}

/// Read a JSON array file, degrading to empty on any failure.
async fn read_json_array<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path.display(), "catalog file unavailable: {e}");
            return Vec::new();
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(path = %path.display(), "catalog file did not parse: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The sample catalog shipped with the crate.
    fn sample_data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    fn store() -> CatalogStore {
        CatalogStore::new(sample_data_dir(), Duration::from_secs(300))
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let path = sample_data_dir().join("does-not-exist.json");
        let items: Vec<CatalogItem> = read_json_array(&path).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_reads_as_empty() {
        let dir = std::env::temp_dir().join(format!("nautic-catalog-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("broken.json");
        std::fs::write(&path, b"{ not json ]").expect("write temp file");

        let items: Vec<CatalogItem> = read_json_array(&path).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn missing_data_dir_degrades_to_empty_collections() {
        let store = CatalogStore::new(
            PathBuf::from("/nonexistent/nautic-data"),
            Duration::from_secs(300),
        );
        assert!(store.products().await.is_empty());
        assert!(store.rentals().await.is_empty());
        assert!(store.news().await.is_empty());
    }

    #[tokio::test]
    async fn sample_catalog_loads() {
        let store = store();
        assert!(!store.products().await.is_empty());
        assert!(!store.spare_parts().await.is_empty());
        assert!(!store.news().await.is_empty());
    }

    #[tokio::test]
    async fn sale_and_accessory_views_partition_by_category() {
        let store = store();
        let sale = store.sale_products().await;
        assert!(!sale.is_empty());
        for item in &sale {
            let category = item.category.to_lowercase();
            assert!(!category.contains("ricambi"), "spare part listed for sale");
            assert!(
                !is_accessory_category(&category),
                "accessory listed for sale"
            );
        }

        let accessories = store.accessories().await;
        assert!(!accessories.is_empty());
        for item in &accessories {
            assert!(is_accessory_category(&item.category));
        }
    }

    #[tokio::test]
    async fn find_product_searches_both_collections() {
        let store = store();
        let product = store.products().await[0].clone();
        let part = store.spare_parts().await[0].clone();

        assert!(store.find_product(&product.id).await.is_some());
        assert!(store.find_product(&part.id).await.is_some());
        assert!(store.find_product("no-such-id").await.is_none());
    }

    #[tokio::test]
    async fn news_is_sorted_newest_first() {
        let articles = store().news().await;
        for pair in articles.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
    }
}
