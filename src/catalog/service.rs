//! Catalog Service Module
//!
//! The calling service in front of the cache: cache-aside reads and
//! invalidate-around-write mutations. Owns the cache instance for its own
//! lifetime; no ambient global state.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{CacheKey, CacheSnapshot, TtlCache};
use crate::catalog::{Product, ProductStore};
use crate::config::CacheConfig;
use crate::error::CacheError;

// == Catalog Error ==
/// Errors surfaced by catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No product with the given id exists in the store
    #[error("Product with id {0} not found")]
    NotFound(u64),

    /// Cache rejected an operation (malformed TTL)
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The persistence store failed
    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

// == Product Catalog ==
/// Product lookup service memoizing reads through a [`TtlCache`].
///
/// The cache lock is never held across store I/O: reads release it before
/// falling back to the store and re-acquire it to populate the result.
pub struct ProductCatalog<S> {
    store: S,
    cache: Arc<RwLock<TtlCache<Product>>>,
}

impl<S: ProductStore> ProductCatalog<S> {
    // == Constructors ==
    /// Creates a catalog over `store` with a cache built from `config`.
    pub fn new(store: S, config: &CacheConfig) -> Self {
        Self::with_cache(store, TtlCache::with_config(config))
    }

    /// Creates a catalog over `store` with an explicit cache instance.
    pub fn with_cache(store: S, cache: TtlCache<Product>) -> Self {
        Self {
            store,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    // == Find By Id ==
    /// Looks up a product, serving from the cache when possible.
    ///
    /// On a miss the store is queried and the result cached with the
    /// default TTL before being returned.
    pub async fn find_by_id(&self, id: u64) -> Result<Product, CatalogError> {
        let key = CacheKey::from(id);

        if let Some(product) = self.cache.write().await.get(&key) {
            return Ok(product);
        }

        debug!(id, "fetching product from store");
        let product = self
            .store
            .fetch(id)
            .await?
            .ok_or(CatalogError::NotFound(id))?;

        self.cache.write().await.set(key, product.clone(), None)?;
        Ok(product)
    }

    // == Update ==
    /// Persists a changed product, invalidating its cache entry first so a
    /// racing read cannot resurrect stale data, then re-caching the stored
    /// snapshot.
    pub async fn update(&self, product: Product) -> Result<Product, CatalogError> {
        let key = CacheKey::from(product.id);

        self.cache.write().await.delete(&key);
        info!(id = product.id, "updating product, cache entry cleared");

        if self.store.fetch(product.id).await?.is_none() {
            return Err(CatalogError::NotFound(product.id));
        }

        let saved = self.store.save(product).await?;
        self.cache.write().await.set(key, saved.clone(), None)?;
        Ok(saved)
    }

    // == Remove ==
    /// Deletes a product from the store, invalidating its cache entry
    /// first.
    pub async fn remove(&self, id: u64) -> Result<(), CatalogError> {
        self.cache.write().await.delete(&CacheKey::from(id));
        info!(id, "removing product, cache entry cleared");

        if !self.store.remove(id).await? {
            return Err(CatalogError::NotFound(id));
        }
        Ok(())
    }

    // == Invalidate All ==
    /// Drops every cached product. Administrative reset; the store is
    /// untouched.
    pub async fn invalidate_all(&self) {
        self.cache.write().await.clear();
    }

    // == Stats ==
    /// Snapshot of the underlying cache for diagnostics.
    pub async fn cache_stats(&self) -> CacheSnapshot {
        self.cache.read().await.stats()
    }

    /// Shared handle to the cache, e.g. for spawning a cleanup task.
    pub fn cache(&self) -> Arc<RwLock<TtlCache<Product>>> {
        Arc::clone(&self.cache)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryStore;
    use std::time::Duration;

    fn catalog_with(products: Vec<Product>) -> ProductCatalog<MemoryStore> {
        ProductCatalog::with_cache(
            MemoryStore::with_products(products),
            TtlCache::bounded(10, Duration::from_secs(300)),
        )
    }

    #[tokio::test]
    async fn test_find_by_id_miss_then_cached() {
        let catalog = catalog_with(vec![Product::new(1, "Chair", 49.0)]);

        let first = catalog.find_by_id(1).await.unwrap();
        assert_eq!(first.title, "Chair");
        assert_eq!(catalog.store().fetch_count(), 1);

        // Second read is served from the cache
        let second = catalog.find_by_id(1).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(catalog.store().fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let catalog = catalog_with(vec![]);

        let result = catalog.find_by_id(99).await;
        assert!(matches!(result, Err(CatalogError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_update_invalidates_and_recaches() {
        let catalog = catalog_with(vec![Product::new(1, "Chair", 49.0)]);

        catalog.find_by_id(1).await.unwrap();

        let mut changed = Product::new(1, "Chair Deluxe", 59.0);
        changed.updated_at = chrono::Utc::now();
        catalog.update(changed).await.unwrap();

        // The updated snapshot is served without another store fetch
        let fetched_before = catalog.store().fetch_count();
        let product = catalog.find_by_id(1).await.unwrap();
        assert_eq!(product.title, "Chair Deluxe");
        assert_eq!(catalog.store().fetch_count(), fetched_before);
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let catalog = catalog_with(vec![]);

        let result = catalog.update(Product::new(5, "Ghost", 1.0)).await;
        assert!(matches!(result, Err(CatalogError::NotFound(5))));
    }

    #[tokio::test]
    async fn test_remove_invalidates() {
        let catalog = catalog_with(vec![Product::new(1, "Chair", 49.0)]);

        catalog.find_by_id(1).await.unwrap();
        catalog.remove(1).await.unwrap();

        let result = catalog.find_by_id(1).await;
        assert!(matches!(result, Err(CatalogError::NotFound(1))));
    }

    #[tokio::test]
    async fn test_remove_missing_product() {
        let catalog = catalog_with(vec![]);

        let result = catalog.remove(42).await;
        assert!(matches!(result, Err(CatalogError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_invalidate_all() {
        let catalog = catalog_with(vec![
            Product::new(1, "Chair", 49.0),
            Product::new(2, "Table", 120.0),
        ]);

        catalog.find_by_id(1).await.unwrap();
        catalog.find_by_id(2).await.unwrap();
        assert_eq!(catalog.cache_stats().await.size, 2);

        catalog.invalidate_all().await;
        assert_eq!(catalog.cache_stats().await.size, 0);
    }
}
