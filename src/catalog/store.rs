//! Product Store Module
//!
//! The persistence seam behind the catalog service. The cache never talks
//! to the store; only [`ProductCatalog`](crate::catalog::ProductCatalog)
//! does, on a miss or around a mutation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::Product;

// == Product Store Trait ==
/// Authoritative product storage.
///
/// Implementations own the actual I/O (database, remote service, ...).
/// Errors are opaque to the catalog, which forwards them as-is.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetches a product by id; Ok(None) when it does not exist.
    async fn fetch(&self, id: u64) -> anyhow::Result<Option<Product>>;

    /// Persists a product, returning the stored snapshot.
    async fn save(&self, product: Product) -> anyhow::Result<Product>;

    /// Removes a product; returns whether it existed.
    async fn remove(&self, id: u64) -> anyhow::Result<bool>;
}

// == Memory Store ==
/// HashMap-backed [`ProductStore`] for tests and embedders without a real
/// backend. Counts fetches so callers can prove reads were served from
/// the cache instead.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<HashMap<u64, Product>>,
    fetches: AtomicU64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given products.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products.into_iter().map(|p| (p.id, p)).collect();
        Self {
            products: RwLock::new(map),
            fetches: AtomicU64::new(0),
        }
    }

    /// Number of `fetch` calls that reached this store.
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn fetch(&self, id: u64) -> anyhow::Result<Option<Product>> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn save(&self, product: Product) -> anyhow::Result<Product> {
        self.products.write().await.insert(product.id, product.clone());
        Ok(product)
    }

    async fn remove(&self, id: u64) -> anyhow::Result<bool> {
        Ok(self.products.write().await.remove(&id).is_some())
    }
}
