//! Product Cache - bounded in-memory memoization for product lookups
//!
//! A TTL-aware, least-recently-used cache plus the catalog service that
//! consumes it: cache-aside reads against a pluggable product store, with
//! invalidation around writes and an owner-driven cleanup sweep.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheKey, CacheSnapshot, Ttl, TtlCache};
pub use catalog::{CatalogError, MemoryStore, Product, ProductCatalog, ProductStore};
pub use config::CacheConfig;
pub use error::CacheError;
pub use tasks::spawn_cleanup_task;
