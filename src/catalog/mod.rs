//! Catalog Module
//!
//! The product lookup service that consumes the cache: cache-aside reads,
//! invalidation around writes, and the persistence seam.

mod product;
mod service;
mod store;

pub use product::Product;
pub use service::{CatalogError, ProductCatalog};
pub use store::{MemoryStore, ProductStore};
