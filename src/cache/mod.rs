//! Cache Module
//!
//! In-memory memoization with TTL expiration and LRU eviction.

mod counters;
mod entry;
mod key;
mod lru;
mod store;
mod ttl;


// Re-export public types
pub use counters::CacheCounters;
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use lru::LruList;
pub use store::{CacheSnapshot, TtlCache};
pub use ttl::Ttl;
