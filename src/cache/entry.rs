//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.
//!
//! Every entry carries a concrete expiration instant. Insertion always
//! resolves a TTL (explicit or default), so there is no never-expiring
//! entry. Expiry is a predicate evaluated against the clock on access,
//! never a transition the cache performs on its own.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cache entry: the stored value plus recency/expiry bookkeeping.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the entry stops being servable
    pub expires_at: Instant,
    /// Most recent successful read (or the insertion time)
    pub last_accessed: Instant,
    /// Index of this entry's node in the LRU list
    pub(crate) node: usize,
}

impl<V> CacheEntry<V> {
    /// Creates an entry expiring at `expires_at`, inserted at `node` in
    /// the LRU list. The caller resolves the TTL into an instant; see
    /// [`TtlCache::set`](crate::cache::TtlCache::set).
    pub(crate) fn new(value: V, expires_at: Instant, now: Instant, node: usize) -> Self {
        Self {
            value,
            expires_at,
            last_accessed: now,
            node,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of `now`.
    ///
    /// Boundary condition: expired once `now >= expires_at`, so an entry
    /// whose TTL has fully elapsed is immediately unservable.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    // == Time To Live ==
    /// Remaining lifetime as of `now`; zero once expired.
    pub fn ttl_remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}
