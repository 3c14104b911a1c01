//! Cache Store Module
//!
//! The bounded TTL cache itself: HashMap storage combined with an LRU list
//! for recency tracking and lazy expiration on read.
//!
//! A miss, an expired read, and deleting an absent key are all expected,
//! silent outcomes reported through the return value. The only error the
//! cache ever raises is a malformed TTL on insert.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, trace};

use crate::cache::{CacheCounters, CacheEntry, CacheKey, LruList, Ttl};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == TTL Cache ==
/// In-memory key-value cache with per-entry expiry and least-recently-used
/// eviction when a capacity bound is configured.
///
/// The cache owns its entries outright and performs no I/O; values are
/// cloned on the way in and out, so callers never alias cache-internal
/// state. Shared access belongs behind a lock (see `ProductCatalog`).
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage; each entry knows its LRU node
    entries: HashMap<CacheKey, CacheEntry<V>>,
    /// Access-order list, front = most recently used
    lru: LruList,
    /// Operation counters
    counters: CacheCounters,
    /// Maximum number of entries; None disables eviction entirely
    capacity: Option<usize>,
    /// TTL applied when `set` is given none
    default_ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    // == Constructors ==
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is clamped to one.
    pub fn bounded(capacity: usize, default_ttl: Duration) -> Self {
        Self::new(Some(capacity.max(1)), default_ttl)
    }

    /// Creates a cache with no capacity bound and no eviction.
    pub fn unbounded(default_ttl: Duration) -> Self {
        Self::new(None, default_ttl)
    }

    /// Creates a cache from a [`CacheConfig`].
    pub fn with_config(config: &CacheConfig) -> Self {
        Self::new(config.capacity.map(|c| c.max(1)), config.default_ttl)
    }

    fn new(capacity: Option<usize>, default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruList::new(),
            counters: CacheCounters::new(),
            capacity,
            default_ttl,
        }
    }

    // == Get ==
    /// Looks up a value by key, returning a clone on a hit.
    ///
    /// An expired entry is removed on discovery and reported as a miss;
    /// a hit refreshes the entry's recency. Never returns a value past
    /// its expiry.
    pub fn get(&mut self, key: &CacheKey) -> Option<V> {
        let now = Instant::now();

        let is_expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now),
            None => {
                self.counters.record_miss();
                trace!(key = %key, "cache miss");
                return None;
            }
        };

        if is_expired {
            // Lazy expiry: drop the entry as a side effect of the read.
            if let Some(entry) = self.entries.remove(key) {
                self.lru.remove(entry.node);
                self.counters.record_expired(1);
            }
            self.counters.record_miss();
            debug!(key = %key, "cache entry expired");
            return None;
        }

        if let Some(entry) = self.entries.get_mut(key) {
            entry.last_accessed = now;
            let value = entry.value.clone();
            self.lru.touch(entry.node);
            self.counters.record_hit();
            trace!(key = %key, "cache hit");
            return Some(value);
        }
        None
    }

    // == Set ==
    /// Stores a value under `key`, expiring after `ttl` (or the default
    /// TTL when none is given).
    ///
    /// An existing entry for the key is replaced and its position
    /// refreshed. When the cache is at capacity, least-recently-used
    /// entries are evicted before the insert, so the bound holds at all
    /// times. Afterwards the key sits at the most-recently-used position.
    ///
    /// # Errors
    /// `CacheError::InvalidTtl` for malformed shorthand, zero durations,
    /// and durations too large for the clock to represent; nothing is
    /// inserted in that case.
    pub fn set(&mut self, key: CacheKey, value: V, ttl: Option<Ttl>) -> Result<()> {
        let ttl = match ttl {
            Some(ttl) => ttl.resolve()?,
            None => self.default_ttl,
        };
        let now = Instant::now();
        // A duration the clock cannot represent is just another bad TTL.
        let expires_at = now
            .checked_add(ttl)
            .ok_or_else(|| CacheError::InvalidTtl(format!("{}s exceeds clock range", ttl.as_secs())))?;

        // Replace-in-place would leave a stale position; take the old
        // entry out first so the key re-enters at the front.
        if let Some(old) = self.entries.remove(&key) {
            self.lru.remove(old.node);
        }

        if let Some(capacity) = self.capacity {
            while self.entries.len() >= capacity {
                match self.lru.pop_back() {
                    Some(victim) => {
                        self.entries.remove(&victim);
                        self.counters.record_eviction();
                        debug!(key = %victim, "evicted least recently used entry");
                    }
                    None => break,
                }
            }
        }

        let node = self.lru.push_front(key.clone());
        self.entries
            .insert(key.clone(), CacheEntry::new(value, expires_at, now, node));

        debug!(
            key = %key,
            ttl_secs = ttl.as_secs(),
            size = self.entries.len(),
            "cache set"
        );
        Ok(())
    }

    // == Delete ==
    /// Removes the entry for `key` if present.
    ///
    /// Returns whether anything was removed; an absent key is a silent
    /// no-op. Callers use this to invalidate around authoritative-store
    /// mutations.
    pub fn delete(&mut self, key: &CacheKey) -> bool {
        match self.entries.remove(key) {
            Some(entry) => {
                self.lru.remove(entry.node);
                debug!(key = %key, "cache delete");
                true
            }
            None => false,
        }
    }

    // == Clear ==
    /// Removes every entry unconditionally.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        debug!(removed, "cache cleared");
    }

    // == Cleanup ==
    /// Sweeps the cache, removing every entry expired as of now.
    ///
    /// Returns the number removed. Complements the lazy check in [`get`]:
    /// entries that expire but are never read again would otherwise linger
    /// until capacity pressure evicts them.
    ///
    /// [`get`]: TtlCache::get
    pub fn cleanup(&mut self) -> usize {
        let now = Instant::now();

        let expired_keys: Vec<CacheKey> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        let removed = expired_keys.len();
        for key in expired_keys {
            if let Some(entry) = self.entries.remove(&key) {
                self.lru.remove(entry.node);
            }
        }

        if removed > 0 {
            self.counters.record_expired(removed as u64);
            debug!(removed, "cleanup removed expired entries");
        }
        removed
    }

    // == Stats ==
    /// Returns a point-in-time snapshot for observability.
    pub fn stats(&self) -> CacheSnapshot {
        let keys: Vec<String> = self
            .lru
            .keys_oldest_first()
            .iter()
            .map(CacheKey::to_string)
            .collect();

        CacheSnapshot {
            size: self.entries.len(),
            capacity: self.capacity,
            oldest_key: keys.first().cloned(),
            newest_key: keys.last().cloned(),
            keys,
            hits: self.counters.hits,
            misses: self.counters.misses,
            expired: self.counters.expired,
            evictions: self.counters.evictions,
            hit_rate: self.counters.hit_rate(),
        }
    }

    // == Length ==
    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Cache Snapshot ==
/// Read-only introspection of a cache instance.
#[derive(Debug, Clone, Serialize)]
pub struct CacheSnapshot {
    /// Current number of entries
    pub size: usize,
    /// Configured bound, None when unbounded
    pub capacity: Option<usize>,
    /// All keys, least recently used first
    pub keys: Vec<String>,
    /// Current eviction candidate
    pub oldest_key: Option<String>,
    /// Most recently used key
    pub newest_key: Option<String>,
    /// Reads served from the cache
    pub hits: u64,
    /// Reads that found nothing servable
    pub misses: u64,
    /// Entries removed by expiry
    pub expired: u64,
    /// Entries removed by the capacity bound
    pub evictions: u64,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}
