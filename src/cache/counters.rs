//! Cache Counters Module
//!
//! Tracks cache performance metrics: hits, misses, lazy/swept expiries,
//! and LRU evictions.

use serde::Serialize;

// == Cache Counters ==
/// Monotonic operation counters for a cache instance.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheCounters {
    /// Successful reads of a live entry
    pub hits: u64,
    /// Reads that found nothing servable (absent or expired)
    pub misses: u64,
    /// Entries removed because their TTL elapsed (lazy check or cleanup)
    pub expired: u64,
    /// Entries removed to satisfy the capacity bound
    pub evictions: u64,
}

impl CacheCounters {
    // == Constructor ==
    /// Creates counters with everything at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// hits / (hits + misses), or 0.0 before any read.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Expired ==
    /// Counts `n` entries removed by expiry.
    pub fn record_expired(&mut self, n: u64) {
        self.expired += n;
    }

    // == Record Eviction ==
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}
