//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment
//! variables.

use std::env;
use std::time::Duration;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults matching the product-lookup workload: a small bound (50
/// products) and a 30 minute default TTL.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries; None disables eviction entirely
    pub capacity: Option<usize>,
    /// TTL applied to entries inserted without an explicit one
    pub default_ttl: Duration,
    /// Interval between background cleanup sweeps
    pub cleanup_interval: Duration,
}

impl CacheConfig {
    /// Creates a CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum entries; `0` means unbounded (default: 50)
    /// - `CACHE_DEFAULT_TTL_SECS` - Default TTL in seconds (default: 1800)
    /// - `CACHE_CLEANUP_INTERVAL_SECS` - Sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let capacity = match env::var("CACHE_CAPACITY").ok().and_then(|v| v.parse().ok()) {
            Some(0) => None,
            Some(capacity) => Some(capacity),
            None => Some(50),
        };

        Self {
            capacity,
            default_ttl: Duration::from_secs(
                env::var("CACHE_DEFAULT_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1800),
            ),
            cleanup_interval: Duration::from_secs(
                env::var("CACHE_CLEANUP_INTERVAL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60),
            ),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: Some(50),
            default_ttl: Duration::from_secs(1800),
            cleanup_interval: Duration::from_secs(60),
        }
    }
}
