//! TTL Cleanup Task
//!
//! Owner-driven background sweep of expired cache entries.
//!
//! Lazy expiry on reads only reclaims entries that are actually requested
//! again; this task reclaims the rest. The cache itself carries no timer,
//! so scheduling stays with whoever owns the cache.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlCache;

/// Spawns a task that calls [`TtlCache::cleanup`] every `interval`.
///
/// Runs until aborted; the returned handle is meant to be aborted by the
/// owner during shutdown.
pub fn spawn_cleanup_task<V>(
    cache: Arc<RwLock<TtlCache<V>>>,
    interval: Duration,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(interval_secs = interval.as_secs(), "cleanup task started");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache = cache.write().await;
                cache.cleanup()
            };

            if removed > 0 {
                info!(removed, "cleanup removed expired entries");
            } else {
                debug!("cleanup found no expired entries");
            }
        }
    })
}
