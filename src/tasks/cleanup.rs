//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Expiry is otherwise lazy: an expired entry stays resident until a `get`
//! reaps it. Callers that want expired memory back sooner can spawn this task.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Cache;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between runs.
/// Each purge takes the cache's exclusive lock and fires the eviction callback
/// for every entry it drops.
///
/// # Arguments
/// * `cache` - Handle to the cache to sweep
/// * `interval` - Time between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task; abort it to stop sweeping.
///
/// # Example
/// ```ignore
/// let cache = Cache::new(CacheConfig::new(1000).with_ttl(Duration::from_secs(30)))?;
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: Cache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting TTL cleanup task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
