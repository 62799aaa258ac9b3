//! Cache Handle Module
//!
//! Thread-safe, cloneable front end over [`CacheStore`].

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::error::Result;

// == Cache ==
/// Shared handle to a fixed-capacity LRU cache with optional TTL expiry.
///
/// Clones share the same underlying store. Every operation runs under one lock:
/// `put`, `get`, `delete` and `purge_expired` take it exclusively (a `get` can
/// reorder or reap), while `has`, `stats` and the size accessors share it.
///
/// The eviction callback runs while the exclusive lock is held. It must not
/// block and must not call back into this cache.
///
/// # Example
/// ```
/// use lru_ttl_cache::{Cache, CacheConfig};
///
/// let cache = Cache::new(CacheConfig::new(2)).unwrap();
/// cache.put("a", "1").unwrap();
/// cache.put("b", "2").unwrap();
/// cache.put("c", "3").unwrap();
///
/// assert!(!cache.has("a"));
/// assert_eq!(cache.get("b").unwrap(), b"2");
/// ```
#[derive(Debug, Clone)]
pub struct Cache {
    inner: Arc<RwLock<CacheStore>>,
}

impl Cache {
    /// Creates a cache from the given configuration.
    ///
    /// Fails with `InvalidConfig` when the capacity is zero.
    pub fn new(config: CacheConfig) -> Result<Self> {
        let store = CacheStore::new(config)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(store)),
        })
    }

    /// Creates a cache with the given capacity, no TTL and no eviction callback.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new(CacheConfig::new(capacity))
    }

    /// Stores `value` under `key` using the engine-wide TTL.
    pub fn put(&self, key: impl AsRef<[u8]>, value: impl Into<Vec<u8>>) -> Result<()> {
        self.put_with_ttl(key, value, None)
    }

    /// Stores `value` under `key`, overriding the engine TTL for this entry.
    ///
    /// `None` falls back to the engine TTL; `Some(Duration::ZERO)` disables
    /// expiry for this entry.
    pub fn put_with_ttl(
        &self,
        key: impl AsRef<[u8]>,
        value: impl Into<Vec<u8>>,
        ttl: Option<Duration>,
    ) -> Result<()> {
        self.inner.write().put(key.as_ref(), value.into(), ttl)
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// Fails with `NotFound` for an absent key, or `Expired` when the entry
    /// outlived its TTL (the entry is removed in that case).
    pub fn get(&self, key: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        self.inner.write().get(key.as_ref())
    }

    /// Returns true if `key` holds a live entry. Never reorders, counts or reaps.
    pub fn has(&self, key: impl AsRef<[u8]>) -> bool {
        self.inner.read().has(key.as_ref())
    }

    /// Removes `key`, firing the eviction callback. Fails with `NotFound` if absent.
    pub fn delete(&self, key: impl AsRef<[u8]>) -> Result<()> {
        self.inner.write().delete(key.as_ref())
    }

    /// Returns a consistent snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        self.inner.read().stats()
    }

    /// Removes every expired entry and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        self.inner.write().purge_expired()
    }

    /// Number of resident entries, including expired ones not yet reaped.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    /// Engine-wide TTL, None when expiry is disabled.
    pub fn ttl(&self) -> Option<Duration> {
        self.inner.read().ttl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let cache = Cache::with_capacity(4).unwrap();
        let other = cache.clone();

        cache.put("shared", "value").unwrap();

        assert_eq!(other.get("shared").unwrap(), b"value");
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            Cache::with_capacity(0),
            Err(CacheError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_accessors() {
        let cache = Cache::new(CacheConfig::new(8).with_ttl(Duration::from_secs(5))).unwrap();

        assert_eq!(cache.capacity(), 8);
        assert_eq!(cache.ttl(), Some(Duration::from_secs(5)));
        assert!(cache.is_empty());

        cache.put(vec![1u8, 2, 3], vec![4u8]).unwrap();
        assert_eq!(cache.len(), 1);
        assert!(cache.has([1u8, 2, 3]));
    }

    #[test]
    fn test_put_with_zero_ttl_never_expires() {
        let cache = Cache::new(CacheConfig::new(8).with_ttl(Duration::from_millis(20))).unwrap();

        cache
            .put_with_ttl("pinned", "v", Some(Duration::ZERO))
            .unwrap();
        thread::sleep(Duration::from_millis(50));

        assert!(cache.has("pinned"));
        assert_eq!(cache.get("pinned").unwrap(), b"v");
    }

    #[test]
    fn test_concurrent_puts_respect_capacity() {
        let cache = Cache::with_capacity(16).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..200 {
                        cache.put(format!("{t}-{i}"), vec![t as u8]).unwrap();
                        assert!(cache.len() <= 16);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 16);
        assert_eq!(cache.stats().evictions, 8 * 200 - 16);
        cache.inner.read().assert_consistent();
    }
}
