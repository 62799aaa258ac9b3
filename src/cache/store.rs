//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL expiration.
//! `CacheStore` is not synchronized; [`crate::cache::Cache`] wraps it in a lock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Main cache storage with LRU eviction and TTL support.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<Vec<u8>, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Capacity, TTL and eviction hook
    config: CacheConfig,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore from a validated configuration.
    ///
    /// Fails with `InvalidConfig` when the capacity is zero.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entries: HashMap::with_capacity(config.capacity),
            lru: LruTracker::with_capacity(config.capacity),
            stats: CacheStats::new(),
            config,
        })
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists, the value is replaced, its write time is reset
    /// and it becomes the most recently used. Otherwise, if the cache is at
    /// capacity, the least recently used entry is evicted first.
    ///
    /// # Arguments
    /// * `key` - The key to store, must not be empty
    /// * `value` - The value to store
    /// * `ttl` - Optional per-entry TTL (uses the engine TTL if None)
    pub fn put(&mut self, key: &[u8], value: Vec<u8>, ttl: Option<Duration>) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidKey("key must not be empty".to_string()));
        }

        if let Some(entry) = self.entries.get_mut(key) {
            entry.rewrite(value, ttl);
            self.lru.touch(key);
            return Ok(());
        }

        if self.entries.len() >= self.config.capacity {
            self.evict();
        }

        self.entries.insert(key.to_vec(), CacheEntry::new(value, ttl));
        self.lru.touch(key);

        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if found and not expired, and marks the key as most
    /// recently used. Expired entries are removed (firing the eviction hook) and
    /// counted as misses.
    pub fn get(&mut self, key: &[u8]) -> Result<Vec<u8>> {
        let now = Instant::now();
        let default_ttl = self.config.effective_ttl();

        match self.entries.get(key) {
            None => {
                self.stats.record_miss();
                return Err(CacheError::not_found(key));
            }
            Some(entry) if entry.is_expired_at(now, default_ttl) => {}
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                self.lru.touch(key);
                return Ok(value);
            }
        }

        self.remove(key);
        self.stats.record_miss();
        trace!("Reaped expired key {}", String::from_utf8_lossy(key));
        Err(CacheError::expired(key))
    }

    // == Has ==
    /// Checks if a live entry exists for the key.
    ///
    /// Does not touch recency, counters, or expired entries.
    pub fn has(&self, key: &[u8]) -> bool {
        let default_ttl = self.config.effective_ttl();
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired_at(Instant::now(), default_ttl))
    }

    // == Delete ==
    /// Removes an entry by key, firing the eviction hook.
    ///
    /// # Arguments
    /// * `key` - The key to delete
    pub fn delete(&mut self, key: &[u8]) -> Result<()> {
        match self.remove(key) {
            Some(_) => Ok(()),
            None => Err(CacheError::not_found(key)),
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.entries.len();
        stats
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache, least recently used first.
    ///
    /// Returns the number of entries removed. Counters are left untouched.
    pub fn purge_expired(&mut self) -> usize {
        let now = Instant::now();
        let default_ttl = self.config.effective_ttl();

        let expired_keys: Vec<Vec<u8>> = self
            .lru
            .iter()
            .filter(|key| {
                self.entries
                    .get(*key)
                    .is_some_and(|entry| entry.is_expired_at(now, default_ttl))
            })
            .map(<[u8]>::to_vec)
            .collect();

        for key in &expired_keys {
            self.remove(key);
        }

        expired_keys.len()
    }

    // == Length ==
    /// Returns the current number of entries in the cache, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Returns the engine-wide TTL, None when expiry is disabled.
    pub fn ttl(&self) -> Option<Duration> {
        self.config.effective_ttl()
    }

    // == Evict ==
    /// Evicts the least recently used entry. No-op on an empty cache.
    fn evict(&mut self) {
        let Some(key) = self.lru.peek_oldest().map(<[u8]>::to_vec) else {
            return;
        };

        if self.remove(&key).is_some() {
            self.stats.record_eviction();
            debug!(
                "Evicted least recently used key {} (capacity {})",
                String::from_utf8_lossy(&key),
                self.config.capacity
            );
        }
    }

    // == Remove ==
    /// Single removal path shared by delete, expiry and eviction.
    ///
    /// Unlinks the key from storage and recency order, then fires the eviction
    /// hook with the value held at removal time. Removing an absent key is a no-op.
    fn remove(&mut self, key: &[u8]) -> Option<CacheEntry> {
        let entry = self.entries.remove(key)?;
        self.lru.remove(key);

        if let Some(on_evict) = &self.config.on_evict {
            on_evict(key, &entry.value);
        }

        Some(entry)
    }

    /// Keys from least to most recently used.
    #[cfg(test)]
    pub(crate) fn keys_by_recency(&self) -> Vec<Vec<u8>> {
        self.lru.iter().map(<[u8]>::to_vec).collect()
    }

    /// Panics unless the store and the recency order hold the same key set.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.entries.len(), self.lru.len(), "store/order size mismatch");
        for key in self.lru.iter() {
            assert!(self.entries.contains_key(key), "order holds a key the store lacks");
        }
        assert!(self.entries.len() <= self.config.capacity, "capacity exceeded");
    }
}
