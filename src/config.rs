//! Configuration Module
//!
//! Construction-time settings for the cache: capacity, TTL and the eviction hook.
//! Values are fixed once the cache is built.

use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Default capacity when `CACHE_CAPACITY` is unset or unparsable.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Callback invoked with `(key, value)` whenever an entry leaves the cache.
///
/// It runs synchronously while the cache lock is held. It must not block and
/// must not call back into the same cache, or the calling thread deadlocks.
pub type EvictionCallback = Arc<dyn Fn(&[u8], &[u8]) + Send + Sync>;

/// Cache configuration parameters.
#[derive(Clone)]
pub struct CacheConfig {
    /// Maximum number of resident entries
    pub capacity: usize,
    /// Engine-wide TTL; `None` or zero disables expiry
    pub ttl: Option<Duration>,
    /// Hook fired on every removal, whatever the cause
    pub on_evict: Option<EvictionCallback>,
}

impl CacheConfig {
    /// Creates a configuration with the given capacity, no TTL and no callback.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ttl: None,
            on_evict: None,
        }
    }

    /// Sets the engine-wide TTL. A zero duration disables expiry.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl).filter(|ttl| !ttl.is_zero());
        self
    }

    /// Sets the eviction callback.
    pub fn with_on_evict<F>(mut self, callback: F) -> Self
    where
        F: Fn(&[u8], &[u8]) + Send + Sync + 'static,
    {
        self.on_evict = Some(Arc::new(callback));
        self
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `CACHE_TTL_MS` - Engine-wide TTL in milliseconds (default: 0, disabled)
    ///
    /// The eviction callback cannot come from the environment; chain
    /// [`CacheConfig::with_on_evict`] afterwards if one is needed.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let capacity = lookup("CACHE_CAPACITY")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CAPACITY);
        let ttl_ms: u64 = lookup("CACHE_TTL_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Self::new(capacity).with_ttl(Duration::from_millis(ttl_ms))
    }

    /// Checks the configuration can back a cache.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the effective TTL, treating zero as disabled.
    pub(crate) fn effective_ttl(&self) -> Option<Duration> {
        self.ttl.filter(|ttl| !ttl.is_zero())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl fmt::Debug for CacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConfig")
            .field("capacity", &self.capacity)
            .field("ttl", &self.ttl)
            .field("on_evict", &self.on_evict.as_ref().map(|_| "<callback>"))
            .finish()
    }
}
