//! Storage Contract
//!
//! The capability interface callers program against: store with a TTL, probe,
//! and fetch. [`Cache`] is the in-process implementation.

use std::time::Duration;

use crate::cache::Cache;
use crate::error::Result;

/// A key/value store with time-bounded entries.
pub trait Cacher: Send + Sync {
    /// Stores `value` under `key`. A zero `ttl` means "use the store's default".
    fn put(&self, key: &[u8], value: &[u8], ttl: Duration) -> Result<()>;

    /// Returns true if `key` holds a live entry.
    fn has(&self, key: &[u8]) -> bool;

    /// Returns the value stored under `key`.
    fn get(&self, key: &[u8]) -> Result<Vec<u8>>;
}

impl Cacher for Cache {
    fn put(&self, key: &[u8], value: &[u8], ttl: Duration) -> Result<()> {
        let ttl = Some(ttl).filter(|ttl| !ttl.is_zero());
        self.put_with_ttl(key, value, ttl)
    }

    fn has(&self, key: &[u8]) -> bool {
        Cache::has(self, key)
    }

    fn get(&self, key: &[u8]) -> Result<Vec<u8>> {
        Cache::get(self, key)
    }
}
