//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with value and write metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: Vec<u8>,
    /// Time of the most recent write
    pub written_at: Instant,
    /// Per-entry TTL override, None = use the engine TTL
    pub ttl: Option<Duration>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Optional per-entry TTL override
    pub fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        Self {
            value,
            written_at: Instant::now(),
            ttl,
        }
    }

    // == Rewrite ==
    /// Replaces the value and refreshes the write timestamp.
    pub fn rewrite(&mut self, value: Vec<u8>, ttl: Option<Duration>) {
        self.value = value;
        self.written_at = Instant::now();
        self.ttl = ttl;
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived its TTL as of `now`.
    ///
    /// The entry's own TTL wins over `default_ttl`. An entry is expired only once
    /// the elapsed time strictly exceeds the TTL; with no TTL it never expires.
    pub fn is_expired_at(&self, now: Instant, default_ttl: Option<Duration>) -> bool {
        match self.ttl.or(default_ttl).filter(|ttl| !ttl.is_zero()) {
            Some(ttl) => now.saturating_duration_since(self.written_at) > ttl,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns the remaining lifetime as of `now`, or None if the entry never expires.
    ///
    /// # Returns
    /// - `Some(Duration::ZERO)` if the TTL has elapsed
    /// - `Some(remaining)` if the entry has a TTL and is still live
    /// - `None` if no TTL applies
    pub fn ttl_remaining_at(&self, now: Instant, default_ttl: Option<Duration>) -> Option<Duration> {
        self.ttl
            .or(default_ttl)
            .filter(|ttl| !ttl.is_zero())
            .map(|ttl| ttl.saturating_sub(now.saturating_duration_since(self.written_at)))
    }
}
