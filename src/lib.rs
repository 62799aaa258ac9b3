//! LRU TTL Cache - an embeddable fixed-capacity key/value cache
//!
//! Provides least-recently-used eviction, optional TTL expiry checked lazily
//! on read, an eviction notification hook, and hit/miss/eviction counters.

pub mod cache;
pub mod cacher;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheStats};
pub use cacher::Cacher;
pub use config::{CacheConfig, EvictionCallback};
pub use error::{CacheError, Result};
pub use tasks::spawn_cleanup_task;
