//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// `NotFound` and `Expired` are routine misses, not failures of the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key was never stored, or has already been removed
    #[error("Key not found: {key}")]
    NotFound { key: String },

    /// Key was stored but its TTL elapsed before this access
    #[error("Key expired: {key}")]
    Expired { key: String },

    /// Key rejected on insert
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Configuration rejected at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CacheError {
    /// Builds a `NotFound` error for a raw key.
    pub fn not_found(key: &[u8]) -> Self {
        CacheError::NotFound {
            key: String::from_utf8_lossy(key).into_owned(),
        }
    }

    /// Builds an `Expired` error for a raw key.
    pub fn expired(key: &[u8]) -> Self {
        CacheError::Expired {
            key: String::from_utf8_lossy(key).into_owned(),
        }
    }

    /// Returns true for either kind of cache miss.
    pub fn is_miss(&self) -> bool {
        matches!(self, CacheError::NotFound { .. } | CacheError::Expired { .. })
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
