//! Background Tasks Module
//!
//! Optional tasks a caller can spawn alongside a cache.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
