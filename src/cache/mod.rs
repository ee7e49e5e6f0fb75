//! Cache Module
//!
//! Generic in-memory TTL cache engine used as the storage backend for both
//! directions of the binding cache.

mod entry;
mod stats;
mod store;

// Re-export public types
pub use entry::{current_timestamp, CacheEntry};
pub use stats::CacheStats;
pub use store::TtlCache;
