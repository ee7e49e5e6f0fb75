//! Cache Entry Module
//!
//! Defines the envelope wrapped around every stored value: the value itself
//! plus its creation and expiration timestamps.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A stored value together with its lifetime metadata.
///
/// Timestamps are seconds since the Unix epoch. Every entry expires; the
/// engine has no notion of an immortal entry.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value, owned by the entry
    pub value: V,
    /// Creation timestamp (Unix seconds), supplied by the caller at insertion
    pub created_at: u64,
    /// Expiration timestamp (Unix seconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Wraps a value with a creation timestamp and a TTL.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `created_at` - Creation time in Unix seconds
    /// * `ttl_secs` - Time-to-live in seconds
    pub fn new(value: V, created_at: u64, ttl_secs: u64) -> Self {
        Self {
            value,
            created_at,
            expires_at: created_at.saturating_add(ttl_secs),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired at time `now`.
    ///
    /// Boundary condition: an entry is expired once `now >= expires_at`, so an
    /// entry whose TTL has fully elapsed is expired immediately rather than on
    /// the following second.
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining lifetime in seconds at time `now`, or 0 if the
    /// entry has already expired.
    pub fn ttl_remaining(&self, now: u64) -> u64 {
        self.expires_at.saturating_sub(now)
    }
}

// == Utility Functions ==
/// Returns the current Unix timestamp in seconds.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}
