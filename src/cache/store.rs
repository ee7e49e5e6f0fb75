//! Cache Store Module
//!
//! Generic TTL cache engine: HashMap storage with periodic expiration sweeps.
//!
//! The engine is parameterized by key and value types rather than by a vtable;
//! hashing and equality come from the key type's `Hash` and `Eq`
//! implementations, and destruction from `Drop`. Each store instance is
//! created with a fixed TTL and sweep interval.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{current_timestamp, CacheEntry, CacheStats};

// == TTL Cache ==
/// A keyed store whose entries expire a fixed time after creation.
///
/// Expiration is swept lazily: whenever a mutating operation runs and at least
/// one sweep interval has elapsed since the previous sweep, every expired
/// entry is removed. Independently of sweeps, a lookup that finds an expired
/// entry removes it on the spot and reports a miss, so an expired entry is
/// never returned even between sweeps.
///
/// Single-threaded by design; the store is meant to be privately owned by one
/// coordinating component.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    /// Key-value storage; the store owns both keys and entries
    entries: HashMap<K, CacheEntry<V>>,
    /// Activity counters
    stats: CacheStats,
    /// Entry lifetime in seconds
    ttl_secs: u64,
    /// Seconds between expiration sweeps
    sweep_interval_secs: u64,
    /// Timestamp of the most recent sweep
    last_sweep: u64,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    // == Constructor ==
    /// Creates an empty store with the given TTL and sweep interval, both in
    /// seconds and fixed for the lifetime of the store.
    pub fn new(ttl_secs: u64, sweep_interval_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl_secs,
            sweep_interval_secs,
            last_sweep: current_timestamp(),
        }
    }

    // == Insert ==
    /// Stores a key-value pair created at `created_at` (Unix seconds).
    ///
    /// The store takes ownership of both the key and the value. If the key is
    /// already present the previous entry is replaced and dropped; the engine
    /// does not keep duplicates under one key.
    pub fn insert(&mut self, key: K, value: V, created_at: u64) {
        self.maybe_sweep(current_timestamp());

        let entry = CacheEntry::new(value, created_at, self.ttl_secs);
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a borrowed view of the value stored under `key`.
    ///
    /// Returns `None` if the key is absent or its entry has expired; an
    /// expired entry is removed immediately and counted as a miss. The
    /// returned reference is valid until the next mutating call on the store.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let now = current_timestamp();
        self.maybe_sweep(now);

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Remove ==
    /// Removes the entry stored under `key`, dropping its key and value.
    ///
    /// Returns true iff an entry was present and removed.
    pub fn remove(&mut self, key: &K) -> bool {
        self.maybe_sweep(current_timestamp());

        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Sweep ==
    /// Removes every entry that has expired as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self, now: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - self.entries.len();

        self.last_sweep = now;
        self.stats.record_expirations(removed as u64);
        self.stats.set_total_entries(self.entries.len());

        if removed > 0 {
            debug!("expiration sweep removed {} entries", removed);
        }
        removed
    }

    /// Runs a sweep if at least one sweep interval has elapsed since the
    /// previous one.
    fn maybe_sweep(&mut self, now: u64) {
        if now.saturating_sub(self.last_sweep) >= self.sweep_interval_secs {
            self.sweep(now);
        }
    }

    // == Stats ==
    /// Returns a snapshot of the store's activity counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
