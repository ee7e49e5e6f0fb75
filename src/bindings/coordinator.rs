//! Binding Coordinator Module
//!
//! Owns the forward and inverse stores and keeps them consistent across the
//! lifecycle of every binding.
//!
//! The forward store answers "which long address does this short ID resolve
//! to on this channel" and is used to enrich decoded messages. The inverse
//! store answers the opposite question and exists only so a termination event
//! carrying just the long address can locate the forward entry to remove.

use tracing::debug;

use crate::bindings::{
    Channel, ForwardEntry, ForwardKey, InverseEntry, InverseKey, LongId, ShortId,
};
use crate::cache::{current_timestamp, CacheStats, TtlCache};
use crate::config::Config;
use crate::error::Result;

// == Binding Cache ==
/// Dual-keyed cache of active bindings between channel-scoped short IDs and
/// long station addresses.
///
/// Every binding is represented by one entry in each store, created with the
/// same timestamp and TTL. The two stores sweep independently, so one side of
/// a binding can outlive the other by at most one sweep interval; such
/// one-sided residue is harmless (each operation re-verifies against the
/// store it queries) and expires on its own.
///
/// Single-threaded: operations take `&mut self` and run to completion.
/// Dropping the cache releases both stores and every remaining entry.
#[derive(Debug)]
pub struct BindingCache {
    /// (channel, short_id) -> long_id
    fwd: TtlCache<ForwardKey, ForwardEntry>,
    /// (channel, long_id) -> short_id
    inv: TtlCache<InverseKey, InverseEntry>,
}

impl BindingCache {
    // == Constructors ==
    /// Creates a binding cache with the default TTL and sweep interval.
    pub fn new() -> Self {
        Self::with_config(&Config::default()).expect("default config is valid")
    }

    /// Creates a binding cache with the given configuration.
    ///
    /// # Errors
    /// Returns an error if the configured TTL is zero.
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fwd: TtlCache::new(config.ttl_secs, config.sweep_interval_secs),
            inv: TtlCache::new(config.ttl_secs, config.sweep_interval_secs),
        })
    }

    // == Create ==
    /// Records a new binding between (channel, short_id) and long_id.
    ///
    /// Inserts one entry into each store with a single shared creation
    /// timestamp. No de-duplication: if a forward entry already exists under
    /// (channel, short_id) it is replaced, while the previous inverse entry
    /// stays until it expires or is deleted.
    pub fn create(&mut self, channel: Channel, short_id: ShortId, long_id: LongId) {
        self.create_with_label(channel, short_id, long_id, None);
    }

    /// Records a new binding with a caller-attached display label owned by
    /// the forward entry.
    pub fn create_with_label(
        &mut self,
        channel: Channel,
        short_id: ShortId,
        long_id: LongId,
        label: Option<String>,
    ) {
        // Sample the timestamp once so both sides share it
        let now = current_timestamp();
        self.create_at(channel, short_id, long_id, label, now);
    }

    fn create_at(
        &mut self,
        channel: Channel,
        short_id: ShortId,
        long_id: LongId,
        label: Option<String>,
        created_at: u64,
    ) {
        let fwd_key = ForwardKey { channel, short_id };
        let inv_key = InverseKey { channel, long_id };

        self.fwd
            .insert(fwd_key, ForwardEntry { long_id, label }, created_at);
        self.inv.insert(inv_key, InverseEntry { short_id }, created_at);

        debug!("new binding: {}@{}: {:06X}", short_id, channel, long_id);
    }

    // == Lookup ==
    /// Resolves (channel, short_id) to its forward entry.
    ///
    /// Queries the forward store only. Returns a borrowed view valid until
    /// the next call on this cache; `None` is the normal outcome for an
    /// unseen or expired short ID.
    pub fn lookup(&mut self, channel: Channel, short_id: ShortId) -> Option<&ForwardEntry> {
        let fwd_key = ForwardKey { channel, short_id };
        let entry = self.fwd.get(&fwd_key);
        match entry {
            Some(e) => debug!("{}@{}: {:06X}", short_id, channel, e.long_id),
            None => debug!("{}@{}: not found", short_id, channel),
        }
        entry
    }

    // == Delete ==
    /// Removes the binding for (channel, long_id), if any.
    ///
    /// Looks up the inverse store to recover the short ID, then removes both
    /// sides independently, so a one-sided binding does not block cleanup of
    /// the side that is present. Returns true iff at least one entry was
    /// removed; false means nothing to delete (e.g. a duplicate or stray
    /// termination event), which is an expected outcome rather than an error.
    pub fn delete(&mut self, channel: Channel, long_id: LongId) -> bool {
        let inv_key = InverseKey { channel, long_id };
        let short_id = match self.inv.get(&inv_key) {
            Some(entry) => entry.short_id,
            None => {
                debug!("binding not deleted: {:06X}@{}: not found", long_id, channel);
                return false;
            }
        };

        let fwd_key = ForwardKey { channel, short_id };
        let inv_removed = self.inv.remove(&inv_key);
        let fwd_removed = self.fwd.remove(&fwd_key);

        if inv_removed && fwd_removed {
            debug!("binding deleted: {:06X}@{}: {}", long_id, channel, short_id);
        } else {
            debug!(
                "binding partially deleted: {:06X}@{}: {} (inverse: {}, forward: {})",
                long_id, channel, short_id, inv_removed, fwd_removed
            );
        }
        inv_removed || fwd_removed
    }

    // == Accessors ==
    /// Returns the number of entries currently held by the forward store.
    pub fn len(&self) -> usize {
        self.fwd.len()
    }

    /// Returns true if the forward store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.fwd.is_empty()
    }

    /// Returns a snapshot of the forward store's counters.
    pub fn forward_stats(&self) -> CacheStats {
        self.fwd.stats()
    }

    /// Returns a snapshot of the inverse store's counters.
    pub fn inverse_stats(&self) -> CacheStats {
        self.inv.stats()
    }
}

impl Default for BindingCache {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::DEFAULT_TTL_SECS;

    const CHANNEL: Channel = 131_525;

    #[test]
    fn test_roundtrip() {
        let mut cache = BindingCache::new();

        cache.create(CHANNEL, 7, 0xABCDEF);

        let entry = cache.lookup(CHANNEL, 7).expect("binding should exist");
        assert_eq!(entry.long_id, 0xABCDEF);
        assert!(entry.label.is_none());
    }

    #[test]
    fn test_inverse_consistency() {
        let mut cache = BindingCache::new();

        cache.create(CHANNEL, 7, 0xABCDEF);

        assert!(cache.delete(CHANNEL, 0xABCDEF));
        assert!(cache.lookup(CHANNEL, 7).is_none());
    }

    #[test]
    fn test_idempotent_deletion() {
        let mut cache = BindingCache::new();

        cache.create(CHANNEL, 7, 0xABCDEF);

        assert!(cache.delete(CHANNEL, 0xABCDEF));
        assert!(!cache.delete(CHANNEL, 0xABCDEF));
    }

    #[test]
    fn test_unknown_lookup() {
        let mut cache = BindingCache::new();

        assert!(cache.lookup(CHANNEL, 42).is_none());
    }

    #[test]
    fn test_unknown_deletion_mutates_nothing() {
        let mut cache = BindingCache::new();

        cache.create(CHANNEL, 7, 0xABCDEF);

        assert!(!cache.delete(CHANNEL, 0x123456));
        assert_eq!(cache.len(), 1);
        assert!(cache.lookup(CHANNEL, 7).is_some());
    }

    #[test]
    fn test_ttl_expiry() {
        let mut cache = BindingCache::new();

        // Back-date creation past the TTL; neither side should resolve
        let stale = current_timestamp() - DEFAULT_TTL_SECS - 1;
        cache.create_at(CHANNEL, 7, 0xABCDEF, None, stale);

        assert!(cache.lookup(CHANNEL, 7).is_none());
        assert!(!cache.delete(CHANNEL, 0xABCDEF));
    }

    #[test]
    fn test_channel_isolation() {
        let mut cache = BindingCache::new();

        cache.create(131_525, 7, 0xABCDEF);
        cache.create(136_975, 7, 0x123456);

        assert_eq!(cache.lookup(131_525, 7).unwrap().long_id, 0xABCDEF);
        assert_eq!(cache.lookup(136_975, 7).unwrap().long_id, 0x123456);

        assert!(cache.delete(131_525, 0xABCDEF));

        assert!(cache.lookup(131_525, 7).is_none());
        assert_eq!(cache.lookup(136_975, 7).unwrap().long_id, 0x123456);
    }

    #[test]
    fn test_label_owned_by_forward_entry() {
        let mut cache = BindingCache::new();

        cache.create_with_label(CHANNEL, 7, 0xABCDEF, Some("SWR123".to_string()));

        let entry = cache.lookup(CHANNEL, 7).unwrap();
        assert_eq!(entry.label.as_deref(), Some("SWR123"));
    }

    #[test]
    fn test_duplicate_create_replaces_forward_entry() {
        let mut cache = BindingCache::new();

        cache.create(CHANNEL, 7, 0xABCDEF);
        cache.create(CHANNEL, 7, 0x123456);

        assert_eq!(cache.lookup(CHANNEL, 7).unwrap().long_id, 0x123456);
        assert_eq!(cache.len(), 1);

        // The stale inverse entry still resolves and tears down the forward
        // entry it points at; accepted one-sided drift, bounded by the TTL.
        assert!(cache.delete(CHANNEL, 0xABCDEF));
        assert!(cache.lookup(CHANNEL, 7).is_none());
    }

    #[test]
    fn test_delete_with_missing_forward_side() {
        let mut cache = BindingCache::new();

        cache.create(CHANNEL, 7, 0xABCDEF);
        // Rebind the short ID, orphaning the first inverse entry
        cache.create(CHANNEL, 7, 0x123456);

        // Delete via the newer address first: removes both current sides
        assert!(cache.delete(CHANNEL, 0x123456));
        // The orphaned inverse entry alone still counts as a removal
        assert!(cache.delete(CHANNEL, 0xABCDEF));
        assert!(!cache.delete(CHANNEL, 0xABCDEF));
    }

    #[test]
    fn test_shared_timestamp_across_stores() {
        let mut cache = BindingCache::new();

        cache.create(CHANNEL, 7, 0xABCDEF);

        let fwd = cache.forward_stats();
        let inv = cache.inverse_stats();
        assert_eq!(fwd.total_entries, 1);
        assert_eq!(inv.total_entries, 1);
    }

    #[test]
    fn test_with_config_rejects_zero_ttl() {
        let config = Config {
            ttl_secs: 0,
            sweep_interval_secs: 309,
        };
        assert!(BindingCache::with_config(&config).is_err());
    }

    #[test]
    fn test_example_scenario() {
        let mut cache = BindingCache::new();

        cache.create(131_525, 7, 0xABCDEF);
        assert_eq!(cache.lookup(131_525, 7).unwrap().long_id, 0xABCDEF);
        assert!(cache.delete(131_525, 0xABCDEF));
        assert!(cache.lookup(131_525, 7).is_none());
        assert!(!cache.delete(131_525, 0xABCDEF));
    }
}
