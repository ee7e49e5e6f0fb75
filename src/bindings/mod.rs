//! Bindings Module
//!
//! The binding coordinator and its key/entry types: a transient, TTL-bounded
//! bidirectional association between channel-scoped short IDs and long
//! station addresses.

mod coordinator;
mod keys;


// Re-export public types
pub use coordinator::BindingCache;
pub use keys::{ForwardEntry, ForwardKey, InverseEntry, InverseKey};

// == Identifier Types ==
/// Signed channel/frequency identifier; short IDs are scoped to a channel.
pub type Channel = i32;

/// Compact channel-scoped identifier (single-byte range).
pub type ShortId = u8;

/// Globally unique station address (24-bit range).
pub type LongId = u32;

// == Public Constants ==
/// Default entry time-to-live in seconds
pub const DEFAULT_TTL_SECS: u64 = 14_400;

/// Default interval between expiration sweeps in seconds
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 309;
