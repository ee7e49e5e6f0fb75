//! Binding Cache - a dual-keyed TTL cache for protocol decoders
//!
//! Maintains transient bidirectional associations between compact
//! channel-scoped identifiers and long globally unique station addresses.
//! Forward lookups enrich decoded messages; inverse lookups locate a binding
//! for deletion when a termination event carries only the long address.
//! Entries expire after a fixed TTL so memory stays bounded even when
//! termination events are lost.

pub mod bindings;
pub mod cache;
pub mod config;
pub mod error;

pub use bindings::{BindingCache, DEFAULT_SWEEP_INTERVAL_SECS, DEFAULT_TTL_SECS};
pub use config::Config;
pub use error::ConfigError;
