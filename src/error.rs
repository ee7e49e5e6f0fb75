//! Error types for the binding cache
//!
//! Absent lookups and delete misses are normal outcomes signaled through
//! `Option`/`bool`; only configuration problems are errors, handled with
//! thiserror.

use thiserror::Error;

// == Config Error Enum ==
/// Rejected cache configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero TTL would expire every entry at the moment of creation
    #[error("entry TTL must be greater than zero")]
    ZeroTtl,
}

// == Result Type Alias ==
/// Convenience Result type for fallible constructors.
pub type Result<T> = std::result::Result<T, ConfigError>;
