//! Configuration Module
//!
//! Cache timing parameters, loadable from environment variables with the
//! standard defaults.

use std::env;

use crate::bindings::{DEFAULT_SWEEP_INTERVAL_SECS, DEFAULT_TTL_SECS};
use crate::error::{ConfigError, Result};

/// Binding cache configuration.
///
/// Both stores of a [`BindingCache`](crate::BindingCache) are created with
/// the same TTL and sweep interval; neither can change after construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Entry time-to-live in seconds
    pub ttl_secs: u64,
    /// Interval between expiration sweeps in seconds
    pub sweep_interval_secs: u64,
}

impl Config {
    /// Creates a Config by loading values from environment variables.
    ///
    /// Malformed or missing values fall back to the defaults; validation of
    /// the resulting values happens at cache construction.
    ///
    /// # Environment Variables
    /// - `BINDING_TTL` - Entry TTL in seconds (default: 14400)
    /// - `SWEEP_INTERVAL` - Sweep interval in seconds (default: 309)
    pub fn from_env() -> Self {
        Self {
            ttl_secs: env::var("BINDING_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
            sweep_interval_secs: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SWEEP_INTERVAL_SECS),
        }
    }

    /// Checks that the configuration is usable.
    ///
    /// A zero TTL would expire every entry at creation; a zero sweep interval
    /// is allowed (it just sweeps on every mutating operation).
    pub fn validate(&self) -> Result<()> {
        if self.ttl_secs == 0 {
            return Err(ConfigError::ZeroTtl);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}
