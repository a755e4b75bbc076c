//! Configuration Module
//!
//! Handles building, loading and validating cache configuration.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{CacheError, Result};

// == Defaults ==
/// Default capacity before FIFO eviction begins
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Default freshness window in milliseconds
pub const DEFAULT_TTL_MS: u64 = 60_000;

/// Cache configuration parameters.
///
/// Immutable once a cache has been built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_size: usize,
    /// Entry freshness window in milliseconds
    pub ttl_ms: u64,
    /// Maximum length of string values, None = no limit
    pub max_value_size: Option<usize>,
}

impl CacheConfig {
    // == Builder Setters ==
    /// Returns a copy with the given capacity.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Returns a copy with the given TTL in milliseconds.
    pub fn with_ttl_ms(mut self, ttl_ms: u64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }

    /// Returns a copy with a string length limit.
    pub fn with_max_value_size(mut self, max_value_size: usize) -> Self {
        self.max_value_size = Some(max_value_size);
        self
    }

    /// TTL as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    // == Validate ==
    /// Rejects configurations that would produce an unusable cache.
    ///
    /// A zero capacity would evict every entry on insertion, and a zero TTL
    /// would make every entry expired the moment it is stored.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be at least 1".to_string(),
            ));
        }
        if self.ttl_ms == 0 {
            return Err(CacheError::InvalidConfig(
                "ttl_ms must be at least 1 millisecond".to_string(),
            ));
        }
        Ok(())
    }

    // == From Env ==
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMO_CACHE_MAX_SIZE` - Maximum cache entries (default: 100)
    /// - `MEMO_CACHE_TTL_MS` - Entry TTL in milliseconds (default: 60000)
    /// - `MEMO_CACHE_MAX_VALUE_SIZE` - Maximum string value length (default: unset)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Unset variables fall back to defaults; set but unparsable ones are
    /// an error. The result is validated before it is returned.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            max_size: parse_var(&lookup, "MEMO_CACHE_MAX_SIZE")?.unwrap_or(defaults.max_size),
            ttl_ms: parse_var(&lookup, "MEMO_CACHE_TTL_MS")?.unwrap_or(defaults.ttl_ms),
            max_value_size: parse_var(&lookup, "MEMO_CACHE_MAX_VALUE_SIZE")?,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            ttl_ms: DEFAULT_TTL_MS,
            max_value_size: None,
        }
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            CacheError::InvalidConfig(format!("{} is not a valid number: '{}'", name, raw))
        }),
    }
}
