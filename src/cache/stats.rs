//! Cache Statistics Module
//!
//! Snapshot of occupancy and configuration plus cumulative counters.

use serde::Serialize;

use crate::config::CacheConfig;

// == Cache Stats ==
/// Read-only view of a cache at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Entries currently stored, including expired ones not yet pruned
    pub size: usize,
    /// Configured capacity
    pub max_size: usize,
    /// Configured TTL in milliseconds
    pub ttl: u64,
    /// Configured string length limit
    pub max_value_size: Option<usize>,
    /// Number of entries evicted due to FIFO capacity policy
    pub evictions: u64,
    /// Number of `set` calls refused by admission control
    pub rejections: u64,
    /// Number of expired entries removed by `prune`
    pub expired: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates empty statistics for a cache built from `config`.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            size: 0,
            max_size: config.max_size,
            ttl: config.ttl_ms,
            max_value_size: config.max_value_size,
            ..Self::default()
        }
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Rejection ==
    /// Increments the rejection counter.
    pub fn record_rejection(&mut self) {
        self.rejections += 1;
    }

    // == Record Expired ==
    /// Adds `count` pruned entries.
    pub fn record_expired(&mut self, count: usize) {
        self.expired += count as u64;
    }

    // == Update Entry Count ==
    /// Updates the stored entry count.
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}
