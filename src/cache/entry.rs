//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with freshness tracking.

// == Cache Entry ==
/// Represents a single cache entry with value and write timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Clock reading (milliseconds) of the most recent write
    pub stored_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry written at `now_ms`.
    pub fn new(value: V, now_ms: u64) -> Self {
        Self {
            value,
            stored_at: now_ms,
        }
    }

    // == Refresh ==
    /// Overwrites the value and restarts the freshness window.
    ///
    /// Returns the previous value.
    pub fn refresh(&mut self, value: V, now_ms: u64) -> V {
        self.stored_at = now_ms;
        std::mem::replace(&mut self.value, value)
    }

    // == Age ==
    /// Milliseconds elapsed since the last write.
    ///
    /// A clock reading earlier than `stored_at` yields an age of zero.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.stored_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl_ms`.
    ///
    /// Boundary condition: an entry whose age equals the TTL is expired, so
    /// it is fresh only while `age < ttl_ms`.
    pub fn is_expired(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) >= ttl_ms
    }

    // == Time To Live ==
    /// Returns remaining freshness in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64, ttl_ms: u64) -> u64 {
        ttl_ms.saturating_sub(self.age_ms(now_ms))
    }
}
