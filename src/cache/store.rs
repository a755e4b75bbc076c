//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with FIFO tracking, lazy TTL
//! expiration and string admission control.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, CacheValue, Clock, FifoTracker, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;

// == Bounded Cache ==
/// Key/value cache bounded by capacity and entry age.
///
/// Capacity is enforced by evicting the oldest admitted key. Expiry is
/// checked when an entry is read and entries are only removed from storage
/// by `delete`, `clear`, `prune` or eviction.
///
/// The cache performs no locking; see [`SharedCache`](crate::cache::SharedCache)
/// for use from several threads.
#[derive(Debug)]
pub struct BoundedCache<K, V = Value, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// First-admission order
    order: FifoTracker<K>,
    /// Counters and configuration snapshot
    stats: CacheStats,
    config: CacheConfig,
    clock: C,
}

impl<K, V> BoundedCache<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
    V: CacheValue,
{
    // == Constructor ==
    /// Creates a cache stamped by wall-clock time.
    ///
    /// Fails if `config` does not validate.
    pub fn new(config: CacheConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<K, V, C> BoundedCache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: CacheValue,
    C: Clock,
{
    /// Creates a cache that reads time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entries: HashMap::new(),
            order: FifoTracker::new(),
            stats: CacheStats::new(&config),
            config,
            clock,
        })
    }

    // == Set ==
    /// Stores a value, returning `false` if admission control refused it.
    ///
    /// An existing key keeps its FIFO position and gets a fresh TTL window.
    /// A new key is appended and, if that pushes the cache over capacity,
    /// the oldest admitted keys are evicted.
    pub fn set(&mut self, key: K, value: V) -> bool {
        if let (Some(limit), Some(len)) = (self.config.max_value_size, value.string_len()) {
            if len > limit {
                self.stats.record_rejection();
                debug!(len, limit, "rejected oversized string value");
                return false;
            }
        }

        let now = self.clock.now_ms();

        // Overwrite never changes the count, so never evicts
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.refresh(value, now);
            return true;
        }

        self.entries.insert(key.clone(), CacheEntry::new(value, now));
        self.order.admit(key);

        while self.entries.len() > self.config.max_size {
            match self.order.evict_oldest() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                    self.stats.record_eviction();
                    debug!(size = self.entries.len(), "evicted oldest entry");
                }
                None => break,
            }
        }

        true
    }

    // == Get ==
    /// Retrieves a fresh value by key.
    ///
    /// Returns None for missing and expired keys alike. Expired entries are
    /// left in place.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.fresh_entry(key).map(|entry| &entry.value)
    }

    // == Has ==
    /// Returns true if the key holds a fresh value.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.fresh_entry(key).is_some()
    }

    // == Remaining TTL ==
    /// Milliseconds until a fresh entry expires, None if missing or expired.
    pub fn remaining_ttl_ms<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(now, self.config.ttl_ms))
            .map(|entry| entry.ttl_remaining_ms(now, self.config.ttl_ms))
    }

    // == Delete ==
    /// Removes an entry whether or not it has expired.
    ///
    /// Returns true if something was removed.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            true
        } else {
            false
        }
    }

    // == Clear ==
    /// Removes every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    // == Prune ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn prune(&mut self) -> usize {
        let now = self.clock.now_ms();
        let ttl_ms = self.config.ttl_ms;
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired(now, ttl_ms));

        let removed = before - self.entries.len();
        if removed > 0 {
            let entries = &self.entries;
            let mut kept = FifoTracker::new();
            while let Some(key) = self.order.evict_oldest() {
                if entries.contains_key(&key) {
                    kept.admit(key);
                }
            }
            self.order = kept;

            self.stats.record_expired(removed);
            debug!(removed, size = self.entries.len(), "pruned expired entries");
        }

        removed
    }

    // == Get Or Insert ==
    /// Returns the fresh value for `key`, computing and storing it on a miss.
    ///
    /// The computed value is returned even when admission control refuses
    /// to store it.
    pub fn get_or_insert_with<F>(&mut self, key: K, f: F) -> V
    where
        V: Clone,
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(&key) {
            return value.clone();
        }
        let value = f();
        self.set(key, value.clone());
        value
    }

    /// Like [`get_or_insert_with`](Self::get_or_insert_with) for a fallible
    /// computation. Nothing is stored when `f` fails.
    pub fn try_get_or_insert_with<F, E>(&mut self, key: K, f: F) -> std::result::Result<V, E>
    where
        V: Clone,
        F: FnOnce() -> std::result::Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value.clone());
        }
        let value = f()?;
        self.set(key, value.clone());
        Ok(value)
    }

    fn fresh_entry<Q>(&self, key: &Q) -> Option<&CacheEntry<V>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(now, self.config.ttl_ms))
    }
}

impl<K, V, C> BoundedCache<K, V, C> {
    // == Stats ==
    /// Returns current occupancy, configuration and counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_size(self.entries.len());
        stats
    }

    /// Returns the configuration the cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Stored keys from oldest to newest admission, expired ones included.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
