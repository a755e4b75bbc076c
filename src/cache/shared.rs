//! Shared Cache Module
//!
//! Thread-safe handle around a `BoundedCache` for concurrent hosts.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::cache::{BoundedCache, CacheStats, CacheValue, Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;

// == Shared Cache ==
/// Cloneable handle serializing every operation through one mutex.
///
/// Each call holds the lock for exactly one cache operation.
#[derive(Debug)]
pub struct SharedCache<K, V = Value, C = SystemClock> {
    inner: Arc<Mutex<BoundedCache<K, V, C>>>,
}

impl<K, V, C> Clone for SharedCache<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedCache<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
    V: CacheValue,
{
    /// Builds a shared cache stamped by wall-clock time.
    pub fn new(config: CacheConfig) -> Result<Self> {
        BoundedCache::new(config).map(Self::from)
    }
}

impl<K, V, C> From<BoundedCache<K, V, C>> for SharedCache<K, V, C> {
    fn from(cache: BoundedCache<K, V, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }
}

impl<K, V, C> SharedCache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: CacheValue,
    C: Clock,
{
    // A panic inside `with` can only interrupt between whole cache
    // operations, so a poisoned lock still guards a consistent cache.
    fn lock(&self) -> MutexGuard<'_, BoundedCache<K, V, C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`BoundedCache::set`].
    pub fn set(&self, key: K, value: V) -> bool {
        self.lock().set(key, value)
    }

    /// See [`BoundedCache::get`]. Returns a clone of the stored value.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        V: Clone,
    {
        self.lock().get(key).cloned()
    }

    /// See [`BoundedCache::has`].
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.lock().has(key)
    }

    /// See [`BoundedCache::delete`].
    pub fn delete<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.lock().delete(key)
    }

    /// See [`BoundedCache::clear`].
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// See [`BoundedCache::prune`].
    pub fn prune(&self) -> usize {
        self.lock().prune()
    }

    /// See [`BoundedCache::stats`].
    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the fresh value for `key`, computing it on a miss.
    ///
    /// `f` runs without the lock held. Two callers missing the same key may
    /// both compute; the later write wins.
    pub fn get_or_insert_with<F>(&self, key: K, f: F) -> V
    where
        V: Clone,
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(&key) {
            return value;
        }
        let value = f();
        self.set(key, value.clone());
        value
    }

    /// Runs `f` with exclusive access to the underlying cache.
    pub fn with<R>(&self, f: impl FnOnce(&mut BoundedCache<K, V, C>) -> R) -> R {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use serde_json::json;
    use std::thread;

    fn shared(max_size: usize) -> SharedCache<String, Value, ManualClock> {
        let config = CacheConfig::default()
            .with_max_size(max_size)
            .with_ttl_ms(100);
        BoundedCache::with_clock(config, ManualClock::new(0))
            .map(SharedCache::from)
            .unwrap()
    }

    #[test]
    fn test_shared_basic_operations() {
        let cache = shared(10);
        let handle = cache.clone();

        assert!(handle.set("k".to_string(), json!("v")));
        assert_eq!(cache.get("k"), Some(json!("v")));
        assert!(cache.has("k"));
        assert_eq!(cache.len(), 1);

        assert!(cache.delete("k"));
        assert!(handle.is_empty());
    }

    #[test]
    fn test_shared_concurrent_writers_respect_capacity() {
        let cache = shared(50);

        let workers: Vec<_> = (0..4)
            .map(|worker| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..100 {
                        cache.set(format!("w{}-{}", worker, i), json!(i));
                    }
                })
            })
            .collect();

        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(cache.len(), 50);
        assert_eq!(cache.stats().evictions, 350);
    }

    #[test]
    fn test_shared_get_or_insert_with() {
        let cache = shared(10);

        let first = cache.get_or_insert_with("scan".to_string(), || json!(1));
        let second = cache.get_or_insert_with("scan".to_string(), || json!(2));
        assert_eq!(first, json!(1));
        assert_eq!(second, json!(1));
    }

    #[test]
    fn test_shared_with_exclusive_access() {
        let cache = shared(10);
        cache.set("a".to_string(), json!(1));
        cache.set("b".to_string(), json!(2));

        let keys: Vec<String> = cache.with(|inner| inner.keys().cloned().collect());
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_shared_new_validates() {
        let result: Result<SharedCache<String>> =
            SharedCache::new(CacheConfig::default().with_ttl_ms(0));
        assert!(result.is_err());
    }
}
