//! FIFO Tracker Module
//!
//! Records key admission order for capacity eviction.

use std::borrow::Borrow;
use std::collections::VecDeque;

// == FIFO Tracker ==
/// Tracks first-admission order for FIFO eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest admitted
/// - Back = Newest admitted
///
/// Reads and overwrites never reorder keys.
#[derive(Debug)]
pub struct FifoTracker<K> {
    /// Order of keys by first admission
    order: VecDeque<K>,
}

impl<K> Default for FifoTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FifoTracker<K> {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Admit ==
    /// Appends a newly admitted key at the back.
    ///
    /// Callers only admit keys that are not already tracked.
    pub fn admit(&mut self, key: K) {
        self.order.push_back(key);
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        if let Some(pos) = self.order.iter().position(|k| k.borrow() == key) {
            self.order.remove(pos);
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the oldest admitted key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the oldest admitted key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.front()
    }

    /// Removes every tracked key.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    /// Iterates keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.order.iter().any(|k| k.borrow() == key)
    }
}
