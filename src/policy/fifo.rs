//! FIFO (First In, First Out) eviction.
//!
//! Evicts the key that has been resident the longest, regardless of how
//! often or how recently it was read.
//!
//! ## Architecture
//!
//! ```text
//!   order: KeyOrder<K>   (first insertion order)
//!
//!     front                          back
//!     [k1] ◄──► [k2] ◄──► [k3] ◄──► [k4]
//!      ↑                              ↑
//!    oldest                         newest
//!    EVICT                          keep
//! ```
//!
//! Insert Flow (new key)
//! ──────────────────────
//!
//!   put("new", v) at capacity:
//!     1. pop front (oldest)  → victim
//!     2. push "new" at back
//!
//! Access / Update Flow
//! ────────────────────
//!
//!   get("k") or put("k", v2) on a resident key:
//!     order unchanged; only a genuinely new key moves the queue.
//!
//! ## Example Usage
//!
//! ```
//! use boundcache::cache::FifoCache;
//!
//! let mut cache = FifoCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");          // reads do not protect "a"
//! cache.put("c", 3);        // evicts "a"
//!
//! assert_eq!(cache.get(&"a"), None);
//! assert_eq!(cache.get(&"b"), Some(&2));
//! ```

use std::hash::Hash;

use crate::policy::EvictionPolicy;
use crate::policy::order::KeyOrder;

/// Insertion-order queue; the oldest key is the victim.
#[derive(Debug)]
pub struct FifoPolicy<K> {
    order: KeyOrder<K>,
}

impl<K> FifoPolicy<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            order: KeyOrder::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: KeyOrder::with_capacity(capacity),
        }
    }
}

impl<K> Default for FifoPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for FifoPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn order(&self) -> &KeyOrder<K> {
        &self.order
    }

    #[inline]
    fn on_insert(&mut self, key: &K) {
        self.order.push_back(key.clone());
    }

    // Overwrites keep their original queue position.
    #[inline]
    fn on_update(&mut self, _key: &K) {}

    #[inline]
    fn on_access(&mut self, _key: &K) {}

    fn on_remove(&mut self, key: &K) {
        self.order.remove(key);
    }

    fn victim(&self) -> Option<&K> {
        self.order.front()
    }

    fn evict(&mut self) -> Option<K> {
        self.order.pop_front()
    }

    fn clear(&mut self) {
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(keys: &[&'static str]) -> FifoPolicy<&'static str> {
        let mut policy = FifoPolicy::new();
        for k in keys {
            policy.on_insert(k);
        }
        policy
    }

    #[test]
    fn evicts_in_insertion_order() {
        let mut policy = filled(&["a", "b", "c"]);
        assert_eq!(policy.evict(), Some("a"));
        assert_eq!(policy.evict(), Some("b"));
        assert_eq!(policy.evict(), Some("c"));
        assert_eq!(policy.evict(), None);
    }

    #[test]
    fn access_and_update_do_not_reorder() {
        let mut policy = filled(&["a", "b"]);
        policy.on_access(&"a");
        policy.on_update(&"a");
        assert_eq!(policy.victim(), Some(&"a"));
    }

    #[test]
    fn remove_skips_key() {
        let mut policy = filled(&["a", "b", "c"]);
        policy.on_remove(&"a");
        assert_eq!(policy.victim(), Some(&"b"));
        assert_eq!(policy.order().len(), 2);
    }

    #[test]
    fn clear_empties_order() {
        let mut policy = filled(&["a"]);
        policy.clear();
        assert_eq!(policy.victim(), None);
        assert_eq!(policy.name(), "fifo");
    }
}
