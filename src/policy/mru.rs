//! MRU (Most Recently Used) eviction.
//!
//! Same bookkeeping as [LRU](crate::policy::lru): reads and overwrites move
//! a key to the most-recent end. The victim is taken from that end instead,
//! which suits cyclic scans larger than the cache, where the key just used
//! is the one needed furthest in the future.
//!
//! ```text
//!   front ──► [k1] ◄──► [k2] ◄──► [k3] ◄── back
//!             LRU                  MRU
//!             keep                 EVICT
//! ```
//!
//! The victim is chosen before the incoming key is appended, so admitting a
//! key evicts the previously most-recent key, never the new one.
//!
//! ## Example Usage
//!
//! ```
//! use boundcache::cache::MruCache;
//!
//! let mut cache = MruCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");          // "a" is now most recently used
//! cache.put("c", 3);        // evicts "a"
//!
//! assert_eq!(cache.get(&"a"), None);
//! assert_eq!(cache.get(&"b"), Some(&2));
//! assert_eq!(cache.get(&"c"), Some(&3));
//! ```

use std::hash::Hash;

use crate::policy::EvictionPolicy;
use crate::policy::order::KeyOrder;

/// Recency list; the most recently touched key is the victim.
#[derive(Debug)]
pub struct MruPolicy<K> {
    order: KeyOrder<K>,
}

impl<K> MruPolicy<K>
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

impl<K> Default for MruPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for MruPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn name(&self) -> &'static str {
        "mru"
    }

    fn order(&self) -> &KeyOrder<K> {
        &self.order
    }

    #[inline]
    fn on_insert(&mut self, key: &K) {
        self.order.push_back(key.clone());
    }

    #[inline]
    fn on_update(&mut self, key: &K) {
        self.order.move_to_back(key);
    }

    #[inline]
    fn on_access(&mut self, key: &K) {
        self.order.move_to_back(key);
    }

    fn on_remove(&mut self, key: &K) {
        self.order.remove(key);
    }

    fn victim(&self) -> Option<&K> {
        self.order.back()
    }

    fn evict(&mut self) -> Option<K> {
        self.order.pop_back()
    }

    fn clear(&mut self) {
        self.order.clear();
    }
}
