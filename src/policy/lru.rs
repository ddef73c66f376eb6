//! # Least Recently Used (LRU) eviction
//!
//! Evicts the key that has gone longest without being read or written.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                        LruPolicy<K>                              │
//!   │                                                                  │
//!   │   ┌────────────────────────────────────────────────────────────┐ │
//!   │   │  FxHashMap<K, SlotId>  (index into the recency list)       │ │
//!   │   └───────────────────────────────┬────────────────────────────┘ │
//!   │                                   │                              │
//!   │   ┌───────────────────────────────▼────────────────────────────┐ │
//!   │   │  IntrusiveList<K> (recency order)                          │ │
//!   │   │                                                            │ │
//!   │   │  front ──► [k1] ◄──► [k2] ◄──► [k3] ◄── back               │ │
//!   │   │            LRU                  MRU                        │ │
//!   │   └────────────────────────────────────────────────────────────┘ │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## LRU Operations Flow
//!
//! ```text
//!   INSERT new item (cache full, capacity = 3)
//!   ═════════════════════════════════════════════════════════════════
//!
//!   Before:   front ──► [A] ◄──► [B] ◄──► [C] ◄── back
//!
//!   put(D):
//!     1. Evict [A] from front
//!     2. Append [D] at back
//!
//!   After:    front ──► [B] ◄──► [C] ◄──► [D] ◄── back
//!
//!   ═════════════════════════════════════════════════════════════════
//!
//!   ACCESS or OVERWRITE existing item
//!   ═════════════════════════════════════════════════════════════════
//!
//!   get(B) / put(B, v2):
//!     1. Find B's SlotId in the index: O(1)
//!     2. Move B to back: O(1)
//!
//!   After:    front ──► [C] ◄──► [D] ◄──► [B] ◄── back
//! ```
//!
//! ## Operations
//!
//! | Hook        | Time | Effect                       |
//! |-------------|------|------------------------------|
//! | `on_insert` | O(1) | append at back               |
//! | `on_access` | O(1) | move to back                 |
//! | `on_update` | O(1) | move to back                 |
//! | `evict`     | O(1) | pop front                    |
//!
//! ## Example Usage
//!
//! ```
//! use boundcache::cache::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");          // "b" is now least recently used
//! cache.put("c", 3);
//!
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.get(&"a"), Some(&1));
//! ```

use std::hash::Hash;

use crate::policy::EvictionPolicy;
use crate::policy::order::KeyOrder;

/// Recency list; the least recently touched key is the victim.
#[derive(Debug)]
pub struct LruPolicy<K> {
    order: KeyOrder<K>,
}

impl<K> LruPolicy<K>
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

    /// Moves `key` to the most-recent end. Returns `false` if not tracked.
    #[inline]
    pub fn touch(&mut self, key: &K) -> bool {
        self.order.move_to_back(key)
    }

    /// Position of `key` counted from the most-recent end (0 = MRU).
    ///
    /// Walks the recency list, so this is O(n) in the number of tracked
    /// keys. Meant for diagnostics, not the hot path.
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        let pos = self.order.iter().position(|k| k == key)?;
        Some(self.order.len() - 1 - pos)
    }
}

impl<K> Default for LruPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LruPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn name(&self) -> &'static str {
        "lru"
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
        self.touch(key);
    }

    #[inline]
    fn on_access(&mut self, key: &K) {
        self.touch(key);
    }

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
