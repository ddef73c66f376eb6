//! LIFO (Last In, First Out) eviction.
//!
//! Evicts the most recently *inserted* key when a new key must be admitted
//! to a full cache. Reads and overwrites never change the stack, so a key
//! keeps the position it got on first insertion.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────────────────────────┐
//!   │  order: KeyOrder<K>                                         │
//!   │                                                             │
//!   │   Bottom                       Top                          │
//!   │   [p1] [p2] [p3] [p4]                                       │
//!   │    ↑              ↑                                         │
//!   │   old          newest                                       │
//!   │   keep         EVICT                                        │
//!   └─────────────────────────────────────────────────────────────┘
//!
//!   Example (capacity 4): insert A, B, C, D
//!     Stack: [A, B, C, D]
//!   insert E:
//!     1. pop top → D is the victim
//!     2. push E  → [A, B, C, E]
//! ```
//!
//! The victim is popped before the incoming key is pushed, so the key being
//! admitted is never evicted by its own insertion.
//!
//! ## When to Use
//!
//! - Newest insertions are least likely to be reused
//! - Scratch space where the long-lived base set must survive churn
//!
//! Avoid LIFO for general-purpose caching: the first `capacity - 1` keys
//! become effectively permanent.
//!
//! ## Example Usage
//!
//! ```
//! use boundcache::cache::LifoCache;
//!
//! let mut cache = LifoCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3);        // evicts "b", the previous top
//!
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.get(&"a"), Some(&1));
//! assert_eq!(cache.get(&"c"), Some(&3));
//! ```

use std::hash::Hash;

use crate::policy::EvictionPolicy;
use crate::policy::order::KeyOrder;

/// Insertion-order stack; the newest key is the victim.
#[derive(Debug)]
pub struct LifoPolicy<K> {
    /// Bottom = front, top = back
    order: KeyOrder<K>,
}

impl<K> LifoPolicy<K>
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

impl<K> Default for LifoPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LifoPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn name(&self) -> &'static str {
        "lifo"
    }

    fn order(&self) -> &KeyOrder<K> {
        &self.order
    }

    #[inline]
    fn on_insert(&mut self, key: &K) {
        self.order.push_back(key.clone());
    }

    #[inline]
    fn on_update(&mut self, _key: &K) {}

    #[inline]
    fn on_access(&mut self, _key: &K) {}

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
