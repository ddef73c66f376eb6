//! Ordered key tracker shared by every eviction policy.
//!
//! `KeyOrder` pairs an [`IntrusiveList`] of keys with a key → [`SlotId`]
//! index, giving O(1) append, move-to-back, removal by key and pops from
//! either end.
//!
//! ```text
//!   index: FxHashMap<K, SlotId>          list: IntrusiveList<K>
//!   ┌─────┬────────┐
//!   │ "a" │ id_0   │ ───────────►  front ─► [a] ◄──► [c] ◄──► [b] ◄─ back
//!   │ "b" │ id_1   │ ───────────────────────────────────────────┘
//!   │ "c" │ id_2   │ ─────────────────────────┘
//!   └─────┴────────┘
//! ```
//!
//! The front is always the oldest position and the back the newest; what
//! "oldest" means (first insertion, or last touch) is up to the policy that
//! owns the tracker.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::intrusive_list::{IntrusiveList, Iter};
use crate::ds::slot_arena::SlotId;

/// Insertion/recency order over a set of distinct keys.
#[derive(Debug)]
pub struct KeyOrder<K> {
    list: IntrusiveList<K>,
    index: FxHashMap<K, SlotId>,
}

impl<K> KeyOrder<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            list: IntrusiveList::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: IntrusiveList::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Appends `key` at the back. Returns `false` (and leaves the order
    /// untouched) if the key is already tracked.
    pub fn push_back(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        let id = self.list.push_back(key.clone());
        self.index.insert(key, id);
        true
    }

    /// Moves a tracked key to the back. Returns `false` if it is not tracked.
    pub fn move_to_back(&mut self, key: &K) -> bool {
        match self.index.get(key) {
            Some(&id) => self.list.move_to_back(id),
            None => false,
        }
    }

    /// Stops tracking `key`. Returns `false` if it was not tracked.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(id) => self.list.remove(id).is_some(),
            None => false,
        }
    }

    pub fn front(&self) -> Option<&K> {
        self.list.front()
    }

    pub fn back(&self) -> Option<&K> {
        self.list.back()
    }

    pub fn pop_front(&mut self) -> Option<K> {
        let key = self.list.pop_front()?;
        self.index.remove(&key);
        Some(key)
    }

    pub fn pop_back(&mut self) -> Option<K> {
        let key = self.list.pop_back()?;
        self.index.remove(&key);
        Some(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
    }

    /// Iterates keys from front (oldest) to back (newest).
    pub fn iter(&self) -> Iter<'_, K> {
        self.list.iter()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.list.debug_validate_invariants();
        assert_eq!(self.index.len(), self.list.len());
        for (key, &id) in &self.index {
            assert!(self.list.get(id) == Some(key), "index points at wrong node");
        }
    }
}

impl<K> Default for KeyOrder<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
