//! HashMap-backed entry store.
//!
//! ## Architecture
//! - Entries live in an `FxHashMap<K, V>` for O(1) average lookup.
//! - The store is unordered and knows nothing about eviction; the owning
//!   [`Cache`](crate::cache::Cache) pairs it with a policy's key order and
//!   enforces the capacity bound by entry count.
//!
//! ## Core Operations
//! - `insert`: insert or overwrite by key, returning the previous value.
//! - `get` / `get_mut`: fetch by key.
//! - `remove`: delete by key.
//! - `clear`: drop all entries.
//!
//! ## Example Usage
//! ```rust
//! use boundcache::store::HashMapStore;
//!
//! let mut store: HashMapStore<u64, String> = HashMapStore::with_capacity(2);
//! assert_eq!(store.insert(1, "a".to_string()), None);
//! assert_eq!(store.insert(1, "b".to_string()), Some("a".to_string()));
//! assert_eq!(store.get(&1).map(String::as_str), Some("b"));
//! ```
use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};

use rustc_hash::FxHashMap;

/// Single-threaded key/value store.
#[derive(Debug, Clone)]
pub struct HashMapStore<K, V> {
    map: FxHashMap<K, V>,
}

impl<K, V> HashMapStore<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Creates a store pre-sized for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.map.get_mut(key)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Inserts or overwrites `key`. Returns the previous value if present.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    #[inline]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterates entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }
}

impl<K, V> HashMapStore<K, V>
where
    K: Eq + Hash + Ord + Display,
    V: Display,
{
    /// Writes `Current cache:` and then `key: value` lines in key order.
    pub fn write_sorted<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Current cache:")?;
        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (key, value) in entries {
            writeln!(out, "{key}: {value}")?;
        }
        Ok(())
    }
}

impl<K, V> Default for HashMapStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
