//! Unbounded cache with the same `put`/`get` contract and no eviction.
//!
//! Useful as a baseline next to the bounded policies, or where the working
//! set is known to be small.
//!
//! ```
//! use boundcache::basic::BasicCache;
//!
//! let mut cache = BasicCache::new();
//! for i in 0..100 {
//!     cache.put(i, i * 2);
//! }
//! assert_eq!(cache.size(), 100);
//! assert_eq!(cache.get(&7), Some(&14));
//! ```

use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};

use crate::store::HashMapStore;

#[derive(Debug, Clone)]
pub struct BasicCache<K, V> {
    store: HashMapStore<K, V>,
}

impl<K, V> BasicCache<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            store: HashMapStore::new(),
        }
    }

    /// Inserts or overwrites `key`, returning the previous value.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.store.insert(key, value)
    }

    /// Ignores the call when either argument is `None`.
    pub fn put_opt(&mut self, key: Option<K>, value: Option<V>) -> Option<V> {
        match (key, value) {
            (Some(key), Some(value)) => self.put(key, value),
            _ => None,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    pub fn get_opt(&self, key: Option<&K>) -> Option<&V> {
        key.and_then(|key| self.store.get(key))
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.store.remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    pub fn size(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }
}

impl<K, V> BasicCache<K, V>
where
    K: Eq + Hash + Ord + Display,
    V: Display,
{
    pub fn write_contents<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.store.write_sorted(out)
    }

    pub fn print_cache(&self) -> io::Result<()> {
        self.write_contents(&mut io::stdout().lock())
    }
}

impl<K, V> Default for BasicCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_evicts() {
        let mut cache = BasicCache::new();
        for k in 0..64u32 {
            cache.put(k, k);
        }
        assert_eq!(cache.size(), 64);
        assert!(cache.contains(&0));
    }

    #[test]
    fn none_input_is_ignored() {
        let mut cache: BasicCache<&str, &str> = BasicCache::default();
        cache.put_opt(None, Some("x"));
        cache.put_opt(Some("a"), None);
        assert!(cache.is_empty());
        assert_eq!(cache.get_opt(None), None);
        assert_eq!(cache.get(&"a"), None);
    }

    #[test]
    fn overwrite_and_remove() {
        let mut cache = BasicCache::new();
        cache.put("a", 1);
        assert_eq!(cache.put("a", 2), Some(1));
        assert_eq!(cache.get_opt(Some(&"a")), Some(&2));
        assert_eq!(cache.remove(&"a"), Some(2));
        cache.put("b", 3);
        cache.clear();
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn print_format_matches_bounded_caches() {
        let mut cache = BasicCache::new();
        cache.put("B", "World");
        cache.put("A", "Hello");
        let mut out = Vec::new();
        cache.write_contents(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Current cache:\nA: Hello\nB: World\n"
        );
    }
}
