//! Mutex-serialized cache for shared ownership.
//!
//! [`Cache`] has no interior synchronization. `SharedCache` wraps one in a
//! `parking_lot::Mutex` so it can be shared behind an `Arc`. A mutex rather
//! than a `RwLock`: `get` updates recency for LRU/MRU, so every operation
//! needs exclusive access.
//!
//! Values are returned by clone (`get`) or borrowed inside a closure
//! (`get_with`), since a reference cannot outlive the lock.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use boundcache::cache::LruCache;
//! use boundcache::concurrent::SharedCache;
//!
//! let cache = Arc::new(SharedCache::new(LruCache::new(64)));
//! let handles: Vec<_> = (0..4u64)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..16 {
//!                 cache.put(t * 16 + i, i);
//!             }
//!         })
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//! assert_eq!(cache.size(), 64);
//! ```

use std::hash::Hash;

use parking_lot::{Mutex, MutexGuard};

use crate::cache::Cache;
use crate::listener::{EvictionListener, NoopListener};
use crate::policy::EvictionPolicy;

/// Thread-safe wrapper serializing every operation on one [`Cache`].
#[derive(Debug)]
pub struct SharedCache<K, V, P, L = NoopListener> {
    inner: Mutex<Cache<K, V, P, L>>,
}

impl<K, V, P, L> SharedCache<K, V, P, L>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
    L: EvictionListener<K, V>,
{
    pub fn new(cache: Cache<K, V, P, L>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().put(key, value)
    }

    pub fn put_opt(&self, key: Option<K>, value: Option<V>) -> Option<V> {
        self.inner.lock().put_opt(key, value)
    }

    /// Returns a clone of the value, updating recency on a hit.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Runs `f` on the value while the lock is held.
    pub fn get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        let mut cache = self.inner.lock();
        cache.get(key).map(f)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Locks the cache for a sequence of operations that must not interleave
    /// with other callers.
    pub fn lock(&self) -> MutexGuard<'_, Cache<K, V, P, L>> {
        self.inner.lock()
    }

    pub fn into_inner(self) -> Cache<K, V, P, L> {
        self.inner.into_inner()
    }
}
