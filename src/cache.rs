//! Bounded cache façade.
//!
//! [`Cache`] composes three parts:
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                    Cache<K, V, P, L>                             │
//!   │                                                                  │
//!   │   store: HashMapStore<K, V>     what is resident (unordered)     │
//!   │   policy: P: EvictionPolicy<K>  key order + victim choice        │
//!   │   listener: L                   told about every eviction        │
//!   │   capacity: usize               fixed, > 0                       │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Put Flow
//! ────────
//!
//! ```text
//!   put(k, v):
//!     k resident?  ── yes ──► overwrite value, policy.on_update(k)
//!         │
//!         no
//!         ▼
//!     len == capacity? ── yes ──► victim = policy.evict()
//!         │                       store.remove(victim)
//!         │                       listener.on_evict(victim, value)
//!         ▼
//!     store.insert(k, v), policy.on_insert(k)
//! ```
//!
//! `get` never evicts and never changes what is resident; a hit calls
//! `policy.on_access`, which only LRU and MRU act on.
//!
//! ## Invariants
//!
//! After every public operation:
//! - `len() <= capacity()`
//! - the policy's key order and the store hold exactly the same keys
//!
//! Debug builds check both after each mutation.
//!
//! ## Example Usage
//!
//! ```
//! use boundcache::cache::{Cache, LruCache};
//! use boundcache::listener::EvictionLog;
//! use boundcache::policy::LruPolicy;
//!
//! let mut cache = LruCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! assert_eq!(cache.get(&"a"), Some(&1));
//! cache.put("c", 3);
//! assert!(!cache.contains(&"b"));
//!
//! // Observe evictions instead of printing them
//! let mut observed: Cache<_, _, LruPolicy<_>, _> =
//!     Cache::with_listener(1, EvictionLog::new());
//! observed.put(1, "one");
//! observed.put(2, "two");
//! assert_eq!(observed.listener().keys(), &[1]);
//! ```
//!
//! ## Thread Safety
//!
//! `Cache` is a single-owner structure mutated through `&mut self`. For
//! shared access enable the `concurrency` feature and use
//! `concurrent::SharedCache`.

use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};

use crate::error::{ConfigError, InvariantError};
use crate::listener::{EvictionListener, NoopListener};
use crate::policy::{AnyPolicy, EvictionPolicy, FifoPolicy, LifoPolicy, LruPolicy, MruPolicy};
use crate::store::HashMapStore;

/// Capacity used when the embedding code does not pick one.
pub const DEFAULT_CAPACITY: usize = 4;

/// Upper bound on the slots reserved up front; larger caches grow on demand.
pub(crate) const PREALLOC_LIMIT: usize = 1 << 16;

/// Bounded key-value cache driven by an eviction policy `P`.
#[derive(Debug)]
pub struct Cache<K, V, P, L = NoopListener> {
    store: HashMapStore<K, V>,
    policy: P,
    listener: L,
    capacity: usize,
}

/// Cache evicting the oldest inserted key.
pub type FifoCache<K, V, L = NoopListener> = Cache<K, V, FifoPolicy<K>, L>;
/// Cache evicting the newest inserted key.
pub type LifoCache<K, V, L = NoopListener> = Cache<K, V, LifoPolicy<K>, L>;
/// Cache evicting the least recently touched key.
pub type LruCache<K, V, L = NoopListener> = Cache<K, V, LruPolicy<K>, L>;
/// Cache evicting the most recently touched key.
pub type MruCache<K, V, L = NoopListener> = Cache<K, V, MruPolicy<K>, L>;
/// Cache whose policy is picked at runtime (see [`CacheBuilder`](crate::builder::CacheBuilder)).
pub type DynCache<K, V, L = NoopListener> = Cache<K, V, AnyPolicy<K>, L>;

impl<K, V, P> Cache<K, V, P, NoopListener>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K> + Default,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) to get a
    /// [`ConfigError`] instead.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a cache, rejecting a zero capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::try_with_policy(capacity, P::default(), NoopListener)
    }
}

impl<K, V, P, L> Cache<K, V, P, L>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
    L: EvictionListener<K, V>,
{
    /// Creates a cache that reports evictions to `listener`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_listener(capacity: usize, listener: L) -> Self
    where
        P: Default,
    {
        match Self::try_with_policy(capacity, P::default(), listener) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a cache from an explicit policy instance and listener.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero or `policy` already
    /// tracks keys.
    pub fn try_with_policy(capacity: usize, policy: P, listener: L) -> Result<Self, ConfigError> {
        if capacity == 0 {
            tracing::warn!(policy = policy.name(), "rejected zero-capacity cache");
            return Err(ConfigError::zero_capacity());
        }
        if !policy.order().is_empty() {
            return Err(ConfigError::new(format!(
                "{} policy must start empty, it tracks {} keys",
                policy.name(),
                policy.order().len()
            )));
        }
        Ok(Self {
            store: HashMapStore::with_capacity(capacity.min(PREALLOC_LIMIT)),
            policy,
            listener,
            capacity,
        })
    }

    /// Inserts or overwrites `key`.
    ///
    /// - Resident key: the value is replaced and the previous one returned.
    ///   LRU/MRU treat this as an access; FIFO/LIFO keep the key's position.
    /// - New key in a full cache: the policy's victim is removed and reported
    ///   to the listener *before* the new key is admitted.
    ///
    /// # Example
    ///
    /// ```
    /// use boundcache::cache::FifoCache;
    ///
    /// let mut cache = FifoCache::new(2);
    /// assert_eq!(cache.put("k", 1), None);
    /// assert_eq!(cache.put("k", 2), Some(1));
    /// assert_eq!(cache.size(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.store.get_mut(&key) {
            let previous = std::mem::replace(slot, value);
            self.policy.on_update(&key);
            tracing::trace!(policy = self.policy.name(), "overwrote entry");
            #[cfg(debug_assertions)]
            self.debug_validate_invariants();
            return Some(previous);
        }

        if self.store.len() >= self.capacity {
            self.evict_one();
        }

        self.policy.on_insert(&key);
        self.store.insert(key, value);
        tracing::trace!(
            policy = self.policy.name(),
            len = self.store.len(),
            "admitted entry"
        );

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();
        None
    }

    /// `put` for callers holding possibly-absent input: if either `key` or
    /// `value` is `None` nothing happens and no notification is emitted.
    pub fn put_opt(&mut self, key: Option<K>, value: Option<V>) -> Option<V> {
        match (key, value) {
            (Some(key), Some(value)) => self.put(key, value),
            _ => None,
        }
    }

    /// Looks up `key`. A hit counts as an access for LRU and MRU.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if !self.store.contains(key) {
            return None;
        }
        self.policy.on_access(key);
        self.store.get(key)
    }

    /// `get` for a possibly-absent key; `None` is a miss.
    pub fn get_opt(&mut self, key: Option<&K>) -> Option<&V> {
        match key {
            Some(key) => self.get(key),
            None => None,
        }
    }

    /// Looks up `key` without touching its recency.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    /// Removes `key` without treating it as an eviction (no notification).
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.store.remove(key)?;
        self.policy.on_remove(key);
        #[cfg(debug_assertions)]
        self.debug_validate_invariants();
        Some(value)
    }

    /// Drops every entry. No notifications are emitted.
    pub fn clear(&mut self) {
        self.store.clear();
        self.policy.clear();
    }

    /// Number of resident entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Resident keys in the policy's order, front to back.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.policy.order().iter()
    }

    /// The key the next eviction would discard.
    pub fn peek_victim(&self) -> Option<&K> {
        self.policy.victim()
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Verifies the capacity bound and that store and key order agree.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.store.len();
        if len > self.capacity {
            return Err(InvariantError::OverCapacity {
                len,
                capacity: self.capacity,
            });
        }
        let order = self.policy.order();
        if order.len() != len {
            return Err(InvariantError::LengthMismatch {
                store: len,
                tracked: order.len(),
            });
        }
        if order.iter().any(|key| !self.store.contains(key)) {
            return Err(InvariantError::UntrackedKey);
        }
        Ok(())
    }

    fn evict_one(&mut self) {
        let Some(victim) = self.policy.evict() else {
            return;
        };
        match self.store.remove(&victim) {
            Some(value) => {
                tracing::debug!(
                    policy = self.policy.name(),
                    capacity = self.capacity,
                    "evicted entry"
                );
                self.listener.on_evict(&victim, &value);
            },
            None => {
                tracing::error!(policy = self.policy.name(), "victim was not resident");
            },
        }
    }

    #[cfg(debug_assertions)]
    fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("cache invariant violated: {err}");
        }
        self.policy.order().debug_validate_invariants();
    }
}

impl<K, V, P, L> Cache<K, V, P, L>
where
    K: Eq + Hash + Clone + Ord + Display,
    V: Display,
    P: EvictionPolicy<K>,
{
    /// Writes `Current cache:` followed by one `key: value` line per entry,
    /// sorted by key.
    pub fn write_contents<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.store.write_sorted(out)
    }

    /// [`write_contents`](Self::write_contents) to standard output.
    pub fn print_cache(&self) -> io::Result<()> {
        self.write_contents(&mut io::stdout().lock())
    }
}

impl<K, V, P, L> Default for Cache<K, V, P, L>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K> + Default,
    L: EvictionListener<K, V> + Default,
{
    /// A cache of [`DEFAULT_CAPACITY`] entries.
    fn default() -> Self {
        Self::with_listener(DEFAULT_CAPACITY, L::default())
    }
}
