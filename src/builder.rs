//! Runtime policy selection and configuration.
//!
//! [`CacheBuilder`] builds a [`DynCache`] whose policy is chosen by a
//! [`PolicyKind`] value, so the policy can come from configuration instead
//! of a type parameter. [`CacheConfig`] is the serde-facing form of the
//! same settings.
//!
//! ## Example
//!
//! ```rust
//! use boundcache::builder::{CacheBuilder, PolicyKind};
//!
//! let mut cache = CacheBuilder::new(100)
//!     .policy(PolicyKind::Mru)
//!     .build::<u64, String>();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! assert_eq!(cache.policy_name(), "mru");
//! ```

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::cache::{Cache, DEFAULT_CAPACITY, DynCache, PREALLOC_LIMIT};
use crate::error::ConfigError;
use crate::listener::{EvictionListener, NoopListener};
use crate::policy::AnyPolicy;

pub use crate::policy::PolicyKind;

/// Builder for creating cache instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheBuilder {
    capacity: usize,
    policy: PolicyKind,
}

impl CacheBuilder {
    /// Create a new cache builder with the specified capacity and the
    /// default policy (LRU).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            policy: PolicyKind::default(),
        }
    }

    /// Sets the eviction policy.
    pub fn policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy_kind(&self) -> PolicyKind {
        self.policy
    }

    /// Build a cache with the configured policy.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero. For a non-panicking alternative, use
    /// [`try_build`](Self::try_build).
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundcache::builder::{CacheBuilder, PolicyKind};
    ///
    /// let cache = CacheBuilder::new(4).policy(PolicyKind::Fifo).build::<u64, String>();
    /// assert_eq!(cache.capacity(), 4);
    /// ```
    pub fn build<K, V>(self) -> DynCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        self.build_with_listener(NoopListener)
    }

    /// Builds the cache, returning an error on invalid parameters instead
    /// of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    pub fn try_build<K, V>(self) -> Result<DynCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        self.try_build_with_listener(NoopListener)
    }

    /// Like [`build`](Self::build), reporting evictions to `listener`.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero.
    pub fn build_with_listener<K, V, L>(self, listener: L) -> DynCache<K, V, L>
    where
        K: Eq + Hash + Clone,
        L: EvictionListener<K, V>,
    {
        match self.try_build_with_listener(listener) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    pub fn try_build_with_listener<K, V, L>(self, listener: L) -> Result<DynCache<K, V, L>, ConfigError>
    where
        K: Eq + Hash + Clone,
        L: EvictionListener<K, V>,
    {
        let policy = AnyPolicy::with_capacity(self.policy, self.capacity.min(PREALLOC_LIMIT));
        Cache::try_with_policy(self.capacity, policy, listener)
    }
}

impl Default for CacheBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Serializable cache settings.
///
/// Missing fields fall back to capacity 4 and LRU.
///
/// ```
/// use boundcache::builder::{CacheConfig, PolicyKind};
///
/// let config = CacheConfig::default();
/// assert_eq!(config.capacity, 4);
/// assert_eq!(config.policy, PolicyKind::Lru);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    pub capacity: usize,
    pub policy: PolicyKind,
}

impl CacheConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            tracing::warn!(policy = %self.policy, "cache config has zero capacity");
            return Err(ConfigError::zero_capacity());
        }
        Ok(())
    }

    /// Validates the settings and turns them into a builder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the settings are invalid.
    pub fn into_builder(self) -> Result<CacheBuilder, ConfigError> {
        self.validate()?;
        Ok(CacheBuilder::new(self.capacity).policy(self.policy))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            policy: PolicyKind::default(),
        }
    }
}

impl From<CacheConfig> for CacheBuilder {
    fn from(config: CacheConfig) -> Self {
        CacheBuilder::new(config.capacity).policy(config.policy)
    }
}
