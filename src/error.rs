//! Error types for the boundcache library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache configuration parameters are invalid
//!   (zero capacity, unknown policy name).
//! - [`InvariantError`]: Returned by `check_invariants` when the store and
//!   the policy's key order disagree.
//!
//! Cache misses and ignored input are not errors: `get` returns `None` and a
//! degenerate `put_opt` is a no-op.
//!
//! ## Example Usage
//!
//! ```
//! use boundcache::cache::LruCache;
//! use boundcache::error::ConfigError;
//!
//! let cache: Result<LruCache<String, i32>, ConfigError> = LruCache::try_new(4);
//! assert!(cache.is_ok());
//!
//! let bad = LruCache::<String, i32>::try_new(0);
//! assert!(bad.is_err());
//! ```

use thiserror::Error;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`Cache::try_new`](crate::cache::Cache::try_new) and
/// [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build).
///
/// # Example
///
/// ```
/// use boundcache::cache::FifoCache;
///
/// let err = FifoCache::<u64, u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ConfigError(String);

impl ConfigError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }

    pub(crate) fn zero_capacity() -> Self {
        Self::new("cache capacity must be greater than zero")
    }
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("cache holds {len} entries, over its capacity of {capacity}")]
    OverCapacity { len: usize, capacity: usize },

    #[error("store holds {store} keys but the eviction order tracks {tracked}")]
    LengthMismatch { store: usize, tracked: usize },

    #[error("eviction order tracks a key that is not resident in the store")]
    UntrackedKey,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
