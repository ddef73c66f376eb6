//! boundcache: bounded key-value caches with pluggable eviction policies.
//!
//! A [`Cache`](cache::Cache) holds at most `capacity` entries. When a new
//! key arrives at a full cache, its [`EvictionPolicy`](policy::EvictionPolicy)
//! picks exactly one victim (FIFO, LIFO, LRU or MRU), the entry is dropped and
//! the cache's [`EvictionListener`](listener::EvictionListener) is told.
//!
//! ```
//! use boundcache::prelude::*;
//!
//! let mut cache = FifoCache::with_listener(2, DiscardPrinter::new(Vec::new()));
//! cache.put("A", "Hello");
//! cache.put("B", "World");
//! cache.put("C", "School");
//!
//! let printed = String::from_utf8(cache.listener().get_ref().clone()).unwrap();
//! assert_eq!(printed, "DISCARD: A\n");
//! ```

pub mod basic;
pub mod builder;
pub mod cache;
#[cfg(feature = "concurrency")]
pub mod concurrent;
pub mod ds;
pub mod error;
pub mod listener;
pub mod policy;
pub mod prelude;
pub mod store;
