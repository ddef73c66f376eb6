//! Eviction notifications.
//!
//! Every time [`Cache::put`](crate::cache::Cache::put) has to discard an
//! entry to admit a new key, it calls [`EvictionListener::on_evict`] exactly
//! once with the victim. Explicit `remove` and `clear` are not evictions and
//! do not notify.
//!
//! ## Provided listeners
//!
//! | Listener            | Effect                                          |
//! |---------------------|-------------------------------------------------|
//! | [`NoopListener`]    | Ignores evictions (the default)                 |
//! | [`DiscardPrinter`]  | Writes `DISCARD: <key>` lines to a writer       |
//! | [`EvictionLog`]     | Records victim keys in eviction order           |
//! | `FnMut(&K, &V)`     | Any closure                                     |
//!
//! ## Example Usage
//!
//! ```
//! use boundcache::cache::Cache;
//! use boundcache::listener::EvictionLog;
//! use boundcache::policy::FifoPolicy;
//!
//! let mut cache: Cache<&str, i32, FifoPolicy<&str>, EvictionLog<&str>> =
//!     Cache::with_listener(2, EvictionLog::new());
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3);
//!
//! assert_eq!(cache.listener().keys(), &["a"]);
//! ```

use std::fmt::Display;
use std::io::{self, Write};

/// Observer for entries discarded by eviction.
pub trait EvictionListener<K, V> {
    /// Called once per eviction, after the entry has left the cache.
    fn on_evict(&mut self, key: &K, value: &V);
}

impl<K, V, F> EvictionListener<K, V> for F
where
    F: FnMut(&K, &V),
{
    fn on_evict(&mut self, key: &K, value: &V) {
        self(key, value)
    }
}

/// Listener that ignores every eviction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopListener;

impl<K, V> EvictionListener<K, V> for NoopListener {
    #[inline]
    fn on_evict(&mut self, _key: &K, _value: &V) {}
}

/// Records evicted keys in the order they were discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvictionLog<K> {
    keys: Vec<K>,
}

impl<K> EvictionLog<K> {
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Victim keys, oldest eviction first.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the recorded keys and empties the log.
    pub fn take(&mut self) -> Vec<K> {
        std::mem::take(&mut self.keys)
    }
}

impl<K> Default for EvictionLog<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V> EvictionListener<K, V> for EvictionLog<K> {
    fn on_evict(&mut self, key: &K, _value: &V) {
        self.keys.push(key.clone());
    }
}

/// Writes one `DISCARD: <key>` line per eviction.
///
/// Write failures are logged and otherwise ignored: a broken output stream
/// must not make `put` fail.
#[derive(Debug)]
pub struct DiscardPrinter<W> {
    out: W,
}

impl DiscardPrinter<io::Stdout> {
    /// Printer that writes to standard output.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> DiscardPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<K, V, W> EvictionListener<K, V> for DiscardPrinter<W>
where
    K: Display,
    W: Write,
{
    fn on_evict(&mut self, key: &K, _value: &V) {
        if let Err(err) = writeln!(self.out, "DISCARD: {key}") {
            tracing::warn!(error = %err, "failed to write discard notice");
        }
    }
}
