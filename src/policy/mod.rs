//! Eviction policies.
//!
//! A policy owns a [`KeyOrder`] and decides, when the cache must admit a new
//! key at capacity, which resident key is the victim. The
//! [`Cache`](crate::cache::Cache) façade owns the values and drives the
//! policy through the [`EvictionPolicy`] hooks; a policy never sees values.
//!
//! | Policy  | `get` hit      | overwrite      | victim |
//! |---------|----------------|----------------|--------|
//! | FIFO    | no change      | no change      | front  |
//! | LIFO    | no change      | no change      | back   |
//! | LRU     | move to back   | move to back   | front  |
//! | MRU     | move to back   | move to back   | back   |
//!
//! The victim is always chosen *before* the incoming key is appended, so a
//! policy that evicts from the back (LIFO, MRU) takes the previous newest
//! key, never the one being admitted.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

pub mod fifo;
pub mod lifo;
pub mod lru;
pub mod mru;
pub mod order;

pub use fifo::FifoPolicy;
pub use lifo::LifoPolicy;
pub use lru::LruPolicy;
pub use mru::MruPolicy;
pub use order::KeyOrder;

/// Victim selection plus the bookkeeping it needs.
///
/// Hook contract, as driven by [`Cache`](crate::cache::Cache):
/// - `on_insert` is called once per newly admitted key, after any eviction.
/// - `on_update` is called when `put` overwrites a resident key.
/// - `on_access` is called on a `get` hit.
/// - `on_remove` is called on explicit removal (not on eviction).
/// - `evict` removes the victim from the order and returns it.
///
/// After every hook the tracked key set equals the cache's resident key set.
pub trait EvictionPolicy<K> {
    /// Short lowercase policy name, used in logs.
    fn name(&self) -> &'static str;

    /// The tracked key order, front (evicted first by front-evicting
    /// policies) to back.
    fn order(&self) -> &KeyOrder<K>;

    fn on_insert(&mut self, key: &K);

    fn on_update(&mut self, key: &K);

    fn on_access(&mut self, key: &K);

    fn on_remove(&mut self, key: &K);

    /// The key `evict` would return, without removing it.
    fn victim(&self) -> Option<&K>;

    /// Removes and returns the victim key.
    fn evict(&mut self) -> Option<K>;

    fn clear(&mut self);
}

/// The four built-in policies, as a runtime-selectable value.
///
/// Names are matched case-insensitively and ignoring surrounding whitespace,
/// both by [`FromStr`] and when deserializing. They serialize in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// First in, first out.
    Fifo,
    /// Last in, first out.
    Lifo,
    /// Least recently used.
    #[default]
    Lru,
    /// Most recently used.
    Mru,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 4] = [Self::Fifo, Self::Lifo, Self::Lru, Self::Mru];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lifo => "lifo",
            Self::Lru => "lru",
            Self::Mru => "mru",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PolicyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for PolicyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lifo" => Ok(Self::Lifo),
            "lru" => Ok(Self::Lru),
            "mru" => Ok(Self::Mru),
            other => Err(ConfigError::new(format!(
                "unknown eviction policy '{other}' (expected fifo, lifo, lru or mru)"
            ))),
        }
    }
}

/// Enum dispatch over the built-in policies, chosen at runtime by
/// [`PolicyKind`].
#[derive(Debug)]
pub enum AnyPolicy<K> {
    Fifo(FifoPolicy<K>),
    Lifo(LifoPolicy<K>),
    Lru(LruPolicy<K>),
    Mru(MruPolicy<K>),
}

impl<K> AnyPolicy<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new(kind: PolicyKind) -> Self {
        Self::with_capacity(kind, 0)
    }

    /// Builds the policy for `kind`, pre-sizing its order for `capacity` keys.
    pub fn with_capacity(kind: PolicyKind, capacity: usize) -> Self {
        match kind {
            PolicyKind::Fifo => Self::Fifo(FifoPolicy::with_capacity(capacity)),
            PolicyKind::Lifo => Self::Lifo(LifoPolicy::with_capacity(capacity)),
            PolicyKind::Lru => Self::Lru(LruPolicy::with_capacity(capacity)),
            PolicyKind::Mru => Self::Mru(MruPolicy::with_capacity(capacity)),
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Fifo(_) => PolicyKind::Fifo,
            Self::Lifo(_) => PolicyKind::Lifo,
            Self::Lru(_) => PolicyKind::Lru,
            Self::Mru(_) => PolicyKind::Mru,
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $p:ident => $body:expr) => {
        match $self {
            AnyPolicy::Fifo($p) => $body,
            AnyPolicy::Lifo($p) => $body,
            AnyPolicy::Lru($p) => $body,
            AnyPolicy::Mru($p) => $body,
        }
    };
}

impl<K> EvictionPolicy<K> for AnyPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn name(&self) -> &'static str {
        dispatch!(self, p => p.name())
    }

    fn order(&self) -> &KeyOrder<K> {
        dispatch!(self, p => p.order())
    }

    fn on_insert(&mut self, key: &K) {
        dispatch!(self, p => p.on_insert(key))
    }

    fn on_update(&mut self, key: &K) {
        dispatch!(self, p => p.on_update(key))
    }

    fn on_access(&mut self, key: &K) {
        dispatch!(self, p => p.on_access(key))
    }

    fn on_remove(&mut self, key: &K) {
        dispatch!(self, p => p.on_remove(key))
    }

    fn victim(&self) -> Option<&K> {
        dispatch!(self, p => p.victim())
    }

    fn evict(&mut self) -> Option<K> {
        dispatch!(self, p => p.evict())
    }

    fn clear(&mut self) {
        dispatch!(self, p => p.clear())
    }
}
