pub use crate::basic::BasicCache;
pub use crate::builder::{CacheBuilder, CacheConfig, PolicyKind};
pub use crate::cache::{
    Cache, DEFAULT_CAPACITY, DynCache, FifoCache, LifoCache, LruCache, MruCache,
};
#[cfg(feature = "concurrency")]
pub use crate::concurrent::SharedCache;
pub use crate::error::{ConfigError, InvariantError};
pub use crate::listener::{DiscardPrinter, EvictionListener, EvictionLog, NoopListener};
pub use crate::policy::{
    AnyPolicy, EvictionPolicy, FifoPolicy, KeyOrder, LifoPolicy, LruPolicy, MruPolicy,
};
