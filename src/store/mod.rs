//! Entry storage.
//!
//! Stores own keys and values and answer "what is resident". Eviction order
//! is the policy's concern (see [`crate::policy`]), so a store never decides
//! what to drop.

pub mod hashmap;

pub use hashmap::HashMapStore;
