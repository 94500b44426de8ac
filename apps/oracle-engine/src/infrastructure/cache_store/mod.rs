//! Cache store adapters.
//!
//! Implementations of `CacheStorePort`.

mod memory;

pub use memory::InMemoryCacheStore;
