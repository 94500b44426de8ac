//! In-memory cache store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{CacheStoreError, CacheStorePort};
use crate::domain::{Address, PriceCache, RawPrice};

/// Cache store backed by a map of address to snapshot.
///
/// Used in tests and local runs in place of an RPC-backed store. Writes
/// replace whole snapshots, mirroring how a real cache account updates.
#[derive(Debug, Default)]
pub struct InMemoryCacheStore {
    caches: RwLock<HashMap<Address, PriceCache>>,
}

impl InMemoryCacheStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            caches: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or replace the snapshot at an address.
    pub fn insert(&self, address: Address, cache: PriceCache) {
        let mut caches = self.caches.write().unwrap();
        caches.insert(address, cache);
    }

    /// Overwrite a single slot of the snapshot at an address.
    ///
    /// Returns `false` if no snapshot exists there or the slot is out of
    /// range.
    pub fn set_raw_price(&self, address: &Address, slot: usize, raw: RawPrice) -> bool {
        let mut caches = self.caches.write().unwrap();
        let Some(cache) = caches.get(address) else {
            return false;
        };
        if slot >= cache.len() {
            return false;
        }

        let mut slots: Vec<Option<RawPrice>> = (0..cache.len())
            .map(|i| cache.raw_price_at(i).ok())
            .collect();
        slots[slot] = Some(raw);
        caches.insert(address.clone(), PriceCache::new(slots));
        true
    }
}

#[async_trait]
impl CacheStorePort for InMemoryCacheStore {
    async fn load(&self, address: &Address) -> Result<PriceCache, CacheStoreError> {
        let caches = self.caches.read().unwrap();
        caches
            .get(address)
            .cloned()
            .ok_or_else(|| CacheStoreError::NotFound {
                address: address.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::Timestamp;

    fn raw(value: i64) -> RawPrice {
        RawPrice::new(value, Timestamp::now())
    }

    #[tokio::test]
    async fn load_returns_the_inserted_snapshot() {
        let store = InMemoryCacheStore::new();
        store.insert(
            Address::new("CACHE"),
            PriceCache::new(vec![Some(raw(42)), None]),
        );

        let cache = store.load(&Address::new("CACHE")).await.unwrap();
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.raw_price_at(0).unwrap().value, 42);
    }

    #[tokio::test]
    async fn load_unknown_address_is_not_found() {
        let store = InMemoryCacheStore::new();
        let error = store.load(&Address::new("NOPE")).await.unwrap_err();

        assert!(matches!(error, CacheStoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn set_raw_price_updates_one_slot() {
        let store = InMemoryCacheStore::new();
        store.insert(
            Address::new("CACHE"),
            PriceCache::new(vec![Some(raw(1)), Some(raw(2))]),
        );

        assert!(store.set_raw_price(&Address::new("CACHE"), 1, raw(20)));

        let cache = store.load(&Address::new("CACHE")).await.unwrap();
        assert_eq!(cache.raw_price_at(0).unwrap().value, 1);
        assert_eq!(cache.raw_price_at(1).unwrap().value, 20);
    }

    #[test]
    fn set_raw_price_rejects_unknown_address_and_bad_slot() {
        let store = InMemoryCacheStore::new();
        assert!(!store.set_raw_price(&Address::new("NOPE"), 0, raw(1)));

        store.insert(Address::new("CACHE"), PriceCache::new(vec![None]));
        assert!(!store.set_raw_price(&Address::new("CACHE"), 5, raw(1)));
    }
}
