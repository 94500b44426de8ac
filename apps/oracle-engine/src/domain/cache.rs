//! Price cache snapshot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Timestamp;

/// A raw price entry in the cache, as written on chain.
///
/// The value is unscaled; the owning market's base token says how many
/// fractional digits it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPrice {
    /// Raw unscaled price.
    pub value: i64,
    /// When the cache entry was last written.
    pub last_update: Timestamp,
}

impl RawPrice {
    /// Create a new raw price entry.
    #[must_use]
    pub const fn new(value: i64, last_update: Timestamp) -> Self {
        Self { value, last_update }
    }
}

/// Error reading a slot from a cache snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CacheSlotError {
    /// The slot index is past the end of the cache's slot table.
    #[error("slot {slot} is out of range for cache with {len} slots")]
    OutOfRange {
        /// The requested slot.
        slot: usize,
        /// Number of slots in the cache.
        len: usize,
    },

    /// The slot exists but no price has been cached in it yet.
    #[error("slot {slot} holds no cached price")]
    Empty {
        /// The requested slot.
        slot: usize,
    },
}

/// A full snapshot of the shared price cache account.
///
/// One slot per tracked market. Snapshots are values: every read re-fetches
/// the whole account, so a snapshot is never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceCache {
    slots: Vec<Option<RawPrice>>,
}

impl PriceCache {
    /// Create a snapshot from its slot table.
    #[must_use]
    pub const fn new(slots: Vec<Option<RawPrice>>) -> Self {
        Self { slots }
    }

    /// Number of slots in the cache.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the cache has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read the raw price at a slot.
    ///
    /// # Errors
    ///
    /// Returns `CacheSlotError::OutOfRange` for an index past the slot table
    /// and `CacheSlotError::Empty` for a slot with no cached price.
    pub fn raw_price_at(&self, slot: usize) -> Result<RawPrice, CacheSlotError> {
        self.slots
            .get(slot)
            .copied()
            .ok_or(CacheSlotError::OutOfRange {
                slot,
                len: self.slots.len(),
            })?
            .ok_or(CacheSlotError::Empty { slot })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cache() -> PriceCache {
        let ts = Timestamp::parse("2026-03-01T12:00:00Z").unwrap();
        PriceCache::new(vec![
            Some(RawPrice::new(100_000, ts)),
            None,
            Some(RawPrice::new(250_000, ts)),
        ])
    }

    #[test]
    fn raw_price_at_hit() {
        let cache = test_cache();
        assert_eq!(cache.raw_price_at(2).unwrap().value, 250_000);
    }

    #[test]
    fn raw_price_at_out_of_range() {
        let cache = test_cache();
        assert_eq!(
            cache.raw_price_at(3),
            Err(CacheSlotError::OutOfRange { slot: 3, len: 3 })
        );
    }

    #[test]
    fn raw_price_at_empty_slot() {
        let cache = test_cache();
        assert_eq!(
            cache.raw_price_at(1),
            Err(CacheSlotError::Empty { slot: 1 })
        );
    }

    #[test]
    fn empty_cache() {
        let cache = PriceCache::new(vec![]);
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert!(cache.raw_price_at(0).is_err());
    }
}
