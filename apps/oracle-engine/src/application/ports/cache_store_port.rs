//! Cache Store Port (Driven Port)
//!
//! Interface for fetching price cache account snapshots.

use async_trait::async_trait;

use crate::domain::{Address, PriceCache};

/// Cache store error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheStoreError {
    /// No account exists at the address.
    #[error("cache account {address} not found")]
    NotFound {
        /// The requested address.
        address: Address,
    },

    /// The store could not be reached.
    #[error("cache store unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// The account exists but does not deserialize as a price cache.
    #[error("cache account {address} is malformed: {message}")]
    Malformed {
        /// The requested address.
        address: Address,
        /// Error details.
        message: String,
    },
}

/// Port for reading price cache accounts.
///
/// Every call returns a complete, independent snapshot; there is no
/// incremental update and no staleness check at this boundary.
#[async_trait]
pub trait CacheStorePort: Send + Sync {
    /// Load a full snapshot of the cache account at `address`.
    async fn load(&self, address: &Address) -> Result<PriceCache, CacheStoreError>;
}
