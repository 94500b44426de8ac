//! Execution context passed to oracle operations.

use std::fmt;
use std::sync::Arc;

use super::ports::{CacheStorePort, MarketCatalogPort, MarketLoaderPort};

/// Bundle of the external collaborators an oracle operation may need.
///
/// Cheap to clone; all members are shared handles. Holds no mutable state
/// of its own.
#[derive(Clone)]
pub struct Context {
    /// Access to price cache accounts.
    pub cache_store: Arc<dyn CacheStorePort>,
    /// Resolver for market references.
    pub market_loader: Arc<dyn MarketLoaderPort>,
    /// Catalog of all known markets.
    pub market_catalog: Arc<dyn MarketCatalogPort>,
}

impl Context {
    /// Create a new context.
    #[must_use]
    pub fn new(
        cache_store: Arc<dyn CacheStorePort>,
        market_loader: Arc<dyn MarketLoaderPort>,
        market_catalog: Arc<dyn MarketCatalogPort>,
    ) -> Self {
        Self {
            cache_store,
            market_loader,
            market_catalog,
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").finish_non_exhaustive()
    }
}
