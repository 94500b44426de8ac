//! In-memory market directory.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::application::ports::{
    CatalogError, MarketCatalogPort, MarketLoadError, MarketLoaderPort,
};
use crate::domain::{Market, MarketRef};

/// Market loader and catalog backed by a plain vector.
///
/// One type serves both ports: the loader resolves by address over the
/// same list the catalog enumerates. Insertion order is catalog order.
#[derive(Debug, Default)]
pub struct InMemoryMarketDirectory {
    markets: RwLock<Vec<Arc<Market>>>,
}

impl InMemoryMarketDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            markets: RwLock::new(Vec::new()),
        }
    }

    /// Append a market to the directory.
    pub fn add(&self, market: Arc<Market>) {
        let mut markets = self.markets.write().unwrap();
        markets.push(market);
    }
}

#[async_trait]
impl MarketLoaderPort for InMemoryMarketDirectory {
    async fn ensure_loaded(&self, market: &MarketRef) -> Result<Arc<Market>, MarketLoadError> {
        match market {
            MarketRef::Loaded(loaded) => Ok(Arc::clone(loaded)),
            MarketRef::Address(address) => {
                let markets = self.markets.read().unwrap();
                markets
                    .iter()
                    .find(|m| &m.address == address)
                    .cloned()
                    .ok_or_else(|| MarketLoadError::NotFound {
                        address: address.clone(),
                    })
            }
        }
    }
}

#[async_trait]
impl MarketCatalogPort for InMemoryMarketDirectory {
    async fn all_markets(&self) -> Result<Vec<Arc<Market>>, CatalogError> {
        let markets = self.markets.read().unwrap();
        Ok(markets.clone())
    }
}
