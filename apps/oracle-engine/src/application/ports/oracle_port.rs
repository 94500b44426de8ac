//! Oracle Port (Driving Port)
//!
//! The price-oracle interface this crate offers to the rest of the trading
//! stack, plus the error taxonomy shared by all oracle operations.

use async_trait::async_trait;

use crate::application::Context;
use crate::domain::{CacheSlotError, MarketRef, OracleSource, PriceObservation, Symbol};

use super::{CacheStoreError, CatalogError, MarketLoadError};

/// Oracle error.
///
/// `fetch_price` and `oracle_for_market` never swallow these; recovery (if
/// any) happens in the polling layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OracleError {
    /// The price cache snapshot could not be loaded.
    #[error("failed to load price cache: {0}")]
    CacheLoad(#[from] CacheStoreError),

    /// The bound slot was invalid for the loaded cache.
    #[error(transparent)]
    Slot(#[from] CacheSlotError),

    /// The market reference could not be resolved.
    #[error("failed to load market: {0}")]
    MarketLoad(#[from] MarketLoadError),

    /// The market catalog could not be listed.
    #[error("failed to list markets: {0}")]
    Catalog(#[from] CatalogError),

    /// The loaded market is missing from its group's index table.
    #[error("market {symbol} is not in its group's {table} market table")]
    MarketNotInGroup {
        /// Symbol of the offending market.
        symbol: Symbol,
        /// Which table was searched ("spot" or "perp").
        table: &'static str,
    },
}

/// A price oracle bound to a single market.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Static descriptor of this oracle.
    fn source(&self) -> &OracleSource;

    /// Fetch a fresh price observation.
    ///
    /// Every call is an independent read of remote state; nothing is cached
    /// between calls and no retry happens at this layer.
    async fn fetch_price(&self, ctx: &Context) -> Result<PriceObservation, OracleError>;
}

impl std::fmt::Debug for dyn Oracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Oracle")
            .field("source", self.source())
            .finish_non_exhaustive()
    }
}

/// A factory producing oracles for markets.
#[async_trait]
pub trait OracleProvider: Send + Sync {
    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Construct an oracle for a market, if this provider can price it.
    ///
    /// Returns `Ok(None)` for market variants the provider does not
    /// support; that is an absent result, not an error.
    async fn oracle_for_market(
        &self,
        ctx: &Context,
        market: &MarketRef,
    ) -> Result<Option<Box<dyn Oracle>>, OracleError>;

    /// Symbols of every market in the active catalog, in catalog order.
    async fn all_available_symbols(&self, ctx: &Context) -> Result<Vec<Symbol>, OracleError>;
}
