//! Market Loader Port (Driven Port)
//!
//! Interface for upgrading market references to fully loaded markets.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Address, Market, MarketRef};

/// Market loading error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MarketLoadError {
    /// No market exists at the address.
    #[error("market {address} not found")]
    NotFound {
        /// The referenced address.
        address: Address,
    },

    /// The loader could not be reached.
    #[error("market loader unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

/// Port for resolving market references.
#[async_trait]
pub trait MarketLoaderPort: Send + Sync {
    /// Ensure a market reference is fully loaded.
    ///
    /// An already loaded reference passes through without a remote call.
    async fn ensure_loaded(&self, market: &MarketRef) -> Result<Arc<Market>, MarketLoadError>;
}
