//! Market Catalog Port (Driven Port)
//!
//! Interface for listing every market known to the active context.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Market;

/// Market catalog error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// The catalog could not be reached.
    #[error("market catalog unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

/// Port for enumerating known markets.
#[async_trait]
pub trait MarketCatalogPort: Send + Sync {
    /// List all known markets in catalog order.
    ///
    /// Duplicates are passed through as-is; callers that need a unique set
    /// must dedup themselves.
    async fn all_markets(&self) -> Result<Vec<Arc<Market>>, CatalogError>;
}
