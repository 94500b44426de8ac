//! Port definitions for the oracle engine.
//!
//! Driving port: `Oracle`/`OracleProvider`, the interface offered to
//! consumers. Driven ports: the external collaborators an oracle needs -
//! cache store, market loader, market catalog and error sink.

mod cache_store_port;
mod error_sink_port;
mod market_catalog_port;
mod market_loader_port;
mod oracle_port;

pub use cache_store_port::{CacheStoreError, CacheStorePort};
pub use error_sink_port::ErrorSinkPort;
pub use market_catalog_port::{CatalogError, MarketCatalogPort};
pub use market_loader_port::{MarketLoadError, MarketLoaderPort};
pub use oracle_port::{Oracle, OracleError, OracleProvider};
