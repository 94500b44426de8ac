//! Market loader and catalog adapters.
//!
//! Implementations of `MarketLoaderPort` and `MarketCatalogPort`.

mod memory;

pub use memory::InMemoryMarketDirectory;
