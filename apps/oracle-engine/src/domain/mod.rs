//! Domain layer - value objects for markets, groups and prices.
//!
//! Everything here is plain data with no I/O: addresses, symbols, the group
//! registry, cache snapshots and price observations. The application layer
//! moves these values across the port boundaries.

mod address;
mod cache;
mod group;
mod market;
mod price;
mod symbol;
mod timestamp;
mod token;

pub use address::Address;
pub use cache::{CacheSlotError, PriceCache, RawPrice};
pub use group::Group;
pub use market::{Market, MarketKind, MarketRef};
pub use price::{OracleFeature, OracleSource, PriceObservation, STUB_CONFIDENCE};
pub use symbol::Symbol;
pub use timestamp::Timestamp;
pub use token::Token;
