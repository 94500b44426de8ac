//! Markets and market references.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Address, Group, Symbol, Token};

/// Market variant, resolved once at market load time.
///
/// Spot and perpetual markets have separate index tables in their group;
/// anything else has no slot in the price cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketKind {
    /// Spot market (base/quote pair settled immediately).
    Spot,
    /// Perpetual futures market.
    Perpetual,
    /// Any other market variant; not priced by the cache oracle.
    Other,
}

/// A fully loaded market.
///
/// Immutable once loaded. Carries a handle to its parent group so slot
/// indices can be resolved without further lookups.
#[derive(Debug, Clone)]
pub struct Market {
    /// The market's account address.
    pub address: Address,
    /// Market symbol, e.g. "BTC/USDC".
    pub symbol: Symbol,
    /// Base-asset token, including its decimal convention.
    pub base: Token,
    /// Market variant.
    pub kind: MarketKind,
    /// The group this market belongs to.
    pub group: Arc<Group>,
}

impl Market {
    /// Create a new loaded market.
    #[must_use]
    pub fn new(
        address: Address,
        symbol: impl Into<Symbol>,
        base: Token,
        kind: MarketKind,
        group: Arc<Group>,
    ) -> Self {
        Self {
            address,
            symbol: symbol.into(),
            base,
            kind,
            group,
        }
    }
}

/// A possibly-unresolved reference to a market.
///
/// Callers may hold a full `Market` or just its address; the market loader
/// upgrades an address to a loaded market when needed.
#[derive(Debug, Clone)]
pub enum MarketRef {
    /// An already loaded market; passes through the loader untouched.
    Loaded(Arc<Market>),
    /// A bare address that must be resolved by the market loader.
    Address(Address),
}

impl MarketRef {
    /// The referenced market's address.
    #[must_use]
    pub fn address(&self) -> &Address {
        match self {
            Self::Loaded(market) => &market.address,
            Self::Address(address) => address,
        }
    }
}

impl From<Arc<Market>> for MarketRef {
    fn from(market: Arc<Market>) -> Self {
        Self::Loaded(market)
    }
}

impl From<Address> for MarketRef {
    fn from(address: Address) -> Self {
        Self::Address(address)
    }
}
