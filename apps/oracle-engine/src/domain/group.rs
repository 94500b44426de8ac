//! Group registry binding markets to their cache slots.

use serde::{Deserialize, Serialize};

use super::Address;

/// The on-chain registry shared by a set of markets.
///
/// A group owns one price cache account and two index tables: spot markets
/// and perpetual markets each occupy a position in their table, and that
/// position is the market's slot in the shared cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    address: Address,
    cache_address: Address,
    spot_markets: Vec<Address>,
    perp_markets: Vec<Address>,
}

impl Group {
    /// Create a new group.
    #[must_use]
    pub fn new(
        address: Address,
        cache_address: Address,
        spot_markets: Vec<Address>,
        perp_markets: Vec<Address>,
    ) -> Self {
        Self {
            address,
            cache_address,
            spot_markets,
            perp_markets,
        }
    }

    /// The group's own account address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Address of the shared price cache account.
    #[must_use]
    pub const fn cache_address(&self) -> &Address {
        &self.cache_address
    }

    /// Find a spot market's index within the group's spot table.
    #[must_use]
    pub fn find_spot_market_index(&self, market: &Address) -> Option<usize> {
        self.spot_markets.iter().position(|m| m == market)
    }

    /// Find a perpetual market's index within the group's perp table.
    #[must_use]
    pub fn find_perp_market_index(&self, market: &Address) -> Option<usize> {
        self.perp_markets.iter().position(|m| m == market)
    }
}
