//! Price observations and oracle source descriptors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Symbol, Timestamp};

/// Confidence reported by the cache oracle.
///
/// The cache carries no uncertainty information, so every observation
/// reports zero confidence.
pub const STUB_CONFIDENCE: Decimal = Decimal::ZERO;

/// A capability an oracle source may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleFeature {
    /// A single mid price per observation.
    MidPrice,
    /// Distinct best bid and best ask prices.
    TopBidAndAsk,
}

/// Static descriptor of where a price observation came from.
///
/// Created once when an oracle is constructed and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleSource {
    /// Provider name, shared by all oracles of one provider.
    pub provider_name: String,
    /// Instance name, specific to one oracle.
    pub name: String,
    /// Symbol of the market this source prices.
    pub market_symbol: Symbol,
    features: Vec<OracleFeature>,
}

impl OracleSource {
    /// Create a new source descriptor.
    #[must_use]
    pub fn new(
        provider_name: impl Into<String>,
        name: impl Into<String>,
        features: Vec<OracleFeature>,
        market_symbol: Symbol,
    ) -> Self {
        Self {
            provider_name: provider_name.into(),
            name: name.into(),
            market_symbol,
            features,
        }
    }

    /// Whether this source supports a feature.
    #[must_use]
    pub fn supports(&self, feature: OracleFeature) -> bool {
        self.features.contains(&feature)
    }
}

/// A single price reading from an oracle.
///
/// A value, not an entity: each fetch produces a fresh observation and no
/// observation is ever updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Where the observation came from.
    pub source: OracleSource,
    /// Wall-clock time of the read.
    pub timestamp: Timestamp,
    /// Symbol of the observed market.
    pub market_symbol: Symbol,
    /// Best bid price.
    pub bid: Decimal,
    /// Mid price.
    pub mid: Decimal,
    /// Best ask price.
    pub ask: Decimal,
    /// Reported confidence; zero for the cache oracle.
    pub confidence: Decimal,
}

impl PriceObservation {
    /// Build an observation from a single mid price.
    ///
    /// Bid, mid and ask are all set to the same value: a mid-only source
    /// has no notion of spread.
    #[must_use]
    pub fn from_mid(
        source: &OracleSource,
        timestamp: Timestamp,
        mid: Decimal,
        confidence: Decimal,
    ) -> Self {
        Self {
            source: source.clone(),
            timestamp,
            market_symbol: source.market_symbol.clone(),
            bid: mid,
            mid,
            ask: mid,
            confidence,
        }
    }

    /// The bid/ask spread.
    #[must_use]
    pub fn spread(&self) -> Decimal {
        self.ask - self.bid
    }
}
