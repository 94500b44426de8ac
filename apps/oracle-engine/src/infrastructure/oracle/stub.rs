//! Stub oracle adapter.
//!
//! Reads prices straight out of a group's shared cache account. The cache
//! carries a single value per market, so every observation has
//! bid = mid = ask and zero confidence - this source has no notion of
//! spread or uncertainty.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::Context;
use crate::application::ports::{Oracle, OracleError, OracleProvider};
use crate::domain::{
    Address, Market, MarketKind, MarketRef, OracleFeature, OracleSource, PriceObservation,
    STUB_CONFIDENCE, Symbol, Timestamp,
};

/// Provider name shared by all stub oracles.
pub const STUB_PROVIDER_NAME: &str = "Stub Oracle";

/// Oracle that reads one slot of a group's price cache.
///
/// The slot index and cache address are resolved once at construction and
/// never re-validated; an index that goes stale surfaces as a slot error
/// on the next fetch.
pub struct StubOracle {
    market: Arc<Market>,
    slot: usize,
    cache_address: Address,
    source: OracleSource,
}

impl StubOracle {
    /// Bind an oracle to a market's slot in a cache account.
    #[must_use]
    pub fn new(market: Arc<Market>, slot: usize, cache_address: Address) -> Self {
        let name = format!("Stub Oracle for {}", market.symbol);
        let source = OracleSource::new(
            STUB_PROVIDER_NAME,
            name,
            vec![OracleFeature::MidPrice],
            market.symbol.clone(),
        );
        Self {
            market,
            slot,
            cache_address,
            source,
        }
    }

    /// The bound cache slot.
    #[must_use]
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// The bound cache account address.
    #[must_use]
    pub const fn cache_address(&self) -> &Address {
        &self.cache_address
    }
}

#[async_trait]
impl Oracle for StubOracle {
    fn source(&self) -> &OracleSource {
        &self.source
    }

    async fn fetch_price(&self, ctx: &Context) -> Result<PriceObservation, OracleError> {
        let cache = ctx.cache_store.load(&self.cache_address).await?;
        let raw = cache.raw_price_at(self.slot)?;
        let price = self.market.base.shift_to_decimals(raw.value);

        Ok(PriceObservation::from_mid(
            &self.source,
            Timestamp::now(),
            price,
            STUB_CONFIDENCE,
        ))
    }
}

/// Factory producing stub oracles for spot and perpetual markets.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubOracleProvider;

impl StubOracleProvider {
    /// Create a new provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OracleProvider for StubOracleProvider {
    fn name(&self) -> &str {
        "Stub Oracle Factory"
    }

    async fn oracle_for_market(
        &self,
        ctx: &Context,
        market: &MarketRef,
    ) -> Result<Option<Box<dyn Oracle>>, OracleError> {
        let market = ctx.market_loader.ensure_loaded(market).await?;
        let group = Arc::clone(&market.group);

        let oracle: Option<Box<dyn Oracle>> = match market.kind {
            MarketKind::Spot => {
                let slot = group.find_spot_market_index(&market.address).ok_or_else(|| {
                    OracleError::MarketNotInGroup {
                        symbol: market.symbol.clone(),
                        table: "spot",
                    }
                })?;
                Some(Box::new(StubOracle::new(
                    market,
                    slot,
                    group.cache_address().clone(),
                )))
            }
            MarketKind::Perpetual => {
                let slot = group.find_perp_market_index(&market.address).ok_or_else(|| {
                    OracleError::MarketNotInGroup {
                        symbol: market.symbol.clone(),
                        table: "perp",
                    }
                })?;
                Some(Box::new(StubOracle::new(
                    market,
                    slot,
                    group.cache_address().clone(),
                )))
            }
            MarketKind::Other => None,
        };

        Ok(oracle)
    }

    async fn all_available_symbols(&self, ctx: &Context) -> Result<Vec<Symbol>, OracleError> {
        let markets = ctx.market_catalog.all_markets().await?;
        Ok(markets.iter().map(|m| m.symbol.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::domain::{Group, PriceCache, RawPrice, Token};
    use crate::infrastructure::cache_store::InMemoryCacheStore;
    use crate::infrastructure::markets::InMemoryMarketDirectory;

    struct Fixture {
        context: Context,
        cache_store: Arc<InMemoryCacheStore>,
        directory: Arc<InMemoryMarketDirectory>,
        group: Arc<Group>,
    }

    /// Group with four spot slots and two perp slots over one cache account.
    fn fixture() -> Fixture {
        let group = Arc::new(Group::new(
            Address::new("GROUP"),
            Address::new("0xCACHE"),
            vec![
                Address::new("SPOT0"),
                Address::new("SPOT1"),
                Address::new("SPOT2"),
                Address::new("SPOT3"),
            ],
            vec![Address::new("PERP0"), Address::new("PERP1")],
        ));

        let cache_store = Arc::new(InMemoryCacheStore::new());
        let directory = Arc::new(InMemoryMarketDirectory::new());
        let context = Context::new(
            Arc::clone(&cache_store) as _,
            Arc::clone(&directory) as _,
            Arc::clone(&directory) as _,
        );

        Fixture {
            context,
            cache_store,
            directory,
            group,
        }
    }

    fn spot_market(fixture: &Fixture, address: &str, symbol: &str, decimals: u32) -> Arc<Market> {
        let market = Arc::new(Market::new(
            Address::new(address),
            symbol,
            Token::new(symbol.split('/').next().unwrap_or(symbol), decimals),
            MarketKind::Spot,
            Arc::clone(&fixture.group),
        ));
        fixture.directory.add(Arc::clone(&market));
        market
    }

    fn cache_with_slot(slot: usize, value: i64, len: usize) -> PriceCache {
        let ts = Timestamp::now();
        let mut slots = vec![None; len];
        slots[slot] = Some(RawPrice::new(value, ts));
        PriceCache::new(slots)
    }

    #[tokio::test]
    async fn fetch_price_scales_the_raw_value() {
        // Worked example: spot market at index 3, raw price 150000 with a
        // 3-decimal base => 150.000.
        let fx = fixture();
        let market = spot_market(&fx, "SPOT3", "ABC/USD", 3);
        fx.cache_store
            .insert(Address::new("0xCACHE"), cache_with_slot(3, 150_000, 6));

        let oracle = StubOracle::new(market, 3, Address::new("0xCACHE"));
        let observation = oracle.fetch_price(&fx.context).await.unwrap();

        assert_eq!(observation.mid, dec!(150.000));
        assert_eq!(observation.bid, observation.mid);
        assert_eq!(observation.ask, observation.mid);
        assert_eq!(observation.confidence, Decimal::ZERO);
    }

    #[tokio::test]
    async fn fetch_price_twice_yields_equal_prices() {
        let fx = fixture();
        let market = spot_market(&fx, "SPOT0", "BTC/USDC", 6);
        fx.cache_store
            .insert(Address::new("0xCACHE"), cache_with_slot(0, 64_123_456_789, 6));

        let oracle = StubOracle::new(market, 0, Address::new("0xCACHE"));
        let first = oracle.fetch_price(&fx.context).await.unwrap();
        let second = oracle.fetch_price(&fx.context).await.unwrap();

        assert_eq!(first.mid, second.mid);
        assert_eq!(first.bid, second.bid);
        assert_eq!(first.ask, second.ask);
    }

    #[tokio::test]
    async fn fetch_price_propagates_missing_cache() {
        let fx = fixture();
        let market = spot_market(&fx, "SPOT0", "BTC/USDC", 6);

        let oracle = StubOracle::new(market, 0, Address::new("0xCACHE"));
        let error = oracle.fetch_price(&fx.context).await.unwrap_err();

        assert!(matches!(error, OracleError::CacheLoad(_)));
    }

    #[tokio::test]
    async fn fetch_price_propagates_out_of_range_slot() {
        let fx = fixture();
        let market = spot_market(&fx, "SPOT0", "BTC/USDC", 6);
        fx.cache_store
            .insert(Address::new("0xCACHE"), cache_with_slot(0, 1, 2));

        // Bound to a slot past the cache's slot table.
        let oracle = StubOracle::new(market, 9, Address::new("0xCACHE"));
        let error = oracle.fetch_price(&fx.context).await.unwrap_err();

        assert!(matches!(error, OracleError::Slot(_)));
    }

    #[tokio::test]
    async fn source_reports_mid_price_only() {
        let fx = fixture();
        let market = spot_market(&fx, "SPOT0", "BTC/USDC", 6);

        let oracle = StubOracle::new(market, 0, Address::new("0xCACHE"));
        let source = oracle.source();

        assert_eq!(source.provider_name, STUB_PROVIDER_NAME);
        assert_eq!(source.name, "Stub Oracle for BTC/USDC");
        assert!(source.supports(OracleFeature::MidPrice));
        assert!(!source.supports(OracleFeature::TopBidAndAsk));
    }

    #[tokio::test]
    async fn oracle_for_spot_market_binds_spot_index() {
        let fx = fixture();
        let market = spot_market(&fx, "SPOT2", "SOL/USDC", 6);

        let provider = StubOracleProvider::new();
        let oracle = provider
            .oracle_for_market(&fx.context, &MarketRef::from(market))
            .await
            .unwrap()
            .expect("spot markets are supported");

        assert_eq!(oracle.source().market_symbol.as_str(), "SOL/USDC");
    }

    #[tokio::test]
    async fn oracle_for_perp_market_binds_perp_index() {
        let fx = fixture();
        let market = Arc::new(Market::new(
            Address::new("PERP1"),
            "SOL-PERP",
            Token::new("SOL", 6),
            MarketKind::Perpetual,
            Arc::clone(&fx.group),
        ));
        fx.directory.add(Arc::clone(&market));

        let provider = StubOracleProvider::new();
        let oracle = provider
            .oracle_for_market(&fx.context, &MarketRef::from(market))
            .await
            .unwrap()
            .expect("perp markets are supported");

        assert_eq!(oracle.source().market_symbol.as_str(), "SOL-PERP");
    }

    #[tokio::test]
    async fn oracle_for_other_market_is_absent_not_an_error() {
        let fx = fixture();
        let market = Arc::new(Market::new(
            Address::new("OTHER"),
            "BTC/USDC",
            Token::new("BTC", 6),
            MarketKind::Other,
            Arc::clone(&fx.group),
        ));
        fx.directory.add(Arc::clone(&market));

        let provider = StubOracleProvider::new();
        let oracle = provider
            .oracle_for_market(&fx.context, &MarketRef::from(market))
            .await
            .unwrap();

        assert!(oracle.is_none());
    }

    #[tokio::test]
    async fn oracle_for_market_resolves_bare_addresses() {
        let fx = fixture();
        spot_market(&fx, "SPOT1", "ETH/USDC", 6);

        let provider = StubOracleProvider::new();
        let oracle = provider
            .oracle_for_market(&fx.context, &MarketRef::from(Address::new("SPOT1")))
            .await
            .unwrap()
            .expect("loader should resolve the address");

        assert_eq!(oracle.source().market_symbol.as_str(), "ETH/USDC");
    }

    #[tokio::test]
    async fn oracle_for_market_twice_binds_the_same_coordinates() {
        let fx = fixture();
        let market = spot_market(&fx, "SPOT3", "ABC/USD", 3);

        // Go through StubOracle directly so the bound coordinates are
        // observable.
        let provider = StubOracleProvider::new();
        for _ in 0..2 {
            let _ = provider
                .oracle_for_market(&fx.context, &MarketRef::from(Arc::clone(&market)))
                .await
                .unwrap();
        }

        let slot = fx.group.find_spot_market_index(&market.address).unwrap();
        let first = StubOracle::new(Arc::clone(&market), slot, fx.group.cache_address().clone());
        let second = StubOracle::new(Arc::clone(&market), slot, fx.group.cache_address().clone());

        assert_eq!(first.slot(), second.slot());
        assert_eq!(first.cache_address(), second.cache_address());
        assert_eq!(first.slot(), 3);
    }

    #[tokio::test]
    async fn oracle_for_market_missing_from_group_is_an_error() {
        let fx = fixture();
        let market = Arc::new(Market::new(
            Address::new("ROGUE"),
            "XYZ/USD",
            Token::new("XYZ", 6),
            MarketKind::Spot,
            Arc::clone(&fx.group),
        ));
        fx.directory.add(Arc::clone(&market));

        let provider = StubOracleProvider::new();
        let error = provider
            .oracle_for_market(&fx.context, &MarketRef::from(market))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            OracleError::MarketNotInGroup { table: "spot", .. }
        ));
    }

    #[tokio::test]
    async fn all_available_symbols_preserves_catalog_order() {
        let fx = fixture();
        spot_market(&fx, "SPOT0", "BTC/USDC", 6);
        spot_market(&fx, "SPOT1", "ETH/USDC", 6);
        spot_market(&fx, "SPOT2", "SOL/USDC", 6);

        let provider = StubOracleProvider::new();
        let symbols = provider.all_available_symbols(&fx.context).await.unwrap();

        assert_eq!(
            symbols,
            vec![
                Symbol::new("BTC/USDC"),
                Symbol::new("ETH/USDC"),
                Symbol::new("SOL/USDC"),
            ]
        );
    }

    #[tokio::test]
    async fn all_available_symbols_keeps_duplicates() {
        let fx = fixture();
        spot_market(&fx, "SPOT0", "BTC/USDC", 6);
        spot_market(&fx, "SPOT1", "BTC/USDC", 6);

        let provider = StubOracleProvider::new();
        let symbols = provider.all_available_symbols(&fx.context).await.unwrap();

        assert_eq!(symbols.len(), 2);
    }
}
