//! Oracle Engine Binary
//!
//! Demo runner: wires the stub oracle provider over an in-memory group and
//! cache fixture, polls it, and logs every observation until interrupted.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin oracle-engine
//! ```
//!
//! # Environment Variables
//!
//! - `ORACLE_CONFIG`: path to a YAML config file (default: `oracle.yaml`,
//!   falling back to built-in defaults when the file does not exist)
//! - `RUST_LOG`: log level (default: info)

use std::sync::Arc;

use tokio::signal;
use tokio::sync::broadcast;

use oracle_engine::application::ports::{
    CacheStorePort, MarketCatalogPort, MarketLoaderPort, OracleProvider,
};
use oracle_engine::config::{Config, load_config};
use oracle_engine::domain::{
    Address, Group, Market, MarketKind, MarketRef, PriceCache, RawPrice, Timestamp, Token,
};
use oracle_engine::infrastructure::cache_store::InMemoryCacheStore;
use oracle_engine::infrastructure::error_sink::TracingErrorSink;
use oracle_engine::infrastructure::markets::InMemoryMarketDirectory;
use oracle_engine::infrastructure::oracle::StubOracleProvider;
use oracle_engine::{Context, PricePoller, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = resolve_config()?;
    tracing::info!(
        provider = %config.provider.instance_name,
        interval_ms = config.poller.interval_ms,
        "Starting oracle engine"
    );

    let cache_store = Arc::new(InMemoryCacheStore::new());
    let directory = Arc::new(InMemoryMarketDirectory::new());
    let market = seed_fixture(&cache_store, &directory);

    let context = Context::new(
        Arc::clone(&cache_store) as Arc<dyn CacheStorePort>,
        Arc::clone(&directory) as Arc<dyn MarketLoaderPort>,
        Arc::clone(&directory) as Arc<dyn MarketCatalogPort>,
    );

    let provider = StubOracleProvider::new();
    let symbols = provider.all_available_symbols(&context).await?;
    tracing::info!(symbols = ?symbols, "Available symbols");

    let oracle = provider
        .oracle_for_market(&context, &MarketRef::from(market))
        .await?
        .ok_or_else(|| anyhow::anyhow!("fixture market has no oracle"))?;
    tracing::info!(oracle = %oracle.source().name, "Oracle resolved");

    let (shutdown_tx, _) = broadcast::channel::<()>(1);

    let poller = PricePoller::new(
        Arc::from(oracle),
        context,
        Arc::new(TracingErrorSink::new()),
        config.poller.clone(),
    );
    let (mut rx, poller_handle) = poller.spawn(shutdown_tx.subscribe());

    // Nudge the cached price each second so the demo shows movement.
    let drift_handle = tokio::spawn(drift_prices(
        Arc::clone(&cache_store),
        shutdown_tx.subscribe(),
    ));

    let consumer_handle = tokio::spawn(async move {
        while let Some(observation) = rx.recv().await {
            tracing::info!(
                market = %observation.market_symbol,
                price = %observation.mid,
                confidence = %observation.confidence,
                at = %observation.timestamp,
                "Price observation"
            );
        }
    });

    shutdown_signal(shutdown_tx).await;

    let _ = poller_handle.await;
    let _ = drift_handle.await;
    let _ = consumer_handle.await;

    tracing::info!("Oracle engine stopped");
    Ok(())
}

/// Load config from `ORACLE_CONFIG` (or `oracle.yaml`), falling back to
/// defaults when no file exists.
fn resolve_config() -> anyhow::Result<Config> {
    let path = std::env::var("ORACLE_CONFIG").unwrap_or_else(|_| "oracle.yaml".to_string());
    if std::path::Path::new(&path).exists() {
        Ok(load_config(Some(&path))?)
    } else {
        tracing::info!(path = %path, "No config file found, using defaults");
        Ok(Config::default())
    }
}

/// Build the demo group, market and seeded cache; returns the demo market.
fn seed_fixture(
    cache_store: &Arc<InMemoryCacheStore>,
    directory: &Arc<InMemoryMarketDirectory>,
) -> Arc<Market> {
    let cache_address = Address::new("DemoCache11111111111111111111111");
    let market_address = Address::new("DemoSpotBTC111111111111111111111");

    let group = Arc::new(Group::new(
        Address::new("DemoGroup1111111111111111111111"),
        cache_address.clone(),
        vec![market_address.clone()],
        vec![],
    ));

    let market = Arc::new(Market::new(
        market_address,
        "BTC/USDC",
        Token::new("BTC", 3),
        MarketKind::Spot,
        group,
    ));
    directory.add(Arc::clone(&market));

    // Slot 0: raw 64_123_456 with 3 decimals => 64123.456.
    cache_store.insert(
        cache_address,
        PriceCache::new(vec![Some(RawPrice::new(64_123_456, Timestamp::now()))]),
    );

    market
}

/// Walk the demo cache price up and down once per second.
async fn drift_prices(
    cache_store: Arc<InMemoryCacheStore>,
    mut shutdown_rx: broadcast::Receiver<()>,
) {
    let cache_address = Address::new("DemoCache11111111111111111111111");
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
    let mut tick: i64 = 0;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                tick += 1;
                // Deterministic zig-zag around the seeded price.
                let offset = (tick % 20 - 10) * 1_000;
                let raw = RawPrice::new(64_123_456 + offset, Timestamp::now());
                cache_store.set_raw_price(&cache_address, 0, raw);
            }
            _ = shutdown_rx.recv() => {
                break;
            }
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT), then broadcast it.
///
/// # Panics
///
/// Panics if signal handlers cannot be installed: a process that cannot
/// respond to termination signals is worse than one that fails at startup.
#[allow(clippy::expect_used)]
async fn shutdown_signal(shutdown_tx: broadcast::Sender<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    let _ = shutdown_tx.send(());
}
