// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::items_after_statements,
        clippy::default_trait_access
    )
)]

//! Oracle Engine - Rust Core Library
//!
//! Price oracle adapters for markets whose prices are published into a
//! shared on-chain cache account. A group registry maps each spot or
//! perpetual market to a slot in its group's cache; the stub oracle reads
//! that slot, rescales the raw value by the market's base-asset decimals,
//! and exposes it through a common `Oracle` interface.
//!
//! # Architecture (Hexagonal)
//!
//! - **Domain**: value objects with no I/O
//!   - addresses, symbols, timestamps, tokens
//!   - `Market` / `MarketKind` / `MarketRef`, `Group`
//!   - `PriceCache` snapshots and `PriceObservation` values
//!
//! - **Application**: ports and services
//!   - `ports`: `Oracle` / `OracleProvider` (offered) and
//!     `CacheStorePort` / `MarketLoaderPort` / `MarketCatalogPort` /
//!     `ErrorSinkPort` (required)
//!   - `Context`: shared bundle of the required ports
//!   - `services`: `PricePoller`, a cancellable fixed-cadence poll loop
//!
//! - **Infrastructure**: adapters
//!   - `oracle`: `StubOracle` / `StubOracleProvider`
//!   - `cache_store`, `markets`: in-memory adapters for tests and local
//!     runs
//!   - `error_sink`: tracing-backed and collecting sinks

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Layers
// =============================================================================

/// Domain layer - value objects with no external dependencies.
pub mod domain;

/// Application layer - ports, context and services.
pub mod application;

/// Infrastructure layer - adapters implementing the ports.
pub mod infrastructure;

/// Configuration loading.
pub mod config;

/// Tracing setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::Context;
pub use application::ports::{Oracle, OracleError, OracleProvider};
pub use application::services::PricePoller;
pub use domain::{
    Address, Group, Market, MarketKind, MarketRef, OracleFeature, OracleSource, PriceCache,
    PriceObservation, RawPrice, STUB_CONFIDENCE, Symbol, Timestamp, Token,
};
pub use infrastructure::oracle::{StubOracle, StubOracleProvider};
