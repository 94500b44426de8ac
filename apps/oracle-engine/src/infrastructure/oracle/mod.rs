//! Oracle adapters.
//!
//! Implementations of the `Oracle` / `OracleProvider` ports.

mod stub;

pub use stub::{STUB_PROVIDER_NAME, StubOracle, StubOracleProvider};
