//! Application layer - ports, execution context and services.

mod context;

/// Port definitions (oracle interface plus driven ports).
pub mod ports;

/// Services built on the ports (price polling).
pub mod services;

pub use context::Context;
