//! Infrastructure layer - adapters implementing the application ports.

/// Cache store adapters.
pub mod cache_store;

/// Error sink adapters.
pub mod error_sink;

/// Market loader and catalog adapters.
pub mod markets;

/// Oracle adapters.
pub mod oracle;
