//! Application services.

mod price_poller;

pub use price_poller::PricePoller;
