//! dnscache application layer: ports and the cache/dial services
pub mod ports;
pub mod services;

pub use services::{AddressSelector, CachedDialer, DnsCache};
