pub mod address_selector;
pub mod cached_dialer;
pub mod dns_cache;

pub use address_selector::AddressSelector;
pub use cached_dialer::CachedDialer;
pub use dns_cache::DnsCache;
