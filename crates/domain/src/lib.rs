//! dnscache domain layer
pub mod cache_entry;
pub mod config;
pub mod errors;
pub mod network;
pub mod policy;

pub use cache_entry::{CacheEntry, Freshness};
pub use config::{
    CacheConfig, CacheOptions, CliOverrides, Config, ConfigError, DialerConfig, LoggingConfig,
    DEFAULT_LOOKUP_TIMEOUT,
};
pub use errors::DomainError;
pub use network::{Network, NetworkFamily};
pub use policy::SelectionPolicy;
