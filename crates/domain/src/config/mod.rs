//! Configuration module for dnscache
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `cache`: TTL, stale window, selection policy and lookup timeout
//! - `dialer`: Connect timeout and keepalive of the default connector
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod dialer;
pub mod errors;
pub mod logging;
pub mod root;

pub use cache::{CacheConfig, CacheOptions, DEFAULT_LOOKUP_TIMEOUT};
pub use dialer::DialerConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
