use crate::{NetworkFamily, SelectionPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Deadline applied to every real resolution when none is configured.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolution cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Seconds an entry is served without any resolution
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,

    /// Extra seconds an expired entry is still served while it is refreshed
    /// in the background. 0 disables stale-while-revalidate.
    #[serde(default)]
    pub stale_secs: u64,

    #[serde(default)]
    pub policy: SelectionPolicy,

    #[serde(default)]
    pub network: NetworkFamily,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Dial the unresolved target when resolution fails
    #[serde(default)]
    pub fallback_on_failure: bool,
}

impl CacheConfig {
    pub fn options(&self) -> CacheOptions {
        CacheOptions {
            ttl: Duration::from_secs(self.ttl_secs),
            stale: Duration::from_secs(self.stale_secs),
            policy: self.policy,
            network: self.network,
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl(),
            stale_secs: 0,
            policy: SelectionPolicy::default(),
            network: NetworkFamily::default(),
            timeout_ms: default_timeout_ms(),
            fallback_on_failure: false,
        }
    }
}

fn default_ttl() -> u64 {
    300
}

fn default_timeout_ms() -> u64 {
    DEFAULT_LOOKUP_TIMEOUT.as_millis() as u64
}

/// Runtime view of [`CacheConfig`], read-only once a cache is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    pub ttl: Duration,
    pub stale: Duration,
    pub policy: SelectionPolicy,
    pub network: NetworkFamily,
    pub timeout: Duration,
}

impl CacheOptions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            stale: Duration::ZERO,
            policy: SelectionPolicy::default(),
            network: NetworkFamily::default(),
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    /// TTL hint handed to storage: how long an entry can still be useful.
    pub fn retention(&self) -> Duration {
        self.ttl.saturating_add(self.stale)
    }
}
