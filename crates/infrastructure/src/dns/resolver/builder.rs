use super::super::cache::MemoryStorage;
use super::system::SystemResolver;
use crate::runtime::TokioSpawner;
use dnscache_application::ports::{AddressResolver, CacheStorage, StatsObserver, TaskSpawner};
use dnscache_application::DnsCache;
use dnscache_domain::{
    CacheConfig, CacheOptions, NetworkFamily, SelectionPolicy, DEFAULT_LOOKUP_TIMEOUT,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Assembles a [`DnsCache`], filling every option left unset with the
/// in-process default.
pub struct DnsCacheBuilder {
    options: CacheOptions,
    storage: Option<Arc<dyn CacheStorage>>,
    resolver: Option<Arc<dyn AddressResolver>>,
    spawner: Option<Arc<dyn TaskSpawner>>,
    stats: Option<Arc<dyn StatsObserver>>,
}

impl DnsCacheBuilder {
    pub fn new(ttl: Duration) -> Self {
        Self {
            options: CacheOptions::new(ttl),
            storage: None,
            resolver: None,
            spawner: None,
            stats: None,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        let mut builder = Self::new(Duration::ZERO);
        builder.options = config.options();
        if builder.options.timeout.is_zero() {
            builder.options.timeout = DEFAULT_LOOKUP_TIMEOUT;
        }
        builder
    }

    pub fn with_storage(mut self, storage: Arc<dyn CacheStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.options.policy = policy;
        self
    }

    pub fn with_stale(mut self, stale: Duration) -> Self {
        self.options.stale = stale;
        self
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn AddressResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_network(mut self, network: NetworkFamily) -> Self {
        self.options.network = network;
        self
    }

    /// A zero timeout keeps the default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if !timeout.is_zero() {
            self.options.timeout = timeout;
        }
        self
    }

    pub fn with_stats_observer(mut self, stats: Arc<dyn StatsObserver>) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_spawner(mut self, spawner: Arc<dyn TaskSpawner>) -> Self {
        self.spawner = Some(spawner);
        self
    }

    pub fn options(&self) -> &CacheOptions {
        &self.options
    }

    pub fn build(self) -> DnsCache {
        info!(
            ttl_secs = self.options.ttl.as_secs(),
            stale_secs = self.options.stale.as_secs(),
            policy = %self.options.policy,
            network = %self.options.network,
            timeout_ms = self.options.timeout.as_millis() as u64,
            custom_storage = self.storage.is_some(),
            custom_resolver = self.resolver.is_some(),
            "Building DNS cache"
        );

        let storage = self
            .storage
            .unwrap_or_else(|| Arc::new(MemoryStorage::new()));
        let resolver = self
            .resolver
            .unwrap_or_else(|| Arc::new(SystemResolver::new()));
        let spawner = self
            .spawner
            .unwrap_or_else(|| Arc::new(TokioSpawner::new()));

        DnsCache::new(self.options, storage, resolver, spawner, self.stats)
    }
}
