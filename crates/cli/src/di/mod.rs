use dnscache_application::{CachedDialer, DnsCache};
use dnscache_domain::Config;
use dnscache_infrastructure::{DnsCacheBuilder, LoggingStatsObserver, TokioConnector};
use std::sync::Arc;

/// Everything the commands need, wired from configuration
pub struct CacheServices {
    pub cache: DnsCache,
    pub dialer: CachedDialer<TokioConnector>,
}

impl CacheServices {
    pub fn new(config: &Config) -> Self {
        let cache = DnsCacheBuilder::from_config(&config.cache)
            .with_stats_observer(Arc::new(LoggingStatsObserver))
            .build();

        let connector = Arc::new(TokioConnector::from_config(&config.dialer));
        let dialer = cache.dial_function(connector, config.cache.fallback_on_failure);

        Self { cache, dialer }
    }
}
