use super::address_selector::AddressSelector;
use super::cached_dialer::CachedDialer;
use crate::ports::{AddressResolver, CacheStorage, Connector, StatsObserver, TaskSpawner};
use dnscache_domain::{CacheEntry, CacheOptions, DomainError, Freshness, Network};
use std::io;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Instant, SystemTime};
use tracing::{debug, trace, warn};

/// Resolution cache with stale-while-revalidate refresh.
///
/// Cloning is cheap: every clone shares storage, collaborators and the
/// round-robin counter.
///
/// Per hostname the state is derived on each call from the entry age:
/// - **fresh** (`age < ttl`): served from storage, no I/O
/// - **stale** (`age < ttl + stale`): served from storage, a detached
///   refresh is submitted to the [`TaskSpawner`]
/// - **expired / absent**: the caller waits for a new resolution
///
/// Concurrent stale hits may each submit a refresh. They are not coalesced:
/// every refresh writes a complete entry, so duplicates only cost work and
/// the last write wins.
#[derive(Clone)]
pub struct DnsCache {
    inner: Arc<Inner>,
}

struct Inner {
    options: CacheOptions,
    storage: Arc<dyn CacheStorage>,
    resolver: Arc<dyn AddressResolver>,
    spawner: Arc<dyn TaskSpawner>,
    stats: Option<Arc<dyn StatsObserver>>,
    selector: AddressSelector,
}

impl DnsCache {
    pub fn new(
        options: CacheOptions,
        storage: Arc<dyn CacheStorage>,
        resolver: Arc<dyn AddressResolver>,
        spawner: Arc<dyn TaskSpawner>,
        stats: Option<Arc<dyn StatsObserver>>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                selector: AddressSelector::new(options.policy),
                options,
                storage,
                resolver,
                spawner,
                stats,
            }),
        }
    }

    pub fn options(&self) -> &CacheOptions {
        &self.inner.options
    }

    pub fn selector(&self) -> &AddressSelector {
        &self.inner.selector
    }

    /// Resolve `host` without consulting the cache.
    ///
    /// Bounded by the configured timeout. On success the stats observer is
    /// notified before returning.
    pub async fn lookup(&self, host: &str) -> Result<Arc<Vec<IpAddr>>, DomainError> {
        let options = &self.inner.options;
        let start = Instant::now();
        let deadline = start + options.timeout;

        let resolved = tokio::time::timeout(
            options.timeout,
            self.inner.resolver.resolve(host, options.network, deadline),
        )
        .await
        .unwrap_or_else(|_| {
            Err(io::Error::new(
                io::ErrorKind::TimedOut,
                format!("no answer within {:?}", options.timeout),
            ))
        })
        .map_err(|source| DomainError::ResolutionFailed {
            host: host.to_string(),
            source,
        })?;

        if resolved.is_empty() {
            return Err(DomainError::NotFound(host.to_string()));
        }

        if let Some(ref stats) = self.inner.stats {
            stats.on_lookup(host, start.elapsed(), &resolved);
        }

        Ok(Arc::new(resolved))
    }

    /// Resolve `host`, serving from storage whenever the entry allows it.
    pub async fn lookup_with_cache(&self, host: &str) -> Result<Arc<Vec<IpAddr>>, DomainError> {
        match self.inner.storage.get(host).await {
            Ok(entry) => {
                let options = &self.inner.options;
                match entry.freshness(SystemTime::now(), options.ttl, options.stale) {
                    Freshness::Fresh => {
                        trace!(host = %host, "Cache HIT");
                        return Ok(entry.addresses);
                    }
                    Freshness::Stale => {
                        debug!(host = %host, "Cache HIT (stale), refreshing in background");
                        self.spawn_refresh(host);
                        return Ok(entry.addresses);
                    }
                    Freshness::Expired => {
                        debug!(host = %host, "Cache entry expired");
                    }
                }
            }
            Err(DomainError::NotFound(_)) => {
                debug!(host = %host, "Cache MISS");
            }
            Err(e) => {
                warn!(host = %host, error = %e, "Cache read failed, resolving directly");
            }
        }

        self.lookup_and_update(host).await
    }

    /// Store an entry for `host`, replacing any previous one.
    pub async fn set(&self, host: &str, entry: CacheEntry) -> Result<(), DomainError> {
        self.inner
            .storage
            .set(host, entry, self.inner.options.retention())
            .await
    }

    pub async fn get(&self, host: &str) -> Result<CacheEntry, DomainError> {
        self.inner.storage.get(host).await
    }

    pub async fn delete(&self, host: &str) -> Result<(), DomainError> {
        self.inner.storage.delete(host).await
    }

    /// Apply the selection policy restricted to `network`'s address family.
    pub fn select_address(
        &self,
        host: &str,
        addresses: &[IpAddr],
        network: Network,
    ) -> Result<IpAddr, DomainError> {
        self.inner.selector.select(host, addresses, network.family())
    }

    /// Turn the host part of a dial target into one IP address.
    ///
    /// Literal addresses (optionally bracketed) are returned as-is without
    /// touching the cache.
    pub async fn resolve_ip(&self, network: Network, host: &str) -> Result<IpAddr, DomainError> {
        let bare = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);

        if let Ok(ip) = bare.parse::<IpAddr>() {
            return Ok(ip);
        }

        let addresses = self.lookup_with_cache(bare).await?;
        self.select_address(bare, &addresses, network)
    }

    /// Connect function that routes host resolution through this cache.
    ///
    /// With `fallback_on_failure` a resolution error dials the original,
    /// unresolved target instead of failing.
    pub fn dial_function<C: Connector>(
        &self,
        connector: Arc<C>,
        fallback_on_failure: bool,
    ) -> CachedDialer<C> {
        CachedDialer::new(self.clone(), connector, fallback_on_failure)
    }

    async fn lookup_and_update(&self, host: &str) -> Result<Arc<Vec<IpAddr>>, DomainError> {
        let addresses = self.lookup(host).await?;
        let entry = CacheEntry::from_shared(Arc::clone(&addresses), SystemTime::now());
        self.set(host, entry).await?;
        Ok(addresses)
    }

    fn spawn_refresh(&self, host: &str) {
        let cache = self.clone();
        let host = host.to_string();

        self.inner.spawner.spawn(Box::pin(async move {
            match cache.lookup_and_update(&host).await {
                Ok(addresses) => {
                    debug!(host = %host, count = addresses.len(), "Background refresh completed");
                }
                Err(e) => {
                    warn!(host = %host, error = %e, "Background refresh failed, keeping stale entry");
                }
            }
        }));
    }
}

impl std::fmt::Debug for DnsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsCache")
            .field("options", &self.inner.options)
            .field("stats", &self.inner.stats.is_some())
            .finish()
    }
}
