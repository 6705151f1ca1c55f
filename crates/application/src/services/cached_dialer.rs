use super::dns_cache::DnsCache;
use crate::ports::Connector;
use dnscache_domain::{DomainError, Network};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Dial function backed by a [`DnsCache`].
///
/// Splits `host:port`, resolves the host through the cache, picks one
/// address by policy and hands `ip:port` to the connector. Dropping the
/// returned future cancels both resolution and connect.
pub struct CachedDialer<C: Connector> {
    cache: DnsCache,
    connector: Arc<C>,
    fallback_on_failure: bool,
}

impl<C: Connector> CachedDialer<C> {
    pub fn new(cache: DnsCache, connector: Arc<C>, fallback_on_failure: bool) -> Self {
        Self {
            cache,
            connector,
            fallback_on_failure,
        }
    }

    pub fn cache(&self) -> &DnsCache {
        &self.cache
    }

    pub fn fallback_on_failure(&self) -> bool {
        self.fallback_on_failure
    }

    pub async fn dial(&self, network: Network, address: &str) -> Result<C::Connection, DomainError> {
        let Some(sep) = address.rfind(':') else {
            return Err(DomainError::InvalidAddress(address.to_string()));
        };
        let (host, port) = address.split_at(sep);

        let target = match self.cache.resolve_ip(network, host).await {
            Ok(ip) => join_host_port(ip, port),
            Err(e) if self.fallback_on_failure => {
                debug!(
                    address = %address,
                    error = %e,
                    "Resolution failed, dialing unresolved address"
                );
                address.to_string()
            }
            Err(e) => return Err(e),
        };

        self.connector
            .connect(network, &target)
            .await
            .map_err(|source| DomainError::ConnectFailed {
                address: target,
                source,
            })
    }

    /// [`dial`](Self::dial) bounded by a caller deadline covering both
    /// resolution and connect.
    pub async fn dial_timeout(
        &self,
        network: Network,
        address: &str,
        timeout: Duration,
    ) -> Result<C::Connection, DomainError> {
        tokio::time::timeout(timeout, self.dial(network, address))
            .await
            .unwrap_or_else(|_| {
                Err(DomainError::DialTimeout {
                    address: address.to_string(),
                    timeout,
                })
            })
    }
}

impl<C: Connector> Clone for CachedDialer<C> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            connector: Arc::clone(&self.connector),
            fallback_on_failure: self.fallback_on_failure,
        }
    }
}

/// `port` still carries its leading colon.
fn join_host_port(ip: IpAddr, port: &str) -> String {
    match ip {
        IpAddr::V4(v4) => format!("{v4}{port}"),
        IpAddr::V6(v6) => format!("[{v6}]{port}"),
    }
}
