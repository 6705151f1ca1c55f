use async_trait::async_trait;
use dnscache_domain::NetworkFamily;
use std::io;
use std::net::IpAddr;
use std::time::Instant;

/// Name-resolution capability behind the cache.
///
/// Implementations perform the actual lookup (system resolver, a DNS client,
/// a static table) and should stop working once `deadline` has passed. The
/// cache wraps every call in its own timeout as well, so a resolver that
/// ignores the deadline still cannot block a caller forever.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn resolve(
        &self,
        host: &str,
        family: NetworkFamily,
        deadline: Instant,
    ) -> io::Result<Vec<IpAddr>>;
}
