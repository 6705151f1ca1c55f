use async_trait::async_trait;
use dnscache_application::ports::AddressResolver;
use dnscache_domain::NetworkFamily;
use std::io;
use std::net::IpAddr;
use std::time::Instant;
use tracing::debug;

/// Resolver backed by the operating system (`getaddrinfo` through tokio).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AddressResolver for SystemResolver {
    async fn resolve(
        &self,
        host: &str,
        family: NetworkFamily,
        deadline: Instant,
    ) -> io::Result<Vec<IpAddr>> {
        let lookup = tokio::net::lookup_host((host, 0));
        let resolved = tokio::time::timeout_at(tokio::time::Instant::from_std(deadline), lookup)
            .await
            .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "system resolver timed out"))??;

        let mut addresses: Vec<IpAddr> = Vec::new();
        for socket_addr in resolved {
            if let Some(ip) = family.accept(socket_addr.ip()) {
                if !addresses.contains(&ip) {
                    addresses.push(ip);
                }
            }
        }

        debug!(
            host = %host,
            family = %family,
            count = addresses.len(),
            "System lookup completed"
        );

        Ok(addresses)
    }
}
