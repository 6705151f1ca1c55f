use async_trait::async_trait;
use dnscache_domain::Network;
use std::io;

/// Low-level dial primitive used once an address has been chosen.
#[async_trait]
pub trait Connector: Send + Sync {
    type Connection: Send;

    async fn connect(&self, network: Network, address: &str) -> io::Result<Self::Connection>;
}
