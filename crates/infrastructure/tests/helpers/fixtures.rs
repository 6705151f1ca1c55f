#![allow(dead_code)]
use async_trait::async_trait;
use dnscache_application::ports::AddressResolver;
use dnscache_domain::NetworkFamily;
use std::collections::HashMap;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::{TcpListener, UdpSocket};

/// Resolver answering from a fixed table, counting calls
#[derive(Clone, Default)]
pub struct StaticResolver {
    table: Arc<HashMap<String, Vec<IpAddr>>>,
    calls: Arc<AtomicUsize>,
}

impl StaticResolver {
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        let table = entries
            .iter()
            .map(|(host, addrs)| {
                (
                    host.to_string(),
                    addrs.iter().map(|a| a.parse().unwrap()).collect(),
                )
            })
            .collect();
        Self {
            table: Arc::new(table),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressResolver for StaticResolver {
    async fn resolve(
        &self,
        host: &str,
        family: NetworkFamily,
        _deadline: Instant,
    ) -> io::Result<Vec<IpAddr>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.table.get(host) {
            Some(addrs) => Ok(family.filter(addrs)),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "unknown host")),
        }
    }
}

/// Loopback TCP listener that accepts connections until dropped
pub async fn tcp_listener() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                drop(stream);
            });
        }
    });
    (addr, handle)
}

/// Loopback UDP socket that echoes one datagram
pub async fn udp_echo() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let mut buf = [0u8; 512];
        if let Ok((n, peer)) = socket.recv_from(&mut buf).await {
            let _ = socket.send_to(&buf[..n], peer).await;
        }
    });
    (addr, handle)
}
