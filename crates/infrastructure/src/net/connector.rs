use async_trait::async_trait;
use dnscache_application::ports::Connector;
use dnscache_domain::{DialerConfig, Network};
use socket2::{SockRef, TcpKeepalive};
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::{lookup_host, TcpStream, UdpSocket};
use tokio::time::timeout;
use tracing::debug;

/// Established connection returned by [`TokioConnector`].
#[derive(Debug)]
pub enum Connection {
    Tcp(TcpStream),
    Udp(UdpSocket),
}

impl Connection {
    pub fn peer_addr(&self) -> io::Result<SocketAddr> {
        match self {
            Self::Tcp(stream) => stream.peer_addr(),
            Self::Udp(socket) => socket.peer_addr(),
        }
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        match self {
            Self::Tcp(stream) => stream.local_addr(),
            Self::Udp(socket) => socket.local_addr(),
        }
    }

    pub fn into_tcp(self) -> Option<TcpStream> {
        match self {
            Self::Tcp(stream) => Some(stream),
            Self::Udp(_) => None,
        }
    }

    pub fn into_udp(self) -> Option<UdpSocket> {
        match self {
            Self::Udp(socket) => Some(socket),
            Self::Tcp(_) => None,
        }
    }
}

/// Default connector: TCP with per-attempt timeout and keepalive, or a
/// connected UDP socket.
///
/// The target is usually an `ip:port` produced by the cache, but a
/// `host:port` still works (fallback dialing); candidates are then tried
/// in resolver order.
#[derive(Debug, Clone)]
pub struct TokioConnector {
    connect_timeout: Duration,
    keepalive: Option<Duration>,
}

impl TokioConnector {
    pub fn new() -> Self {
        Self::from_config(&DialerConfig::default())
    }

    pub fn from_config(config: &DialerConfig) -> Self {
        Self {
            connect_timeout: config.connect_timeout(),
            keepalive: config.keepalive(),
        }
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_keepalive(mut self, keepalive: Option<Duration>) -> Self {
        self.keepalive = keepalive;
        self
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    async fn targets(network: Network, address: &str) -> io::Result<Vec<SocketAddr>> {
        let family = network.family();
        let targets: Vec<SocketAddr> = lookup_host(address)
            .await?
            .filter_map(|sa| family.accept(sa.ip()).map(|ip| SocketAddr::new(ip, sa.port())))
            .collect();

        if targets.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no {family} address to dial for {address}"),
            ));
        }
        Ok(targets)
    }

    async fn connect_stream(&self, targets: &[SocketAddr]) -> io::Result<TcpStream> {
        let mut last_err: Option<io::Error> = None;
        for &target in targets {
            match timeout(self.connect_timeout, TcpStream::connect(target)).await {
                Ok(Ok(stream)) => {
                    self.apply_keepalive(&stream);
                    return Ok(stream);
                }
                Ok(Err(e)) => {
                    last_err = Some(io::Error::new(
                        e.kind(),
                        format!("connect {target} failed: {e}"),
                    ));
                }
                Err(_) => {
                    last_err = Some(io::Error::new(
                        io::ErrorKind::TimedOut,
                        format!("connect {target} timed out"),
                    ));
                }
            }
        }
        Err(last_err.unwrap_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no address to dial")))
    }

    async fn connect_datagram(&self, targets: &[SocketAddr]) -> io::Result<UdpSocket> {
        let mut last_err: Option<io::Error> = None;
        for &target in targets {
            let local: SocketAddr = if target.is_ipv4() {
                (Ipv4Addr::UNSPECIFIED, 0).into()
            } else {
                (Ipv6Addr::UNSPECIFIED, 0).into()
            };

            let socket = match UdpSocket::bind(local).await {
                Ok(socket) => socket,
                Err(e) => {
                    last_err = Some(e);
                    continue;
                }
            };
            match socket.connect(target).await {
                Ok(()) => return Ok(socket),
                Err(e) => {
                    last_err = Some(io::Error::new(
                        e.kind(),
                        format!("connect {target} failed: {e}"),
                    ));
                }
            }
        }
        Err(last_err.unwrap_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no address to dial")))
    }

    fn apply_keepalive(&self, stream: &TcpStream) {
        let Some(idle) = self.keepalive else {
            return;
        };
        let keepalive = TcpKeepalive::new().with_time(idle);
        if let Err(e) = SockRef::from(stream).set_tcp_keepalive(&keepalive) {
            debug!(error = %e, "Failed to enable TCP keepalive");
        }
    }
}

impl Default for TokioConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connector for TokioConnector {
    type Connection = Connection;

    async fn connect(&self, network: Network, address: &str) -> io::Result<Connection> {
        let targets = Self::targets(network, address).await?;

        if network.is_stream() {
            self.connect_stream(&targets).await.map(Connection::Tcp)
        } else {
            self.connect_datagram(&targets).await.map(Connection::Udp)
        }
    }
}
