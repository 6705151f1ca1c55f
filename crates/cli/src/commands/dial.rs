use dnscache_application::CachedDialer;
use dnscache_domain::Network;
use dnscache_infrastructure::TokioConnector;
use std::time::Instant;
use tracing::info;

pub async fn run_dial(
    dialer: &CachedDialer<TokioConnector>,
    network: Network,
    address: &str,
) -> anyhow::Result<()> {
    let start = Instant::now();
    let connection = dialer.dial(network, address).await?;
    let elapsed = start.elapsed();

    let peer = connection.peer_addr()?;
    let local = connection.local_addr()?;
    info!(address = %address, peer = %peer, "Dial succeeded");
    println!(
        "{network} {address} -> {peer} (local {local}) in {:.3}ms",
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}
