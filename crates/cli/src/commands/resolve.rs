use dnscache_application::DnsCache;
use dnscache_domain::Network;
use std::time::{Duration, Instant};
use tracing::warn;

/// Resolve each host `repeat` times through the cache and print what was
/// served, so fresh hits and stale refreshes show up in the latency column.
pub async fn run_resolve(
    cache: &DnsCache,
    hosts: &[String],
    repeat: u32,
    interval: Duration,
) -> anyhow::Result<()> {
    let mut failures = 0usize;

    for round in 1..=repeat.max(1) {
        for host in hosts {
            let start = Instant::now();
            match cache.lookup_with_cache(host).await {
                Ok(addresses) => {
                    let elapsed = start.elapsed();
                    let chosen = cache
                        .select_address(host, &addresses, Network::Tcp)
                        .map(|ip| ip.to_string())
                        .unwrap_or_else(|_| "-".to_string());
                    let list: Vec<String> = addresses.iter().map(|ip| ip.to_string()).collect();
                    println!(
                        "[{round}] {host} -> {chosen} ({}) in {:.3}ms",
                        list.join(", "),
                        elapsed.as_secs_f64() * 1000.0
                    );
                }
                Err(e) => {
                    failures += 1;
                    warn!(host = %host, error = %e, "Lookup failed");
                    println!("[{round}] {host} -> error: {e}");
                }
            }
        }

        if round < repeat {
            tokio::time::sleep(interval).await;
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} lookup(s) failed");
    }
    Ok(())
}
