use dnscache_application::ports::StatsObserver;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// Stats observer that turns every successful lookup into a log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingStatsObserver;

impl StatsObserver for LoggingStatsObserver {
    fn on_lookup(&self, host: &str, elapsed: Duration, addresses: &[IpAddr]) {
        debug!(
            host = %host,
            latency_ms = elapsed.as_millis() as u64,
            addresses = ?addresses,
            "Lookup completed"
        );
    }
}
