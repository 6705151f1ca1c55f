use std::net::IpAddr;
use std::time::Duration;

/// Receives one notification per successful resolution.
///
/// Called inline on the lookup path, so implementations must be cheap and
/// must not block (push to a channel, bump a counter).
pub trait StatsObserver: Send + Sync {
    fn on_lookup(&self, host: &str, elapsed: Duration, addresses: &[IpAddr]);
}

impl<F> StatsObserver for F
where
    F: Fn(&str, Duration, &[IpAddr]) + Send + Sync,
{
    fn on_lookup(&self, host: &str, elapsed: Duration, addresses: &[IpAddr]) {
        self(host, elapsed, addresses)
    }
}
