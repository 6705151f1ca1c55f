use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings of the default TCP/UDP connector used by the dial function
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DialerConfig {
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// TCP keepalive idle time, 0 leaves the OS default in place
    #[serde(default = "default_keepalive")]
    pub keepalive_secs: u64,
}

impl DialerConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn keepalive(&self) -> Option<Duration> {
        (self.keepalive_secs > 0).then(|| Duration::from_secs(self.keepalive_secs))
    }
}

impl Default for DialerConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout(),
            keepalive_secs: default_keepalive(),
        }
    }
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_keepalive() -> u64 {
    30
}
