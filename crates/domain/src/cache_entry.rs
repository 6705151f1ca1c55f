use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Derived state of a cached entry at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Served from cache, no I/O.
    Fresh,
    /// Served from cache while a background refresh runs.
    Stale,
    /// Caller must block on a new resolution.
    Expired,
}

impl Freshness {
    pub fn is_usable(&self) -> bool {
        !matches!(self, Self::Expired)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Stale => "stale",
            Self::Expired => "expired",
        }
    }
}

/// Snapshot of one successful resolution.
///
/// Entries are never mutated after creation: a refresh stores a brand new
/// entry, so a reader always sees a self-consistent address list and
/// timestamp. The address list is behind an `Arc` so cache hits are an
/// atomic increment instead of a `Vec` clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub addresses: Arc<Vec<IpAddr>>,

    /// Time of the resolution. `None` marks an entry that never expires.
    pub created_at: Option<SystemTime>,
}

impl CacheEntry {
    /// Entry stamped with the current time.
    pub fn new(addresses: Vec<IpAddr>) -> Self {
        Self::with_created_at(addresses, SystemTime::now())
    }

    pub fn with_created_at(addresses: Vec<IpAddr>, created_at: SystemTime) -> Self {
        Self {
            addresses: Arc::new(addresses),
            created_at: Some(created_at),
        }
    }

    /// Entry that is served forever (static host overrides).
    pub fn permanent(addresses: Vec<IpAddr>) -> Self {
        Self {
            addresses: Arc::new(addresses),
            created_at: None,
        }
    }

    pub fn from_shared(addresses: Arc<Vec<IpAddr>>, created_at: SystemTime) -> Self {
        Self {
            addresses,
            created_at: Some(created_at),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn is_permanent(&self) -> bool {
        self.created_at.is_none()
    }

    /// Elapsed time since the resolution, clamped to zero when the wall
    /// clock went backwards. `None` for permanent entries.
    pub fn age(&self, now: SystemTime) -> Option<Duration> {
        self.created_at
            .map(|created_at| now.duration_since(created_at).unwrap_or_default())
    }

    /// Classify the entry against `ttl` and the `stale` grace window.
    pub fn freshness(&self, now: SystemTime, ttl: Duration, stale: Duration) -> Freshness {
        if self.is_empty() {
            return Freshness::Expired;
        }

        let Some(age) = self.age(now) else {
            return Freshness::Fresh;
        };

        if age < ttl {
            return Freshness::Fresh;
        }

        if !stale.is_zero() && age < ttl.saturating_add(stale) {
            return Freshness::Stale;
        }

        Freshness::Expired
    }
}
