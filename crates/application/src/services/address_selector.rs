use dnscache_domain::{DomainError, NetworkFamily, SelectionPolicy};
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Picks one address out of a resolution result.
///
/// The round-robin counter belongs to the selector (one per cache instance)
/// and is shared by every hostname: interleaved lookups of different hosts
/// advance the same counter, so one host's addresses are not visited in
/// strict rotation. Build a dedicated cache per host when that matters.
#[derive(Debug)]
pub struct AddressSelector {
    policy: SelectionPolicy,
    counter: AtomicUsize,
}

impl AddressSelector {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            counter: AtomicUsize::new(0),
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Number of round-robin selections made so far.
    pub fn rotations(&self) -> usize {
        self.counter.load(Ordering::Relaxed)
    }

    /// Restrict `addresses` to `family`, then apply the policy.
    pub fn select(
        &self,
        host: &str,
        addresses: &[IpAddr],
        family: NetworkFamily,
    ) -> Result<IpAddr, DomainError> {
        let candidates = family.filter(addresses);
        self.pick(&candidates)
            .ok_or_else(|| DomainError::NotFound(host.to_string()))
    }

    /// Apply the policy to an already filtered list.
    #[inline]
    pub fn pick(&self, candidates: &[IpAddr]) -> Option<IpAddr> {
        if candidates.is_empty() {
            return None;
        }

        let index = match self.policy {
            SelectionPolicy::First => 0,
            SelectionPolicy::Random => fastrand::usize(..candidates.len()),
            SelectionPolicy::RoundRobin => {
                let value = self.counter.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
                value % candidates.len()
            }
        };

        Some(candidates[index])
    }
}

impl Default for AddressSelector {
    fn default() -> Self {
        Self::new(SelectionPolicy::default())
    }
}
