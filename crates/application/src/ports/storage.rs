use async_trait::async_trait;
use dnscache_domain::{CacheEntry, DomainError};
use std::time::Duration;

/// Keyed persistence of cache entries, one per hostname.
///
/// Implementations must be safe for concurrent use from request paths and
/// from detached refresh tasks. `set` replaces the whole entry; `get` never
/// returns a partially written one.
#[async_trait]
pub trait CacheStorage: Send + Sync {
    /// Upsert. `ttl` is a retention hint (TTL plus stale window) for stores
    /// that expire keys on their own; the in-memory store ignores it.
    async fn set(&self, host: &str, entry: CacheEntry, ttl: Duration) -> Result<(), DomainError>;

    /// Returns [`DomainError::NotFound`] when the host has no entry.
    async fn get(&self, host: &str) -> Result<CacheEntry, DomainError>;

    /// Idempotent.
    async fn delete(&self, host: &str) -> Result<(), DomainError>;
}
