use async_trait::async_trait;
use dashmap::DashMap;
use dnscache_application::ports::CacheStorage;
use dnscache_domain::{CacheEntry, DomainError};
use rustc_hash::FxBuildHasher;
use std::time::Duration;

/// Default in-process storage.
///
/// Sharded concurrent map, one whole-entry value per hostname. Nothing is
/// evicted: expired entries stay until overwritten or deleted.
pub struct MemoryStorage {
    entries: DashMap<String, CacheEntry, FxBuildHasher>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStorage for MemoryStorage {
    async fn set(&self, host: &str, entry: CacheEntry, _ttl: Duration) -> Result<(), DomainError> {
        self.entries.insert(host.to_string(), entry);
        Ok(())
    }

    async fn get(&self, host: &str) -> Result<CacheEntry, DomainError> {
        self.entries
            .get(host)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DomainError::NotFound(host.to_string()))
    }

    async fn delete(&self, host: &str) -> Result<(), DomainError> {
        self.entries.remove(host);
        Ok(())
    }
}
