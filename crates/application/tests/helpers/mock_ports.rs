#![allow(dead_code)]

use async_trait::async_trait;
use dnscache_application::ports::{
    AddressResolver, CacheStorage, Connector, StatsObserver, TaskSpawner,
};
use dnscache_application::DnsCache;
use dnscache_domain::{CacheEntry, CacheOptions, DomainError, Network, NetworkFamily};
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::io;
use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

pub fn ips(raw: &[&str]) -> Vec<IpAddr> {
    raw.iter().map(|s| s.parse().unwrap()).collect()
}

// ============================================================================
// Mock AddressResolver
// ============================================================================

#[derive(Clone, Default)]
pub struct MockResolver {
    responses: Arc<RwLock<HashMap<String, Vec<IpAddr>>>>,
    should_fail: Arc<AtomicBool>,
    delay: Arc<RwLock<Option<Duration>>>,
    calls: Arc<AtomicUsize>,
    families: Arc<Mutex<Vec<NetworkFamily>>>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_response(host: &str, addresses: &[&str]) -> Self {
        let resolver = Self::new();
        resolver.set_response(host, addresses).await;
        resolver
    }

    pub async fn set_response(&self, host: &str, addresses: &[&str]) {
        self.responses
            .write()
            .await
            .insert(host.to_string(), ips(addresses));
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn families(&self) -> Vec<NetworkFamily> {
        self.families.lock().unwrap().clone()
    }

    /// Poll until the resolver has been called `expected` times.
    pub async fn wait_for_calls(&self, expected: usize, within: Duration) -> bool {
        let start = Instant::now();
        while start.elapsed() < within {
            if self.calls() >= expected {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        self.calls() >= expected
    }
}

#[async_trait]
impl AddressResolver for MockResolver {
    async fn resolve(
        &self,
        host: &str,
        family: NetworkFamily,
        _deadline: Instant,
    ) -> io::Result<Vec<IpAddr>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.families.lock().unwrap().push(family);

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::Other, "mock resolver failed"));
        }

        Ok(self
            .responses
            .read()
            .await
            .get(host)
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// Mock CacheStorage
// ============================================================================

#[derive(Clone, Default)]
pub struct MockStorage {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
    last_ttl: Arc<Mutex<Option<Duration>>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn last_ttl(&self) -> Option<Duration> {
        *self.last_ttl.lock().unwrap()
    }
}

#[async_trait]
impl CacheStorage for MockStorage {
    async fn set(&self, host: &str, entry: CacheEntry, ttl: Duration) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::StorageError("mock write failure".to_string()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        *self.last_ttl.lock().unwrap() = Some(ttl);
        self.entries.write().await.insert(host.to_string(), entry);
        Ok(())
    }

    async fn get(&self, host: &str) -> Result<CacheEntry, DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::StorageError("mock read failure".to_string()));
        }
        self.entries
            .read()
            .await
            .get(host)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(host.to_string()))
    }

    async fn delete(&self, host: &str) -> Result<(), DomainError> {
        self.entries.write().await.remove(host);
        Ok(())
    }
}

// ============================================================================
// Mock TaskSpawner
// ============================================================================

#[derive(Clone, Default)]
pub struct MockSpawner {
    spawned: Arc<AtomicUsize>,
}

impl MockSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawned(&self) -> usize {
        self.spawned.load(Ordering::SeqCst)
    }
}

impl TaskSpawner for MockSpawner {
    fn spawn(&self, task: BoxFuture<'static, ()>) {
        self.spawned.fetch_add(1, Ordering::SeqCst);
        tokio::spawn(task);
    }
}

// ============================================================================
// Recording Connector
// ============================================================================

#[derive(Clone, Default)]
pub struct RecordingConnector {
    dialed: Arc<Mutex<Vec<(Network, String)>>>,
    should_fail: Arc<AtomicBool>,
}

impl RecordingConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn dialed(&self) -> Vec<(Network, String)> {
        self.dialed.lock().unwrap().clone()
    }

    pub fn last_address(&self) -> Option<String> {
        self.dialed.lock().unwrap().last().map(|(_, a)| a.clone())
    }
}

#[async_trait]
impl Connector for RecordingConnector {
    type Connection = String;

    async fn connect(&self, network: Network, address: &str) -> io::Result<String> {
        self.dialed
            .lock()
            .unwrap()
            .push((network, address.to_string()));

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "mock connection refused",
            ));
        }
        Ok(address.to_string())
    }
}

// ============================================================================
// Stats recorder
// ============================================================================

#[derive(Clone, Default)]
pub struct StatsRecorder {
    events: Arc<Mutex<Vec<(String, Duration, Vec<IpAddr>)>>>,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, Duration, Vec<IpAddr>)> {
        self.events.lock().unwrap().clone()
    }
}

impl StatsObserver for StatsRecorder {
    fn on_lookup(&self, host: &str, elapsed: Duration, addresses: &[IpAddr]) {
        self.events
            .lock()
            .unwrap()
            .push((host.to_string(), elapsed, addresses.to_vec()));
    }
}

// ============================================================================
// Harness
// ============================================================================

pub struct Harness {
    pub cache: DnsCache,
    pub resolver: MockResolver,
    pub storage: MockStorage,
    pub spawner: MockSpawner,
    pub stats: StatsRecorder,
}

impl Harness {
    pub fn new(options: CacheOptions, resolver: MockResolver) -> Self {
        let storage = MockStorage::new();
        let spawner = MockSpawner::new();
        let stats = StatsRecorder::new();
        let cache = DnsCache::new(
            options,
            Arc::new(storage.clone()),
            Arc::new(resolver.clone()),
            Arc::new(spawner.clone()),
            Some(Arc::new(stats.clone())),
        );
        Self {
            cache,
            resolver,
            storage,
            spawner,
            stats,
        }
    }
}
