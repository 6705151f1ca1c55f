pub mod connector;
pub mod dns_resolver;
pub mod stats_observer;
pub mod storage;
pub mod task_spawner;

pub use connector::Connector;
pub use dns_resolver::AddressResolver;
pub use stats_observer::StatsObserver;
pub use storage::CacheStorage;
pub use task_spawner::TaskSpawner;
