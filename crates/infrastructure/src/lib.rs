//! dnscache infrastructure: storage, resolver, connector and runtime adapters
pub mod dns;
pub mod net;
pub mod runtime;

pub use dns::{DnsCacheBuilder, LoggingStatsObserver, MemoryStorage, SystemResolver};
pub use net::{Connection, TokioConnector};
pub use runtime::TokioSpawner;
