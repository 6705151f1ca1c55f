pub mod cache;
pub mod resolver;
pub mod stats;

pub use cache::MemoryStorage;
pub use resolver::{DnsCacheBuilder, SystemResolver};
pub use stats::LoggingStatsObserver;
