pub mod storage;

pub use storage::MemoryStorage;
