pub mod builder;
pub mod system;

pub use builder::DnsCacheBuilder;
pub use system::SystemResolver;
