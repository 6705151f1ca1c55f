pub mod dial;
pub mod resolve;

pub use dial::run_dial;
pub use resolve::run_resolve;
