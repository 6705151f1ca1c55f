pub mod spawner;

pub use spawner::TokioSpawner;
