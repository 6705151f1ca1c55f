use futures::future::BoxFuture;

/// Executor for detached background work (stale refreshes).
///
/// The submitted future owns everything it needs; the spawner must not tie
/// its lifetime to the caller that triggered it.
pub trait TaskSpawner: Send + Sync {
    fn spawn(&self, task: BoxFuture<'static, ()>);
}
