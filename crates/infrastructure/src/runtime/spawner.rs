use dnscache_application::ports::TaskSpawner;
use futures::future::BoxFuture;
use tokio::runtime::Handle;
use tracing::warn;

/// Runs background refreshes as detached tokio tasks.
///
/// Without an explicit handle the runtime of the calling task is used.
#[derive(Debug, Clone, Default)]
pub struct TokioSpawner {
    handle: Option<Handle>,
}

impl TokioSpawner {
    pub fn new() -> Self {
        Self { handle: None }
    }

    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle: Some(handle),
        }
    }
}

impl TaskSpawner for TokioSpawner {
    fn spawn(&self, task: BoxFuture<'static, ()>) {
        let handle = match self.handle {
            Some(ref handle) => handle.clone(),
            None => match Handle::try_current() {
                Ok(handle) => handle,
                Err(_) => {
                    warn!("No Tokio runtime available, skipping background refresh");
                    return;
                }
            },
        };

        handle.spawn(task);
    }
}
