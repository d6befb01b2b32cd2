use tokio::runtime::{Handle, TryCurrentError};

use crate::context::{ExecutionContext, Job};

/// Worker context backed by a tokio runtime's blocking pool.
///
/// Jobs may block, so this is where chains and bridges run.
#[derive(Debug, Clone)]
pub struct BlockingContext {
    handle: Handle,
}

impl BlockingContext {
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    pub fn try_current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }
}

impl ExecutionContext for BlockingContext {
    fn execute(&self, job: Job) {
        tracing::trace!("Dispatching job to blocking pool");

        drop(self.handle.spawn_blocking(job));
    }
}
