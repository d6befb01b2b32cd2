use tokio::runtime::{Handle, TryCurrentError};

use crate::context::{ExecutionContext, Job};

/// Completion context that runs each job as a task on a tokio runtime.
///
/// Jobs must not block.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    handle: Handle,
}

impl RuntimeContext {
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    pub fn try_current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }
}

impl ExecutionContext for RuntimeContext {
    fn execute(&self, job: Job) {
        tracing::trace!("Dispatching job to runtime");

        drop(self.handle.spawn(async move { job() }));
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::oneshot;

    use crate::test::init_tracing;

    use super::*;

    #[tokio::test]
    async fn jobs_run_as_tasks() {
        init_tracing();

        let context = RuntimeContext::try_current().expect("Not inside a runtime");

        let (tx, rx) = oneshot::channel();

        context.execute(Box::new(move || {
            let _ = tx.send(String::from("delivered"));
        }));

        assert_eq!(rx.await.expect("Job never ran"), "delivered");
    }
}
