use tokio::sync::oneshot;

use crate::operation::{AsyncOperation, Completion};

/// Turns an [`AsyncOperation`] into a blocking call.
///
/// Blocks the calling thread with no timeout until the operation completes.
/// Never call it on a thread that has to service the completion, or from
/// inside an async runtime (tokio panics in that case).
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncBridge;

impl SyncBridge {
    pub const fn new() -> Self {
        Self
    }

    /// Waits for `prepared` unless it could not be constructed, in which case
    /// the error is returned right away and nothing is started.
    #[tracing::instrument(skip_all)]
    pub fn call<Op>(&self, prepared: Result<Op, Op::Error>) -> Result<Op::Output, Op::Error>
    where
        Op: AsyncOperation,
    {
        match prepared {
            Ok(operation) => self.wait(operation),
            Err(err) => {
                tracing::debug!("Operation could not be constructed");

                Err(err)
            }
        }
    }

    pub fn wait<Op>(&self, operation: Op) -> Result<Op::Output, Op::Error>
    where
        Op: AsyncOperation,
    {
        let (tx, rx) = oneshot::channel();

        tracing::trace!("Starting operation");

        operation.start(Completion::new(move |result| {
            // The receiver only goes away if the waiting thread unwound.
            let _ = tx.send(result);
        }));

        match rx.blocking_recv() {
            Ok(result) => {
                tracing::trace!("Operation completed");

                result
            }
            Err(_) => {
                tracing::error!("Operation dropped its completion without delivering a result");

                panic!("AsyncOperation dropped its completion without delivering a result");
            }
        }
    }
}
