use tokio::sync::mpsc;

use crate::context::{ExecutionContext, Job};

/// Completion context that queues jobs for a single [`SerialLoop`].
///
/// Jobs run one at a time, in submission order, on whichever thread drives the loop.
#[derive(Debug, Clone)]
pub struct SerialContext {
    sender: mpsc::UnboundedSender<Job>,
}

#[derive(Debug)]
pub struct SerialLoop {
    receiver: mpsc::UnboundedReceiver<Job>,
}

impl SerialContext {
    pub fn new() -> (Self, SerialLoop) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (Self { sender }, SerialLoop { receiver })
    }
}

impl ExecutionContext for SerialContext {
    fn execute(&self, job: Job) {
        if self.sender.send(job).is_err() {
            tracing::warn!("Serial loop is gone, dropping job");
        }
    }
}

impl SerialLoop {
    /// Runs jobs on the current thread until every [`SerialContext`] is dropped.
    #[tracing::instrument(name = "serial_loop", skip_all)]
    pub fn run(mut self) {
        while let Some(job) = self.receiver.blocking_recv() {
            job();
        }

        tracing::debug!("All serial contexts dropped, loop terminated");
    }

    /// Runs exactly `jobs` jobs, waiting for them as needed. Returns fewer if
    /// every [`SerialContext`] is dropped first.
    #[tracing::instrument(name = "serial_loop", skip(self))]
    pub fn run_until(&mut self, jobs: usize) -> usize {
        let mut ran = 0;

        while ran < jobs {
            match self.receiver.blocking_recv() {
                Some(job) => {
                    job();

                    ran += 1;
                }
                None => break,
            }
        }

        ran
    }

    /// Runs whatever is queued right now without waiting.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;

        while let Ok(job) = self.receiver.try_recv() {
            job();

            ran += 1;
        }

        ran
    }
}
