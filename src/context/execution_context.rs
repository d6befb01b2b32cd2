use std::sync::Arc;

pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Somewhere jobs run: a worker pool that may block, or a completion context that must not.
#[cfg_attr(test, mockall::automock)]
pub trait ExecutionContext {
    fn execute(&self, job: Job);
}

impl<C> ExecutionContext for Arc<C>
where
    C: ExecutionContext + ?Sized,
{
    fn execute(&self, job: Job) {
        (**self).execute(job)
    }
}
