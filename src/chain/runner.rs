use std::{marker::PhantomData, ops::Deref, sync::Arc};

use crate::{bridge::SyncBridge, context::ExecutionContext};

use super::steps::{ChainState, Steps};

#[derive(Debug)]
pub struct ChainInner<P, W, C> {
    name: String,
    steps: P,
    worker: W,
    completion: C,
    bridge: SyncBridge,
}

impl<P, W, C> ChainInner<P, W, C> {
    pub fn name(&self) -> &str {
        &self.name
    }

    #[tracing::instrument(name = "chain", skip_all, fields(chain = %self.name))]
    fn evaluate<In>(&self, input: In) -> Result<P::Output, P::Error>
    where
        P: Steps<In>,
    {
        let mut state = ChainState::new(self.steps.count());

        let result = self.steps.run(input, &self.bridge, &mut state);

        tracing::debug!(
            ok = result.is_ok(),
            ran = state.index(),
            stages = state.stages(),
            "Chain finished"
        );

        result
    }
}

/// A built chain of stages bound to a worker and a completion context.
///
/// Cloning is cheap and every run is independent of the others.
#[derive(Debug)]
pub struct Chain<In, P, W, C> {
    inner: Arc<ChainInner<P, W, C>>,
    _input: PhantomData<fn(In)>,
}

impl<In, P, W, C> Clone for Chain<In, P, W, C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _input: PhantomData,
        }
    }
}

impl<In, P, W, C> Deref for Chain<In, P, W, C> {
    type Target = ChainInner<P, W, C>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<In, P, W, C> Chain<In, P, W, C> {
    pub fn new(name: String, steps: P, worker: W, completion: C) -> Self {
        Self {
            inner: Arc::new(ChainInner {
                name,
                steps,
                worker,
                completion,
                bridge: SyncBridge::new(),
            }),
            _input: PhantomData,
        }
    }
}

impl<In, P, W, C> Chain<In, P, W, C>
where
    P: Steps<In>,
{
    pub fn stages(&self) -> usize {
        self.steps.count()
    }

    /// Runs every stage on the current thread and returns the outcome directly.
    ///
    /// The current thread gets blocked, so it must not be a runtime thread or
    /// one that completes the chain's operations.
    pub fn run_blocking(&self, input: In) -> Result<P::Output, P::Error> {
        self.evaluate(input)
    }

    /// Starts one run on the worker context. `sink` is called exactly once,
    /// on the completion context, with the last stage's output or the first error.
    pub fn run<F>(&self, input: In, sink: F)
    where
        In: Send + 'static,
        P: Send + Sync + 'static,
        W: ExecutionContext + Send + Sync + 'static,
        C: ExecutionContext + Send + Sync + 'static,
        F: FnOnce(Result<P::Output, P::Error>) + Send + 'static,
    {
        tracing::debug!(chain = %self.name, "Submitting chain to worker");

        let inner = self.inner.clone();

        self.worker.execute(Box::new(move || {
            let result = inner.evaluate(input);

            inner.completion.execute(Box::new(move || sink(result)));
        }));
    }
}
