use std::marker::PhantomData;

use super::{
    runner::Chain,
    stage::Stage,
    steps::{Step, Steps, Then},
};

/// Collects stages in order. Each stage takes the previous stage's output as
/// input and all stages share one error type.
#[derive(Debug)]
pub struct ChainBuilder<In, P> {
    name: String,
    steps: P,
    _input: PhantomData<fn(In)>,
}

impl<In, S> ChainBuilder<In, Step<S>>
where
    S: Stage<In>,
{
    pub fn new(stage: S) -> Self {
        Self {
            name: String::from("chain"),
            steps: Step::new(stage),
            _input: PhantomData,
        }
    }
}

impl<In, P> ChainBuilder<In, P>
where
    P: Steps<In>,
{
    pub fn then<S>(self, stage: S) -> ChainBuilder<In, Then<P, S>>
    where
        S: Stage<P::Output, Error = P::Error>,
    {
        ChainBuilder {
            name: self.name,
            steps: Then::new(self.steps, stage),
            _input: PhantomData,
        }
    }

    /// Name recorded on the tracing span of every run.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();

        self
    }

    pub fn stages(&self) -> usize {
        self.steps.count()
    }

    /// Stages run on `worker`, the sink runs on `completion`.
    pub fn build<W, C>(self, worker: W, completion: C) -> Chain<In, P, W, C> {
        Chain::new(self.name, self.steps, worker, completion)
    }
}
