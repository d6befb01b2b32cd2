use crate::bridge::SyncBridge;

use super::stage::Stage;

/// Progress of one chain run.
#[derive(Debug)]
pub struct ChainState {
    index: usize,
    stages: usize,
}

impl ChainState {
    pub const fn new(stages: usize) -> Self {
        Self { index: 0, stages }
    }

    /// Number of stages started so far.
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn stages(&self) -> usize {
        self.stages
    }

    fn advance(&mut self) -> usize {
        self.index += 1;

        self.index
    }
}

/// A statically typed, non-empty sequence of stages.
pub trait Steps<In> {
    type Output: Send + 'static;

    type Error: Send + 'static;

    fn count(&self) -> usize;

    fn run(
        &self,
        input: In,
        bridge: &SyncBridge,
        state: &mut ChainState,
    ) -> Result<Self::Output, Self::Error>;
}

#[derive(Debug, Clone)]
pub struct Step<S> {
    stage: S,
}

impl<S> Step<S> {
    pub const fn new(stage: S) -> Self {
        Self { stage }
    }
}

#[derive(Debug, Clone)]
pub struct Then<A, B> {
    first: A,
    next: B,
}

impl<A, B> Then<A, B> {
    pub const fn new(first: A, next: B) -> Self {
        Self { first, next }
    }
}

impl<In, S> Steps<In> for Step<S>
where
    S: Stage<In>,
{
    type Output = S::Output;

    type Error = S::Error;

    fn count(&self) -> usize {
        1
    }

    fn run(
        &self,
        input: In,
        bridge: &SyncBridge,
        state: &mut ChainState,
    ) -> Result<Self::Output, Self::Error> {
        run_stage(&self.stage, input, bridge, state)
    }
}

impl<In, A, B> Steps<In> for Then<A, B>
where
    A: Steps<In>,
    B: Stage<A::Output, Error = A::Error>,
{
    type Output = B::Output;

    type Error = A::Error;

    fn count(&self) -> usize {
        self.first.count() + 1
    }

    fn run(
        &self,
        input: In,
        bridge: &SyncBridge,
        state: &mut ChainState,
    ) -> Result<Self::Output, Self::Error> {
        let value = self.first.run(input, bridge, state)?;

        run_stage(&self.next, value, bridge, state)
    }
}

fn run_stage<In, S>(
    stage: &S,
    input: In,
    bridge: &SyncBridge,
    state: &mut ChainState,
) -> Result<S::Output, S::Error>
where
    S: Stage<In>,
{
    let index = state.advance();

    tracing::debug!(stage = index, stages = state.stages(), "Running stage");

    let result = bridge.call(stage.prepare(input));

    if result.is_err() {
        tracing::debug!(stage = index, "Stage failed, skipping the rest");
    }

    result
}

#[cfg(test)]
mod tests {
    use crate::operation::{ready, Ready};

    use super::*;

    fn double(n: u32) -> Result<Ready<u32, String>, String> {
        Ok(ready(Ok(n * 2)))
    }

    #[test]
    fn count_includes_every_stage() {
        let steps = Then::new(Then::new(Step::new(double), double), double);

        assert_eq!(Steps::<u32>::count(&steps), 3);
    }

    #[test]
    fn state_tracks_started_stages() {
        let steps = Then::new(Step::new(double), |_: u32| {
            Err::<Ready<u32, String>, _>(String::from("Malformed"))
        });
        let mut state = ChainState::new(Steps::<u32>::count(&steps));

        let result = steps.run(1u32, &SyncBridge::new(), &mut state);

        assert_eq!(result, Err(String::from("Malformed")));
        assert_eq!(state.index(), 2);
        assert_eq!(state.stages(), 2);
    }

    #[test]
    fn values_are_threaded_through() {
        let steps = Then::new(Then::new(Step::new(double), double), double);
        let mut state = ChainState::new(3);

        assert_eq!(steps.run(1u32, &SyncBridge::new(), &mut state), Ok(8));
    }
}
