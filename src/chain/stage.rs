use crate::operation::AsyncOperation;

/// One step of a chain: builds the next operation from the previous stage's output.
///
/// Returning `Err` from [`prepare`](Stage::prepare) means the operation could not be
/// constructed. Nothing is issued and the chain stops there.
pub trait Stage<In> {
    type Output: Send + 'static;

    type Error: Send + 'static;

    type Operation: AsyncOperation<Output = Self::Output, Error = Self::Error>;

    fn prepare(&self, input: In) -> Result<Self::Operation, Self::Error>;
}

impl<In, F, Op> Stage<In> for F
where
    F: Fn(In) -> Result<Op, Op::Error>,
    Op: AsyncOperation,
{
    type Output = Op::Output;

    type Error = Op::Error;

    type Operation = Op;

    fn prepare(&self, input: In) -> Result<Self::Operation, Self::Error> {
        self(input)
    }
}
