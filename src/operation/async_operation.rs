use std::marker::PhantomData;

use super::completion::Completion;

/// A callback-driven operation that delivers exactly one result once started.
///
/// The operation decides where its work runs and where the [`Completion`] fires.
/// It must not be the thread that is blocked waiting for it.
pub trait AsyncOperation {
    type Output: Send + 'static;

    type Error: Send + 'static;

    fn start(self, completion: Completion<Self::Output, Self::Error>);
}

pub trait AsyncOperationExt: Sized + AsyncOperation {
    fn map<Fn>(self, map: Fn) -> Map<Self, Fn>;

    fn map_err<Fn>(self, map_err: Fn) -> MapError<Self, Fn>;
}

impl<T> AsyncOperationExt for T
where
    T: Sized + AsyncOperation,
{
    fn map<Fn>(self, map: Fn) -> Map<Self, Fn> {
        Map::new(self, map)
    }

    fn map_err<Fn>(self, map_err: Fn) -> MapError<Self, Fn> {
        MapError::new(self, map_err)
    }
}

/// Builds an operation from a closure that receives the [`Completion`].
pub fn operation_fn<T, E, F>(start: F) -> OperationFn<F, T, E>
where
    F: FnOnce(Completion<T, E>),
{
    OperationFn::new(start)
}

/// An operation whose result is already known.
pub fn ready<T, E>(result: Result<T, E>) -> Ready<T, E> {
    Ready::new(result)
}

#[derive(Debug)]
pub struct OperationFn<F, T, E> {
    start: F,
    _result: PhantomData<fn() -> Result<T, E>>,
}

impl<F, T, E> OperationFn<F, T, E> {
    pub const fn new(start: F) -> Self {
        Self {
            start,
            _result: PhantomData,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ready<T, E> {
    result: Result<T, E>,
}

impl<T, E> Ready<T, E> {
    pub const fn new(result: Result<T, E>) -> Self {
        Self { result }
    }
}

#[derive(Debug, Clone)]
pub struct Map<T, Fn> {
    inner: T,
    map: Fn,
}

impl<T, Fn> Map<T, Fn> {
    pub const fn new(inner: T, map: Fn) -> Self {
        Self { inner, map }
    }
}

#[derive(Debug, Clone)]
pub struct MapError<T, Fn> {
    inner: T,
    map_err: Fn,
}

impl<T, Fn> MapError<T, Fn> {
    pub const fn new(inner: T, map_err: Fn) -> Self {
        Self { inner, map_err }
    }
}

impl<F, T, E> AsyncOperation for OperationFn<F, T, E>
where
    F: FnOnce(Completion<T, E>),
    T: Send + 'static,
    E: Send + 'static,
{
    type Output = T;

    type Error = E;

    fn start(self, completion: Completion<T, E>) {
        (self.start)(completion)
    }
}

impl<T, E> AsyncOperation for Ready<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    type Output = T;

    type Error = E;

    fn start(self, completion: Completion<T, E>) {
        completion.complete(self.result)
    }
}

impl<Op, Fn, T> AsyncOperation for Map<Op, Fn>
where
    Op: AsyncOperation,
    Fn: FnOnce(Op::Output) -> T + Send + 'static,
    T: Send + 'static,
{
    type Output = T;

    type Error = Op::Error;

    fn start(self, completion: Completion<Self::Output, Self::Error>) {
        let map = self.map;

        self.inner
            .start(Completion::new(move |result: Result<Op::Output, Op::Error>| {
                completion.complete(result.map(map))
            }));
    }
}

impl<Op, Fn, E> AsyncOperation for MapError<Op, Fn>
where
    Op: AsyncOperation,
    Fn: FnOnce(Op::Error) -> E + Send + 'static,
    E: Send + 'static,
{
    type Output = Op::Output;

    type Error = E;

    fn start(self, completion: Completion<Self::Output, Self::Error>) {
        let map_err = self.map_err;

        self.inner
            .start(Completion::new(move |result: Result<Op::Output, Op::Error>| {
                completion.complete(result.map_err(map_err))
            }));
    }
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use crate::{bridge::SyncBridge, test::init_tracing};

    use super::*;

    #[derive(Debug, PartialEq, Eq, thiserror::Error)]
    #[error("Server error: {status}")]
    struct ServerError {
        status: u16,
    }

    #[derive(Debug, PartialEq, Eq, thiserror::Error)]
    enum RequestError {
        #[error("Request failed: {0}")]
        Server(#[source] ServerError),
    }

    fn on_thread<T, E>(result: Result<T, E>) -> impl AsyncOperation<Output = T, Error = E>
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        operation_fn(move |completion: Completion<T, E>| {
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(10));

                completion.complete(result);
            });
        })
    }

    #[test]
    fn operation_fn_completes_from_another_thread() {
        init_tracing();

        let result = SyncBridge::new().wait(on_thread::<_, ServerError>(Ok("ok")));

        assert_eq!(result, Ok("ok"));
    }

    #[test]
    fn map_transforms_success_only() {
        init_tracing();

        let bridge = SyncBridge::new();

        let mapped = bridge.wait(on_thread::<_, ServerError>(Ok(2)).map(|n: u32| n * 21));
        assert_eq!(mapped, Ok(42));

        let untouched = bridge.wait(
            on_thread::<u32, _>(Err(ServerError { status: 502 })).map(|n: u32| n * 21),
        );
        assert_eq!(untouched, Err(ServerError { status: 502 }));
    }

    #[test]
    fn map_err_transforms_error_only() {
        init_tracing();

        let bridge = SyncBridge::new();

        let mapped = bridge.wait(
            ready::<u32, _>(Err(ServerError { status: 500 })).map_err(RequestError::Server),
        );
        assert_eq!(mapped, Err(RequestError::Server(ServerError { status: 500 })));

        let untouched = bridge.wait(ready::<_, ServerError>(Ok(1)).map_err(RequestError::Server));
        assert_eq!(untouched, Ok(1));
    }
}
