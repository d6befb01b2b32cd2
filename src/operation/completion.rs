use std::fmt;

/// Single-shot handle an [`AsyncOperation`](super::AsyncOperation) uses to deliver its result.
///
/// Completing consumes the handle, so a result can be delivered at most once.
/// Dropping it without completing is a contract violation that the waiting
/// [`SyncBridge`](crate::bridge::SyncBridge) reports by panicking.
pub struct Completion<T, E> {
    callback: Box<dyn FnOnce(Result<T, E>) + Send>,
}

impl<T, E> Completion<T, E> {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce(Result<T, E>) + Send + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    pub fn complete(self, result: Result<T, E>) {
        (self.callback)(result)
    }

    pub fn succeed(self, value: T) {
        self.complete(Ok(value))
    }

    pub fn fail(self, error: E) {
        self.complete(Err(error))
    }
}

impl<T, E> fmt::Debug for Completion<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn succeed_and_fail_deliver_to_callback() {
        let (tx, rx) = mpsc::channel::<Result<u32, &'static str>>();

        let ok_tx = tx.clone();
        Completion::new(move |result| ok_tx.send(result).expect("Receiver dropped")).succeed(7);
        Completion::new(move |result| tx.send(result).expect("Receiver dropped")).fail("Oh");

        assert_eq!(rx.recv().expect("No result"), Ok(7));
        assert_eq!(rx.recv().expect("No result"), Err("Oh"));
    }
}
