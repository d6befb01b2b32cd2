mod async_operation;
mod completion;
mod impls;

pub use async_operation::{
    operation_fn, ready, AsyncOperation, AsyncOperationExt, Map, MapError, OperationFn, Ready,
};
pub use completion::Completion;

#[cfg(feature = "http")]
#[cfg_attr(docsrs, doc(cfg(feature = "http")))]
pub use impls::http_get::{HttpGet, HttpGetJson, NetworkError};
