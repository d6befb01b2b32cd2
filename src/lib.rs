#![deny(unsafe_code, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Call callback-based asynchronous operations as if they were blocking functions,
//! and chain them with short-circuiting on the first error.
//!
//! A [`SyncBridge`](bridge::SyncBridge) blocks the current thread until an
//! [`AsyncOperation`](operation::AsyncOperation) delivers its result. A
//! [`Chain`](chain::Chain) runs a sequence of such operations on a worker
//! [`ExecutionContext`](context::ExecutionContext), feeding each success value
//! into the next stage, and hands the outcome to a sink on a completion context.

pub mod bridge;
pub mod chain;
pub mod context;
pub mod operation;
