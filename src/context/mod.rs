mod execution_context;
mod impls;

pub use execution_context::{ExecutionContext, Job};
pub use impls::{
    blocking_context::BlockingContext,
    runtime_context::RuntimeContext,
    serial_context::{SerialContext, SerialLoop},
};

#[cfg(test)]
pub use execution_context::MockExecutionContext;
