pub mod blocking_context;
pub mod runtime_context;
pub mod serial_context;
