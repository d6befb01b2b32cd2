mod chain_builder;
mod runner;
mod stage;
mod steps;

pub use chain_builder::ChainBuilder;
pub use runner::{Chain, ChainInner};
pub use stage::Stage;
pub use steps::{ChainState, Step, Steps, Then};
