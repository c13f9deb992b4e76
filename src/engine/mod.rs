//! Optimization engine entry point

mod builder;
mod orchestrator;

pub use builder::OptimizerBuilder;
pub use orchestrator::Optimizer;
