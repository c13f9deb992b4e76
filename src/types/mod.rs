//! Core data types

mod intent;
mod model;
mod response;
mod strategy;

pub use intent::{Entity, Intent};
pub use model::{ModelConfig, Provider};
pub use response::EngineResponse;
pub use strategy::{RoutingStrategy, StrategyCriteria, StrategyWeights};
