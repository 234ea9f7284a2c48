pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "aws")]
pub use adapters::{AwsClients, EcsWorkerController, SqsQueueDepth};
#[cfg(feature = "cli")]
pub use config::cli::CliArgs;
pub use config::TriggerConfig;

pub use core::trigger::TriggerEngine;
pub use domain::model::{InvocationRequest, InvocationResponse, TriggerOutcome};
pub use utils::error::{Result, TriggerError};
