pub mod trigger;

pub use crate::domain::model::{
    Decision, InvocationRequest, InvocationResponse, LaunchFailure, LaunchOutcome, LaunchSpec,
    TriggerOutcome,
};
pub use crate::domain::ports::{QueueDepthSource, WorkerController};
pub use crate::utils::error::Result;
