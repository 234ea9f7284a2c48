use crate::domain::model::{LaunchOutcome, LaunchSpec};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the approximate number of visible messages on a queue.
#[async_trait]
pub trait QueueDepthSource: Send + Sync {
    async fn approximate_depth(&self, queue_url: &str) -> Result<u64>;
}

/// Orchestration service that runs the worker tasks.
#[async_trait]
pub trait WorkerController: Send + Sync {
    /// Task handles of `family` whose desired status is RUNNING.
    async fn running_tasks(&self, family: &str) -> Result<Vec<String>>;

    /// Starts exactly one task described by `spec`.
    async fn launch(&self, spec: &LaunchSpec) -> Result<LaunchOutcome>;
}
