// Adapters layer: AWS SDK implementations of the domain ports.

#[cfg(feature = "aws")]
pub mod ecs;
#[cfg(feature = "aws")]
pub mod sqs;

#[cfg(feature = "aws")]
pub use self::{ecs::EcsWorkerController, sqs::SqsQueueDepth};

#[cfg(feature = "aws")]
use crate::config::TriggerConfig;
#[cfg(feature = "aws")]
use aws_config::{BehaviorVersion, Region, SdkConfig};

/// SDK clients built once per process and shared by every invocation.
#[cfg(feature = "aws")]
#[derive(Debug, Clone)]
pub struct AwsClients {
    pub sqs: aws_sdk_sqs::Client,
    pub ecs: aws_sdk_ecs::Client,
}

#[cfg(feature = "aws")]
impl AwsClients {
    /// Loads credentials and settings from the default provider chain.
    pub async fn load(region: &str) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self::from_sdk_config(&sdk_config)
    }

    pub fn from_sdk_config(sdk_config: &SdkConfig) -> Self {
        Self {
            sqs: aws_sdk_sqs::Client::new(sdk_config),
            ecs: aws_sdk_ecs::Client::new(sdk_config),
        }
    }

    pub fn queue_depth(&self) -> SqsQueueDepth {
        SqsQueueDepth::new(self.sqs.clone())
    }

    pub fn worker_controller(&self, config: &TriggerConfig) -> EcsWorkerController {
        EcsWorkerController::new(self.ecs.clone(), config.worker.cluster.clone())
    }
}
