#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

use crate::domain::model::LaunchSpec;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_aws_region, validate_non_empty_string, validate_resource_ids, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCHEDULER_NAME: &str = "QueueTrigger";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConfig {
    #[serde(default = "default_scheduler_name")]
    pub scheduler_name: String,
    #[serde(default = "default_region")]
    pub region: String,
    pub queue: QueueConfig,
    pub worker: WorkerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerConfig {
    #[serde(default)]
    pub task_family: String,
    /// Defaults to the task family (latest active revision).
    #[serde(default)]
    pub task_definition: Option<String>,
    #[serde(default)]
    pub cluster: Option<String>,
    #[serde(default)]
    pub subnets: Vec<String>,
    #[serde(default)]
    pub security_groups: Vec<String>,
    #[serde(default = "default_assign_public_ip")]
    pub assign_public_ip: bool,
}

fn default_scheduler_name() -> String {
    DEFAULT_SCHEDULER_NAME.to_string()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_assign_public_ip() -> bool {
    true
}

impl WorkerConfig {
    pub fn task_definition(&self) -> &str {
        self.task_definition.as_deref().unwrap_or(&self.task_family)
    }
}

impl TriggerConfig {
    pub fn launch_spec(&self) -> LaunchSpec {
        LaunchSpec {
            task_definition: self.worker.task_definition().to_string(),
            cluster: self.worker.cluster.clone(),
            subnets: self.worker.subnets.clone(),
            security_groups: self.worker.security_groups.clone(),
            assign_public_ip: self.worker.assign_public_ip,
        }
    }
}

impl Validate for TriggerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("scheduler_name", &self.scheduler_name)?;
        validate_aws_region("region", &self.region)?;

        validate_url("queue.url", &self.queue.url)?;

        validate_non_empty_string("worker.task_family", &self.worker.task_family)?;
        validate_non_empty_string("worker.task_definition", self.worker.task_definition())?;
        if let Some(cluster) = &self.worker.cluster {
            validate_non_empty_string("worker.cluster", cluster)?;
        }

        if self.worker.subnets.is_empty() {
            return Err(crate::utils::error::TriggerError::MissingConfigError {
                field: "worker.subnets".to_string(),
            });
        }
        validate_resource_ids("worker.subnets", &self.worker.subnets, "subnet")?;
        validate_resource_ids("worker.security_groups", &self.worker.security_groups, "sg")?;

        tracing::debug!("✅ Trigger configuration validation passed");
        Ok(())
    }
}

/// Splits a comma separated list, dropping blanks.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) fn sample_config() -> TriggerConfig {
    TriggerConfig {
        scheduler_name: "MomentScheduler".to_string(),
        region: "us-east-1".to_string(),
        queue: QueueConfig {
            url: "https://sqs.us-east-1.amazonaws.com/123456789012/moments.fifo".to_string(),
        },
        worker: WorkerConfig {
            task_family: "moment-processor".to_string(),
            task_definition: None,
            cluster: None,
            subnets: vec!["subnet-2aad8661".to_string()],
            security_groups: vec![],
            assign_public_ip: true,
        },
    }
}
