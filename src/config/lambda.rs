use crate::config::{
    split_list, QueueConfig, TriggerConfig, WorkerConfig, DEFAULT_REGION, DEFAULT_SCHEDULER_NAME,
};
use crate::utils::error::{Result, TriggerError};
use crate::utils::validation::{validate_required_field, Validate};
use std::env;

pub const ENV_SCHEDULER_NAME: &str = "SCHEDULER_NAME";
pub const ENV_REGION: &str = "TRIGGER_REGION";
pub const ENV_AWS_REGION: &str = "AWS_REGION";
pub const ENV_QUEUE_URL: &str = "QUEUE_URL";
pub const ENV_TASK_FAMILY: &str = "TASK_FAMILY";
pub const ENV_TASK_DEFINITION: &str = "TASK_DEFINITION";
pub const ENV_CLUSTER: &str = "ECS_CLUSTER";
pub const ENV_SUBNETS: &str = "SUBNETS";
pub const ENV_SECURITY_GROUPS: &str = "SECURITY_GROUPS";
pub const ENV_ASSIGN_PUBLIC_IP: &str = "ASSIGN_PUBLIC_IP";

impl TriggerConfig {
    /// 從 Lambda 環境變數載入配置
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup using the environment
    /// variable names, then validates it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let queue_url = get(ENV_QUEUE_URL);
        let task_family = get(ENV_TASK_FAMILY);
        let subnets = get(ENV_SUBNETS);

        let config = Self {
            scheduler_name: get(ENV_SCHEDULER_NAME)
                .unwrap_or_else(|| DEFAULT_SCHEDULER_NAME.to_string()),
            region: get(ENV_REGION)
                .or_else(|| get(ENV_AWS_REGION))
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            queue: QueueConfig {
                url: validate_required_field(ENV_QUEUE_URL, &queue_url)?.clone(),
            },
            worker: WorkerConfig {
                task_family: validate_required_field(ENV_TASK_FAMILY, &task_family)?.clone(),
                task_definition: get(ENV_TASK_DEFINITION),
                cluster: get(ENV_CLUSTER),
                subnets: split_list(validate_required_field(ENV_SUBNETS, &subnets)?),
                security_groups: get(ENV_SECURITY_GROUPS)
                    .map(|raw| split_list(&raw))
                    .unwrap_or_default(),
                assign_public_ip: match get(ENV_ASSIGN_PUBLIC_IP) {
                    Some(raw) => parse_flag(ENV_ASSIGN_PUBLIC_IP, &raw)?,
                    None => true,
                },
            },
        };

        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn parse_flag(field_name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "enabled" => Ok(true),
        "false" | "0" | "no" | "disabled" => Ok(false),
        _ => Err(TriggerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Expected true/false or ENABLED/DISABLED".to_string(),
        }),
    }
}
