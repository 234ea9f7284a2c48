use crate::config::lambda::{
    parse_flag, ENV_ASSIGN_PUBLIC_IP, ENV_CLUSTER, ENV_QUEUE_URL, ENV_REGION, ENV_SCHEDULER_NAME,
    ENV_SECURITY_GROUPS, ENV_SUBNETS, ENV_TASK_DEFINITION, ENV_TASK_FAMILY,
};
use crate::config::{split_list, TriggerConfig};
use crate::domain::model::InvocationRequest;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

/// Runs one trigger tick from the command line.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "queue-trigger")]
#[command(about = "Start a queue worker task when messages are waiting and none is running")]
pub struct CliArgs {
    /// TOML configuration file; flags below override its values
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub queue_url: Option<String>,

    #[arg(long)]
    pub task_family: Option<String>,

    #[arg(long)]
    pub task_definition: Option<String>,

    #[arg(long)]
    pub cluster: Option<String>,

    #[arg(long, value_delimiter = ',')]
    pub subnets: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub security_groups: Vec<String>,

    /// ENABLED/DISABLED or true/false
    #[arg(long)]
    pub assign_public_ip: Option<String>,

    #[arg(long)]
    pub region: Option<String>,

    #[arg(long)]
    pub scheduler_name: Option<String>,

    /// Invocation id passed through in the request payload (default: tick_<timestamp>)
    #[arg(long)]
    pub id: Option<String>,

    /// Invocation value passed through in the request payload
    #[arg(long, default_value = "")]
    pub value: String,

    /// Report the decision without launching a task
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// Config file (or environment when no file is given) with flags layered on top.
    pub fn resolve_config(&self) -> Result<TriggerConfig> {
        match &self.config {
            Some(path) => {
                let mut config = TriggerConfig::parse_file(path)?;
                self.apply_overrides(&mut config)?;
                config.validate()?;
                Ok(config)
            }
            None => TriggerConfig::from_lookup(|key| {
                self.flag_value(key).or_else(|| std::env::var(key).ok())
            }),
        }
    }

    pub fn request(&self) -> InvocationRequest {
        InvocationRequest {
            id: self
                .id
                .clone()
                .unwrap_or_else(|| format!("tick_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))),
            value: self.value.clone(),
        }
    }

    fn flag_value(&self, key: &str) -> Option<String> {
        let list = |values: &[String]| (!values.is_empty()).then(|| values.join(","));
        match key {
            ENV_SCHEDULER_NAME => self.scheduler_name.clone(),
            ENV_REGION => self.region.clone(),
            ENV_QUEUE_URL => self.queue_url.clone(),
            ENV_TASK_FAMILY => self.task_family.clone(),
            ENV_TASK_DEFINITION => self.task_definition.clone(),
            ENV_CLUSTER => self.cluster.clone(),
            ENV_SUBNETS => list(&self.subnets),
            ENV_SECURITY_GROUPS => list(&self.security_groups),
            ENV_ASSIGN_PUBLIC_IP => self.assign_public_ip.clone(),
            _ => None,
        }
    }

    fn apply_overrides(&self, config: &mut TriggerConfig) -> Result<()> {
        if let Some(name) = &self.scheduler_name {
            config.scheduler_name = name.clone();
        }
        if let Some(region) = &self.region {
            config.region = region.clone();
        }
        if let Some(url) = &self.queue_url {
            config.queue.url = url.clone();
        }
        if let Some(family) = &self.task_family {
            config.worker.task_family = family.clone();
        }
        if let Some(definition) = &self.task_definition {
            config.worker.task_definition = Some(definition.clone());
        }
        if let Some(cluster) = &self.cluster {
            config.worker.cluster = Some(cluster.clone());
        }
        if !self.subnets.is_empty() {
            config.worker.subnets = split_list(&self.subnets.join(","));
        }
        if !self.security_groups.is_empty() {
            config.worker.security_groups = split_list(&self.security_groups.join(","));
        }
        if let Some(raw) = &self.assign_public_ip {
            config.worker.assign_public_ip = parse_flag("assign_public_ip", raw)?;
        }
        Ok(())
    }
}
