use crate::domain::model::{LaunchFailure, LaunchOutcome, LaunchSpec};
use crate::domain::ports::WorkerController;
use crate::utils::error::{Result, TriggerError};
use async_trait::async_trait;
use aws_sdk_ecs::error::DisplayErrorContext;
use aws_sdk_ecs::types::{
    AssignPublicIp, AwsVpcConfiguration, DesiredStatus, LaunchType, NetworkConfiguration,
};
use aws_sdk_ecs::Client as EcsClient;

#[derive(Debug, Clone)]
pub struct EcsWorkerController {
    client: EcsClient,
    cluster: Option<String>,
}

impl EcsWorkerController {
    /// `cluster` scopes task listing; `None` means the account's default cluster.
    pub fn new(client: EcsClient, cluster: Option<String>) -> Self {
        Self { client, cluster }
    }
}

#[async_trait]
impl WorkerController for EcsWorkerController {
    async fn running_tasks(&self, family: &str) -> Result<Vec<String>> {
        let resp = self
            .client
            .list_tasks()
            .set_cluster(self.cluster.clone())
            .family(family)
            .desired_status(DesiredStatus::Running)
            .send()
            .await
            .map_err(|e| TriggerError::WorkerQuery {
                family: family.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(resp.task_arns().to_vec())
    }

    async fn launch(&self, spec: &LaunchSpec) -> Result<LaunchOutcome> {
        let launch_error = |message: String| TriggerError::Launch {
            task_definition: spec.task_definition.clone(),
            message,
        };

        let assign_public_ip = if spec.assign_public_ip {
            AssignPublicIp::Enabled
        } else {
            AssignPublicIp::Disabled
        };

        let vpc = AwsVpcConfiguration::builder()
            .set_subnets(Some(spec.subnets.clone()))
            .set_security_groups(
                (!spec.security_groups.is_empty()).then(|| spec.security_groups.clone()),
            )
            .assign_public_ip(assign_public_ip)
            .build()
            .map_err(|e| launch_error(e.to_string()))?;

        let resp = self
            .client
            .run_task()
            .set_cluster(spec.cluster.clone().or_else(|| self.cluster.clone()))
            .task_definition(&spec.task_definition)
            .launch_type(LaunchType::Fargate)
            .count(1)
            .network_configuration(
                NetworkConfiguration::builder()
                    .awsvpc_configuration(vpc)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| launch_error(DisplayErrorContext(&e).to_string()))?;

        let task_arns = resp
            .tasks()
            .iter()
            .filter_map(|task| task.task_arn().map(str::to_string))
            .collect();

        let failures = resp
            .failures()
            .iter()
            .map(|failure| LaunchFailure {
                arn: failure.arn().map(str::to_string),
                reason: failure
                    .reason()
                    .map(|reason| match failure.detail() {
                        Some(detail) => format!("{}: {}", reason, detail),
                        None => reason.to_string(),
                    }),
            })
            .collect();

        Ok(LaunchOutcome {
            task_arns,
            failures,
        })
    }
}
