use serde::{Deserialize, Serialize};

/// Payload of one trigger invocation. Accepted as-is and never inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    pub message: String,
    pub ok: bool,
}

impl InvocationResponse {
    pub fn complete(scheduler_name: &str) -> Self {
        Self {
            message: format!("{} Complete", scheduler_name),
            ok: true,
        }
    }
}

/// Everything needed to start one Fargate worker task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub task_definition: String,
    pub cluster: Option<String>,
    pub subnets: Vec<String>,
    pub security_groups: Vec<String>,
    pub assign_public_ip: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchFailure {
    pub arn: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaunchOutcome {
    pub task_arns: Vec<String>,
    pub failures: Vec<LaunchFailure>,
}

impl LaunchOutcome {
    pub fn started(&self) -> bool {
        !self.task_arns.is_empty()
    }

    pub fn failure_reasons(&self) -> String {
        self.failures
            .iter()
            .map(|f| {
                format!(
                    "{} ({})",
                    f.reason.as_deref().unwrap_or("unknown reason"),
                    f.arn.as_deref().unwrap_or("-")
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    Launch,
    Idle,
}

impl Decision {
    /// A worker is launched only when work is pending and nothing is running.
    pub fn evaluate(pending: u64, worker_active: bool) -> Self {
        if pending > 0 && !worker_active {
            Decision::Launch
        } else {
            Decision::Idle
        }
    }
}

/// What one trigger tick observed and did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerOutcome {
    pub pending: u64,
    pub running_tasks: Vec<String>,
    pub decision: Decision,
    pub launched: Option<LaunchOutcome>,
    pub dry_run: bool,
}

impl TriggerOutcome {
    pub fn worker_active(&self) -> bool {
        !self.running_tasks.is_empty()
    }
}
