use crate::config::TriggerConfig;
use crate::core::{
    Decision, InvocationRequest, InvocationResponse, LaunchOutcome, QueueDepthSource,
    TriggerOutcome, WorkerController,
};
use crate::utils::error::Result;

/// Decides on every tick whether a worker task has to be started.
///
/// The three remote calls run strictly in order (queue depth, running tasks,
/// launch) and the first error aborts the tick. No lock is taken across
/// invocations, so two overlapping ticks may both launch.
pub struct TriggerEngine<Q: QueueDepthSource, W: WorkerController> {
    queue: Q,
    workers: W,
    config: TriggerConfig,
    dry_run: bool,
}

impl<Q: QueueDepthSource, W: WorkerController> TriggerEngine<Q, W> {
    pub fn new(queue: Q, workers: W, config: TriggerConfig) -> Self {
        Self {
            queue,
            workers,
            config,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Handles one invocation. The request payload is accepted but not used.
    pub async fn run(&self, request: &InvocationRequest) -> Result<InvocationResponse> {
        tracing::debug!(id = %request.id, value = %request.value, "Invocation received");

        self.evaluate().await?;

        tracing::info!("{} Complete", self.config.scheduler_name);
        Ok(InvocationResponse::complete(&self.config.scheduler_name))
    }

    pub async fn evaluate(&self) -> Result<TriggerOutcome> {
        let queue_url = &self.config.queue.url;
        let family = &self.config.worker.task_family;

        // 1) 查詢佇列中待處理的訊息數
        let pending = self.queue.approximate_depth(queue_url).await?;
        tracing::info!(queue_url = %queue_url, pending, "Queue job count");

        // 2) 查詢是否已有 worker 在執行
        let running_tasks = self.workers.running_tasks(family).await?;
        tracing::info!(
            family = %family,
            running = running_tasks.len(),
            "Worker tasks with desired status RUNNING"
        );

        // 3) 有訊息且沒有 worker 時啟動一個
        let decision = Decision::evaluate(pending, !running_tasks.is_empty());
        let launched = match decision {
            Decision::Idle => {
                tracing::info!("Worker not needed at this time");
                None
            }
            Decision::Launch if self.dry_run => {
                tracing::info!(
                    task_definition = %self.config.worker.task_definition(),
                    "Dry run: jobs are waiting and no worker is running, skipping launch"
                );
                None
            }
            Decision::Launch => {
                tracing::info!("Jobs to process but no worker is running, starting one now");
                Some(self.launch_worker().await?)
            }
        };

        Ok(TriggerOutcome {
            pending,
            running_tasks,
            decision,
            launched,
            dry_run: self.dry_run,
        })
    }

    /// Only the RunTask call's own error is fatal. Failures reported inside a
    /// successful answer are logged and the tick still completes.
    async fn launch_worker(&self) -> Result<LaunchOutcome> {
        let spec = self.config.launch_spec();
        let outcome = self.workers.launch(&spec).await?;

        for failure in &outcome.failures {
            tracing::warn!(
                arn = failure.arn.as_deref().unwrap_or("-"),
                reason = failure.reason.as_deref().unwrap_or("unknown"),
                "RunTask reported a failure"
            );
        }
        if outcome.started() {
            tracing::info!(task_arns = ?outcome.task_arns, "Worker task started");
        } else {
            tracing::warn!(
                task_definition = %spec.task_definition,
                reasons = %outcome.failure_reasons(),
                "RunTask started no task"
            );
        }
        Ok(outcome)
    }
}
