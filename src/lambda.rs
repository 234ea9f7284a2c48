#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use queue_trigger::utils::logger;
#[cfg(feature = "lambda")]
use queue_trigger::{
    AwsClients, EcsWorkerController, InvocationRequest, InvocationResponse, SqsQueueDepth,
    TriggerConfig, TriggerEngine,
};

#[cfg(feature = "lambda")]
async fn function_handler(
    engine: &TriggerEngine<SqsQueueDepth, EcsWorkerController>,
    event: LambdaEvent<InvocationRequest>,
) -> Result<InvocationResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Trigger invoked");

    match engine.run(&event.payload).await {
        Ok(response) => Ok(response),
        Err(e) => {
            tracing::error!(
                category = ?e.category(),
                suggestion = e.recovery_suggestion(),
                "❌ Trigger failed: {}",
                e
            );
            Err(e.into())
        }
    }
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時載入配置並建立 AWS 客戶端，之後每次調用共用
    let config = TriggerConfig::from_env()?;
    tracing::info!(
        scheduler = %config.scheduler_name,
        queue_url = %config.queue.url,
        family = %config.worker.task_family,
        "Trigger configuration loaded"
    );

    let clients = AwsClients::load(&config.region).await;
    let engine = TriggerEngine::new(
        clients.queue_depth(),
        clients.worker_controller(&config),
        config,
    );

    let engine = &engine;
    run(service_fn(move |event: LambdaEvent<InvocationRequest>| async move {
        function_handler(engine, event).await
    }))
    .await
}
