#![cfg(feature = "aws")]

mod common;

use common::*;
use httpmock::prelude::*;
use queue_trigger::core::Decision;
use queue_trigger::{InvocationRequest, InvocationResponse, TriggerEngine, TriggerError};

fn complete() -> InvocationResponse {
    InvocationResponse {
        message: "MomentScheduler Complete".to_string(),
        ok: true,
    }
}

fn request() -> InvocationRequest {
    InvocationRequest {
        id: "tick-1".to_string(),
        value: "scheduled".to_string(),
    }
}

#[tokio::test]
async fn test_end_to_end_launches_worker_when_idle() {
    let server = MockServer::start_async().await;
    let depth = mock_queue_depth(
        &server,
        serde_json::json!({ "ApproximateNumberOfMessages": "5" }),
    )
    .await;
    let list = mock_list_tasks(&server, &[]).await;
    let run = mock_run_task(&server, started_task()).await;

    let config = trigger_config();
    let clients = clients_for(&server).await;
    let engine = TriggerEngine::new(
        clients.queue_depth(),
        clients.worker_controller(&config),
        config,
    );

    let response = engine.run(&request()).await.unwrap();

    assert_eq!(response, complete());
    depth.assert_async().await;
    list.assert_async().await;
    run.assert_async().await;
}

#[tokio::test]
async fn test_end_to_end_skips_launch_when_worker_running() {
    let server = MockServer::start_async().await;
    mock_queue_depth(
        &server,
        serde_json::json!({ "ApproximateNumberOfMessages": "5" }),
    )
    .await;
    mock_list_tasks(&server, &[TASK_ARN]).await;
    let run = mock_run_task(&server, started_task()).await;

    let config = trigger_config();
    let clients = clients_for(&server).await;
    let engine = TriggerEngine::new(
        clients.queue_depth(),
        clients.worker_controller(&config),
        config,
    );

    let outcome = engine.evaluate().await.unwrap();
    assert_eq!(outcome.decision, Decision::Idle);
    assert!(outcome.worker_active());

    assert_eq!(engine.run(&request()).await.unwrap(), complete());
    run.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_end_to_end_empty_queue_is_noop() {
    let server = MockServer::start_async().await;
    mock_queue_depth(
        &server,
        serde_json::json!({ "ApproximateNumberOfMessages": "0" }),
    )
    .await;
    mock_list_tasks(&server, &[]).await;
    let run = mock_run_task(&server, started_task()).await;

    let config = trigger_config();
    let clients = clients_for(&server).await;
    let engine = TriggerEngine::new(
        clients.queue_depth(),
        clients.worker_controller(&config),
        config,
    );

    assert_eq!(engine.run(&request()).await.unwrap(), complete());
    run.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_end_to_end_queue_failure_is_returned() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).body_contains("ApproximateNumberOfMessages");
            then.status(403)
                .header("content-type", "application/x-amz-json-1.0")
                .body(r#"{"__type":"com.amazon.coral.service#AccessDeniedException","message":"denied"}"#);
        })
        .await;
    let list = mock_list_tasks(&server, &[]).await;
    let run = mock_run_task(&server, started_task()).await;

    let config = trigger_config();
    let clients = clients_for(&server).await;
    let engine = TriggerEngine::new(
        clients.queue_depth(),
        clients.worker_controller(&config),
        config,
    );

    let result = engine.run(&request()).await;

    assert!(matches!(result, Err(TriggerError::QueueQuery { .. })));
    list.assert_hits_async(0).await;
    run.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_end_to_end_dry_run_does_not_launch() {
    let server = MockServer::start_async().await;
    mock_queue_depth(
        &server,
        serde_json::json!({ "ApproximateNumberOfMessages": "9" }),
    )
    .await;
    mock_list_tasks(&server, &[]).await;
    let run = mock_run_task(&server, started_task()).await;

    let config = trigger_config();
    let clients = clients_for(&server).await;
    let engine = TriggerEngine::new(
        clients.queue_depth(),
        clients.worker_controller(&config),
        config,
    )
    .with_dry_run(true);

    let outcome = engine.evaluate().await.unwrap();

    assert_eq!(outcome.pending, 9);
    assert_eq!(outcome.decision, Decision::Launch);
    assert!(outcome.launched.is_none());
    run.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_end_to_end_run_task_failures_still_complete() {
    let server = MockServer::start_async().await;
    mock_queue_depth(
        &server,
        serde_json::json!({ "ApproximateNumberOfMessages": "4" }),
    )
    .await;
    mock_list_tasks(&server, &[]).await;
    let run = mock_run_task(
        &server,
        serde_json::json!({
            "tasks": [],
            "failures": [{ "reason": "RESOURCE:ENI" }]
        }),
    )
    .await;

    let config = trigger_config();
    let clients = clients_for(&server).await;
    let engine = TriggerEngine::new(
        clients.queue_depth(),
        clients.worker_controller(&config),
        config,
    );

    let response = engine.run(&request()).await.unwrap();

    assert_eq!(response, complete());
    run.assert_async().await;
}
