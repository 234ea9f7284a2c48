#![allow(dead_code)]

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sqs::config::Credentials;
use httpmock::prelude::*;
use httpmock::Mock;
use queue_trigger::config::{QueueConfig, TriggerConfig, WorkerConfig};
use queue_trigger::AwsClients;

pub const QUEUE_URL: &str = "https://sqs.us-east-1.amazonaws.com/123456789012/moments.fifo";
pub const FAMILY: &str = "moment-processor";
pub const SUBNET: &str = "subnet-2aad8661";
pub const TASK_ARN: &str = "arn:aws:ecs:us-east-1:123456789012:task/default/0f9de6d4a1b2";

/// SDK clients pointed at the mock server with static credentials and no retries.
pub async fn clients_for(server: &MockServer) -> AwsClients {
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
        .endpoint_url(server.base_url())
        .retry_config(RetryConfig::disabled())
        .load()
        .await;
    AwsClients::from_sdk_config(&sdk_config)
}

pub fn trigger_config() -> TriggerConfig {
    TriggerConfig {
        scheduler_name: "MomentScheduler".to_string(),
        region: "us-east-1".to_string(),
        queue: QueueConfig {
            url: QUEUE_URL.to_string(),
        },
        worker: WorkerConfig {
            task_family: FAMILY.to_string(),
            task_definition: None,
            cluster: None,
            subnets: vec![SUBNET.to_string()],
            security_groups: vec![],
            assign_public_ip: true,
        },
    }
}

fn json_reply(then: httpmock::Then, status: u16, content_type: &str, body: serde_json::Value) {
    then.status(status)
        .header("content-type", content_type)
        .body(body.to_string());
}

pub async fn mock_queue_depth<'a>(server: &'a MockServer, attributes: serde_json::Value) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(POST).body_contains("ApproximateNumberOfMessages");
            json_reply(
                then,
                200,
                "application/x-amz-json-1.0",
                serde_json::json!({ "Attributes": attributes }),
            );
        })
        .await
}

pub async fn mock_list_tasks<'a>(server: &'a MockServer, task_arns: &[&str]) -> Mock<'a> {
    let body = serde_json::json!({ "taskArns": task_arns });
    server
        .mock_async(|when, then| {
            when.method(POST)
                .body_contains("desiredStatus")
                .body_contains(FAMILY);
            json_reply(then, 200, "application/x-amz-json-1.1", body);
        })
        .await
}

pub async fn mock_run_task<'a>(server: &'a MockServer, reply: serde_json::Value) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .body_contains("taskDefinition")
                .body_contains("FARGATE")
                .body_contains(SUBNET);
            json_reply(then, 200, "application/x-amz-json-1.1", reply);
        })
        .await
}

pub fn started_task() -> serde_json::Value {
    serde_json::json!({
        "tasks": [{ "taskArn": TASK_ARN, "lastStatus": "PROVISIONING" }],
        "failures": []
    })
}
