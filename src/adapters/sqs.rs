use crate::domain::ports::QueueDepthSource;
use crate::utils::error::{Result, TriggerError};
use async_trait::async_trait;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::types::QueueAttributeName;
use aws_sdk_sqs::Client as SqsClient;

#[derive(Debug, Clone)]
pub struct SqsQueueDepth {
    client: SqsClient,
}

impl SqsQueueDepth {
    pub fn new(client: SqsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QueueDepthSource for SqsQueueDepth {
    async fn approximate_depth(&self, queue_url: &str) -> Result<u64> {
        let attribute = QueueAttributeName::ApproximateNumberOfMessages;

        let resp = self
            .client
            .get_queue_attributes()
            .queue_url(queue_url)
            .attribute_names(attribute.clone())
            .send()
            .await
            .map_err(|e| TriggerError::QueueQuery {
                queue_url: queue_url.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let raw = resp
            .attributes()
            .and_then(|attrs| attrs.get(&attribute))
            .ok_or_else(|| TriggerError::MissingQueueAttribute {
                queue_url: queue_url.to_string(),
                attribute: attribute.as_str().to_string(),
            })?;

        raw.trim()
            .parse::<u64>()
            .map_err(|source| TriggerError::InvalidQueueDepth {
                value: raw.clone(),
                source,
            })
    }
}
