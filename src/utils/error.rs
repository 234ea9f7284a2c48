use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriggerError {
    #[error("Queue attribute query failed for {queue_url}: {message}")]
    QueueQuery { queue_url: String, message: String },

    #[error("Queue {queue_url} did not report attribute {attribute}")]
    MissingQueueAttribute { queue_url: String, attribute: String },

    #[error("Queue depth '{value}' is not an integer: {source}")]
    InvalidQueueDepth {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Listing running tasks for family {family} failed: {message}")]
    WorkerQuery { family: String, message: String },

    #[error("Launching task {task_definition} failed: {message}")]
    Launch {
        task_definition: String,
        message: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Queue,
    Orchestration,
    Configuration,
    System,
}

impl TriggerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TriggerError::QueueQuery { .. }
            | TriggerError::MissingQueueAttribute { .. }
            | TriggerError::InvalidQueueDepth { .. } => ErrorCategory::Queue,
            TriggerError::WorkerQuery { .. } | TriggerError::Launch { .. } => {
                ErrorCategory::Orchestration
            }
            TriggerError::ConfigError { .. }
            | TriggerError::MissingConfigError { .. }
            | TriggerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TriggerError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Queue | ErrorCategory::Orchestration => 1,
            ErrorCategory::System => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TriggerError::QueueQuery { .. } => {
                "Check the queue URL, the region and that the role may call sqs:GetQueueAttributes"
            }
            TriggerError::MissingQueueAttribute { .. } | TriggerError::InvalidQueueDepth { .. } => {
                "The queue service returned an unexpected answer; retry on the next tick"
            }
            TriggerError::WorkerQuery { .. } => {
                "Check the task family, the cluster and that the role may call ecs:ListTasks"
            }
            TriggerError::Launch { .. } => {
                "Check the task definition, the subnets and that the role may call ecs:RunTask and iam:PassRole"
            }
            TriggerError::ConfigError { .. }
            | TriggerError::MissingConfigError { .. }
            | TriggerError::InvalidConfigValueError { .. } => {
                "Fix the configuration file, environment variables or command-line flags"
            }
            TriggerError::IoError(_) => "Check that the file exists and is readable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Queue => format!("Could not read the queue depth: {}", self),
            ErrorCategory::Orchestration => format!("Could not manage the worker task: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TriggerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_and_exit_code() {
        let err = TriggerError::WorkerQuery {
            family: "worker".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Orchestration);
        assert_eq!(err.exit_code(), 1);

        let err = TriggerError::MissingConfigError {
            field: "queue.url".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);

        let err = TriggerError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "trigger.toml",
        ));
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_invalid_depth_message_keeps_value() {
        let source = "many".parse::<u64>().unwrap_err();
        let err = TriggerError::InvalidQueueDepth {
            value: "many".to_string(),
            source,
        };
        assert!(err.to_string().contains("'many'"));
        assert!(err.user_friendly_message().starts_with("Could not read the queue depth"));
    }
}
