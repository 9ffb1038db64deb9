/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid parameter: {0}")]
    #[diagnostic(
        code(scheduler::invalid_parameter),
        help("Quantum, feedback levels and quantum base must all be positive.")
    )]
    InvalidParameter(String),

    #[error("Invalid process {pid}: {reason}")]
    #[diagnostic(
        code(scheduler::invalid_process),
        help("Every process needs a positive burst time.")
    )]
    InvalidProcess { pid: Pid, reason: String },

    #[error("Duplicate process id {0}")]
    #[diagnostic(
        code(scheduler::duplicate_pid),
        help("Process ids correlate results to inputs and must be unique.")
    )]
    DuplicatePid(Pid),
}

impl SchedulerError {
    /// Shorthand for an `InvalidParameter` error
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        SchedulerError::InvalidParameter(msg.into())
    }
}

/// Serializable error representation for reports
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SerializableError {
    pub error_type: String,
    pub message: String,
}

impl From<SchedulerError> for SerializableError {
    fn from(err: SchedulerError) -> Self {
        let error_type = match &err {
            SchedulerError::InvalidParameter(_) => "invalid_parameter",
            SchedulerError::InvalidProcess { .. } => "invalid_process",
            SchedulerError::DuplicatePid(_) => "duplicate_pid",
        };
        Self {
            error_type: error_type.to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduler_error_serialization() {
        let error = SchedulerError::invalid_parameter("quantum must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let deserialized: SchedulerError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, deserialized);
    }

    #[test]
    fn test_invalid_process_display() {
        let error = SchedulerError::InvalidProcess {
            pid: 7,
            reason: "burst time must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid process 7: burst time must be positive"
        );
    }

    #[test]
    fn test_serializable_error_from_scheduler_error() {
        let serializable: SerializableError = SchedulerError::DuplicatePid(3).into();
        assert_eq!(serializable.error_type, "duplicate_pid");
        assert_eq!(serializable.message, "Duplicate process id 3");
    }
}
