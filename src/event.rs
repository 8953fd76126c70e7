//! Telemetry records emitted once per lifecycle transition of interest.
//!
//! Events are immutable: name, operation id (= parent id = job id), and
//! a property set copied from the originating tracking operation so all
//! signals for one attempt correlate.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::JobId;

/// Property keys carried on every event and exception record.
/// The names are part of the telemetry contract consumers query on.
pub mod keys {
    pub const JOB_ID: &str = "JobId";
    pub const JOB_NAME: &str = "JobName";
    pub const JOB_ARGUMENTS: &str = "JobArguments";
    pub const ERROR_MESSAGE: &str = "ErrorMessage";
    pub const STACK_TRACE: &str = "StackTrace";
}

/// The four lifecycle events the bridge emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventName {
    /// Execution attempt began.
    JobStarted,
    /// Attempt finished without error.
    JobSucceeded,
    /// Attempt raised an error; the engine may still retry.
    JobAttemptFailed,
    /// Engine committed the terminal failed state.
    JobFailed,
}

impl EventName {
    pub fn as_str(self) -> &'static str {
        match self {
            EventName::JobStarted => "Job Started",
            EventName::JobSucceeded => "Job Succeeded",
            EventName::JobAttemptFailed => "Job Attempt Failed",
            EventName::JobFailed => "Job Failed",
        }
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One telemetry event, submitted exactly once per transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub name: EventName,
    /// Operation id, equal to the job id.
    pub operation_id: JobId,
    /// Parent id. Equal to the operation id: each attempt is a
    /// self-referential root span.
    pub parent_id: JobId,
    pub timestamp: DateTime<Utc>,
    pub properties: BTreeMap<String, String>,
}

/// Severity of an exception record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Information,
    Warning,
    Error,
    Critical,
}

/// An exception forwarded verbatim to the telemetry backend's
/// exception channel, tagged with the attempt's operation id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionRecord {
    pub message: String,
    pub stack_trace: Option<String>,
    pub operation_id: JobId,
    pub severity: Severity,
    pub properties: BTreeMap<String, String>,
}
