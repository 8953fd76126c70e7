//! Core data model.
//!
//! A job attempt is described by the engine: identity (engine-assigned
//! id), the declared type and method being invoked, and the argument
//! list. The bridge never interprets arguments; it serializes them for
//! correlation and passes them through.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Job Id
// ---------------------------------------------------------------------------

/// Newtype for engine-assigned job ids.
///
/// Also used as the operation id for all telemetry emitted for the job,
/// so every signal of one attempt correlates on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// ---------------------------------------------------------------------------
// Job Descriptor
// ---------------------------------------------------------------------------

/// Immutable descriptor of one job execution attempt, as handed to the
/// lifecycle hooks by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptor {
    /// Unique engine-assigned id.
    pub id: JobId,

    /// Declared type that owns the job method (e.g. "EmailSender").
    pub type_name: String,

    /// Method being invoked (e.g. "Send").
    pub method_name: String,

    /// Invocation arguments. Opaque to the bridge.
    pub args: Vec<serde_json::Value>,
}

impl JobDescriptor {
    pub fn new(
        id: impl Into<JobId>,
        type_name: impl Into<String>,
        method_name: impl Into<String>,
        args: Vec<serde_json::Value>,
    ) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            method_name: method_name.into(),
            args,
        }
    }

    /// Display name used for operation naming: `"{Type}.{Method}"`.
    pub fn display_name(&self) -> String {
        format!("{}.{}", self.type_name, self.method_name)
    }

    /// Arguments serialized to JSON text, best-effort.
    ///
    /// Telemetry must never block job execution: if serialization
    /// fails, a placeholder is used and event emission proceeds.
    pub fn serialized_args(&self) -> String {
        serde_json::to_string(&self.args).unwrap_or_else(|_| "[unserializable]".to_string())
    }
}

// ---------------------------------------------------------------------------
// Job State
// ---------------------------------------------------------------------------

/// States the engine commits for a job through its state machine.
///
/// Only `Failed` matters to the bridge: it is terminal (retries
/// exhausted), distinct from a per-attempt failure that may still retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    /// Waiting in queue for a worker.
    Enqueued,
    /// Scheduled for a later run.
    Scheduled,
    /// Worker actively executing.
    Processing,
    /// Done successfully. Terminal.
    Succeeded,
    /// Retries exhausted, will not run again. Terminal.
    Failed,
    /// Removed by an operator. Terminal.
    Deleted,
}

impl JobState {
    /// Is this the terminal failure state (no further attempts)?
    pub fn is_terminal_failure(self) -> bool {
        matches!(self, JobState::Failed)
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobState::Enqueued => "enqueued",
            JobState::Scheduled => "scheduled",
            JobState::Processing => "processing",
            JobState::Succeeded => "succeeded",
            JobState::Failed => "failed",
            JobState::Deleted => "deleted",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Attempt Failure
// ---------------------------------------------------------------------------

/// What the engine reports when a job attempt raised an error.
///
/// Forwarded verbatim to the telemetry backend; the bridge never
/// suppresses or retries, the engine's own failure policy proceeds
/// unaffected.
#[derive(Debug, Clone)]
pub struct AttemptFailure {
    pub message: String,
    pub stack_trace: Option<String>,
}

impl AttemptFailure {
    pub fn new(message: impl Into<String>, stack_trace: Option<String>) -> Self {
        Self {
            message: message.into(),
            stack_trace,
        }
    }

    /// Build from the error handed over by the engine.
    ///
    /// Engines typically wrap the handler's error in a performance
    /// wrapper; the underlying cause is what belongs in telemetry, so
    /// one `source()` level is unwrapped when present. Callers holding
    /// an already-unwrapped error should use [`AttemptFailure::new`].
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let cause = err.source().unwrap_or(err);
        Self {
            message: cause.to_string(),
            stack_trace: None,
        }
    }
}
