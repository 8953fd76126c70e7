//! The job telemetry bridge.
//!
//! Listens on the engine's lifecycle hooks and maps them to tracked
//! operations, outcome events, and exception records. One operation
//! per attempt, closed exactly once: whichever hook observes it first
//! (execution completion vs. terminal state applied) closes it, the
//! second finds nothing and does nothing.

use std::sync::Arc;

use chrono::Utc;

use crate::event::{keys, EventName, ExceptionRecord, Severity, TelemetryEvent};
use crate::hooks::JobLifecycleHooks;
use crate::model::{AttemptFailure, JobDescriptor, JobId, JobState};
use crate::operation::{OperationRegistry, TrackingOperation};
use crate::sink::TelemetrySink;

/// Bridges job lifecycle hooks to the telemetry backend.
pub struct TelemetryBridge {
    registry: OperationRegistry,
    sink: Arc<dyn TelemetrySink>,
}

impl TelemetryBridge {
    pub fn new(sink: Arc<dyn TelemetrySink>) -> Self {
        Self {
            registry: OperationRegistry::new(),
            sink,
        }
    }

    /// Number of operations currently open. Entries leak only if
    /// neither closing hook ever fires for a job (process crash
    /// mid-attempt); the registry is process-scoped and rebuilt on
    /// restart.
    pub fn open_operations(&self) -> usize {
        self.registry.len()
    }

    /// Build an event carrying the operation's property set, with the
    /// operation id doubling as parent id (self-referential root).
    fn event_for(
        &self,
        name: EventName,
        operation: &TrackingOperation,
        failure: Option<&AttemptFailure>,
    ) -> TelemetryEvent {
        let mut properties = operation.properties.clone();
        if let Some(failure) = failure {
            properties.insert(keys::ERROR_MESSAGE.to_string(), failure.message.clone());
            properties.insert(
                keys::STACK_TRACE.to_string(),
                failure.stack_trace.clone().unwrap_or_default(),
            );
        }
        TelemetryEvent {
            name,
            operation_id: operation.id.clone(),
            parent_id: operation.id.clone(),
            timestamp: Utc::now(),
            properties,
        }
    }

    fn exception_for(
        &self,
        operation: &TrackingOperation,
        failure: &AttemptFailure,
    ) -> ExceptionRecord {
        let mut properties = operation.properties.clone();
        properties.insert(keys::ERROR_MESSAGE.to_string(), failure.message.clone());
        properties.insert(
            keys::STACK_TRACE.to_string(),
            failure.stack_trace.clone().unwrap_or_default(),
        );
        ExceptionRecord {
            message: failure.message.clone(),
            stack_trace: failure.stack_trace.clone(),
            operation_id: operation.id.clone(),
            severity: Severity::Error,
            properties,
        }
    }

    /// Close an operation with its final outcome and hand it to the sink.
    fn finish(&self, operation: TrackingOperation) {
        operation.close();
        self.sink.operation_finished(&operation);
    }
}

impl JobLifecycleHooks for TelemetryBridge {
    fn on_start(&self, job: &JobDescriptor) {
        let operation = TrackingOperation::open(job);
        self.sink.operation_started(&operation);
        self.sink
            .submit_event(self.event_for(EventName::JobStarted, &operation, None));
        self.registry.open(operation);
    }

    fn on_finish(&self, job: &JobDescriptor, failure: Option<&AttemptFailure>) {
        // Absent entry: already closed by the state hook, or a
        // duplicate call. Benign, nothing to do.
        let Some(mut operation) = self.registry.close(&job.id) else {
            return;
        };

        match failure {
            Some(failure) => {
                operation.mark_failed();
                self.sink.submit_event(self.event_for(
                    EventName::JobAttemptFailed,
                    &operation,
                    Some(failure),
                ));
                self.sink
                    .submit_exception(self.exception_for(&operation, failure));
            }
            None => {
                operation.mark_success();
                self.sink
                    .submit_event(self.event_for(EventName::JobSucceeded, &operation, None));
            }
        }

        self.finish(operation);
    }

    fn on_state_applied(&self, job_id: &JobId, new_state: JobState) {
        if !new_state.is_terminal_failure() {
            return;
        }

        // Normally the completion hook already closed the operation;
        // a still-open entry means a final no-retry demotion is racing
        // ahead of it. Close here, and the completion hook becomes the
        // no-op side.
        let Some(mut operation) = self.registry.close(job_id) else {
            return;
        };

        operation.mark_failed();
        self.sink
            .submit_event(self.event_for(EventName::JobFailed, &operation, None));
        self.finish(operation);
    }
}
