//! The telemetry backend surface consumed by the bridge.
//!
//! The backend is a black box: it receives operation start/stop
//! notifications, event submissions, and exception submissions. The
//! default [`TracingSink`] forwards everything to `tracing` (exported
//! through the OTel layers installed by `telemetry::init_telemetry`)
//! and feeds the metric instruments.

use crate::event::{ExceptionRecord, TelemetryEvent};
use crate::operation::TrackingOperation;
use crate::telemetry::metrics;

/// Submission surface of the telemetry backend.
pub trait TelemetrySink: Send + Sync {
    /// A tracking operation was opened for a job attempt.
    fn operation_started(&self, operation: &TrackingOperation);

    /// A tracking operation was closed. `operation.success` and
    /// `operation.response_code` carry the final outcome.
    fn operation_finished(&self, operation: &TrackingOperation);

    /// Submit one lifecycle event.
    fn submit_event(&self, event: TelemetryEvent);

    /// Submit one exception record.
    fn submit_exception(&self, record: ExceptionRecord);
}

/// Production sink: structured logs plus metric instruments.
///
/// Operation notifications are emitted within the operation's own
/// span, so exported logs correlate with the attempt's trace.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl TelemetrySink for TracingSink {
    fn operation_started(&self, operation: &TrackingOperation) {
        operation.span().in_scope(|| {
            tracing::info!(
                operation.id = %operation.id,
                operation.name = %operation.name,
                "operation started"
            );
        });
        metrics::jobs_started().add(1, &[opentelemetry::KeyValue::new(
            "job.name",
            operation.name.clone(),
        )]);
    }

    fn operation_finished(&self, operation: &TrackingOperation) {
        let outcome = operation
            .response_code
            .clone()
            .unwrap_or_else(|| "Unknown".to_string());
        operation.span().in_scope(|| {
            tracing::info!(
                operation.id = %operation.id,
                operation.name = %operation.name,
                operation.outcome = %outcome,
                operation.duration_ms = operation.duration_ms(),
                "operation finished"
            );
        });
        metrics::jobs_completed().add(
            1,
            &[
                opentelemetry::KeyValue::new("job.name", operation.name.clone()),
                opentelemetry::KeyValue::new("outcome", outcome),
            ],
        );
        metrics::job_duration_ms().record(
            operation.duration_ms() as f64,
            &[opentelemetry::KeyValue::new(
                "job.name",
                operation.name.clone(),
            )],
        );
    }

    fn submit_event(&self, event: TelemetryEvent) {
        tracing::info!(
            event.name = %event.name,
            operation.id = %event.operation_id,
            parent.id = %event.parent_id,
            properties = %serde_json::to_string(&event.properties).unwrap_or_default(),
            "telemetry event"
        );
    }

    fn submit_exception(&self, record: ExceptionRecord) {
        tracing::error!(
            operation.id = %record.operation_id,
            error.message = %record.message,
            error.stack_trace = record.stack_trace.as_deref().unwrap_or(""),
            "job exception"
        );
        metrics::job_exceptions().add(
            1,
            &[opentelemetry::KeyValue::new(
                "operation.id",
                record.operation_id.to_string(),
            )],
        );
    }
}
