//! Job execution span helpers.
//!
//! Provides span creation and outcome recording for job attempts
//! flowing through the bridge.

use tracing::Span;

use crate::model::JobId;

/// Start a span for a job execution attempt.
///
/// The `job.outcome` field is declared empty and is filled via
/// [`record_outcome`] when the operation closes.
pub fn start_job_span(name: &str, job_id: &JobId) -> Span {
    tracing::info_span!(
        "job.execute",
        "job.name" = name,
        "job.id" = %job_id,
        "job.outcome" = tracing::field::Empty,
    )
}

/// Record the final outcome ("Success" | "Failed") on the span.
pub fn record_outcome(span: &Span, outcome: &str) {
    span.record("job.outcome", outcome);
}
