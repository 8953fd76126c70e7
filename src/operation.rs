//! Tracking operations and the registry of in-flight ones.
//!
//! One tracking operation per job execution attempt: created when the
//! attempt starts, closed exactly once — by the completion hook or by
//! the terminal-state hook, whichever observes it first.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::Span;

use crate::event::keys;
use crate::model::{JobDescriptor, JobId};
use crate::telemetry::job as job_span;

/// Response code recorded on a successfully closed operation.
pub const RESPONSE_SUCCESS: &str = "Success";
/// Response code recorded on a failed operation.
pub const RESPONSE_FAILED: &str = "Failed";

// ---------------------------------------------------------------------------
// Tracking Operation
// ---------------------------------------------------------------------------

/// One in-flight telemetry span for a single job execution attempt.
///
/// Carries the property set (JobId/JobName/JobArguments) that every
/// event and exception record for this attempt copies.
#[derive(Debug)]
pub struct TrackingOperation {
    /// Operation id, equal to the job id.
    pub id: JobId,

    /// Display name: `"{Type}.{Method}"`.
    pub name: String,

    /// Properties copied onto every signal emitted for this attempt.
    pub properties: BTreeMap<String, String>,

    /// Outcome flag. None while the attempt is still running.
    pub success: Option<bool>,

    /// "Success" or "Failed" once closed.
    pub response_code: Option<String>,

    pub started_at: DateTime<Utc>,

    /// The tracing span for the attempt. Dropped when the operation is
    /// dropped, which ends the exported span.
    span: Span,
}

impl TrackingOperation {
    /// Open a new operation for an attempt that is about to execute.
    pub fn open(job: &JobDescriptor) -> Self {
        let name = job.display_name();
        let span = job_span::start_job_span(&name, &job.id);

        let mut properties = BTreeMap::new();
        properties.insert(keys::JOB_ID.to_string(), job.id.to_string());
        properties.insert(keys::JOB_NAME.to_string(), name.clone());
        properties.insert(keys::JOB_ARGUMENTS.to_string(), job.serialized_args());

        Self {
            id: job.id.clone(),
            name,
            properties,
            success: None,
            response_code: None,
            started_at: Utc::now(),
            span,
        }
    }

    pub fn mark_success(&mut self) {
        self.success = Some(true);
        self.response_code = Some(RESPONSE_SUCCESS.to_string());
    }

    pub fn mark_failed(&mut self) {
        self.success = Some(false);
        self.response_code = Some(RESPONSE_FAILED.to_string());
    }

    /// Milliseconds since the operation was opened.
    pub fn duration_ms(&self) -> u64 {
        (Utc::now() - self.started_at).num_milliseconds().max(0) as u64
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Record the final outcome on the span. Called once, as the last
    /// step before the operation is handed to the sink and dropped.
    pub fn close(&self) {
        if let Some(code) = &self.response_code {
            job_span::record_outcome(&self.span, code);
        }
    }
}

// ---------------------------------------------------------------------------
// Operation Registry
// ---------------------------------------------------------------------------

/// Process-wide map from job id to its open tracking operation.
///
/// At most one open entry per job id; entries are removed exactly once.
/// Each id is logically single-writer (only that job's own hook call
/// sites touch its entry), but the map tolerates concurrent operations
/// across ids — jobs run in parallel worker threads.
#[derive(Debug, Default)]
pub struct OperationRegistry {
    inner: DashMap<JobId, TrackingOperation>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an open operation. First insert wins: an existing entry
    /// for the same id is kept untouched.
    pub fn open(&self, operation: TrackingOperation) {
        self.inner
            .entry(operation.id.clone())
            .or_insert(operation);
    }

    /// Remove and return the open operation for a job id.
    ///
    /// Returns `None` if already closed by the other hook — the caller
    /// treats that as a benign no-op, never an error.
    pub fn close(&self, id: &JobId) -> Option<TrackingOperation> {
        self.inner.remove(id).map(|(_, operation)| operation)
    }

    pub fn is_open(&self, id: &JobId) -> bool {
        self.inner.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
