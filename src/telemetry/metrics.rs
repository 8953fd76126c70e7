//! Metric instrument factories for jobtrace.
//!
//! Uses the OTel Meter API with the globally-registered `MeterProvider`.
//! All instruments are created lazily from the `"jobtrace"` meter.

use opentelemetry::metrics::{Counter, Histogram, Meter};

/// Returns the shared meter for jobtrace instruments.
fn meter() -> Meter {
    opentelemetry::global::meter("jobtrace")
}

/// Counter: job attempts started.
/// Labels: `job.name`.
pub fn jobs_started() -> Counter<u64> {
    meter()
        .u64_counter("jobtrace.jobs.started")
        .with_description("Number of job execution attempts started")
        .build()
}

/// Counter: job attempts finished, by outcome.
/// Labels: `job.name`, `outcome` ("Success" | "Failed").
pub fn jobs_completed() -> Counter<u64> {
    meter()
        .u64_counter("jobtrace.jobs.completed")
        .with_description("Number of job execution attempts finished")
        .build()
}

/// Counter: exceptions forwarded to the telemetry backend.
/// Labels: `operation.id`.
pub fn job_exceptions() -> Counter<u64> {
    meter()
        .u64_counter("jobtrace.jobs.exceptions")
        .with_description("Number of job exceptions forwarded")
        .build()
}

/// Histogram: attempt duration in milliseconds.
/// Labels: `job.name`.
pub fn job_duration_ms() -> Histogram<f64> {
    meter()
        .f64_histogram("jobtrace.job.duration_ms")
        .with_description("Job attempt duration in milliseconds")
        .with_unit("ms")
        .build()
}
