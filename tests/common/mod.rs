//! Shared test support: a recording sink standing in for the
//! telemetry backend, and descriptor helpers.

use std::sync::Mutex;

use jobtrace::event::{ExceptionRecord, TelemetryEvent};
use jobtrace::model::JobDescriptor;
use jobtrace::operation::TrackingOperation;
use jobtrace::sink::TelemetrySink;

/// Everything the bridge submitted, in order.
#[derive(Debug, Clone)]
pub enum SinkCall {
    OperationStarted {
        id: String,
        name: String,
    },
    OperationFinished {
        id: String,
        success: Option<bool>,
        response_code: Option<String>,
    },
    Event(TelemetryEvent),
    Exception(ExceptionRecord),
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<SinkCall>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SinkCall::Event(event) => Some(event),
                _ => None,
            })
            .collect()
    }

    pub fn exceptions(&self) -> Vec<ExceptionRecord> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SinkCall::Exception(record) => Some(record),
                _ => None,
            })
            .collect()
    }

    pub fn finished_operations(&self) -> Vec<(String, Option<bool>, Option<String>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SinkCall::OperationFinished {
                    id,
                    success,
                    response_code,
                } => Some((id, success, response_code)),
                _ => None,
            })
            .collect()
    }
}

impl TelemetrySink for RecordingSink {
    fn operation_started(&self, operation: &TrackingOperation) {
        self.calls.lock().unwrap().push(SinkCall::OperationStarted {
            id: operation.id.to_string(),
            name: operation.name.clone(),
        });
    }

    fn operation_finished(&self, operation: &TrackingOperation) {
        self.calls
            .lock()
            .unwrap()
            .push(SinkCall::OperationFinished {
                id: operation.id.to_string(),
                success: operation.success,
                response_code: operation.response_code.clone(),
            });
    }

    fn submit_event(&self, event: TelemetryEvent) {
        self.calls.lock().unwrap().push(SinkCall::Event(event));
    }

    fn submit_exception(&self, record: ExceptionRecord) {
        self.calls.lock().unwrap().push(SinkCall::Exception(record));
    }
}

/// The concrete scenario descriptor used across tests: job id "42",
/// `EmailSender.Send("a@example.com")`.
pub fn email_job() -> JobDescriptor {
    JobDescriptor::new(
        "42",
        "EmailSender",
        "Send",
        vec![serde_json::json!("a@example.com")],
    )
}
