//! Tests for the job descriptor model.

use jobtrace::model::{JobDescriptor, JobId, JobState};

#[test]
fn display_name_is_type_dot_method() {
    let job = JobDescriptor::new("42", "EmailSender", "Send", vec![]);
    assert_eq!(job.display_name(), "EmailSender.Send");
}

#[test]
fn serialized_args_is_json_array_text() {
    let job = JobDescriptor::new(
        "42",
        "EmailSender",
        "Send",
        vec![serde_json::json!("a@example.com")],
    );
    assert_eq!(job.serialized_args(), "[\"a@example.com\"]");
}

#[test]
fn only_failed_is_terminal_failure() {
    assert!(JobState::Failed.is_terminal_failure());
    for state in [
        JobState::Enqueued,
        JobState::Scheduled,
        JobState::Processing,
        JobState::Succeeded,
        JobState::Deleted,
    ] {
        assert!(!state.is_terminal_failure());
    }
}

#[test]
fn job_id_round_trips_through_display() {
    let id = JobId::from("42");
    assert_eq!(id.to_string(), "42");
    assert_eq!(id.as_str(), "42");
    assert_eq!(JobId::from("42".to_string()), id);
}
