//! Lifecycle hook contract between the job engine and its listeners.
//!
//! The engine calls three well-defined functions with an immutable
//! attempt descriptor; no inheritance, just a small observer trait.
//! [`HookSet`] is the engine-side dispatch surface: the host attaches
//! listeners at startup and the engine fans notifications out to all
//! of them.

use std::sync::Arc;

use crate::model::{AttemptFailure, JobDescriptor, JobId, JobState};

/// Observer contract for job lifecycle notifications.
///
/// Implementations must not fail the job: hooks return nothing and are
/// expected to swallow their own telemetry problems.
pub trait JobLifecycleHooks: Send + Sync {
    /// Called once per execution attempt, before the job body runs.
    fn on_start(&self, job: &JobDescriptor);

    /// Called once per execution attempt, after the job body ran or
    /// raised. `failure` is `Some` when the attempt raised an error.
    fn on_finish(&self, job: &JobDescriptor, failure: Option<&AttemptFailure>);

    /// Called when the engine commits a new state for the job.
    fn on_state_applied(&self, job_id: &JobId, new_state: JobState);

    /// Called when the engine rolls a state back. No compensating
    /// action is defined; default is a no-op.
    fn on_state_unapplied(&self, _job_id: &JobId, _old_state: JobState) {}
}

/// The set of listeners attached to the engine's global configuration.
#[derive(Default)]
pub struct HookSet {
    hooks: Vec<Arc<dyn JobLifecycleHooks>>,
}

impl HookSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener. Listeners are notified in attach order.
    pub fn attach(&mut self, hook: Arc<dyn JobLifecycleHooks>) {
        self.hooks.push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn notify_start(&self, job: &JobDescriptor) {
        for hook in &self.hooks {
            hook.on_start(job);
        }
    }

    pub fn notify_finish(&self, job: &JobDescriptor, failure: Option<&AttemptFailure>) {
        for hook in &self.hooks {
            hook.on_finish(job, failure);
        }
    }

    pub fn notify_state_applied(&self, job_id: &JobId, new_state: JobState) {
        for hook in &self.hooks {
            hook.on_state_applied(job_id, new_state);
        }
    }

    pub fn notify_state_unapplied(&self, job_id: &JobId, old_state: JobState) {
        for hook in &self.hooks {
            hook.on_state_unapplied(job_id, old_state);
        }
    }
}
