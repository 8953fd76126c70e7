//! # jobtrace
//!
//! Telemetry bridge for background-job processing engines.
//!
//! Attaches to the engine's lifecycle hooks: opens a tracked operation
//! when a job attempt starts, closes it with a success/failure outcome
//! when the attempt finishes, and closes it with a "Job Failed" event
//! if the engine commits the terminal failed state first. All telemetry
//! for one attempt shares the job id as its operation id.

pub mod bridge;
pub mod config;
pub mod error;
pub mod event;
pub mod hooks;
pub mod model;
pub mod operation;
pub mod setup;
pub mod sink;
pub mod telemetry;
