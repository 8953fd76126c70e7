//! Error types for jobtrace.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    /// Attaching the bridge to the engine requires it to have been
    /// registered first. Startup error, not recoverable.
    #[error("telemetry bridge is not registered in the service collection")]
    BridgeNotRegistered,

    #[error("telemetry error: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
