//! Host startup wiring.
//!
//! Two setup operations, consumed by host startup code: register the
//! bridge as a singleton in the service collection, then attach it as
//! a listener on the engine's hook set. Attaching without registering
//! is a startup configuration error and fails fast.

use std::sync::Arc;

use crate::bridge::TelemetryBridge;
use crate::error::{Error, Result};
use crate::hooks::HookSet;
use crate::sink::TelemetrySink;

/// Minimal service collection holding the bridge singleton.
#[derive(Default)]
pub struct ServiceCollection {
    bridge: Option<Arc<TelemetryBridge>>,
}

impl ServiceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registered bridge, if any.
    pub fn telemetry_bridge(&self) -> Option<Arc<TelemetryBridge>> {
        self.bridge.clone()
    }
}

/// Register a singleton [`TelemetryBridge`] backed by the given sink.
///
/// Idempotent: a second call keeps the existing singleton and returns
/// it unchanged.
pub fn add_job_telemetry(
    services: &mut ServiceCollection,
    sink: Arc<dyn TelemetrySink>,
) -> Arc<TelemetryBridge> {
    if let Some(existing) = &services.bridge {
        return existing.clone();
    }
    let bridge = Arc::new(TelemetryBridge::new(sink));
    services.bridge = Some(bridge.clone());
    bridge
}

/// Attach the registered bridge to the engine's hook set.
///
/// # Errors
///
/// Returns [`Error::BridgeNotRegistered`] if [`add_job_telemetry`] was
/// never called — a configuration error, fatal to startup.
pub fn use_job_telemetry(hooks: &mut HookSet, services: &ServiceCollection) -> Result<()> {
    let bridge = services
        .telemetry_bridge()
        .ok_or(Error::BridgeNotRegistered)?;
    hooks.attach(bridge);
    Ok(())
}
