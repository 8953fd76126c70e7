//! Typed configuration from environment variables.
//!
//! Loaded once at host startup. Everything has a sane default: the
//! bridge is observability glue and must never prevent the host from
//! booting.

#[derive(Debug, Clone)]
pub struct Config {
    /// Service name reported in telemetry signals.
    pub service_name: String,
    /// Optional OTLP endpoint (e.g. "http://localhost:4317").
    /// When unset, telemetry stays on the local fmt layer.
    pub otel_endpoint: Option<String>,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service_name: std::env::var("JOBTRACE_SERVICE_NAME")
                .unwrap_or_else(|_| "jobtrace".to_string()),
            otel_endpoint: std::env::var("OTEL_ENDPOINT").ok(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "jobtrace".to_string(),
            otel_endpoint: None,
            log_level: "info".to_string(),
        }
    }
}
