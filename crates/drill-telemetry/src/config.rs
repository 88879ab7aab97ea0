//! Telemetry configuration from environment variables.

use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_SERVICE_NAME: &str = "algo-drills";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name reported in the "Logging initialized" event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error, or directives)
    pub log_level: String,

    /// Whether to write events to stdout
    pub console_output: bool,

    /// Whether to format events as JSON
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DRILL_SERVICE_NAME`: Service name (default: algo-drills)
    /// - `DRILL_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `DRILL_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `DRILL_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            service_name: lookup("DRILL_SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),

            log_level: lookup("DRILL_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),

            console_output: lookup("DRILL_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: lookup("DRILL_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Builder-style method to set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Builder-style method to toggle JSON output
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }
}
