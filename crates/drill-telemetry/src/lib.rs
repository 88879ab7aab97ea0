//! # Drill Telemetry
//!
//! Structured logging for the drill crates, built on `tracing` and
//! `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use drill_telemetry::{init_logging, TelemetryConfig};
//!
//! let _guard = init_logging(&TelemetryConfig::from_env())?;
//! tracing::info!("drills ready");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DRILL_SERVICE_NAME` | `algo-drills` | Service name logged by `init_logging` and kept on the guard |
//! | `DRILL_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `DRILL_CONSOLE_OUTPUT` | `true` | Write events to stdout |
//! | `DRILL_JSON_LOGS` | `false` | JSON instead of pretty output |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_env_filter, init_logging, LoggingGuard};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },
}

/// Create a span carrying the drill name.
///
/// ```rust,ignore
/// let _span = drill_span!("search", drill = "two-sum", len = 4).entered();
/// ```
#[macro_export]
macro_rules! drill_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
