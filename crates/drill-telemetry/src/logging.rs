//! Subscriber installation and structured event helpers.
//!
//! Events logged through [`log_event!`](crate::log_event) carry a `drill`
//! field naming the emitting drill so that output from several drills can be
//! filtered apart.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Handle returned by [`init_logging`].
pub struct LoggingGuard {
    service_name: String,
}

impl LoggingGuard {
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl Drop for LoggingGuard {
    fn drop(&mut self) {
        tracing::debug!(service = %self.service_name, "Logging guard dropped");
    }
}

/// Parse the configured log level into an `EnvFilter`.
pub fn build_env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::InvalidFilter {
        filter: config.log_level.clone(),
        reason: e.to_string(),
    })
}

/// Install the global tracing subscriber.
///
/// Fails with [`TelemetryError::SubscriberInit`] if a global subscriber is
/// already set, so calling this twice is harmless.
pub fn init_logging(config: &TelemetryConfig) -> Result<LoggingGuard, TelemetryError> {
    let env_filter = build_env_filter(config)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if !config.console_output {
        registry.try_init()
    } else if config.json_logs {
        // JSON output for log shipping
        let json_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        registry.with(json_layer).try_init()
    } else {
        // Pretty output for development
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true);
        registry.with(fmt_layer).try_init()
    };
    result.map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        service_name: config.service_name.clone(),
    })
}

/// Emit a structured event tagged with the drill name.
///
/// ```rust,ignore
/// log_event!(info, "two-sum", "Pair found", first = 0, second = 1);
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:ident, $drill:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            drill = $drill,
            $($($field)*,)?
            $msg
        )
    };
}
