//! Error types for telemetry operations.

use thiserror::Error;

/// Result alias for telemetry operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The log filter directives could not be parsed.
    #[error("invalid log filter")]
    InvalidFilter {
        /// Directives as configured.
        directives: String,
        /// Parser error.
        source: tracing_subscriber::filter::ParseError,
    },
    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber")]
    SubscriberInstall {
        /// Underlying tracing subscriber error.
        source: tracing_subscriber::util::TryInitError,
    },
}
