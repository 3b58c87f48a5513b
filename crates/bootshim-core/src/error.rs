//! Error types for the boot sequence.
//!
//! # Design
//!
//! - A module load has exactly one failure kind, [`LoadFailure`].
//! - Surface errors are fatal and propagate untouched to the entry point.
//! - Keep error messages constant while carrying context fields for debugging.

use thiserror::Error;

use crate::model::FailureReason;

/// The deferred module load rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("module load failed")]
pub struct LoadFailure {
    reason: FailureReason,
}

impl LoadFailure {
    /// Wrap the rejection value reported by the module source.
    #[must_use]
    pub fn new(reason: impl Into<FailureReason>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Rejection value carried by the failure.
    #[must_use]
    pub const fn reason(&self) -> &FailureReason {
        &self.reason
    }

    /// Consume the failure and return its rejection value.
    #[must_use]
    pub fn into_reason(self) -> FailureReason {
        self.reason
    }
}

/// Result alias for rendering surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Errors raised while mutating the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The surface (or one of its ancestors) does not exist.
    #[error("rendering surface unavailable")]
    Unavailable {
        /// Name of the missing surface component.
        surface: &'static str,
    },
    /// A mutation of the surface was rejected by the host.
    #[error("rendering surface operation failed")]
    Operation {
        /// Operation identifier.
        operation: &'static str,
        /// Host-provided description of the failure.
        detail: String,
    },
}

impl SurfaceError {
    /// Build an [`SurfaceError::Operation`] from any displayable host error.
    #[must_use]
    pub fn operation(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::Operation {
            operation,
            detail: detail.into(),
        }
    }
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while parsing or validating a [`crate::BootConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid boot configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
        /// Offending value when available.
        value: Option<String>,
    },
    /// The configuration document could not be parsed.
    #[error("failed to parse boot configuration")]
    Parse {
        /// Underlying serde error.
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str, value: &str) -> Self {
        Self::InvalidField {
            field,
            reason,
            value: Some(value.to_string()),
        }
    }
}
