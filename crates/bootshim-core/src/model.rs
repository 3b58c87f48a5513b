//! Value types exchanged between the loader and its host.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::config::{BootConfig, NoticeStyle};
use crate::error::{ConfigError, ConfigResult};

/// Best-effort description of whatever value a module load rejected with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// A plain string rejection value.
    Message(String),
    /// An error-like value exposing a name and a message.
    Error {
        /// Error class name (for example `TypeError`).
        name: String,
        /// Error message; may be empty.
        message: String,
    },
    /// Any other value, already rendered to text by the host.
    Opaque(String),
}

impl FailureReason {
    /// Rejection with a plain string.
    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    /// Rejection with an error-like value.
    #[must_use]
    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Rejection with a value the host could only render generically.
    #[must_use]
    pub fn opaque(rendered: impl Into<String>) -> Self {
        Self::Opaque(rendered.into())
    }

    /// Describe a Rust error, folding its source chain into the message.
    #[must_use]
    pub fn from_error<E: Error + ?Sized>(err: &E) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::error("Error", message)
    }

    /// Textual form shown to the user.
    ///
    /// Error-like values follow the `name: message` convention, dropping
    /// whichever half is empty. The output of non-string values carries no
    /// format guarantee beyond being a reasonable description.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Message(text) | Self::Opaque(text) => text.clone(),
            Self::Error { name, message } if message.is_empty() => name.clone(),
            Self::Error { name, message } if name.is_empty() => message.clone(),
            Self::Error { name, message } => format!("{name}: {message}"),
        }
    }
}

impl Display for FailureReason {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_display_string())
    }
}

impl From<String> for FailureReason {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl From<&str> for FailureReason {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

/// Static identifier of the application module, resolved by the
/// [`crate::ModuleSource`] relative to the loader's own location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleSpecifier(String);

impl ModuleSpecifier {
    /// Validate a specifier. Accepts `./`, `../` and `/` paths or absolute URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] for empty, padded or bare specifiers.
    pub fn parse(value: &str) -> ConfigResult<Self> {
        if value.trim().is_empty() {
            return Err(ConfigError::invalid("module_path", "must not be empty", value));
        }
        if value.trim() != value {
            return Err(ConfigError::invalid(
                "module_path",
                "must not have surrounding whitespace",
                value,
            ));
        }
        let relative = value.starts_with("./") || value.starts_with("../");
        if !(relative || value.starts_with('/') || value.contains("://")) {
            return Err(ConfigError::invalid(
                "module_path",
                "must be a relative path or an absolute url",
                value,
            ));
        }
        Ok(Self(value.to_string()))
    }

    /// Raw specifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the specifier must be resolved against the loader's location.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.0.starts_with("./") || self.0.starts_with("../")
    }
}

impl Display for ModuleSpecifier {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// The single block rendered into the surface when the load fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    text: String,
    style: NoticeStyle,
}

impl ErrorNotice {
    /// Build the notice as `heading + "\n" + message`, styled per `config`.
    #[must_use]
    pub fn from_message(config: &BootConfig, message: &str) -> Self {
        Self {
            text: format!("{}\n{message}", config.heading),
            style: config.style.clone(),
        }
    }

    /// Literal text of the notice. Never interpreted as markup.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Presentation applied to the notice block.
    #[must_use]
    pub const fn style(&self) -> &NoticeStyle {
        &self.style
    }
}

/// Result of the one-shot boot sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootOutcome {
    /// The module loaded; it owns the page from here on.
    Loaded,
    /// The module failed and this notice replaced the page content.
    Failed(ErrorNotice),
}

impl BootOutcome {
    /// Whether the application module took over.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}
