//! Typed boot configuration with defaults and validation.
//!
//! # Design
//! - Defaults reproduce the stock shim: `./index.js`, the `$_GAME_ERROR` slot,
//!   and a red, whitespace-preserving `Error:` notice.
//! - Documents are parsed with serde and then validated field by field.
//! - `base_url` is optional; hosts without one resolve against the page.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::model::ModuleSpecifier;

/// Default module specifier loaded by the shim.
pub const DEFAULT_MODULE_PATH: &str = "./index.js";
/// Default name of the global error slot.
pub const DEFAULT_ERROR_SLOT_KEY: &str = "$_GAME_ERROR";
/// Default first line of the rendered notice.
pub const DEFAULT_HEADING: &str = "Error:";
/// Default text colour of the rendered notice.
pub const DEFAULT_COLOR: &str = "red";
/// Default log filter applied when the host installs a subscriber.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Boot sequence configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootConfig {
    /// Specifier of the application module.
    pub module_path: String,
    /// Absolute URL relative specifiers resolve against, usually the URL the
    /// shim itself was served from. `None` lets the host pick its own base.
    pub base_url: Option<String>,
    /// Name of the global slot whose string value overrides the failure text.
    pub error_slot_key: String,
    /// First line of the rendered notice.
    pub heading: String,
    /// Presentation of the rendered notice.
    pub style: NoticeStyle,
    /// Log filter directives (`info`, `bootshim_core=debug`, ...).
    pub log_level: String,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            module_path: DEFAULT_MODULE_PATH.to_string(),
            base_url: None,
            error_slot_key: DEFAULT_ERROR_SLOT_KEY.to_string(),
            heading: DEFAULT_HEADING.to_string(),
            style: NoticeStyle::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl BootConfig {
    /// Parse a JSON document, filling omitted fields with defaults, and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents and
    /// [`ConfigError::InvalidField`] when a field fails validation.
    pub fn from_json(input: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(input).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] describing the first invalid field.
    pub fn validate(&self) -> ConfigResult<()> {
        self.module_specifier()?;

        if let Some(base_url) = &self.base_url
            && (!base_url.contains("://") || base_url.chars().any(char::is_whitespace))
        {
            return Err(ConfigError::invalid(
                "base_url",
                "must be an absolute url",
                base_url,
            ));
        }

        if self.error_slot_key.is_empty() {
            return Err(ConfigError::invalid(
                "error_slot_key",
                "must not be empty",
                &self.error_slot_key,
            ));
        }
        if self.error_slot_key.chars().any(char::is_whitespace) {
            return Err(ConfigError::invalid(
                "error_slot_key",
                "must not contain whitespace",
                &self.error_slot_key,
            ));
        }

        if self.heading.trim().is_empty() {
            return Err(ConfigError::invalid(
                "heading",
                "must not be empty",
                &self.heading,
            ));
        }
        if self.heading.contains('\n') {
            return Err(ConfigError::invalid(
                "heading",
                "must be a single line",
                &self.heading,
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::invalid(
                "log_level",
                "must not be empty",
                &self.log_level,
            ));
        }

        self.style.validate()
    }

    /// Validated specifier of the application module.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] if `module_path` is not a valid specifier.
    pub fn module_specifier(&self) -> ConfigResult<ModuleSpecifier> {
        ModuleSpecifier::parse(&self.module_path)
    }
}

/// Presentation of the error notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoticeStyle {
    /// CSS colour of the notice text.
    pub color: String,
    /// CSS `white-space` mode of the notice block.
    pub white_space: WhiteSpace,
}

impl Default for NoticeStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            white_space: WhiteSpace::Pre,
        }
    }
}

impl NoticeStyle {
    fn validate(&self) -> ConfigResult<()> {
        if self.color.trim().is_empty() {
            return Err(ConfigError::invalid(
                "style.color",
                "must not be empty",
                &self.color,
            ));
        }
        if self.color.contains([';', '\n', '{', '}']) {
            return Err(ConfigError::invalid(
                "style.color",
                "must be a single css value",
                &self.color,
            ));
        }
        Ok(())
    }

    /// Inline CSS declaration block for hosts that style through a `style` attribute.
    #[must_use]
    pub fn css_text(&self) -> String {
        format!(
            "color: {}; white-space: {};",
            self.color,
            self.white_space.as_css()
        )
    }
}

/// CSS `white-space` modes accepted for the notice block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WhiteSpace {
    /// Collapse whitespace and wrap lines.
    Normal,
    /// Preserve whitespace and newlines; no wrapping.
    Pre,
    /// Preserve whitespace and newlines; wrap lines.
    PreWrap,
    /// Collapse spaces but keep newlines.
    PreLine,
    /// Collapse whitespace without wrapping.
    Nowrap,
    /// Like `pre-wrap`, with preserved spaces taking up room at line ends.
    BreakSpaces,
}

impl WhiteSpace {
    /// CSS keyword for this mode.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Pre => "pre",
            Self::PreWrap => "pre-wrap",
            Self::PreLine => "pre-line",
            Self::Nowrap => "nowrap",
            Self::BreakSpaces => "break-spaces",
        }
    }
}
