//! Subscriber installation.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, TelemetryError};

/// Logging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig<'a> {
    /// Filter directives, e.g. `info` or `bootshim_core=debug`.
    pub level: &'a str,
}

impl<'a> LoggingConfig<'a> {
    /// Configuration filtering with `level`.
    #[must_use]
    pub const fn new(level: &'a str) -> Self {
        Self { level }
    }
}

/// Configure and install the global tracing subscriber.
///
/// On native targets `RUST_LOG` takes precedence over `config.level`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] if the directives do not parse
/// and [`TelemetryError::SubscriberInstall`] if a global subscriber is
/// already set.
pub fn init_logging(config: &LoggingConfig<'_>) -> Result<()> {
    let filter = build_filter(config.level)?;
    let layer = fmt::layer().with_thread_ids(false);
    // No wall clock on wasm32-unknown-unknown; the console stamps events itself.
    #[cfg(target_arch = "wasm32")]
    let layer = layer
        .without_time()
        .with_ansi(false)
        .with_writer(crate::console::ConsoleMakeWriter);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|source| TelemetryError::SubscriberInstall { source })
}

#[cfg(not(target_arch = "wasm32"))]
fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env().or_else(|_| parse_filter(level))
}

#[cfg(target_arch = "wasm32")]
fn build_filter(level: &str) -> Result<EnvFilter> {
    parse_filter(level)
}

fn parse_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|source| TelemetryError::InvalidFilter {
        directives: level.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_directives_are_rejected() {
        match parse_filter("bootshim_core=loud") {
            Err(TelemetryError::InvalidFilter { directives, .. }) => {
                assert_eq!(directives, "bootshim_core=loud");
            }
            other => panic!("expected invalid filter, got {other:?}"),
        }
        assert!(parse_filter("info,bootshim_core=debug").is_ok());
    }

    #[test]
    fn init_logging_installs_subscriber_once() {
        let config = LoggingConfig::new("info");
        let _ = init_logging(&config);
        assert!(matches!(
            init_logging(&config),
            Err(TelemetryError::SubscriberInstall { .. })
        ));
    }
}
