//! Browser entry point for the one-shot boot sequence.

use bootshim_core::{BootConfig, BootOutcome, ConfigError, Loader, SurfaceError};
use bootshim_telemetry::{LoggingConfig, init_logging};
use thiserror::Error;
use tracing::{error, warn};
use wasm_bindgen_futures::spawn_local;

use crate::dom::DocumentBody;
use crate::guard::BootGuard;
use crate::import::DynamicImport;
use crate::slot::GlobalErrorSlot;

static BOOT: BootGuard = BootGuard::new();

/// Fatal boot errors. Thrown to the page as uncaught exceptions.
#[derive(Debug, Error)]
pub enum WebBootError {
    /// The boot configuration was invalid.
    #[error("invalid boot configuration")]
    Config {
        /// Source configuration error.
        source: ConfigError,
    },
    /// The failure notice could not be rendered.
    #[error("failed to render load failure")]
    Surface {
        /// Source surface error.
        source: SurfaceError,
    },
}

/// Entrypoint invoked by the wasm binary. Installs console logging and starts
/// the module load on the local executor.
///
/// Only the first call in a page has any effect; it returns `true`, every
/// later call returns `false`.
pub fn run_boot(config: BootConfig) -> bool {
    if !BOOT.claim() {
        warn!("bootshim already started; ignoring repeated boot");
        return false;
    }
    if let Err(err) = init_logging(&LoggingConfig::new(&config.log_level)) {
        // Reaches the console only if the page already has a subscriber.
        warn!(error = ?err, "console logging not installed");
    }
    spawn_local(async move {
        if let Err(err) = boot(config).await {
            error!(error = ?err, "bootshim failed");
            wasm_bindgen::throw_str(&err.to_string());
        }
    });
    true
}

async fn boot(config: BootConfig) -> Result<BootOutcome, WebBootError> {
    let slot = GlobalErrorSlot::new(config.error_slot_key.clone());
    let source = DynamicImport::from_config(&config);
    let loader = Loader::new(config, source, DocumentBody::new(), slot)
        .map_err(|source| WebBootError::Config { source })?;
    loader
        .run()
        .await
        .map_err(|source| WebBootError::Surface { source })
}
