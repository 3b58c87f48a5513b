//! The one-shot boot sequence.
//!
//! # Design
//! - [`Loader::run`] consumes the loader, so the module is loaded exactly once.
//! - The error slot is read lazily after the failure, never before the load.
//! - The surface is only touched on the failure path.

use tracing::{debug, error, info, warn};

use crate::config::BootConfig;
use crate::error::{ConfigResult, SurfaceResult};
use crate::model::{BootOutcome, ErrorNotice, FailureReason, ModuleSpecifier};
use crate::service::{ErrorSlot, ModuleSource, RenderSurface};

/// Loads the application module once and reports a failure on the surface.
pub struct Loader<M, S, E> {
    config: BootConfig,
    specifier: ModuleSpecifier,
    source: M,
    surface: S,
    slot: E,
}

impl<M, S, E> Loader<M, S, E>
where
    M: ModuleSource,
    S: RenderSurface,
    E: ErrorSlot,
{
    /// Assemble a loader from validated configuration and its host seams.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ConfigError`] if `config` fails validation.
    pub fn new(config: BootConfig, source: M, surface: S, slot: E) -> ConfigResult<Self> {
        config.validate()?;
        let specifier = config.module_specifier()?;
        Ok(Self {
            config,
            specifier,
            source,
            surface,
            slot,
        })
    }

    /// Specifier the loader will request.
    #[must_use]
    pub const fn specifier(&self) -> &ModuleSpecifier {
        &self.specifier
    }

    /// Perform the deferred load and, if it rejects, replace the surface content
    /// with the error notice.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::SurfaceError`] if the failure notice cannot be rendered.
    /// A failed module load is not an error here; it is reported as
    /// [`BootOutcome::Failed`].
    pub async fn run(self) -> SurfaceResult<BootOutcome> {
        let Self {
            config,
            specifier,
            source,
            mut surface,
            slot,
        } = self;

        info!(module = %specifier, "deferred module load starting");
        let Err(failure) = source.load(&specifier).await else {
            debug!(module = %specifier, "application module loaded");
            return Ok(BootOutcome::Loaded);
        };

        warn!(module = %specifier, reason = %failure.reason(), "application module failed to load");
        let message = compose_message(&slot, failure.reason());
        let notice = ErrorNotice::from_message(&config, &message);
        render_failure(&mut surface, &notice).inspect_err(|err| {
            error!(module = %specifier, error = %err, "failed to render load failure");
        })?;
        Ok(BootOutcome::Failed(notice))
    }
}

/// Message shown for a failed load: the slot's string when present, otherwise
/// the display form of `reason`.
#[must_use]
pub fn compose_message<E: ErrorSlot + ?Sized>(slot: &E, reason: &FailureReason) -> String {
    slot.read().unwrap_or_else(|| reason.to_display_string())
}

/// Clear the surface and insert `notice` as its only child.
///
/// # Errors
///
/// Propagates the first [`crate::SurfaceError`] raised by the surface.
pub fn render_failure<S: RenderSurface + ?Sized>(
    surface: &mut S,
    notice: &ErrorNotice,
) -> SurfaceResult<()> {
    surface.clear()?;
    surface.append_notice(notice)
}
