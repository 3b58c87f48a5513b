//! Host seams implemented by platform adapters (e.g. the browser bindings).

use async_trait::async_trait;

use crate::error::{LoadFailure, SurfaceResult};
use crate::model::{ErrorNotice, ModuleSpecifier};

/// Performs the deferred load of the application module.
///
/// Futures are not required to be `Send`; the boot sequence runs on a
/// single-threaded executor.
#[async_trait(?Send)]
pub trait ModuleSource {
    /// Fetch and initialise the module. Resolves once the module settles;
    /// may never resolve.
    async fn load(&self, specifier: &ModuleSpecifier) -> Result<(), LoadFailure>;
}

/// Mutable container holding the currently displayed content.
pub trait RenderSurface {
    /// Remove every child, whatever was rendered before.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::SurfaceError`] if the surface cannot be mutated.
    fn clear(&mut self) -> SurfaceResult<()>;

    /// Append one literal-text block for `notice`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::SurfaceError`] if the block cannot be created or inserted.
    fn append_notice(&mut self, notice: &ErrorNotice) -> SurfaceResult<()>;
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn clear(&mut self) -> SurfaceResult<()> {
        (**self).clear()
    }

    fn append_notice(&mut self, notice: &ErrorNotice) -> SurfaceResult<()> {
        (**self).append_notice(notice)
    }
}

/// Read-only view of the externally populated error message override.
pub trait ErrorSlot {
    /// Current string value of the slot, if it holds one.
    fn read(&self) -> Option<String>;
}

impl ErrorSlot for Option<String> {
    fn read(&self) -> Option<String> {
        self.clone()
    }
}

impl<T: ErrorSlot + ?Sized> ErrorSlot for &T {
    fn read(&self) -> Option<String> {
        (**self).read()
    }
}
