#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Platform-agnostic bootstrap loader.
//!
//! The loader performs one deferred load of the application module and, if
//! that load rejects, replaces the rendering surface with a literal-text error
//! notice. Hosts plug in through three seams: [`ModuleSource`],
//! [`RenderSurface`] and [`ErrorSlot`].
//!
//! Layout: `config.rs` (typed boot configuration and validation), `model.rs`
//! (failure reasons, specifiers, notices), `service.rs` (host seams),
//! `loader.rs` (the boot sequence itself).

pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod service;

pub use config::{
    BootConfig, DEFAULT_COLOR, DEFAULT_ERROR_SLOT_KEY, DEFAULT_HEADING, DEFAULT_LOG_LEVEL,
    DEFAULT_MODULE_PATH, NoticeStyle, WhiteSpace,
};
pub use error::{ConfigError, ConfigResult, LoadFailure, SurfaceError, SurfaceResult};
pub use loader::{Loader, compose_message, render_failure};
pub use model::{BootOutcome, ErrorNotice, FailureReason, ModuleSpecifier};
pub use service::{ErrorSlot, ModuleSource, RenderSurface};
