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

//! Logging setup for bootshim.
//!
//! [`init_logging`] installs one `tracing` subscriber. In the browser it
//! writes each event to the console method matching its level, so the
//! loader's events show up in devtools; native binaries write to stdout.

#[cfg(any(target_arch = "wasm32", test))]
mod console;
pub mod error;
pub mod init;

pub use error::{Result, TelemetryError};
pub use init::{LoggingConfig, init_logging};
